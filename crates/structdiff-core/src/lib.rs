#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod assert;
pub mod diff;
pub mod error;
mod guard;
pub mod json;
pub mod matcher;
pub mod render;
pub mod value;

#[cfg(test)]
mod test_helpers;

pub use assert::{Sameness, check};
pub use diff::{render_diff, render_diff_with};
pub use error::{DiffError, Side};
pub use json::ConvertError;
pub use matcher::is_match;
pub use render::{RenderOptions, render, render_indented, render_with};
pub use value::{Container, ContainerKind, Function, Key, Value};

/// Returns the current version of the structdiff-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
