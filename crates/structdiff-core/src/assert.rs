/// Assertion helpers for test suites that compare dynamic values.
///
/// [`check`] is the non-panicking form; [`assert_structural_eq!`] panics with
/// the rendered diff.
use std::fmt;

use crate::diff::render_diff;
use crate::error::DiffError;
use crate::value::Value;

/// Outcome of [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sameness {
    /// The values are structurally equivalent.
    Same,
    /// The values differ; holds the rendered diff (never empty).
    Different(String),
}

impl Sameness {
    /// Returns `true` for [`Sameness::Same`].
    pub fn is_same(&self) -> bool {
        matches!(self, Self::Same)
    }
}

/// Compares `expected` against `actual` and explains any difference.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if either input is cyclic along a path
/// the comparison must descend.
pub fn check(expected: &Value, actual: &Value) -> Result<Sameness, DiffError> {
    let diff = render_diff(expected, actual)?;
    if diff.is_empty() {
        Ok(Sameness::Same)
    } else {
        Ok(Sameness::Different(diff))
    }
}

/// Panics with `message`. Called from [`assert_structural_eq!`] so the panic
/// location is the caller's.
#[doc(hidden)]
#[track_caller]
#[allow(clippy::panic)]
pub fn fail(message: fmt::Arguments<'_>) -> ! {
    panic!("{message}")
}

/// Asserts that two values are structurally equivalent.
///
/// Both arguments are converted with `Into<Value>`, so literals, built
/// values, and `&Value` references are all accepted. On mismatch the panic
/// message is `assertion failed: values differ` followed by the diff. An
/// optional trailing format string is appended to the first line.
///
/// ```
/// use structdiff_core::{Value, assert_structural_eq};
///
/// let v = Value::object([("a", 1)]);
/// assert_structural_eq!(&v, Value::object([("a", 1)]));
/// ```
#[macro_export]
macro_rules! assert_structural_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        match $crate::check(
            &::core::convert::Into::<$crate::Value>::into($expected),
            &::core::convert::Into::<$crate::Value>::into($actual),
        ) {
            ::core::result::Result::Ok($crate::Sameness::Same) => {}
            ::core::result::Result::Ok($crate::Sameness::Different(diff)) => {
                $crate::assert::fail(::core::format_args!(
                    "assertion failed: values differ\n{}",
                    diff
                ))
            }
            ::core::result::Result::Err(err) => {
                $crate::assert::fail(::core::format_args!("assertion failed: {}", err))
            }
        }
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        match $crate::check(
            &::core::convert::Into::<$crate::Value>::into($expected),
            &::core::convert::Into::<$crate::Value>::into($actual),
        ) {
            ::core::result::Result::Ok($crate::Sameness::Same) => {}
            ::core::result::Result::Ok($crate::Sameness::Different(diff)) => {
                $crate::assert::fail(::core::format_args!(
                    "assertion failed: values differ: {}\n{}",
                    ::core::format_args!($($arg)+),
                    diff
                ))
            }
            ::core::result::Result::Err(err) => $crate::assert::fail(::core::format_args!(
                "assertion failed: {}: {}",
                ::core::format_args!($($arg)+),
                err
            )),
        }
    };
}
