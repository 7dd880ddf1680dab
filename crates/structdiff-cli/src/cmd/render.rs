//! Implementation of `structdiff render <file>`.
//!
//! Prints the canonical rendering of one JSON document. In `--format json`
//! mode prints `{"rendered": string}`.
//!
//! Exit codes: 0 = success, 2 = input failure.
use std::io::Write;

use serde::Serialize;
use structdiff_core::{RenderOptions, Value, render_with};

use crate::OutputFormat;
use crate::cmd::stdout_error;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct RenderReport<'a> {
    rendered: &'a str,
}

/// Runs the `render` command.
///
/// # Errors
///
/// - [`CliError::CyclicValue`]: the input loops back on itself.
/// - [`CliError::IoError`]: stdout write failed.
pub fn run(value: &Value, options: &RenderOptions, format: OutputFormat) -> Result<(), CliError> {
    let rendered = render_with(value, options)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, &rendered, format).map_err(|e| stdout_error(&e))
}

fn write_result<W: Write>(w: &mut W, rendered: &str, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(w, "{rendered}"),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *w, &RenderReport { rendered })?;
            writeln!(w)
        }
    }
}
