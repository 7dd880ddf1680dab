//! Implementation of `structdiff diff <expected> <actual>`.
//!
//! Writes the diff of two JSON documents to stdout. In human mode nothing is
//! written when they match; in `--format json` mode a single
//! `{"equal": bool, "diff": string}` object is written either way.
//!
//! Exit codes: 0 = equal, 1 = different, 2 = input failure.
use std::io::Write;

use serde::Serialize;
use structdiff_core::{RenderOptions, Value, render_diff_with};
use tracing::info;

use crate::OutputFormat;
use crate::cmd::stdout_error;
use crate::error::CliError;

/// JSON body of `--format json` output.
#[derive(Debug, Serialize)]
struct DiffReport<'a> {
    equal: bool,
    diff: &'a str,
}

/// Runs the `diff` command.
///
/// # Errors
///
/// - [`CliError::ValuesDiffer`]: the diff is non-empty.
/// - [`CliError::CyclicValue`]: an input loops back on itself.
/// - [`CliError::IoError`]: stdout write failed.
pub fn run(
    expected: &Value,
    actual: &Value,
    options: &RenderOptions,
    format: OutputFormat,
) -> Result<(), CliError> {
    let diff = render_diff_with(expected, actual, options)?;
    info!(equal = diff.is_empty(), "compared documents");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, &diff, format).map_err(|e| stdout_error(&e))?;

    if diff.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValuesDiffer)
    }
}

fn write_result<W: Write>(w: &mut W, diff: &str, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => {
            if diff.is_empty() {
                Ok(())
            } else {
                writeln!(w, "{diff}")
            }
        }
        OutputFormat::Json => {
            let report = DiffReport {
                equal: diff.is_empty(),
                diff,
            };
            serde_json::to_writer(&mut *w, &report)?;
            writeln!(w)
        }
    }
}
