//! Implementation of `structdiff match <expected> <actual>`.
//!
//! Prints `true` or `false`. In `--format json` mode prints
//! `{"match": bool}`.
//!
//! Exit codes: 0 = match, 1 = no match, 2 = input failure.
use std::io::Write;

use serde::Serialize;
use structdiff_core::{Value, is_match};

use crate::OutputFormat;
use crate::cmd::stdout_error;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct MatchReport {
    #[serde(rename = "match")]
    matched: bool,
}

/// Runs the `match` command.
///
/// # Errors
///
/// - [`CliError::ValuesDiffer`]: the values do not match.
/// - [`CliError::CyclicValue`]: an input loops back on itself.
/// - [`CliError::IoError`]: stdout write failed.
pub fn run(expected: &Value, actual: &Value, format: OutputFormat) -> Result<(), CliError> {
    let matched = is_match(expected, actual)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, matched, format).map_err(|e| stdout_error(&e))?;

    if matched {
        Ok(())
    } else {
        Err(CliError::ValuesDiffer)
    }
}

fn write_result<W: Write>(w: &mut W, matched: bool, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => writeln!(w, "{matched}"),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *w, &MatchReport { matched })?;
            writeln!(w)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn written(matched: bool, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_result(&mut buf, matched, format).expect("write to Vec");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn human_output() {
        assert_eq!(written(true, OutputFormat::Human), "true\n");
        assert_eq!(written(false, OutputFormat::Human), "false\n");
    }

    #[test]
    fn json_output() {
        assert_eq!(written(true, OutputFormat::Json), "{\"match\":true}\n");
    }

    #[test]
    fn key_order_does_not_matter() {
        let e = Value::object([("a", 1), ("b", 2)]);
        let a = Value::object([("b", 2), ("a", 1)]);
        run(&e, &a, OutputFormat::Human).expect("match");
    }
}
