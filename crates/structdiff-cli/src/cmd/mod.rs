//! Command modules for the `structdiff` CLI.
//!
//! Each submodule implements one subcommand. Its `run` function takes values
//! already loaded by [`load`] or [`load_pair`] and returns `Ok(())` on success
//! or a [`crate::error::CliError`] on failure.
pub mod diff;
pub mod matches;
pub mod render;

use structdiff_core::Value;

use crate::PathOrStdin;
use crate::error::CliError;
use crate::io::read_input;

/// Reads `source` and parses it as one JSON document.
///
/// # Errors
///
/// Any [`read_input`] failure, or [`CliError::ParseFailed`] for malformed JSON.
pub fn load(source: &PathOrStdin, max_size: u64) -> Result<Value, CliError> {
    let text = read_input(source, max_size)?;
    Value::from_json_str(&text).map_err(|e| CliError::ParseFailed {
        source: source.to_string(),
        detail: e.to_string(),
    })
}

/// Loads the expected and actual inputs of a two-input command.
///
/// # Errors
///
/// [`CliError::MultipleStdin`] when both are `-`, otherwise as [`load`].
pub fn load_pair(
    expected: &PathOrStdin,
    actual: &PathOrStdin,
    max_size: u64,
) -> Result<(Value, Value), CliError> {
    if *expected == PathOrStdin::Stdin && *actual == PathOrStdin::Stdin {
        return Err(CliError::MultipleStdin);
    }
    Ok((load(expected, max_size)?, load(actual, max_size)?))
}

/// Maps a stdout write failure to [`CliError::IoError`].
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
