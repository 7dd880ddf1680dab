/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `structdiff` binary.
/// Every variant maps to a stable exit code (1 or 2) via
/// [`CliError::exit_code`]:
///
/// - Exit code **2**: the tool could not read, parse, or walk an input.
/// - Exit code **1**: the comparison ran to completion and the values differ.
use std::fmt;
use std::path::PathBuf;

use structdiff_core::DiffError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `structdiff` CLI can produce.
///
/// [`CliError::message`] returns the line printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// Both inputs of a two-input command were `-`.
    MultipleStdin,

    /// An input is not a well-formed JSON document.
    ParseFailed {
        /// A human-readable label for the source.
        source: String,
        /// Parser message with line and column.
        detail: String,
    },

    /// An input value refers back to itself.
    CyclicValue {
        /// The core library's description, including the key path.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The values differ. The diff has already been printed; this variant
    /// exists so `main` can exit 1 cleanly.
    ValuesDiffer,
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, etc.).
    /// - `1`: the compared values differ.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::MultipleStdin
            | Self::ParseFailed { .. }
            | Self::CyclicValue { .. } => 2,

            Self::ValuesDiffer => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::MultipleStdin => "error: at most one input may be read from stdin (-)".to_owned(),
            Self::ParseFailed { source, detail } => {
                format!("error: failed to parse {source}: {detail}")
            }
            Self::CyclicValue { detail } => format!("error: {detail}"),
            Self::ValuesDiffer => "error: values differ".to_owned(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<DiffError> for CliError {
    fn from(e: DiffError) -> Self {
        Self::CyclicValue {
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
