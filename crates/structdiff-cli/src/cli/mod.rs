//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::fmt;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// `-` for stdin, otherwise the path as given.
impl fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` writes the plain rendering to stdout. `Json` wraps the result in a
/// single JSON object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default).
    Human,
    /// One JSON object per invocation.
    Json,
}

/// All top-level subcommands exposed by the `structdiff` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Explain how ACTUAL differs from EXPECTED.
    ///
    /// Prints nothing and exits 0 when the documents match; prints the diff
    /// and exits 1 when they differ.
    Diff {
        /// Path to the expected JSON document, or `-` for stdin.
        #[arg(value_name = "EXPECTED")]
        expected: PathOrStdin,
        /// Path to the actual JSON document (cannot be `-` if EXPECTED is `-`).
        #[arg(value_name = "ACTUAL")]
        actual: PathOrStdin,
    },

    /// Report whether two JSON documents are structurally equivalent.
    ///
    /// Prints `true` (exit 0) or `false` (exit 1).
    Match {
        /// Path to the expected JSON document, or `-` for stdin.
        #[arg(value_name = "EXPECTED")]
        expected: PathOrStdin,
        /// Path to the actual JSON document (cannot be `-` if EXPECTED is `-`).
        #[arg(value_name = "ACTUAL")]
        actual: PathOrStdin,
    },

    /// Print the canonical rendering of a JSON document.
    Render {
        /// Path to a JSON document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the structdiff-core library version.
    Version,
}

/// Root CLI struct for the `structdiff` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "structdiff",
    version,
    about = "Structural equality and readable diffs for JSON documents",
    long_about = "Compares JSON documents structurally and explains mismatches.\n\
                  Key order never matters; only differing properties are shown."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr diagnostics except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity; repeat for more detail (-v info, -vv debug,
    /// -vvv trace). Incompatible with `--quiet`.
    #[arg(long, short = 'v', global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Spaces per nesting level in rendered output (0 to 16).
    ///
    /// Can also be set via the `STRUCTDIFF_INDENT` environment variable.
    #[arg(
        long,
        global = true,
        env = "STRUCTDIFF_INDENT",
        default_value = "2",
        value_parser = clap::value_parser!(u8).range(..=16)
    )]
    pub indent: u8,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `STRUCTDIFF_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 4194304 (4 MiB).
    #[arg(
        long,
        global = true,
        env = "STRUCTDIFF_MAX_FILE_SIZE",
        default_value = "4194304"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
