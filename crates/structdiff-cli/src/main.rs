//! Entry point for the `structdiff` binary.
//!
//! Parses arguments, installs stderr logging, loads inputs, and dispatches to
//! the command modules. Errors are printed once here and mapped to exit codes.
mod cli;
mod cmd;
mod error;
mod io;
mod logging;

use clap::Parser;
use structdiff_core::RenderOptions;
use tracing::debug;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        // The diff or `false` is already on stdout.
        if !matches!(e, CliError::ValuesDiffer) {
            eprintln!("{}", e.message());
        }
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let options = RenderOptions {
        indent_width: usize::from(cli.indent),
    };
    debug!(command = ?cli.command, indent = cli.indent, max_file_size = cli.max_file_size, "starting");

    match &cli.command {
        Command::Diff { expected, actual } => {
            let (expected, actual) = cmd::load_pair(expected, actual, cli.max_file_size)?;
            cmd::diff::run(&expected, &actual, &options, cli.format)
        }
        Command::Match { expected, actual } => {
            let (expected, actual) = cmd::load_pair(expected, actual, cli.max_file_size)?;
            cmd::matches::run(&expected, &actual, cli.format)
        }
        Command::Render { file } => {
            let value = cmd::load(file, cli.max_file_size)?;
            cmd::render::run(&value, &options, cli.format)
        }
        Command::Version => {
            println!("{}", structdiff_core::version());
            Ok(())
        }
    }
}
