#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::{CommandFactory, Parser};

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("should parse")
}

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["diff", "match", "render", "version"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for flag in [
        "--format",
        "--quiet",
        "--verbose",
        "--indent",
        "--max-file-size",
        "--help",
        "--version",
    ] {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

// ── subcommand parsing ───────────────────────────────────────────────────────

#[test]
fn test_diff_parses_two_paths() {
    let cli = parse(&["structdiff", "diff", "a.json", "b.json"]);
    match cli.command {
        Command::Diff { expected, actual } => {
            assert_eq!(expected, PathOrStdin::Path(PathBuf::from("a.json")));
            assert_eq!(actual, PathOrStdin::Path(PathBuf::from("b.json")));
        }
        other => panic!("expected Diff, got {other:?}"),
    }
}

#[test]
fn test_dash_is_stdin() {
    let cli = parse(&["structdiff", "match", "-", "b.json"]);
    match cli.command {
        Command::Match { expected, .. } => assert_eq!(expected, PathOrStdin::Stdin),
        other => panic!("expected Match, got {other:?}"),
    }
}

#[test]
fn test_diff_requires_two_inputs() {
    assert!(Cli::try_parse_from(["structdiff", "diff", "a.json"]).is_err());
}

#[test]
fn test_render_takes_one_file() {
    let cli = parse(&["structdiff", "render", "x.json"]);
    assert!(matches!(cli.command, Command::Render { .. }));
}

// ── global flags ─────────────────────────────────────────────────────────────

#[test]
fn test_defaults() {
    let cli = parse(&["structdiff", "version"]);
    assert_eq!(cli.format, OutputFormat::Human);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.indent, 2);
    assert_eq!(cli.max_file_size, 4 * 1024 * 1024);
}

#[test]
fn test_verbose_counts_repetitions() {
    let cli = parse(&["structdiff", "-vvv", "version"]);
    assert_eq!(cli.verbose, 3);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&[
        "structdiff",
        "diff",
        "a.json",
        "b.json",
        "--format",
        "json",
        "--indent",
        "4",
    ]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.indent, 4);
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["structdiff", "-q", "-v", "version"]).is_err());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["structdiff", "--format", "yaml", "version"]).is_err());
}

#[test]
fn test_path_or_stdin_display() {
    assert_eq!(PathOrStdin::Stdin.to_string(), "-");
    assert_eq!(
        PathOrStdin::Path(PathBuf::from("dir/x.json")).to_string(),
        "dir/x.json"
    );
}

#[test]
fn test_indent_is_bounded() {
    assert_eq!(parse(&["structdiff", "--indent", "16", "version"]).indent, 16);
    assert_eq!(parse(&["structdiff", "--indent", "0", "version"]).indent, 0);
    assert!(Cli::try_parse_from(["structdiff", "--indent", "17", "version"]).is_err());
    assert!(Cli::try_parse_from(["structdiff", "--indent", "4000000000", "version"]).is_err());
}
