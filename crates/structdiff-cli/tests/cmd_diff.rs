//! Integration tests for `structdiff diff`.
#![allow(clippy::expect_used)]

use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `structdiff` binary.
fn structdiff_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("structdiff");
    path
}

/// A temporary JSON file holding `contents`.
fn json_file(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f
}

fn path_of(f: &tempfile::NamedTempFile) -> &str {
    f.path().to_str().expect("utf-8 path")
}

fn structdiff() -> Command {
    let mut cmd = Command::new(structdiff_bin());
    cmd.env_remove("STRUCTDIFF_INDENT")
        .env_remove("STRUCTDIFF_MAX_FILE_SIZE")
        .env_remove("STRUCTDIFF_LOG");
    cmd
}

fn run_diff(expected: &str, actual: &str, extra: &[&str]) -> Output {
    let (e, a) = (json_file(expected), json_file(actual));
    structdiff()
        .arg("diff")
        .args([path_of(&e), path_of(&a)])
        .args(extra)
        .output()
        .expect("run structdiff diff")
}

fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// diff: equal documents (exit 0)
// ---------------------------------------------------------------------------

#[test]
fn equal_documents_exit_0_with_no_output() {
    let out = run_diff(r#"{"a": 1, "b": [true]}"#, r#"{"b": [true], "a": 1}"#, &[]);
    assert_eq!(
        out.status.code(),
        Some(0),
        "stdout: {}; stderr: {}",
        stdout_of(&out),
        stderr_of(&out)
    );
    assert_eq!(stdout_of(&out), "");
}

// ---------------------------------------------------------------------------
// diff: differing documents (exit 1)
// ---------------------------------------------------------------------------

#[test]
fn differing_documents_exit_1_and_print_diff() {
    let out = run_diff(r#"{"a": 1, "b": 2, "c": 3}"#, r#"{"a": 1, "b": "X", "c": 3}"#, &[]);
    assert_eq!(out.status.code(), Some(1), "stderr: {}", stderr_of(&out));
    assert_eq!(stdout_of(&out), "{\n  b: \"X\"   // expected 2\n}\n");
    assert_eq!(stderr_of(&out), "", "no error line for a plain difference");
}

#[test]
fn missing_and_extra_properties_are_listed() {
    let out = run_diff(r#"{"a": 1, "b": 2}"#, r#"{"a": 1, "c": 3}"#, &[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout_of(&out),
        "{\n  // missing properties:\n  b: 2\n  // extra properties:\n  c: 3\n}\n"
    );
}

#[test]
fn indent_flag_changes_nesting_width() {
    let out = run_diff(r#"{"a": {"b": 1}}"#, r#"{"a": {"b": 2}}"#, &["--indent", "4"]);
    assert_eq!(
        stdout_of(&out),
        "{\n    a: {\n        b: 2   // expected 1\n    }\n}\n"
    );
}

#[test]
fn indent_env_var_is_honoured() {
    let (e, a) = (json_file(r#"{"a": 1}"#), json_file(r#"{"a": 2}"#));
    let out = structdiff()
        .env("STRUCTDIFF_INDENT", "3")
        .args(["diff", path_of(&e), path_of(&a)])
        .output()
        .expect("run structdiff diff");
    assert_eq!(stdout_of(&out), "{\n   a: 2   // expected 1\n}\n");
}

#[test]
fn oversized_indent_is_a_usage_error() {
    let out = run_diff("1", "2", &["--indent", "4000000000"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout_of(&out).is_empty());
}

#[test]
fn json_format_reports_equal_and_diff() {
    let out = run_diff("[1, 2]", "[1, 3]", &["--format", "json"]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&out)).expect("stdout is JSON");
    assert_eq!(report["equal"], serde_json::Value::Bool(false));
    assert_eq!(report["diff"], "[\n  1: 3   // expected 2\n]");
}

#[test]
fn json_format_for_equal_documents() {
    let out = run_diff("null", "null", &["--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value =
        serde_json::from_str(&stdout_of(&out)).expect("stdout is JSON");
    assert_eq!(report["equal"], serde_json::Value::Bool(true));
    assert_eq!(report["diff"], "");
}

// ---------------------------------------------------------------------------
// diff: stdin
// ---------------------------------------------------------------------------

#[test]
fn expected_may_come_from_stdin() {
    let a = json_file("[1]");
    let mut child = structdiff()
        .args(["diff", "-", path_of(&a)])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn structdiff diff");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"[1]")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_of(&out));
}

#[test]
fn two_stdin_inputs_exit_2() {
    let out = structdiff()
        .args(["diff", "-", "-"])
        .stdin(Stdio::null())
        .output()
        .expect("run structdiff diff");
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr_of(&out).contains("stdin"), "stderr: {}", stderr_of(&out));
}

// ---------------------------------------------------------------------------
// diff: input failures (exit 2)
// ---------------------------------------------------------------------------

#[test]
fn missing_file_exits_2() {
    let a = json_file("1");
    let out = structdiff()
        .args(["diff", "/no/such/expected.json", path_of(&a)])
        .output()
        .expect("run structdiff diff");
    assert_eq!(out.status.code(), Some(2));
    assert!(
        stderr_of(&out).contains("file not found"),
        "stderr: {}",
        stderr_of(&out)
    );
}

#[test]
fn malformed_json_exits_2() {
    let out = run_diff("{\"a\": ", "{}", &[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(
        stderr_of(&out).contains("invalid JSON"),
        "stderr: {}",
        stderr_of(&out)
    );
}

#[test]
fn oversized_input_exits_2() {
    let out = run_diff("[1, 2, 3, 4, 5]", "[]", &["--max-file-size", "4"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(
        stderr_of(&out).contains("too large"),
        "stderr: {}",
        stderr_of(&out)
    );
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let out = run_diff("1", "1", &["-vv"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_of(&out), "");
    assert!(!stderr_of(&out).is_empty(), "debug events expected on stderr");
}
