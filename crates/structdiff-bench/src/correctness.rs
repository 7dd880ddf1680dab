//! Cross-operation invariant checkers for correctness validation.

use structdiff_core::{DiffError, Value, is_match, render, render_diff};

/// Verifies that the diff of `expected` and `actual` is empty exactly when
/// they match.
pub fn check_diff_agrees_with_match(expected: &Value, actual: &Value) -> Result<(), String> {
    let matched = is_match(expected, actual).map_err(|e| walk_failed("is_match", &e))?;
    let diff = render_diff(expected, actual).map_err(|e| walk_failed("render_diff", &e))?;
    if matched == diff.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "is_match returned {matched} but render_diff returned {} bytes:\n{diff}",
            diff.len()
        ))
    }
}

/// Verifies that two values render identically.
pub fn check_render_equal(a: &Value, b: &Value) -> Result<(), String> {
    let left = render(a).map_err(|e| walk_failed("render", &e))?;
    let right = render(b).map_err(|e| walk_failed("render", &e))?;
    if left == right {
        Ok(())
    } else {
        Err(format!("renderings differ:\n{left}\n---\n{right}"))
    }
}

/// Verifies that `actual` does not match `expected` and that the diff says
/// so on at least one line.
pub fn check_reports_difference(expected: &Value, actual: &Value) -> Result<(), String> {
    let diff = render_diff(expected, actual).map_err(|e| walk_failed("render_diff", &e))?;
    if diff.contains("// expected")
        || diff.contains("// missing properties:")
        || diff.contains("// extra properties:")
        || diff.contains("// got ")
    {
        Ok(())
    } else {
        Err(format!("diff does not report a difference:\n{diff}"))
    }
}

fn walk_failed(operation: &str, e: &DiffError) -> String {
    format!("{operation} failed: {e}")
}
