#![allow(clippy::expect_used)]

mod container_tests;

use crate::value::Value;

use super::render_diff;

/// Diff of two acyclic values.
pub(crate) fn d(expected: &Value, actual: &Value) -> String {
    render_diff(expected, actual).expect("acyclic inputs")
}
