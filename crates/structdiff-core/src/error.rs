/// Error types for the structural match, render, and diff walks.
///
/// The only abnormal input is a cyclic container graph. Every other pairing
/// of values, including every type mismatch, is a reportable difference and
/// never an error.
use std::fmt;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which input a walk was descending when it detected a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The expected value of a match or diff.
    Expected,
    /// The actual value of a match or diff.
    Actual,
    /// The single value passed to a render call.
    Value,
}

impl Side {
    /// Lower-case label used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expected => "expected value",
            Self::Actual => "actual value",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DiffError
// ---------------------------------------------------------------------------

/// Errors returned by [`crate::is_match`], [`crate::render`], and
/// [`crate::render_diff`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A container was reached again while it was still being descended.
    CyclicValue {
        /// The input that contains the cycle.
        side: Side,
        /// Key path from the root to the revisit, e.g. `$.children[2].parent`.
        path: String,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CyclicValue { side, path } => {
                write!(
                    f,
                    "cyclic value: {side} refers back to an enclosing container at {path}"
                )
            }
        }
    }
}

impl std::error::Error for DiffError {}
