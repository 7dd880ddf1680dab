/// Structural equivalence of two values.
///
/// Containers match when they are the same handle, or when they have the same
/// kind, structurally matching prototypes, the same array length, and the
/// same key set with matching values under every key. Key order is
/// irrelevant. Flat values match by value (`NaN` matches `NaN`), functions by
/// identity, and different variants never match.
use crate::error::{DiffError, Side};
use crate::guard::{Segment, Trail};
use crate::value::{Container, Snapshot, Value};

/// Returns whether `expected` and `actual` are structurally equivalent.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if either input loops back on itself
/// along the path being compared. A value compared against the very same
/// handle is `true` without descending, so `is_match(v, v)` never fails.
pub fn is_match(expected: &Value, actual: &Value) -> Result<bool, DiffError> {
    let mut expected_trail = Trail::new(Side::Expected);
    let mut actual_trail = Trail::new(Side::Actual);
    Matcher::over(&mut expected_trail, &mut actual_trail).matches(expected, actual)
}

/// A match walk over caller-owned trails, so that a walk nested inside a
/// diff sees the containers the diff has already opened.
pub(crate) struct Matcher<'t> {
    expected: &'t mut Trail,
    actual: &'t mut Trail,
}

impl<'t> Matcher<'t> {
    pub(crate) fn over(expected: &'t mut Trail, actual: &'t mut Trail) -> Self {
        Self { expected, actual }
    }

    pub(crate) fn matches(&mut self, expected: &Value, actual: &Value) -> Result<bool, DiffError> {
        match (expected, actual) {
            (Value::Container(e), Value::Container(a)) => self.containers_match(e, a),
            (Value::Container(_), _) | (_, Value::Container(_)) => Ok(false),
            _ => Ok(flat_match(expected, actual)),
        }
    }

    fn containers_match(
        &mut self,
        expected: &Container,
        actual: &Container,
    ) -> Result<bool, DiffError> {
        if expected.same_as(actual) {
            return Ok(true);
        }
        if expected.kind() != actual.kind() {
            return Ok(false);
        }

        self.expected.enter(expected)?;
        self.actual.enter(actual)?;
        let result = self.snapshots_match(&expected.snapshot(), &actual.snapshot());
        self.expected.leave(expected);
        self.actual.leave(actual);
        result
    }

    fn snapshots_match(&mut self, expected: &Snapshot, actual: &Snapshot) -> Result<bool, DiffError> {
        self.descend(Segment::Prototype);
        let prototypes = self.matches(&expected.prototype, &actual.prototype);
        self.ascend();
        if !prototypes? {
            return Ok(false);
        }

        if expected.length != actual.length
            || expected.properties.len() != actual.properties.len()
        {
            return Ok(false);
        }

        for (key, e) in &expected.properties {
            let Some(a) = actual.properties.get(key) else {
                return Ok(false);
            };
            self.descend(Segment::Key(key.clone()));
            let same = self.matches(e, a);
            self.ascend();
            if !same? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn descend(&mut self, segment: Segment) {
        self.expected.push(segment.clone());
        self.actual.push(segment);
    }

    fn ascend(&mut self) {
        self.expected.pop();
        self.actual.pop();
    }
}

/// Equality for two values of which neither is a container. Any pair
/// involving a container is `false`.
pub(crate) fn flat_match(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(e), Value::Boolean(a)) => e == a,
        (Value::Number(e), Value::Number(a)) => {
            if e.is_nan() {
                a.is_nan()
            } else {
                e == a
            }
        }
        (Value::String(e), Value::String(a)) => e == a,
        (Value::Function(e), Value::Function(a)) => e.same_as(a),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
