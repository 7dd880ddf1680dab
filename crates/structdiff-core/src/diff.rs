//! Human-readable explanation of a structural mismatch.
//!
//! [`render_diff`] returns an empty string exactly when [`crate::is_match`]
//! holds. Otherwise the pair is classified by shape at every depth:
//!
//! - both flat, or both sides fit on one line:
//!   `actual   // expected expected`
//! - same container kind: a block listing only the changed shared
//!   properties (each recursively diffed), then any missing and extra
//!   properties in full, then a note if the prototypes differ
//! - non-empty array against non-empty object: both sides dumped with
//!   `// expected object:` / `// but got array:` headings
//! - one-line value against a non-empty container: the one-line side inline
//!   and the container dumped in full below it
//!
//! Identical shared properties are elided.
mod pairing;
mod props;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use crate::error::{DiffError, Side};
use crate::guard::{Segment, Trail};
use crate::matcher::{Matcher, flat_match};
use crate::render::{RenderOptions, Renderer, push_property};
use crate::value::{Container, Key, Snapshot, Value};

use pairing::{Pairing, classify};
use props::PropertySplit;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Explains how `actual` differs from `expected`, using default options.
///
/// Returns `""` when the two values match.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if either input loops back on itself
/// along a path the diff has to descend.
pub fn render_diff(expected: &Value, actual: &Value) -> Result<String, DiffError> {
    render_diff_with(expected, actual, &RenderOptions::default())
}

/// Explains how `actual` differs from `expected`, using `options`.
///
/// Returns `""` when the two values match.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if either input loops back on itself
/// along a path the diff has to descend.
pub fn render_diff_with(
    expected: &Value,
    actual: &Value,
    options: &RenderOptions,
) -> Result<String, DiffError> {
    let result = DiffRenderer::new(options).diff(expected, actual, "");
    match &result {
        Ok(text) => debug!(differs = !text.is_empty(), "rendered diff"),
        Err(e) => debug!(error = %e, "diff aborted"),
    }
    result
}

// ---------------------------------------------------------------------------
// DiffRenderer
// ---------------------------------------------------------------------------

struct DiffRenderer<'o> {
    options: &'o RenderOptions,
    unit: String,
    expected: Trail,
    actual: Trail,
}

impl<'o> DiffRenderer<'o> {
    fn new(options: &'o RenderOptions) -> Self {
        Self {
            options,
            unit: options.indent_unit(),
            expected: Trail::new(Side::Expected),
            actual: Trail::new(Side::Actual),
        }
    }

    /// Returns `""` when the pair matches. Matching is decided by this walk
    /// itself, so each node is visited once rather than once per ancestor.
    fn diff(&mut self, expected: &Value, actual: &Value, indent: &str) -> Result<String, DiffError> {
        let pairing = classify(expected, actual);
        match (pairing, expected, actual) {
            (Pairing::Properties, Value::Container(e), Value::Container(a)) => {
                if e.same_as(a) {
                    Ok(String::new())
                } else {
                    self.properties(e, a, indent)
                }
            }
            (Pairing::Inline, _, _) if flat_match(expected, actual) => Ok(String::new()),
            _ => {
                trace!(?pairing, "explaining mismatch");
                self.mismatch(pairing, expected, actual, indent)
            }
        }
    }

    /// Explains a pair already known not to match.
    fn mismatch(
        &self,
        pairing: Pairing,
        expected: &Value,
        actual: &Value,
        indent: &str,
    ) -> Result<String, DiffError> {
        match (pairing, expected, actual) {
            (Pairing::KindMismatch, Value::Container(e), Value::Container(a)) => {
                self.kind_mismatch(e, a, indent)
            }
            (Pairing::DumpActual, _, _) => {
                let e = self.render(Side::Expected, expected, indent)?;
                let a = self.render(Side::Actual, actual, indent)?;
                Ok(format!("// expected {e} but got:\n{indent}{a}"))
            }
            (Pairing::DumpExpected, _, _) => {
                let e = self.render(Side::Expected, expected, indent)?;
                let a = self.render(Side::Actual, actual, indent)?;
                Ok(format!("// got {a} but expected:\n{indent}{e}"))
            }
            _ => self.inline(expected, actual, indent),
        }
    }

    /// `actual   // expected expected`, with `different ` prepended to the
    /// expected side when two distinct functions render identically.
    fn inline(&self, expected: &Value, actual: &Value, indent: &str) -> Result<String, DiffError> {
        let a = self.render(Side::Actual, actual, indent)?;
        let mut e = self.render(Side::Expected, expected, indent)?;
        if matches!((expected, actual), (Value::Function(_), Value::Function(_))) && e == a {
            e.insert_str(0, "different ");
        }
        Ok(format!("{a}   // expected {e}"))
    }

    fn kind_mismatch(
        &self,
        expected: &Container,
        actual: &Container,
        indent: &str,
    ) -> Result<String, DiffError> {
        let e = self.render(Side::Expected, &Value::Container(expected.clone()), indent)?;
        let a = self.render(Side::Actual, &Value::Container(actual.clone()), indent)?;
        Ok(format!(
            "// expected {}:\n{indent}{e}\n{indent}// but got {}:\n{indent}{a}",
            expected.kind(),
            actual.kind(),
        ))
    }

    fn properties(
        &mut self,
        expected: &Container,
        actual: &Container,
        indent: &str,
    ) -> Result<String, DiffError> {
        let (e, a) = (expected.snapshot(), actual.snapshot());
        self.expected.enter(expected)?;
        self.actual.enter(actual)?;

        let inner = format!("{indent}{}", self.unit);
        let split = PropertySplit::of(&e, &a);

        let mut incorrect = String::new();
        for key in &split.shared {
            let (Some(ev), Some(av)) = (e.properties.get(key), a.properties.get(key)) else {
                continue;
            };
            self.descend(key);
            let body = self.diff(ev, av, &inner)?;
            self.ascend();
            if body.is_empty() {
                trace!(%key, "elided matching property");
            } else {
                push_property(&mut incorrect, &inner, key, &body);
            }
        }

        let missing = self.listing("missing", Side::Expected, &split.missing, &e, &inner)?;
        let extra = self.listing("extra", Side::Actual, &split.extra, &a, &inner)?;

        self.expected.push(Segment::Prototype);
        self.actual.push(Segment::Prototype);
        let prototypes_match = Matcher::over(&mut self.expected, &mut self.actual)
            .matches(&e.prototype, &a.prototype);
        self.expected.pop();
        self.actual.pop();
        let prototypes = if prototypes_match? {
            String::new()
        } else {
            format!("\n{inner}// objects have different prototypes")
        };

        self.expected.leave(expected);
        self.actual.leave(actual);

        // Length is compared but never listed.
        if incorrect.is_empty()
            && missing.is_empty()
            && extra.is_empty()
            && prototypes.is_empty()
            && e.length == a.length
        {
            return Ok(String::new());
        }

        let (open, close) = e.kind.brackets();
        Ok(format!(
            "{open}{incorrect}{missing}{extra}{prototypes}\n{indent}{close}"
        ))
    }

    /// A `// <label> properties:` heading followed by each key with its full
    /// value from `source`; empty when `keys` is empty.
    fn listing(
        &self,
        label: &str,
        side: Side,
        keys: &[Key],
        source: &Snapshot,
        indent: &str,
    ) -> Result<String, DiffError> {
        if keys.is_empty() {
            return Ok(String::new());
        }
        let mut out = format!("\n{indent}// {label} properties:");
        for key in keys {
            let Some(value) = source.properties.get(key) else {
                continue;
            };
            let body = self.render(side, value, indent)?;
            push_property(&mut out, indent, key, &body);
        }
        Ok(out)
    }

    fn render(&self, side: Side, value: &Value, indent: &str) -> Result<String, DiffError> {
        Renderer::new(self.options, side).render(value, indent)
    }

    fn descend(&mut self, key: &Key) {
        self.expected.push(Segment::Key(key.clone()));
        self.actual.push(Segment::Key(key.clone()));
    }

    fn ascend(&mut self) {
        self.expected.pop();
        self.actual.pop();
    }
}
