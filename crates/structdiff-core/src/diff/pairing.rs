use crate::value::{ContainerKind, Value};

/// The structural shape of one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Flat,
    Array,
    Object,
}

impl Shape {
    pub(crate) fn of(value: &Value) -> Self {
        match value.as_container().map(crate::value::Container::kind) {
            None => Self::Flat,
            Some(ContainerKind::Array) => Self::Array,
            Some(ContainerKind::Object) => Self::Object,
        }
    }
}

/// How a mismatched pair is explained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pairing {
    /// `actual   // expected expected` on one line.
    Inline,
    /// Same container kind: per-property diff block.
    Properties,
    /// Non-empty array against non-empty object: both dumped in full.
    KindMismatch,
    /// Expected fits on one line; actual is dumped below it.
    DumpActual,
    /// Actual fits on one line; expected is dumped below it.
    DumpExpected,
}

/// Flat values and empty containers render on a single line.
fn is_inline(value: &Value) -> bool {
    value.as_container().is_none_or(crate::value::Container::is_empty)
}

/// Chooses how to explain a pair already known not to match.
pub(crate) fn classify(expected: &Value, actual: &Value) -> Pairing {
    let (e_shape, a_shape) = (Shape::of(expected), Shape::of(actual));
    if e_shape == a_shape {
        return match e_shape {
            Shape::Flat => Pairing::Inline,
            Shape::Array | Shape::Object => Pairing::Properties,
        };
    }

    let (e_inline, a_inline) = (is_inline(expected), is_inline(actual));
    if e_inline && a_inline {
        return Pairing::Inline;
    }

    match (e_shape, a_shape) {
        (Shape::Array, Shape::Object) | (Shape::Object, Shape::Array) => {
            let object_side = if e_shape == Shape::Object {
                expected
            } else {
                actual
            };
            if is_inline(object_side) {
                Pairing::Inline
            } else if !e_inline && !a_inline {
                Pairing::KindMismatch
            } else if e_inline {
                Pairing::DumpActual
            } else {
                Pairing::DumpExpected
            }
        }
        _ => {
            if e_inline {
                Pairing::DumpActual
            } else {
                Pairing::DumpExpected
            }
        }
    }
}
