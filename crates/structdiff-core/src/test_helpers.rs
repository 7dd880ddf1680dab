//! Shared value builders for unit tests.
//!
//! Compiled only in test builds. Integration tests under `tests/` define
//! their own helpers because they link against the non-test library build.
#![allow(clippy::expect_used)]

use crate::value::{Container, ContainerKind, Value};

/// An object with the given prototype and entries.
pub fn object_with_prototype<const N: usize>(
    prototype: Value,
    entries: [(&str, Value); N],
) -> Value {
    let c = Container::with_prototype(ContainerKind::Object, prototype);
    for (key, value) in entries {
        c.insert(key, value);
    }
    Value::Container(c)
}

/// `{ self: <itself> }`.
pub fn cyclic_object() -> Value {
    let c = Container::new(ContainerKind::Object);
    c.insert("self", c.clone());
    Value::Container(c)
}

/// `{ n: <n>, self: <itself> }`, so that two instances built with different
/// `n` mismatch before the cycle is reached.
pub fn cyclic_object_with(n: i32) -> Value {
    let c = Container::new(ContainerKind::Object);
    c.insert("n", n);
    c.insert("self", c.clone());
    Value::Container(c)
}

/// Shorthand for a string value.
pub fn s(text: &str) -> Value {
    Value::from(text)
}
