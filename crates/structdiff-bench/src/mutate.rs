//! Single-leaf mutation for diff benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structdiff_core::{Container, Function, Value};

/// Returns a deep copy of `value` with exactly one leaf replaced by a value
/// that does not match it.
///
/// The copy shares no container handles with `value`. The leaf is chosen
/// uniformly among all leaves reachable through container entries, seeded by
/// `seed`. A value with no leaves (only empty containers) gets a `mutated`
/// property on its root instead.
///
/// `value` must be acyclic.
pub fn mutate(value: &Value, seed: u64) -> Value {
    let leaves = count_leaves(value);
    if leaves == 0 {
        let copy = deep_copy(value, &mut Cursor::none());
        if let Value::Container(root) = &copy {
            root.insert("mutated", true);
        }
        return copy;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cursor = Cursor {
        target: Some(rng.gen_range(0..leaves)),
        seen: 0,
    };
    deep_copy(value, &mut cursor)
}

/// Tracks the leaf index being copied and the one to replace.
struct Cursor {
    target: Option<usize>,
    seen: usize,
}

impl Cursor {
    fn none() -> Self {
        Self {
            target: None,
            seen: 0,
        }
    }
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Container(c) => c.entries().iter().map(|(_, v)| count_leaves(v)).sum(),
        Value::Undefined
        | Value::Null
        | Value::Boolean(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Function(_) => 1,
    }
}

fn deep_copy(value: &Value, cursor: &mut Cursor) -> Value {
    match value {
        Value::Container(c) => Value::Container(copy_container(c, cursor)),
        Value::Undefined
        | Value::Null
        | Value::Boolean(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Function(_) => {
            let index = cursor.seen;
            cursor.seen += 1;
            if cursor.target == Some(index) {
                changed_leaf(value)
            } else {
                value.clone()
            }
        }
    }
}

fn copy_container(source: &Container, cursor: &mut Cursor) -> Container {
    // Prototypes are copied verbatim; only entries count as leaves.
    let copy = Container::with_prototype(
        source.kind(),
        deep_copy(&source.prototype(), &mut Cursor::none()),
    );
    if let Some(length) = source.array_length() {
        copy.set_length(length);
    }
    for (key, value) in source.entries() {
        copy.insert(key, deep_copy(&value, cursor));
    }
    copy
}

/// A flat value guaranteed not to match `leaf`.
fn changed_leaf(leaf: &Value) -> Value {
    match leaf {
        Value::Undefined => Value::Null,
        Value::Null => Value::Undefined,
        Value::Boolean(b) => Value::Boolean(!b),
        Value::Number(n) if n.is_nan() => Value::Number(0.0),
        Value::Number(n) => Value::Number(n + 1.0),
        Value::String(s) => Value::String(format!("{s}~")),
        Value::Function(_) => Value::Function(Function::anonymous()),
        Value::Container(_) => Value::Null,
    }
}
