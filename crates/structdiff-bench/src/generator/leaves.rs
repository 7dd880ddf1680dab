//! Flat leaf values.

use rand::Rng;
use rand::rngs::StdRng;
use structdiff_core::Value;

const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
];

/// A random flat value: mostly numbers and strings, occasionally a boolean,
/// `null`, or `NaN`.
pub fn gen_leaf(rng: &mut StdRng) -> Value {
    match rng.gen_range(0..10) {
        0..=3 => Value::Number(f64::from(rng.gen_range(-1000_i32..1000))),
        4..=6 => Value::String(WORDS[rng.gen_range(0..WORDS.len())].to_owned()),
        7 => Value::Boolean(rng.gen_bool(0.5)),
        8 => Value::Null,
        _ => Value::nan(),
    }
}
