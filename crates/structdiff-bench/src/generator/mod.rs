//! Nested value generator.
//!
//! Produces acyclic [`Value`] trees whose shape is fixed by
//! [`GeneratorConfig`] and whose leaves are drawn from a seeded RNG.

mod leaves;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structdiff_core::{Container, ContainerKind, Value};

use leaves::gen_leaf;

/// Configuration for the value generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Container nesting depth below the root. `0` yields a single leaf.
    pub depth: usize,
    /// Properties per container.
    pub breadth: usize,
    /// Probability (0.0-1.0) that a container is an array rather than an
    /// object.
    pub array_ratio: f64,
    /// Distance between consecutive array indices. `0` and `1` give dense
    /// arrays; larger values leave holes.
    pub sparse_stride: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// depth 3, breadth 4, dense arrays
    Small,
    /// depth 4, breadth 6, dense arrays
    Medium,
    /// depth 5, breadth 8, arrays with stride 3
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                depth: 3,
                breadth: 4,
                array_ratio: 0.3,
                sparse_stride: 1,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                depth: 4,
                breadth: 6,
                array_ratio: 0.3,
                sparse_stride: 1,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                depth: 5,
                breadth: 8,
                array_ratio: 0.3,
                sparse_stride: 3,
            },
        }
    }
}

/// Generates a value from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Every call
/// returns fresh container handles, so two calls with the same config give
/// structurally equal values that share nothing.
pub fn generate_value(config: &GeneratorConfig) -> Value {
    let mut rng = StdRng::seed_from_u64(config.seed);
    gen_node(config, &mut rng, config.depth)
}

/// An array with a single string at index 3000, the case sparse-aware
/// rendering exists for.
pub fn sparse_fixture(value: &str) -> Value {
    Value::sparse_array(0, [(3000_usize, value)])
}

fn gen_node(config: &GeneratorConfig, rng: &mut StdRng, remaining: usize) -> Value {
    if remaining == 0 {
        return gen_leaf(rng);
    }

    let kind = if rng.gen_bool(config.array_ratio.clamp(0.0, 1.0)) {
        ContainerKind::Array
    } else {
        ContainerKind::Object
    };
    let container = Container::new(kind);
    let stride = config.sparse_stride.max(1);

    for i in 0..config.breadth {
        // Every fourth child stops early so leaves appear at all depths.
        let child = if i % 4 == 3 {
            gen_leaf(rng)
        } else {
            gen_node(config, rng, remaining - 1)
        };
        match kind {
            ContainerKind::Array => container.insert(i * stride, child),
            ContainerKind::Object => container.insert(format!("k{i}"), child),
        };
    }
    Value::Container(container)
}
