//! Deterministic value generation and benchmark utilities for structdiff.
//!
//! This crate builds nested [`structdiff_core::Value`] trees of predictable
//! size for benchmarking and property-based testing of `structdiff-core`.

pub mod correctness;
pub mod generator;
pub mod mutate;

pub use generator::{GeneratorConfig, SizeTier, generate_value, sparse_fixture};
pub use mutate::mutate;
