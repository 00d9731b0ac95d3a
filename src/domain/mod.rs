//! Domain layer: pure, synchronous graph types and traversal primitives.

pub mod error;
pub mod graph;
pub mod model;
pub mod traits;
pub mod traversal;
