//! Constructive heuristics for building initial visit orders.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor open path, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
