//! Visit ordering for a single vessel.
//!
//! Combines [`nearest_neighbor`](crate::constructive::nearest_neighbor)
//! construction with [`two_opt_improve`](crate::local_search::two_opt_improve)
//! over any set of [`Positioned`](crate::models::Positioned) locations.

mod optimizer;

pub use optimizer::{optimize_sequence, SequenceOptimizer, SequenceResult};
