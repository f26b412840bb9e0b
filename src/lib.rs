//! # fleet-routing
//!
//! Marine fleet scheduling: assigns service vessels to project sites and
//! orders each vessel's visits to cut transit distance, fuel, and time. Every
//! proposed change comes with its reasoning and quantified benefit.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (vessels, projects, assignments, schedules, results)
//! - [`distance`] — Haversine distance, fuel rates, distance matrix
//! - [`evaluation`] — Per-vessel route analysis (segments, totals, idle days)
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — Open-path 2-opt improvement
//! - [`sequencing`] — Two-phase visit ordering over positioned locations
//! - [`scoring`] — Vessel-to-project suitability with reasons
//! - [`fleet`] — Fleet-wide optimizer and its configuration
//! - [`report`] — Display formats for currency, distance, fuel, duration
//! - [`error`] — Configuration errors

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod fleet;
pub mod local_search;
pub mod models;
pub mod report;
pub mod scoring;
pub mod sequencing;

pub use error::ConfigError;
pub use fleet::{optimize_fleet, FleetOptimizer, OptimizerConfig};
