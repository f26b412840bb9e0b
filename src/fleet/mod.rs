//! Fleet-wide orchestration: baseline, resequencing, reassignment, summary.

mod config;
mod optimizer;

pub use config::{
    OptimizerConfig, DEFAULT_FUEL_PRICE_PER_LITER, DEFAULT_REASSIGN_MIN_DISTANCE_GAIN_NM,
    DEFAULT_REASSIGN_MIN_SCORE_GAP, DEFAULT_RESEQUENCE_MIN_SAVING_NM,
    DEFAULT_UTILIZATION_WINDOW_DAYS,
};
pub use optimizer::{optimize_fleet, FleetOptimizer};
