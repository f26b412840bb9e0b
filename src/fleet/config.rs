//! Optimizer thresholds and limits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::evaluation::DEFAULT_MIN_SEGMENT_NM;
use crate::local_search::DEFAULT_MAX_PASSES;
use crate::models::DEFAULT_SPEED_KNOTS;

/// Minimum distance saving (nm) for a resequence to be reported.
pub const DEFAULT_RESEQUENCE_MIN_SAVING_NM: f64 = 5.0;
/// Score lead the best vessel needs over the current one to take a project.
pub const DEFAULT_REASSIGN_MIN_SCORE_GAP: f64 = 20.0;
/// How much closer (nm) the best vessel must be to take a project.
pub const DEFAULT_REASSIGN_MIN_DISTANCE_GAIN_NM: f64 = 10.0;
/// Fuel price in dollars per liter.
pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 0.85;
/// Length of the forward utilization window, in days.
pub const DEFAULT_UTILIZATION_WINDOW_DAYS: u32 = 30;

/// Tunable thresholds for [`FleetOptimizer`](super::FleetOptimizer).
///
/// Every field has a named default. Deserializing a partial document fills
/// the missing fields from those defaults.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fleet_routing::fleet::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_fuel_price_per_liter(1.10)
///     .with_time_limit(Duration::from_millis(250));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.reassign_min_score_gap, 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    pub resequence_min_saving_nm: f64,
    pub reassign_min_score_gap: f64,
    pub reassign_min_distance_gain_nm: f64,
    pub fuel_price_per_liter: f64,
    /// Legs at or below this length are not recorded as route segments.
    pub min_segment_nm: f64,
    /// Speed used for vessels that report none.
    pub default_speed_knots: f64,
    pub utilization_window_days: u32,
    pub two_opt_max_passes: usize,
    /// Wall-clock budget for the resequence and reassign phases.
    #[serde(skip)]
    pub time_limit: Option<Duration>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            resequence_min_saving_nm: DEFAULT_RESEQUENCE_MIN_SAVING_NM,
            reassign_min_score_gap: DEFAULT_REASSIGN_MIN_SCORE_GAP,
            reassign_min_distance_gain_nm: DEFAULT_REASSIGN_MIN_DISTANCE_GAIN_NM,
            fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
            min_segment_nm: DEFAULT_MIN_SEGMENT_NM,
            default_speed_knots: DEFAULT_SPEED_KNOTS,
            utilization_window_days: DEFAULT_UTILIZATION_WINDOW_DAYS,
            two_opt_max_passes: DEFAULT_MAX_PASSES,
            time_limit: None,
        }
    }
}

impl OptimizerConfig {
    pub fn with_resequence_min_saving_nm(mut self, nm: f64) -> Self {
        self.resequence_min_saving_nm = nm;
        self
    }

    pub fn with_reassign_min_score_gap(mut self, points: f64) -> Self {
        self.reassign_min_score_gap = points;
        self
    }

    pub fn with_reassign_min_distance_gain_nm(mut self, nm: f64) -> Self {
        self.reassign_min_distance_gain_nm = nm;
        self
    }

    pub fn with_fuel_price_per_liter(mut self, price: f64) -> Self {
        self.fuel_price_per_liter = price;
        self
    }

    pub fn with_min_segment_nm(mut self, nm: f64) -> Self {
        self.min_segment_nm = nm;
        self
    }

    pub fn with_default_speed_knots(mut self, knots: f64) -> Self {
        self.default_speed_knots = knots;
        self
    }

    pub fn with_utilization_window_days(mut self, days: u32) -> Self {
        self.utilization_window_days = days;
        self
    }

    pub fn with_two_opt_max_passes(mut self, passes: usize) -> Self {
        self.two_opt_max_passes = passes;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Checks that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("resequence_min_saving_nm", self.resequence_min_saving_nm)?;
        non_negative("reassign_min_score_gap", self.reassign_min_score_gap)?;
        non_negative(
            "reassign_min_distance_gain_nm",
            self.reassign_min_distance_gain_nm,
        )?;
        non_negative("fuel_price_per_liter", self.fuel_price_per_liter)?;
        non_negative("min_segment_nm", self.min_segment_nm)?;
        if !(self.default_speed_knots.is_finite() && self.default_speed_knots > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "default_speed_knots",
                value: self.default_speed_knots,
            });
        }
        if self.utilization_window_days == 0 {
            return Err(ConfigError::NotPositive {
                field: "utilization_window_days",
                value: 0.0,
            });
        }
        if self.two_opt_max_passes == 0 {
            return Err(ConfigError::ZeroPassCap);
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeOrNonFinite { field, value })
    }
}
