//! Optimization input and result types.

use serde::{Deserialize, Serialize};

use super::{ProjectLocation, VesselAssignment, VesselPosition, VesselSchedule};

/// Read-only snapshot handed to the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationInput {
    #[serde(default)]
    pub vessels: Vec<VesselPosition>,
    #[serde(default)]
    pub projects: Vec<ProjectLocation>,
    #[serde(default)]
    pub current_assignments: Vec<VesselAssignment>,
}

/// Kind of schedule change proposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Visit order of one vessel changed.
    Resequence,
    /// A project moved from one vessel to another.
    Reassign,
    /// Two vessels exchanged projects.
    Swap,
    /// Several visits merged onto fewer vessels.
    Consolidate,
}

/// Quantified benefit of a change. All fields are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeImpact {
    pub distance_saved_nm: f64,
    pub fuel_saved_liters: f64,
    pub time_saved_hours: f64,
    pub cost_saved: f64,
}

/// One explained change between the original and optimized schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationChange {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub description: String,
    pub reasoning: String,
    pub impact: ChangeImpact,
    pub affected_vessels: Vec<String>,
    pub before: String,
    pub after: String,
}

/// Fleet-wide aggregate of a set of schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetMetrics {
    pub total_fleet_distance_nm: f64,
    pub total_fleet_fuel_liters: f64,
    pub total_fleet_hours: f64,
    pub total_idle_days: f64,
    /// Percentage of vessel-days in the look-ahead window that are assigned.
    pub average_utilization: f64,
}

/// Original minus optimized deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSummary {
    pub distance_saved_nm: f64,
    pub fuel_saved_liters: f64,
    pub time_saved_hours: f64,
    pub cost_saved: f64,
    pub utilization_gain_percent: f64,
}

/// Why an input assignment was left out of the schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnknownVessel,
    UnknownProject,
}

/// An input assignment dropped by the lenient join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    pub vessel_id: String,
    pub project_id: String,
    pub reason: SkipReason,
}

/// Everything produced by one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOptimizationResult {
    pub original_schedules: Vec<VesselSchedule>,
    pub original_metrics: FleetMetrics,
    pub optimized_schedules: Vec<VesselSchedule>,
    pub optimized_metrics: FleetMetrics,
    pub changes: Vec<OptimizationChange>,
    pub summary: OptimizationSummary,
    /// Confidence in the proposed changes, in `[70, 95]`.
    pub confidence: f64,
    pub warnings: Vec<String>,
    pub skipped: Vec<SkippedAssignment>,
}

impl FleetOptimizationResult {
    /// Changes of the given kind, in the order they were proposed.
    pub fn changes_of(&self, kind: ChangeKind) -> impl Iterator<Item = &OptimizationChange> {
        self.changes.iter().filter(move |c| c.kind == kind)
    }

    /// Optimized schedule for a vessel, if the vessel is in the roster.
    pub fn optimized_schedule(&self, vessel_id: &str) -> Option<&VesselSchedule> {
        self.optimized_schedules
            .iter()
            .find(|s| s.vessel_id == vessel_id)
    }
}
