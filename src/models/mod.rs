//! Domain model types for fleet scheduling.
//!
//! Inputs are vessels with live positions, project sites with type
//! requirements and date windows, and the assignments linking them. Outputs
//! are per-vessel schedules, explained changes, and fleet-wide metrics.

mod assignment;
mod geo;
mod project;
mod result;
mod schedule;
mod vessel;

pub use assignment::{ScheduledVisit, VesselAssignment};
pub use geo::{GeoPoint, Positioned};
pub use project::{Priority, ProjectLocation};
pub use result::{
    ChangeImpact, ChangeKind, FleetMetrics, FleetOptimizationResult, OptimizationChange,
    OptimizationInput, OptimizationSummary, SkipReason, SkippedAssignment,
};
pub use schedule::{RouteSegment, VesselSchedule, Waypoint};
pub use vessel::{VesselPosition, VesselType, DEFAULT_SPEED_KNOTS};
