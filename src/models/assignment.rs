//! Vessel-to-project assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GeoPoint, Positioned, ProjectLocation};

/// Links a vessel to a project for a date interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselAssignment {
    /// Store identifier, if the assignment store provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub vessel_id: String,
    pub project_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl VesselAssignment {
    /// Creates an assignment without a store identifier.
    pub fn new(
        vessel_id: impl Into<String>,
        project_id: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            vessel_id: vessel_id.into(),
            project_id: project_id.into(),
            start_date,
            end_date,
        }
    }

    /// Sets the store identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns `true` if this assignment overlaps `[start, end]` (inclusive).
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}

/// An assignment joined with its project: everything needed to route a visit.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fleet_routing::models::{GeoPoint, ScheduledVisit};
///
/// let visit = ScheduledVisit::new(
///     "p1",
///     "Jetty",
///     GeoPoint::new(24.5, 54.0),
///     Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
/// );
/// assert_eq!(visit.project_id, "p1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledVisit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    pub project_id: String,
    pub project_name: String,
    pub location: GeoPoint,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl ScheduledVisit {
    pub fn new(
        project_id: impl Into<String>,
        project_name: impl Into<String>,
        location: GeoPoint,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            assignment_id: None,
            project_id: project_id.into(),
            project_name: project_name.into(),
            location,
            start_date,
            end_date,
        }
    }

    /// Joins an assignment with the project it references.
    pub fn from_assignment(assignment: &VesselAssignment, project: &ProjectLocation) -> Self {
        Self {
            assignment_id: assignment.id.clone(),
            project_id: project.id().to_string(),
            project_name: project.name().to_string(),
            location: project.position(),
            start_date: assignment.start_date,
            end_date: assignment.end_date,
        }
    }
}

impl Positioned for ScheduledVisit {
    fn position(&self) -> GeoPoint {
        self.location
    }
}
