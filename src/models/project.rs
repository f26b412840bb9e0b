//! Project locations and their service windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GeoPoint, Positioned, VesselType};

/// Business priority of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// A project site that needs one or more vessels during a date window.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fleet_routing::models::{ProjectLocation, VesselType};
///
/// let p = ProjectLocation::new(
///     "p1",
///     "Breakwater",
///     24.5,
///     54.0,
///     Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
/// )
/// .with_required_type(VesselType::Dredger);
///
/// assert!(p.requires(&VesselType::Dredger));
/// assert!(!p.requires(&VesselType::Tugboat));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLocation {
    id: String,
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    required_vessel_types: Vec<VesselType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl ProjectLocation {
    /// Creates a project with no type requirements and no priority.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            required_vessel_types: Vec::new(),
            priority: None,
            start_date,
            end_date,
        }
    }

    /// Adds a vessel type this project can use. Duplicates are ignored.
    pub fn with_required_type(mut self, vessel_type: VesselType) -> Self {
        if !self.required_vessel_types.contains(&vessel_type) {
            self.required_vessel_types.push(vessel_type);
        }
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_vessel_types(&self) -> &[VesselType] {
        &self.required_vessel_types
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns `true` if `vessel_type` is one of the required types.
    pub fn requires(&self, vessel_type: &VesselType) -> bool {
        self.required_vessel_types.contains(vessel_type)
    }
}

impl Positioned for ProjectLocation {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}
