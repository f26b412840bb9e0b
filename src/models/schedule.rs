//! Route segments and per-vessel schedules.

use serde::{Deserialize, Serialize};

use super::{GeoPoint, ScheduledVisit, VesselType};

/// A named point at either end of a route segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            lat: point.lat,
            lng: point.lng,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// One leg of transit between two waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub from: Waypoint,
    pub to: Waypoint,
    pub distance_nm: f64,
    pub estimated_hours: f64,
    pub fuel_liters: f64,
}

/// The analyzed route of a single vessel through its assignments.
///
/// `assignments` is in visiting order (ascending start date) and `routes`
/// holds only the segments that were long enough to record.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{VesselSchedule, VesselType};
///
/// let s = VesselSchedule::empty("v1", "Falcon", VesselType::Tugboat);
/// assert!(s.routes.is_empty());
/// assert_eq!(s.total_transit_distance_nm, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselSchedule {
    pub vessel_id: String,
    pub vessel_name: String,
    pub vessel_type: VesselType,
    pub assignments: Vec<ScheduledVisit>,
    pub routes: Vec<RouteSegment>,
    pub total_transit_distance_nm: f64,
    pub total_transit_hours: f64,
    pub total_fuel_liters: f64,
    pub idle_days: f64,
}

impl VesselSchedule {
    /// A schedule with no assignments and no transit.
    pub fn empty(
        vessel_id: impl Into<String>,
        vessel_name: impl Into<String>,
        vessel_type: VesselType,
    ) -> Self {
        Self {
            vessel_id: vessel_id.into(),
            vessel_name: vessel_name.into(),
            vessel_type,
            assignments: Vec::new(),
            routes: Vec::new(),
            total_transit_distance_nm: 0.0,
            total_transit_hours: 0.0,
            total_fuel_liters: 0.0,
            idle_days: 0.0,
        }
    }

    /// Appends a segment and adds it to the totals.
    pub fn push_segment(&mut self, segment: RouteSegment) {
        self.total_transit_distance_nm += segment.distance_nm;
        self.total_transit_hours += segment.estimated_hours;
        self.total_fuel_liters += segment.fuel_liters;
        self.routes.push(segment);
    }

    /// Project names in visiting order.
    pub fn project_names(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .map(|a| a.project_name.as_str())
            .collect()
    }
}
