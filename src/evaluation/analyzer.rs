//! Schedule analyzer that turns an assignment list into route segments.

use chrono::{DateTime, Utc};

use crate::distance::{distance_nm, fuel_liters, transit_hours};
use crate::models::{
    Positioned, RouteSegment, ScheduledVisit, VesselPosition, VesselSchedule, Waypoint,
    DEFAULT_SPEED_KNOTS,
};

/// Segments at or below this length are treated as positioning noise.
pub const DEFAULT_MIN_SEGMENT_NM: f64 = 1.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Computes a vessel's route through its assignments in start-date order.
///
/// The route starts at the vessel's current position, visits each project
/// in turn, and records a [`RouteSegment`] for every leg longer than the
/// minimum segment length. Gaps between consecutive assignments count as
/// idle days.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fleet_routing::models::{GeoPoint, ScheduledVisit, VesselPosition, VesselType};
/// use fleet_routing::evaluation::ScheduleAnalyzer;
///
/// let vessel = VesselPosition::new("v1", "Falcon", VesselType::Tugboat, 24.0, 54.0);
/// let day = |d| Utc.with_ymd_and_hms(2026, 1, d, 0, 0, 0).unwrap();
/// let visits = vec![
///     ScheduledVisit::new("p2", "Quay", GeoPoint::new(24.0, 54.5), day(10), day(12)),
///     ScheduledVisit::new("p1", "Jetty", GeoPoint::new(24.5, 54.0), day(1), day(5)),
/// ];
///
/// let schedule = ScheduleAnalyzer::default().analyze(&vessel, &visits);
/// assert_eq!(schedule.project_names(), vec!["Jetty", "Quay"]);
/// assert_eq!(schedule.routes.len(), 2);
/// assert!((schedule.idle_days - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleAnalyzer {
    min_segment_nm: f64,
    default_speed_knots: f64,
}

impl ScheduleAnalyzer {
    /// Creates an analyzer with a custom minimum segment length.
    pub fn new(min_segment_nm: f64) -> Self {
        Self {
            min_segment_nm,
            default_speed_knots: DEFAULT_SPEED_KNOTS,
        }
    }

    /// Sets the speed assumed for vessels that report none.
    pub fn with_default_speed(mut self, knots: f64) -> Self {
        self.default_speed_knots = knots;
        self
    }

    /// Minimum length a leg must exceed to be recorded.
    pub fn min_segment_nm(&self) -> f64 {
        self.min_segment_nm
    }

    /// Transit speed used for `vessel`.
    pub fn speed_of(&self, vessel: &VesselPosition) -> f64 {
        vessel.speed().unwrap_or(self.default_speed_knots)
    }

    /// Analyzes one vessel's assignments. The input slice is left untouched.
    pub fn analyze(&self, vessel: &VesselPosition, visits: &[ScheduledVisit]) -> VesselSchedule {
        let mut schedule = VesselSchedule::empty(
            vessel.id(),
            vessel.name(),
            vessel.vessel_type().clone(),
        );

        let mut ordered = visits.to_vec();
        // Stable, so equal start dates keep their input order.
        ordered.sort_by_key(|v| v.start_date);

        if let Some(first) = ordered.first() {
            let from = Waypoint::new(format!("{} (current)", vessel.name()), vessel.position());
            let to = Waypoint::new(first.project_name.clone(), first.location);
            if let Some(segment) = self.segment(vessel, from, to) {
                schedule.push_segment(segment);
            }
        }

        for pair in ordered.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            schedule.idle_days += gap_days(current.end_date, next.start_date);

            let from = Waypoint::new(current.project_name.clone(), current.location);
            let to = Waypoint::new(next.project_name.clone(), next.location);
            if let Some(segment) = self.segment(vessel, from, to) {
                schedule.push_segment(segment);
            }
        }

        schedule.assignments = ordered;
        schedule
    }

    fn segment(
        &self,
        vessel: &VesselPosition,
        from: Waypoint,
        to: Waypoint,
    ) -> Option<RouteSegment> {
        let distance = distance_nm(from.point(), to.point());
        if distance <= self.min_segment_nm {
            return None;
        }
        Some(RouteSegment {
            from,
            to,
            distance_nm: distance,
            estimated_hours: transit_hours(distance, self.speed_of(vessel)),
            fuel_liters: fuel_liters(distance, vessel.vessel_type()),
        })
    }
}

impl Default for ScheduleAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEGMENT_NM)
    }
}

/// Analyzes a vessel schedule with the default segment threshold.
pub fn analyze_vessel_schedule(
    vessel: &VesselPosition,
    visits: &[ScheduledVisit],
) -> VesselSchedule {
    ScheduleAnalyzer::default().analyze(vessel, visits)
}

/// Whole and fractional days from `end` to `start`, or zero if they overlap.
fn gap_days(end: DateTime<Utc>, start: DateTime<Utc>) -> f64 {
    let millis = (start - end).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).max(0.0)
}
