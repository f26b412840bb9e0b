//! Additive suitability rubric.
//!
//! Starting from [`BASE_SCORE`], three terms are applied in order:
//!
//! 1. Type: the project accepts the vessel's type, or it does not.
//! 2. Proximity: distance from the vessel's position to the project site.
//! 3. Availability: whether the vessel already works elsewhere during the
//!    project window.
//!
//! The sum is clamped to `[0, 100]`. Every applied term leaves a reason.

use serde::{Deserialize, Serialize};

use crate::distance::distance_nm;
use crate::models::{Positioned, ProjectLocation, VesselAssignment, VesselPosition};

pub const BASE_SCORE: f64 = 50.0;
pub const TYPE_MATCH_BONUS: f64 = 30.0;
pub const TYPE_MISMATCH_PENALTY: f64 = 40.0;
/// Below this distance (nm) a vessel counts as nearby.
pub const NEARBY_NM: f64 = 20.0;
pub const NEARBY_BONUS: f64 = 20.0;
/// Below this distance (nm) a vessel counts as moderately close.
pub const MODERATE_NM: f64 = 50.0;
pub const MODERATE_BONUS: f64 = 10.0;
/// Above this distance (nm) a vessel counts as far.
pub const FAR_NM: f64 = 150.0;
pub const FAR_PENALTY: f64 = 15.0;
pub const CONFLICT_PENALTY: f64 = 50.0;
pub const NO_CONFLICT_BONUS: f64 = 10.0;

const MIN_SCORE: f64 = 0.0;
const MAX_SCORE: f64 = 100.0;

/// How well a vessel suits a project, with the reasons behind the number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitabilityScore {
    pub vessel_id: String,
    /// Clamped to `[0, 100]`.
    pub score: f64,
    /// Distance from the vessel's position to the project, in nm.
    pub distance_nm: f64,
    pub type_match: bool,
    pub has_conflict: bool,
    /// One entry per rubric term, in application order.
    pub reasons: Vec<String>,
}

impl SuitabilityScore {
    /// A vessel is eligible for a project only with a positive score.
    pub fn is_eligible(&self) -> bool {
        self.score > 0.0
    }
}

/// Scores `vessel` for `project` given the fleet's existing assignments.
///
/// Only assignments of the same vessel to *other* projects can conflict; a
/// vessel is never in conflict with its own assignment to this project.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fleet_routing::models::{ProjectLocation, VesselPosition, VesselType};
/// use fleet_routing::scoring::score_vessel_for_project;
///
/// let start = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap();
/// let project = ProjectLocation::new("p1", "Channel", 24.0, 54.1, start, end)
///     .with_required_type(VesselType::Dredger);
/// let dredger = VesselPosition::new("v1", "Digger", VesselType::Dredger, 24.0, 54.0);
///
/// let s = score_vessel_for_project(&dredger, &project, &[]);
/// // 50 base + 30 type + 20 nearby + 10 available, clamped.
/// assert_eq!(s.score, 100.0);
/// assert_eq!(s.reasons.len(), 3);
/// ```
pub fn score_vessel_for_project(
    vessel: &VesselPosition,
    project: &ProjectLocation,
    existing: &[VesselAssignment],
) -> SuitabilityScore {
    let mut score = BASE_SCORE;
    let mut reasons = Vec::with_capacity(3);

    let type_match = project.requires(vessel.vessel_type());
    if type_match {
        score += TYPE_MATCH_BONUS;
        reasons.push(format!("Type match: {}", vessel.vessel_type()));
    } else {
        score -= TYPE_MISMATCH_PENALTY;
        let needs: Vec<&str> = project
            .required_vessel_types()
            .iter()
            .map(|t| t.as_str())
            .collect();
        let needs = if needs.is_empty() {
            "none".to_string()
        } else {
            needs.join(" or ")
        };
        reasons.push(format!(
            "Type mismatch: needs {}, has {}",
            needs,
            vessel.vessel_type()
        ));
    }

    let distance = distance_nm(vessel.position(), project.position());
    if distance < NEARBY_NM {
        score += NEARBY_BONUS;
        reasons.push(format!("Nearby: {:.1}nm", distance));
    } else if distance < MODERATE_NM {
        score += MODERATE_BONUS;
        reasons.push(format!("Moderate distance: {:.1}nm", distance));
    } else if distance > FAR_NM {
        score -= FAR_PENALTY;
        reasons.push(format!("Far: {:.1}nm", distance));
    }

    let has_conflict = existing.iter().any(|a| {
        a.vessel_id == vessel.id()
            && a.project_id != project.id()
            && a.overlaps(project.start_date(), project.end_date())
    });
    if has_conflict {
        score -= CONFLICT_PENALTY;
        reasons.push("Schedule conflict exists".to_string());
    } else {
        score += NO_CONFLICT_BONUS;
        reasons.push("Available during project period".to_string());
    }

    SuitabilityScore {
        vessel_id: vessel.id().to_string(),
        score: score.clamp(MIN_SCORE, MAX_SCORE),
        distance_nm: distance,
        type_match,
        has_conflict,
        reasons,
    }
}
