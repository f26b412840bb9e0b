//! Vessel-to-project suitability scoring with an explainable reason trail.

mod suitability;

pub use suitability::{
    score_vessel_for_project, SuitabilityScore, BASE_SCORE, CONFLICT_PENALTY, FAR_NM,
    FAR_PENALTY, MODERATE_BONUS, MODERATE_NM, NEARBY_BONUS, NEARBY_NM, NO_CONFLICT_BONUS,
    TYPE_MATCH_BONUS, TYPE_MISMATCH_PENALTY,
};
