//! Vessel types and live vessel positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{GeoPoint, Positioned};

/// Transit speed assumed when a vessel reports none, in knots.
pub const DEFAULT_SPEED_KNOTS: f64 = 10.0;

/// Class of a service vessel.
///
/// Serialized as its snake_case name. Names outside the known set are kept
/// verbatim in [`VesselType::Other`] so they survive a round trip.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::VesselType;
///
/// assert_eq!(VesselType::from("crane_barge"), VesselType::CraneBarge);
/// assert_eq!(VesselType::from("pilot_boat"), VesselType::Other("pilot_boat".into()));
/// assert_eq!(VesselType::Dredger.as_str(), "dredger");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VesselType {
    Tugboat,
    SupplyVessel,
    CraneBarge,
    Dredger,
    SurveyVessel,
    Barge,
    /// Any type without a dedicated variant.
    Other(String),
}

impl VesselType {
    /// The snake_case name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            VesselType::Tugboat => "tugboat",
            VesselType::SupplyVessel => "supply_vessel",
            VesselType::CraneBarge => "crane_barge",
            VesselType::Dredger => "dredger",
            VesselType::SurveyVessel => "survey_vessel",
            VesselType::Barge => "barge",
            VesselType::Other(name) => name,
        }
    }
}

impl From<&str> for VesselType {
    fn from(name: &str) -> Self {
        match name {
            "tugboat" => VesselType::Tugboat,
            "supply_vessel" => VesselType::SupplyVessel,
            "crane_barge" => VesselType::CraneBarge,
            "dredger" => VesselType::Dredger,
            "survey_vessel" => VesselType::SurveyVessel,
            "barge" => VesselType::Barge,
            other => VesselType::Other(other.to_string()),
        }
    }
}

impl From<String> for VesselType {
    fn from(name: String) -> Self {
        VesselType::from(name.as_str())
    }
}

impl From<VesselType> for String {
    fn from(vessel_type: VesselType) -> Self {
        vessel_type.as_str().to_string()
    }
}

impl fmt::Display for VesselType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vessel with its latest reported position.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{VesselPosition, VesselType};
///
/// let v = VesselPosition::new("v1", "Al Mirfa", VesselType::Tugboat, 24.0, 54.0);
/// assert_eq!(v.speed_knots(), 10.0);
///
/// let idle = v.clone().with_speed(0.0);
/// assert_eq!(idle.speed_knots(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselPosition {
    id: String,
    name: String,
    #[serde(rename = "type")]
    vessel_type: VesselType,
    lat: f64,
    lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

impl VesselPosition {
    /// Creates a vessel with no reported speed.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vessel_type: VesselType,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vessel_type,
            lat,
            lng,
            speed: None,
        }
    }

    /// Sets the reported speed in knots.
    pub fn with_speed(mut self, knots: f64) -> Self {
        self.speed = Some(knots);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vessel_type(&self) -> &VesselType {
        &self.vessel_type
    }

    /// Reported speed, if any.
    pub fn speed(&self) -> Option<f64> {
        self.speed
    }

    /// Reported speed, or [`DEFAULT_SPEED_KNOTS`] when none was reported.
    ///
    /// A reported `0.0` is returned as is.
    pub fn speed_knots(&self) -> f64 {
        self.speed.unwrap_or(DEFAULT_SPEED_KNOTS)
    }
}

impl Positioned for VesselPosition {
    fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vessel_type_names_round_trip() {
        for t in [
            VesselType::Tugboat,
            VesselType::SupplyVessel,
            VesselType::CraneBarge,
            VesselType::Dredger,
            VesselType::SurveyVessel,
            VesselType::Barge,
        ] {
            assert_eq!(VesselType::from(t.as_str()), t);
        }
    }

    #[test]
    fn test_vessel_type_other() {
        let t = VesselType::from("hopper");
        assert_eq!(t, VesselType::Other("hopper".into()));
        assert_eq!(t.to_string(), "hopper");
    }

    #[test]
    fn test_vessel_defaults() {
        let v = VesselPosition::new("v1", "Falcon", VesselType::Dredger, 1.0, 2.0);
        assert_eq!(v.id(), "v1");
        assert_eq!(v.name(), "Falcon");
        assert_eq!(v.vessel_type(), &VesselType::Dredger);
        assert!(v.speed().is_none());
        assert_eq!(v.speed_knots(), DEFAULT_SPEED_KNOTS);
        assert_eq!(v.position(), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_vessel_explicit_zero_speed_kept() {
        let v = VesselPosition::new("v1", "Falcon", VesselType::Barge, 0.0, 0.0).with_speed(0.0);
        assert_eq!(v.speed(), Some(0.0));
        assert_eq!(v.speed_knots(), 0.0);
    }
}
