//! Great-circle distance and vessel running costs.

use crate::models::{GeoPoint, VesselType};

/// Mean Earth radius in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Fuel rate in liters per nautical mile for types without a table entry.
pub const DEFAULT_FUEL_RATE: f64 = 40.0;

/// Haversine great-circle distance between two points, in nautical miles.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
/// use fleet_routing::distance::distance_nm;
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(1.0, 0.0);
/// // One degree of latitude is about 60 nm.
/// assert!((distance_nm(a, b) - 60.04).abs() < 0.01);
/// assert_eq!(distance_nm(a, a), 0.0);
/// ```
pub fn distance_nm(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_NM * c
}

/// Hours needed to cover `distance_nm` at `speed_knots`.
///
/// Returns zero for a non-positive speed instead of an infinite duration.
pub fn transit_hours(distance_nm: f64, speed_knots: f64) -> f64 {
    if speed_knots > 0.0 {
        distance_nm / speed_knots
    } else {
        0.0
    }
}

/// Fuel burned per nautical mile by a vessel type, in liters.
pub fn fuel_rate(vessel_type: &VesselType) -> f64 {
    match vessel_type {
        VesselType::Dredger => 85.0,
        VesselType::CraneBarge => 45.0,
        VesselType::SupplyVessel => 35.0,
        VesselType::Tugboat => 25.0,
        VesselType::SurveyVessel => 20.0,
        VesselType::Barge => 0.0,
        VesselType::Other(_) => DEFAULT_FUEL_RATE,
    }
}

/// Fuel burned covering `distance_nm`, in liters.
pub fn fuel_liters(distance_nm: f64, vessel_type: &VesselType) -> f64 {
    distance_nm * fuel_rate(vessel_type)
}
