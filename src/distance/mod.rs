//! Distance, transit time, and fuel models.
//!
//! Provides great-circle distance in nautical miles, the per-type fuel rate
//! table, and a dense distance matrix for sequencing.

mod geo;
mod matrix;

pub use geo::{
    distance_nm, fuel_liters, fuel_rate, transit_hours, DEFAULT_FUEL_RATE, EARTH_RADIUS_NM,
};
pub use matrix::DistanceMatrix;
