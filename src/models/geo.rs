//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
///
/// let p = GeoPoint::new(24.5, 54.3);
/// assert_eq!(p.lat, 24.5);
/// assert_eq!(p.lng, 54.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Any entity that sits at a single geographic coordinate.
///
/// Sequencing and distance matrices are generic over this trait so they work
/// on vessels, projects, or plain points alike.
pub trait Positioned {
    /// Location of this entity.
    fn position(&self) -> GeoPoint;
}

impl Positioned for GeoPoint {
    fn position(&self) -> GeoPoint {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> GeoPoint {
        (**self).position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_positioned() {
        let p = GeoPoint::new(1.0, 2.0);
        assert_eq!(p.position(), p);
        assert_eq!((&p).position(), p);
    }
}
