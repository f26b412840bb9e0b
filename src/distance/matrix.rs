//! Dense distance matrix.

use super::distance_nm;
use crate::models::{GeoPoint, Positioned};

/// A dense n×n distance matrix stored in row-major order, in nautical miles.
///
/// Built over a start point and a set of locations: index 0 is the start,
/// index `k + 1` is `locations[k]`.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
/// use fleet_routing::distance::DistanceMatrix;
///
/// let start = GeoPoint::new(0.0, 0.0);
/// let sites = [GeoPoint::new(0.0, 1.0), GeoPoint::new(0.0, 2.0)];
/// let dm = DistanceMatrix::from_points(start, &sites);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.get(0, 2) > dm.get(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes great-circle distances from a start point and locations.
    pub fn from_points<T: Positioned>(start: GeoPoint, locations: &[T]) -> Self {
        let points: Vec<GeoPoint> = std::iter::once(start)
            .chain(locations.iter().map(Positioned::position))
            .collect();
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance_nm(points[i], points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix, start included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Length of the open path `0 → path[0] → … → path[n-1]`.
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        let mut prev = 0;
        let mut dist = 0.0;
        for &node in path {
            dist += self.get(prev, node);
            prev = node;
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        let start = GeoPoint::new(0.0, 0.0);
        let sites = [GeoPoint::new(0.0, 1.0), GeoPoint::new(0.0, 3.0)];
        DistanceMatrix::from_points(start, &sites)
    }

    #[test]
    fn test_from_points() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 0), 0.0);
        assert!((dm.get(0, 2) - 3.0 * dm.get(0, 1)).abs() < 1e-6);
        assert_eq!(dm.get(1, 2), dm.get(2, 1));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = sample();
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 4.0, 4.0, 4.0, 0.0, 1.0, 4.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
    }

    #[test]
    fn test_path_distance_is_open() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 5.0, 1.0, 0.0, 2.0, 5.0, 2.0, 0.0])
            .expect("valid");
        assert_eq!(dm.path_distance(&[]), 0.0);
        assert_eq!(dm.path_distance(&[1, 2]), 3.0);
        assert_eq!(dm.path_distance(&[2, 1]), 7.0);
    }
}
