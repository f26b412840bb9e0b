//! Two-phase open-path sequencing: nearest-neighbor, then 2-opt.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::local_search::{two_opt_improve, DEFAULT_MAX_PASSES};
use crate::models::{GeoPoint, Positioned};

/// Outcome of sequencing one set of locations.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceResult {
    /// Visiting order as indices into the input slice.
    pub order: Vec<usize>,
    /// Open-path distance of the input order, in nm.
    pub naive_distance_nm: f64,
    /// Open-path distance of the nearest-neighbor order, in nm.
    pub nearest_neighbor_distance_nm: f64,
    /// Open-path distance of `order`, in nm.
    pub distance_nm: f64,
}

impl SequenceResult {
    /// Distance saved against the input order. Never negative.
    pub fn improvement_nm(&self) -> f64 {
        (self.naive_distance_nm - self.distance_nm).max(0.0)
    }

    /// Returns `true` if the order differs from the input order.
    pub fn is_reordered(&self) -> bool {
        self.order.iter().enumerate().any(|(pos, &idx)| pos != idx)
    }
}

/// Orders locations to minimize the open-path distance from a start point.
///
/// Construction starts from the shorter of the input order and the
/// nearest-neighbor order (input order wins ties), and 2-opt only accepts
/// strictly improving reversals. The result is therefore never longer than
/// either.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
/// use fleet_routing::sequencing::SequenceOptimizer;
///
/// let start = GeoPoint::new(24.0, 54.0);
/// let sites = [
///     GeoPoint::new(24.8, 54.8),
///     GeoPoint::new(24.5, 54.0),
///     GeoPoint::new(24.0, 54.5),
/// ];
/// let result = SequenceOptimizer::default().optimize(start, &sites);
/// assert_eq!(result.order.len(), 3);
/// assert!(result.distance_nm <= result.naive_distance_nm);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SequenceOptimizer {
    max_passes: usize,
}

impl SequenceOptimizer {
    /// Creates an optimizer with a cap on 2-opt passes.
    pub fn new(max_passes: usize) -> Self {
        Self { max_passes }
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    /// Sequences `locations` starting from `start`.
    pub fn optimize<T: Positioned>(&self, start: GeoPoint, locations: &[T]) -> SequenceResult {
        let n = locations.len();
        let distances = DistanceMatrix::from_points(start, locations);

        // Matrix node k + 1 is location k.
        let naive: Vec<usize> = (1..=n).collect();
        let naive_distance = distances.path_distance(&naive);

        if n < 2 {
            return SequenceResult {
                order: (0..n).collect(),
                naive_distance_nm: naive_distance,
                nearest_neighbor_distance_nm: naive_distance,
                distance_nm: naive_distance,
            };
        }

        let greedy = nearest_neighbor(&distances);
        let greedy_distance = distances.path_distance(&greedy);

        let seed = if greedy_distance < naive_distance {
            greedy
        } else {
            naive
        };
        let (improved, distance) = two_opt_improve(&seed, &distances, self.max_passes);

        SequenceResult {
            order: improved.into_iter().map(|node| node - 1).collect(),
            naive_distance_nm: naive_distance,
            nearest_neighbor_distance_nm: greedy_distance,
            distance_nm: distance,
        }
    }
}

impl Default for SequenceOptimizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PASSES)
    }
}

/// Sequences locations with the default pass cap.
pub fn optimize_sequence<T: Positioned>(start: GeoPoint, locations: &[T]) -> SequenceResult {
    SequenceOptimizer::default().optimize(start, locations)
}
