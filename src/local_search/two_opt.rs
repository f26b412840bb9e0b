//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! The path starts at node 0 and ends at its last visit (no return leg).
//! For each pair of positions i < j, compute the change in distance from
//! reversing the segment `path[i..=j]`:
//!
//! ```text
//! delta = d(prev, p[j]) + d(p[i], next) - d(prev, p[i]) - d(p[j], next)
//! ```
//!
//! where `prev` is node 0 when i = 0 and the `next` terms vanish when j is
//! the last position. If delta < 0 the reversal is applied at once and the
//! scan restarts (first-improvement). The search stops after a full pass
//! with no improving reversal, or when the pass cap is reached.
//!
//! # Complexity
//!
//! O(n²) per pass; the number of passes is bounded by `max_passes`.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Pass cap used when the caller does not supply one.
pub const DEFAULT_MAX_PASSES: usize = 1_000;

const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies 2-opt improvement to an open path of matrix nodes.
///
/// Returns the improved node sequence and its open-path distance from
/// node 0. Paths with fewer than two nodes are returned unchanged.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::local_search::{two_opt_improve, DEFAULT_MAX_PASSES};
///
/// let start = GeoPoint::new(0.0, 0.0);
/// let sites = [
///     GeoPoint::new(0.0, 1.0),
///     GeoPoint::new(0.0, 2.0),
///     GeoPoint::new(0.0, 3.0),
/// ];
/// let dm = DistanceMatrix::from_points(start, &sites);
///
/// // Zig-zag order 3, 1, 2 straightens out to 1, 2, 3.
/// let (improved, dist) = two_opt_improve(&[3, 1, 2], &dm, DEFAULT_MAX_PASSES);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert!((dist - dm.get(0, 3)).abs() < 1e-6);
/// ```
pub fn two_opt_improve(
    path: &[usize],
    distances: &DistanceMatrix,
    max_passes: usize,
) -> (Vec<usize>, f64) {
    let mut current = path.to_vec();
    let n = current.len();
    if n < 2 {
        let dist = distances.path_distance(&current);
        return (current, dist);
    }

    let mut passes = 0;
    let mut converged = false;
    'scan: while passes < max_passes {
        passes += 1;
        for i in 0..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(&current, distances, i, j) < -IMPROVEMENT_EPS {
                    current[i..=j].reverse();
                    continue 'scan;
                }
            }
        }
        converged = true;
        break;
    }

    if !converged {
        tracing::debug!("2-opt stopped at pass cap ({})", max_passes);
    }

    let dist = distances.path_distance(&current);
    (current, dist)
}

/// Distance change from reversing `path[i..=j]` on an open path.
fn two_opt_delta(path: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let prev = if i == 0 { 0 } else { path[i - 1] };
    let mut old_cost = distances.get(prev, path[i]);
    let mut new_cost = distances.get(prev, path[j]);

    if let Some(&next) = path.get(j + 1) {
        old_cost += distances.get(path[j], next);
        new_cost += distances.get(path[i], next);
    }

    new_cost - old_cost
}
