//! Nearest-neighbor constructive heuristic.
//!
//! Builds an open path greedily: starting from node 0 (the vessel's current
//! position), always advance to the nearest unvisited node. The path does
//! not return to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for routing. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline
//! for local search.

use crate::distance::DistanceMatrix;

/// Orders nodes `1..size` by repeatedly visiting the nearest unvisited one.
///
/// Returns matrix node indices (never 0). Ties go to the lowest index, so
/// the result is deterministic.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoPoint;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::constructive::nearest_neighbor;
///
/// let start = GeoPoint::new(0.0, 0.0);
/// let sites = [
///     GeoPoint::new(0.0, 3.0),
///     GeoPoint::new(0.0, 1.0),
///     GeoPoint::new(0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_points(start, &sites);
/// assert_eq!(nearest_neighbor(&dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n <= 1 {
        return Vec::new();
    }

    let mut remaining: Vec<usize> = (1..n).collect();
    let mut path = Vec::with_capacity(n - 1);
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        // `remaining` stays in ascending order so ties resolve to the lowest index.
        remaining.retain(|&node| node != next);
        path.push(next);
        current = next;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> DistanceMatrix {
        // Start at 0, nodes on a line at 1, 2, 3 units.
        let pos = [0.0_f64, 1.0, 2.0, 3.0];
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                dm.set(i, j, (pos[i] - pos[j]).abs());
            }
        }
        dm
    }

    #[test]
    fn test_nn_line() {
        assert_eq!(nearest_neighbor(&line()), vec![1, 2, 3]);
    }

    #[test]
    fn test_nn_empty() {
        assert!(nearest_neighbor(&DistanceMatrix::new(1)).is_empty());
        assert!(nearest_neighbor(&DistanceMatrix::new(0)).is_empty());
    }

    #[test]
    fn test_nn_single() {
        assert_eq!(nearest_neighbor(&DistanceMatrix::new(2)), vec![1]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 10.0, 1.0, //
                10.0, 0.0, 9.0, //
                1.0, 9.0, 0.0,
            ],
        )
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm), vec![2, 1]);
    }

    #[test]
    fn test_nn_tie_first_wins() {
        // Nodes 1 and 2 are equally far from the start.
        let dm = DistanceMatrix::from_data(
            3,
            vec![
                0.0, 5.0, 5.0, //
                5.0, 0.0, 1.0, //
                5.0, 1.0, 0.0,
            ],
        )
        .expect("valid");
        assert_eq!(nearest_neighbor(&dm), vec![1, 2]);
    }

    #[test]
    fn test_nn_visits_every_node_once() {
        let dm = line();
        let mut path = nearest_neighbor(&dm);
        path.sort_unstable();
        assert_eq!(path, vec![1, 2, 3]);
    }
}
