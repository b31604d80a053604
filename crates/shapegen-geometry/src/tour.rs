//! Shortest closed tour by exhaustive search.
//!
//! Every ordering of the input is scored and the cheapest kept. This is
//! O(n! · n), so input size is capped at [`MAX_TOUR_POINTS`]; larger sets
//! fail fast with [`GeometryError::TooManyPoints`] instead of running for
//! hours.
//!
//! Orderings are visited in lexicographic order of point indices, and a
//! candidate replaces the best only when strictly shorter. Among equally
//! short tours the lexicographically first one therefore wins, which makes
//! the result deterministic for symmetric inputs.

use serde::{Deserialize, Serialize};

use crate::types::{GeometryError, Point, check_finite};
use crate::vector::length;

/// Largest point set accepted by [`shortest_tour`] (10! ≈ 3.6M orderings).
pub const MAX_TOUR_POINTS: usize = 10;

/// A closed visiting order over a point set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Indices into the input point set, in visiting order.
    pub order: Vec<usize>,
    /// Total length including the closing edge back to the first point.
    pub length: f64,
}

impl Tour {
    /// The input points rearranged into tour order.
    ///
    /// `points` must be the slice the tour was computed from.
    #[must_use]
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        self.order.iter().map(|&i| points[i]).collect()
    }
}

/// Length of the closed tour visiting `points[order[0]], points[order[1]], ...`
/// and returning to the start, measured with `distance`.
#[must_use]
pub fn tour_length<F>(points: &[Point], order: &[usize], distance: F) -> f64
where
    F: Fn(Point, Point) -> f64,
{
    let n = order.len();
    (0..n)
        .map(|i| distance(points[order[i]], points[order[(i + 1) % n]]))
        .sum()
}

/// Find the shortest closed tour through `points` under Euclidean distance.
///
/// # Errors
///
/// See [`shortest_tour_by`].
///
/// # Examples
///
/// ```
/// use shapegen_geometry::{Point, shortest_tour};
///
/// // Listed in "bowtie" order: visiting them as given crosses itself.
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 1.0),
/// ];
/// let tour = shortest_tour(&points).unwrap();
/// assert_eq!(tour.order, vec![0, 2, 1, 3]);
/// assert!((tour.length - 4.0).abs() < 1e-12);
/// ```
pub fn shortest_tour(points: &[Point]) -> Result<Tour, GeometryError> {
    shortest_tour_by(points, length)
}

/// Find the shortest closed tour through `points` under a custom cost.
///
/// `distance` is called with consecutive tour points, including the
/// closing pair (last, first).
///
/// # Errors
///
/// - [`GeometryError::TooFewPoints`] for an empty point set.
/// - [`GeometryError::TooManyPoints`] above [`MAX_TOUR_POINTS`].
/// - [`GeometryError::NonFiniteCoordinate`] for NaN or infinite input.
pub fn shortest_tour_by<F>(points: &[Point], distance: F) -> Result<Tour, GeometryError>
where
    F: Fn(Point, Point) -> f64,
{
    let n = points.len();
    if n == 0 {
        return Err(GeometryError::TooFewPoints {
            required: 1,
            actual: 0,
        });
    }
    if n > MAX_TOUR_POINTS {
        return Err(GeometryError::TooManyPoints {
            limit: MAX_TOUR_POINTS,
            actual: n,
        });
    }
    check_finite(points)?;

    let mut order: Vec<usize> = (0..n).collect();
    let mut best = Tour {
        length: tour_length(points, &order, &distance),
        order: order.clone(),
    };

    while next_permutation(&mut order) {
        let candidate = tour_length(points, &order, &distance);
        if candidate < best.length {
            best.length = candidate;
            best.order.copy_from_slice(&order);
        }
    }

    Ok(best)
}

/// Rearrange `order` into the next permutation in lexicographic order.
///
/// Returns `false` (leaving `order` untouched) when it is already the last
/// permutation, i.e. sorted descending.
fn next_permutation(order: &mut [usize]) -> bool {
    let n = order.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let Some(pivot) = (0..n - 1).rev().find(|&i| order[i] < order[i + 1]) else {
        return false;
    };

    // Rightmost element greater than the pivot; one must exist since
    // `order[pivot + 1] > order[pivot]`.
    let successor = (pivot + 1..n)
        .rev()
        .find(|&j| order[j] > order[pivot])
        .unwrap_or(pivot + 1);

    order.swap(pivot, successor);
    order[pivot + 1..].reverse();
    true
}

/// Lazy iterator over all permutations of `0..n` in lexicographic order.
///
/// Yields exactly `n!` items; for `n == 0` that is a single empty
/// permutation.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    done: bool,
}

/// Iterate over all permutations of the indices `0..n`.
///
/// ```
/// use shapegen_geometry::tour::permutations;
///
/// let all: Vec<Vec<usize>> = permutations(3).collect();
/// assert_eq!(all.first(), Some(&vec![0, 1, 2]));
/// assert_eq!(all.last(), Some(&vec![2, 1, 0]));
/// assert_eq!(all.len(), 6);
/// ```
#[must_use]
pub fn permutations(n: usize) -> Permutations {
    Permutations {
        current: (0..n).collect(),
        done: false,
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !next_permutation(&mut self.current);
        Some(item)
    }
}
