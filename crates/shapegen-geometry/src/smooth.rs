//! Curve smoothing: fit a closed, tangent-continuous cubic Bezier path
//! through an ordered point loop.
//!
//! The construction works on the quadrilateral formed by each vertex and
//! the midpoints of its two incident edges:
//!
//! 1. [`midpoints`] of every edge `i -> i+1`.
//! 2. [`anchor_points`]: for vertex `i`, a point on the segment between
//!    the two incident edge midpoints, pulled toward the midpoint of the
//!    shorter edge in proportion to the edge length ratio.
//! 3. [`control_points`]: both incident midpoints translated by
//!    `point[i] - anchor[i]`, giving collinear controls on either side of
//!    the vertex.
//! 4. [`smooth_path`] chains one segment per vertex.
//!
//! All index arithmetic wraps around the loop, and all intermediate points
//! go through the flooring [`scale`], so integer input yields integer
//! output.

use crate::path::{BezierSegment, SmoothPath};
use crate::types::{GeometryError, Point, check_finite};
use crate::vector::{add, length, scale};

/// Minimum number of points that form a closed curve.
pub const MIN_CURVE_POINTS: usize = 3;

/// Index of the element before `i` in a loop of `len`.
const fn prev(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

/// Index of the element after `i` in a loop of `len`.
const fn next(i: usize, len: usize) -> usize {
    (i + 1) % len
}

/// Midpoint of each edge `i -> i+1` (wrapping), floored.
///
/// `midpoints[i]` belongs to the edge leaving `points[i]`.
#[must_use]
pub fn midpoints(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    (0..n)
        .map(|i| scale(add(&[points[i], points[next(i, n)]]), 0.5))
        .collect()
}

/// Anchor point of each vertex.
///
/// With `l1` the length of the edge entering vertex `i` and `l2` the
/// length of the edge leaving it, the anchor is
/// `shorter + floor((longer - shorter) * min/max / 2)` where `shorter` and
/// `longer` are the midpoints of the corresponding edges. Equal lengths
/// use `midpoints[i]` for both, so the anchor is that midpoint.
///
/// Callers must have rejected zero-length edges; see [`smooth_path`].
#[must_use]
pub fn anchor_points(points: &[Point], midpoints: &[Point]) -> Vec<Point> {
    let n = points.len();
    let m = midpoints.len();
    (0..n)
        .map(|i| {
            let l1 = length(points[prev(i, n)], points[i]);
            let l2 = length(points[i], points[next(i, n)]);

            let factor = (if l1 < l2 { l1 / l2 } else { l2 / l1 }) / 2.0;

            let entering = midpoints[prev(i, m)];
            let leaving = midpoints[i];
            let shorter = if l1 < l2 { entering } else { leaving };
            let longer = if l1 > l2 { entering } else { leaving };

            let vector = add(&[longer, scale(shorter, -1.0)]);
            add(&[scale(vector, factor), shorter])
        })
        .collect()
}

/// Two control points per vertex, `2 * points.len()` in total.
///
/// For vertex `i` with `v = points[i] - anchors[i]`, entry `2i` is
/// `midpoints[i-1] + v` (the control before the vertex) and entry `2i+1`
/// is `midpoints[i] + v` (the control after it).
#[must_use]
pub fn control_points(points: &[Point], midpoints: &[Point], anchors: &[Point]) -> Vec<Point> {
    let n = points.len();
    let m = midpoints.len();
    let mut controls = Vec::with_capacity(2 * n);
    for i in 0..n {
        let vector = add(&[points[i], scale(anchors[i], -1.0)]);
        controls.push(add(&[midpoints[prev(i, m)], vector]));
        controls.push(add(&[midpoints[i], vector]));
    }
    controls
}

/// Fit a smooth closed curve through `points`, in order.
///
/// The result has exactly one segment per input point. Segment `i` runs
/// from `points[i]` to `points[i+1]` (the last one back to `points[0]`)
/// using control points `2i+1` and `2i+2` of [`control_points`], wrapped.
///
/// # Errors
///
/// - [`GeometryError::TooFewPoints`] for fewer than [`MIN_CURVE_POINTS`].
/// - [`GeometryError::NonFiniteCoordinate`] for NaN or infinite input.
/// - [`GeometryError::DegenerateEdge`] if two adjacent points coincide,
///   which would make the edge length ratio undefined.
/// - [`GeometryError::Overflow`] if the coordinates are so large that an
///   edge length or an intermediate point is not representable.
///
/// # Examples
///
/// ```
/// use shapegen_geometry::{Point, smooth_path};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let path = smooth_path(&square).unwrap();
/// assert_eq!(path.len(), 4);
/// assert!(path.description().starts_with("M 0 0 C "));
/// ```
pub fn smooth_path(points: &[Point]) -> Result<SmoothPath, GeometryError> {
    let n = points.len();
    if n < MIN_CURVE_POINTS {
        return Err(GeometryError::TooFewPoints {
            required: MIN_CURVE_POINTS,
            actual: n,
        });
    }
    check_finite(points)?;
    if let Some(index) = (0..n).find(|&i| points[i] == points[next(i, n)]) {
        return Err(GeometryError::DegenerateEdge { index });
    }
    if let Some(index) = (0..n).find(|&i| !length(points[i], points[next(i, n)]).is_finite()) {
        return Err(GeometryError::Overflow { index });
    }

    let mids = midpoints(points);
    let anchors = anchor_points(points, &mids);
    let controls = control_points(points, &mids, &anchors);
    // Midpoint sums can still overflow when every edge is short.
    if let Some(j) = controls.iter().position(|p| !p.is_finite()) {
        return Err(GeometryError::Overflow { index: j / 2 });
    }
    let c = controls.len();

    let segments = (0..n)
        .map(|i| BezierSegment {
            start: points[i],
            control1: controls[(2 * i + 1) % c],
            control2: controls[(2 * i + 2) % c],
            end: points[next(i, n)],
        })
        .collect();

    Ok(SmoothPath::new(points[0], segments))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square() -> Vec<Point> {
        pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    fn triangle() -> Vec<Point> {
        pts(&[(0.0, 0.0), (40.0, 0.0), (0.0, 30.0)])
    }

    #[test]
    fn midpoints_wrap_last_edge() {
        let mids = midpoints(&square());
        assert_eq!(
            mids,
            pts(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)])
        );
    }

    #[test]
    fn midpoints_floor_odd_sums() {
        let mids = midpoints(&pts(&[(0.0, 0.0), (3.0, 5.0), (-3.0, 1.0)]));
        assert_eq!(mids[0], Point::new(1.0, 2.0));
        assert_eq!(mids[1], Point::new(0.0, 3.0));
        assert_eq!(mids[2], Point::new(-2.0, 0.0));
    }

    #[test]
    fn equal_edges_anchor_at_leaving_midpoint() {
        let points = square();
        let mids = midpoints(&points);
        assert_eq!(anchor_points(&points, &mids), mids);
    }

    #[test]
    fn anchors_biased_toward_shorter_edge() {
        let points = triangle();
        let mids = midpoints(&points);
        assert_eq!(mids, pts(&[(20.0, 0.0), (20.0, 15.0), (0.0, 15.0)]));
        let anchors = anchor_points(&points, &mids);
        assert_eq!(anchors, pts(&[(7.0, 9.0), (20.0, 6.0), (6.0, 15.0)]));
    }

    #[test]
    fn control_points_are_translated_midpoints() {
        let points = triangle();
        let mids = midpoints(&points);
        let anchors = anchor_points(&points, &mids);
        let controls = control_points(&points, &mids, &anchors);
        assert_eq!(
            controls,
            pts(&[
                (-7.0, 6.0),
                (13.0, -9.0),
                (40.0, -6.0),
                (40.0, 9.0),
                (14.0, 30.0),
                (-6.0, 30.0),
            ])
        );
    }

    #[test]
    fn triangle_path_description() {
        let path = smooth_path(&triangle()).unwrap();
        assert_eq!(
            path.description(),
            "M 0 0 C 13 -9, 40 -6, 40 0 C 40 9, 14 30, 0 30 C -6 30, -7 6, 0 0 "
        );
    }

    #[test]
    fn square_path_description() {
        let path = smooth_path(&square()).unwrap();
        assert_eq!(
            path.description(),
            "M 0 0 C 0 0, 5 -5, 10 0 C 10 0, 15 5, 10 10 C 10 10, 5 15, 0 10 C 0 10, -5 5, 0 0 "
        );
    }

    #[test]
    fn segments_chain_and_close() {
        let points = pts(&[(3.0, 1.0), (50.0, -7.0), (61.0, 40.0), (12.0, 55.0), (-20.0, 18.0)]);
        let path = smooth_path(&points).unwrap();
        assert_eq!(path.len(), points.len());
        assert_eq!(path.start(), points[0]);
        for (i, segment) in path.segments().iter().enumerate() {
            assert_eq!(segment.start, points[i]);
            assert_eq!(segment.end, points[(i + 1) % points.len()]);
        }
        assert_eq!(path.segments().last().unwrap().end, path.start());
    }

    #[test]
    fn tangent_continuity_at_vertices() {
        // Incoming control, vertex, and outgoing control are collinear up
        // to the flooring of the anchor (at most one unit per axis).
        let points = pts(&[(0.0, 0.0), (80.0, 10.0), (90.0, 70.0), (10.0, 60.0)]);
        let path = smooth_path(&points).unwrap();
        let segs = path.segments();
        for i in 0..segs.len() {
            let incoming = segs[i].control2;
            let vertex = segs[i].end;
            let outgoing = segs[(i + 1) % segs.len()].control1;
            let dir = outgoing - incoming;
            let rel = vertex - incoming;
            let cross = dir.x.mul_add(rel.y, -(dir.y * rel.x));
            let off_line = cross.abs() / dir.x.hypot(dir.y);
            assert!(
                off_line <= std::f64::consts::SQRT_2,
                "corner at vertex {i}: {off_line} off the tangent line"
            );
        }
    }

    #[test]
    fn uneven_spacing_keeps_controls_near_vertex() {
        // A very short edge next to a long one must not throw the controls
        // far past the short edge.
        let points = pts(&[(0.0, 0.0), (200.0, 0.0), (202.0, 2.0), (0.0, 100.0)]);
        let path = smooth_path(&points).unwrap();
        let short = path.segments()[1];
        assert!(short.control1.distance(short.start) <= 2.0 * short.start.distance(short.end));
    }

    #[test]
    fn two_points_rejected() {
        let result = smooth_path(&pts(&[(0.0, 0.0), (1.0, 1.0)]));
        assert_eq!(
            result,
            Err(GeometryError::TooFewPoints {
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            smooth_path(&[]),
            Err(GeometryError::TooFewPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn coincident_adjacent_points_rejected() {
        let result = smooth_path(&pts(&[(0.0, 0.0), (5.0, 5.0), (5.0, 5.0), (0.0, 9.0)]));
        assert_eq!(result, Err(GeometryError::DegenerateEdge { index: 1 }));
    }

    #[test]
    fn coincident_wraparound_points_rejected() {
        let result = smooth_path(&pts(&[(0.0, 0.0), (5.0, 5.0), (9.0, 0.0), (0.0, 0.0)]));
        assert_eq!(result, Err(GeometryError::DegenerateEdge { index: 3 }));
    }

    #[test]
    fn huge_edges_rejected_instead_of_nan() {
        let result = smooth_path(&pts(&[(1e308, 0.0), (-1e308, 0.0), (0.0, 1e308)]));
        assert_eq!(result, Err(GeometryError::Overflow { index: 0 }));
    }

    #[test]
    fn huge_coordinates_with_short_edges_rejected() {
        // Every edge is short, but adding neighbours for the midpoints
        // leaves the representable range.
        let result = smooth_path(&pts(&[(1e308, 0.0), (1e308, 4.0), (1e308, 9.0)]));
        assert!(matches!(result, Err(GeometryError::Overflow { .. })));
    }

    #[test]
    fn large_but_representable_coordinates_smooth() {
        let path = smooth_path(&pts(&[(1e150, 0.0), (-1e150, 0.0), (0.0, 1e150)])).unwrap();
        assert!(path.segments().iter().all(|s| s.control1.is_finite() && s.control2.is_finite()));
        assert!(!path.description().contains("NaN"));
        assert!(!path.description().contains("inf"));
    }

    #[test]
    fn non_finite_rejected() {
        let result = smooth_path(&pts(&[(0.0, 0.0), (f64::NAN, 5.0), (9.0, 0.0)]));
        assert_eq!(result, Err(GeometryError::NonFiniteCoordinate { index: 1 }));
    }
}
