//! Typed closed Bezier paths and their SVG path description.
//!
//! The smoother builds a [`SmoothPath`] of [`BezierSegment`] records; the
//! textual form is produced once, by the [`Display`](fmt::Display) impl:
//!
//! ```text
//! M x0 y0 C c1x c1y, c2x c2y, ex ey C ...
//! ```
//!
//! Every token group, including the last, is followed by a single space.
//! Numbers use the shortest decimal that round-trips, with no exponent and
//! no trailing zeros, so integer coordinates print as `12`, not `12.0`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// One cubic Bezier piece of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    /// Where the segment begins (the previous segment's end).
    pub start: Point,
    /// First control point.
    pub control1: Point,
    /// Second control point.
    pub control2: Point,
    /// Where the segment ends.
    pub end: Point,
}

/// A closed path of cubic Bezier segments.
///
/// The first segment starts at [`start`](Self::start) and the last one
/// ends there again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothPath {
    start: Point,
    segments: Vec<BezierSegment>,
}

impl SmoothPath {
    /// Assemble a path from its segments. The caller guarantees that the
    /// segments chain end-to-start and that the last one returns to
    /// `start`.
    #[must_use]
    pub(crate) const fn new(start: Point, segments: Vec<BezierSegment>) -> Self {
        Self { start, segments }
    }

    /// The point the path moves to before the first segment.
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// The Bezier segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// The points the path passes through, one per segment, in order.
    ///
    /// For a path from [`smooth_path`](crate::smooth_path) these are its
    /// input points.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        self.segments.iter().map(|s| s.start).collect()
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The SVG path description string (same as `to_string()`).
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SmoothPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M {} ", Coord(self.start))?;
        for segment in &self.segments {
            write!(
                f,
                "C {}, {}, {} ",
                Coord(segment.control1),
                Coord(segment.control2),
                Coord(segment.end)
            )?;
        }
        Ok(())
    }
}

/// A coordinate pair printed as `x y`.
struct Coord(Point);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Number(self.0.x), Number(self.0.y))
    }
}

/// Format a coordinate the way path descriptions do: shortest
/// round-trip decimal, no exponent, `-0` printed as `0`.
///
/// ```
/// use shapegen_geometry::path::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-0.25), "-0.25");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    Number(value).to_string()
}

struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Join path descriptions with `;`, the separator of an SVG `<animate>`
/// `values` attribute.
///
/// ```
/// use shapegen_geometry::path::animation_values;
/// use shapegen_geometry::{Point, smooth_path};
///
/// let triangle = [Point::new(0.0, 0.0), Point::new(40.0, 0.0), Point::new(0.0, 30.0)];
/// let path = smooth_path(&triangle).unwrap();
/// let values = animation_values(&[path.clone(), path]);
/// assert_eq!(values.matches(';').count(), 1);
/// ```
#[must_use]
pub fn animation_values(paths: &[SmoothPath]) -> String {
    paths
        .iter()
        .map(SmoothPath::description)
        .collect::<Vec<_>>()
        .join(";")
}
