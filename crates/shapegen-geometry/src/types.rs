//! Shared types for the shapegen geometry core.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point.
///
/// Whether the space is y-up relative coordinates (as produced by the
/// samplers) or y-down screen coordinates is up to the caller; see
/// [`rel_to_abs`](crate::vector::rel_to_abs).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Width and height of a rectangular extent.
///
/// Used both for the measured size of a rendering surface (see
/// [`center_of`](crate::vector::center_of)) and for the half-extent of a
/// sampling area (see
/// [`generate_random_points`](crate::sample::generate_random_points)).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Options for [`generate_points_around_circle`](crate::sample::generate_points_around_circle).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Circle radius. Must be positive.
    pub radius: f64,

    /// Per-axis jitter amplitude. Each coordinate is displaced by an
    /// integer in `[-floor(spread), floor(spread)]`. Must be non-negative.
    pub spread: f64,

    /// Starting angle in radians. Subsequent points step clockwise from
    /// here. `None` draws a random angle in `[0, 2π)` from the random
    /// source before sampling.
    pub offset: Option<f64>,
}

impl SamplingConfig {
    /// Default circle radius.
    pub const DEFAULT_RADIUS: f64 = 100.0;
    /// Default jitter amplitude.
    pub const DEFAULT_SPREAD: f64 = 20.0;

    /// Check that `radius` is positive and `spread` non-negative, and that
    /// every value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfig`] describing the first
    /// offending field.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(GeometryError::InvalidConfig(format!(
                "radius must be a positive finite number, got {}",
                self.radius
            )));
        }
        if !self.spread.is_finite() || self.spread < 0.0 {
            return Err(GeometryError::InvalidConfig(format!(
                "spread must be a non-negative finite number, got {}",
                self.spread
            )));
        }
        if let Some(offset) = self.offset
            && !offset.is_finite()
        {
            return Err(GeometryError::InvalidConfig(format!(
                "offset must be finite, got {offset}"
            )));
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            spread: Self::DEFAULT_SPREAD,
            offset: None,
        }
    }
}

/// Errors produced by the geometry core.
///
/// Every operation validates its input before computing anything, so an
/// error never comes with a partial result.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum GeometryError {
    /// The point set is smaller than the operation requires.
    #[error("expected at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum accepted point count.
        required: usize,
        /// Point count that was supplied.
        actual: usize,
    },

    /// The point set exceeds the exhaustive search bound.
    #[error("exhaustive search is limited to {limit} points, got {actual}")]
    TooManyPoints {
        /// Maximum accepted point count.
        limit: usize,
        /// Point count that was supplied.
        actual: usize,
    },

    /// Two adjacent points coincide, so the edge starting at `index` has
    /// zero length.
    #[error("edge starting at point {index} has zero length")]
    DegenerateEdge {
        /// Index of the first endpoint of the zero-length edge.
        index: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point.
        index: usize,
    },

    /// Coordinates are finite but too large: an edge length or an
    /// intermediate point around `index` overflows to infinity.
    #[error("coordinates around point {index} overflow")]
    Overflow {
        /// Index of the point whose neighborhood overflows.
        index: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Reject point sets containing NaN or infinite coordinates.
pub(crate) fn check_finite(points: &[Point]) -> Result<(), GeometryError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(GeometryError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
