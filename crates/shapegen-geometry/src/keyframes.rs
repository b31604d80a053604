//! Keyframes for a looping "breathing blob" animation.
//!
//! Each keyframe is a smooth closed curve through a handful of points
//! sampled around a (possibly jittered) center with a random radius.
//! Interpolating an SVG path's `d` attribute between successive keyframes
//! morphs one blob into the next.

use serde::{Deserialize, Serialize};

use crate::path::SmoothPath;
use crate::random::RandomSource;
use crate::sample::{generate_points_around_circle, randomize_point};
use crate::smooth::{MIN_CURVE_POINTS, smooth_path};
use crate::types::{GeometryError, Point, SamplingConfig};
use crate::vector::rel_to_abs;

/// Parameters for [`generate_keyframes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyframeConfig {
    /// Number of distinct shapes, before the closing repeat.
    pub shapes: usize,

    /// Points sampled per shape. At least 3.
    pub points_per_shape: usize,

    /// Per-keyframe center jitter in whole units.
    pub randomize_center: u32,

    /// Inclusive `[min, max]` range each keyframe's radius is drawn from.
    pub radius_range: (u32, u32),

    /// Per-axis point jitter, as [`SamplingConfig::spread`].
    pub spread: u32,
}

impl KeyframeConfig {
    /// Default number of shapes.
    pub const DEFAULT_SHAPES: usize = 20;
    /// Default points per shape.
    pub const DEFAULT_POINTS_PER_SHAPE: usize = 5;

    /// Check the config for values that cannot produce keyframes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfig`] if `shapes` is zero, the
    /// radius range is inverted or starts at zero, and
    /// [`GeometryError::TooFewPoints`] if `points_per_shape` is below 3.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.shapes == 0 {
            return Err(GeometryError::InvalidConfig(
                "shapes must be at least 1".to_string(),
            ));
        }
        if self.points_per_shape < MIN_CURVE_POINTS {
            return Err(GeometryError::TooFewPoints {
                required: MIN_CURVE_POINTS,
                actual: self.points_per_shape,
            });
        }
        let (min, max) = self.radius_range;
        if min == 0 || min > max {
            return Err(GeometryError::InvalidConfig(format!(
                "radius range must satisfy 0 < min <= max, got [{min}, {max}]"
            )));
        }
        Ok(())
    }
}

impl Default for KeyframeConfig {
    fn default() -> Self {
        Self {
            shapes: Self::DEFAULT_SHAPES,
            points_per_shape: Self::DEFAULT_POINTS_PER_SHAPE,
            randomize_center: 0,
            radius_range: (100, 100),
            spread: 20,
        }
    }
}

/// Generate `config.shapes` blob outlines around `center` (screen
/// coordinates), followed by a copy of the first so the sequence loops.
///
/// Points are sampled with a fixed zero offset: a random starting angle
/// per keyframe would rotate point `i` between frames and make the
/// interpolated outline fold over itself.
///
/// A jittered spread larger than the radius can make two adjacent
/// samples coincide; such a draw fails with
/// [`GeometryError::DegenerateEdge`].
///
/// # Errors
///
/// Returns the error from [`KeyframeConfig::validate`], or from
/// [`smooth_path`] for a degenerate sample.
///
/// # Examples
///
/// ```
/// use shapegen_geometry::keyframes::{KeyframeConfig, generate_keyframes};
/// use shapegen_geometry::{Point, random::seeded};
///
/// let config = KeyframeConfig { shapes: 3, ..KeyframeConfig::default() };
/// let frames = generate_keyframes(Point::new(200.0, 200.0), &config, &mut seeded(1)).unwrap();
/// assert_eq!(frames.len(), 4);
/// assert_eq!(frames[0], frames[3]);
/// ```
pub fn generate_keyframes<R: RandomSource + ?Sized>(
    center: Point,
    config: &KeyframeConfig,
    rng: &mut R,
) -> Result<Vec<SmoothPath>, GeometryError> {
    config.validate()?;

    let mut frames = Vec::with_capacity(config.shapes + 1);
    for _ in 0..config.shapes {
        let shifted = randomize_point(center, config.randomize_center, rng);
        let (min, max) = config.radius_range;
        let radius = rng.random_int(i64::from(min), i64::from(max));

        #[allow(clippy::cast_precision_loss)]
        let sampling = SamplingConfig {
            radius: radius as f64,
            spread: f64::from(config.spread),
            offset: Some(0.0),
        };
        let points: Vec<Point> =
            generate_points_around_circle(config.points_per_shape, &sampling, rng)?
                .into_iter()
                .map(|p| rel_to_abs(shifted, p))
                .collect();

        frames.push(smooth_path(&points)?);
    }

    if let Some(first) = frames.first().cloned() {
        frames.push(first);
    }
    Ok(frames)
}
