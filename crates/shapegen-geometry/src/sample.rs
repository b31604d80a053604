//! Point sampling: jittered points around a circle, uniform points in an
//! area, and single-point perturbation.
//!
//! All samplers return integer-valued coordinates and draw from a
//! caller-supplied [`RandomSource`].

use std::f64::consts::TAU;

use crate::random::{RandomSource, jitter};
use crate::types::{GeometryError, Point, SamplingConfig, Size};

/// Distribute `total` points evenly around a circle of `config.radius`,
/// each displaced by up to `config.spread` on each axis.
///
/// Point `i` sits at angle `offset - i * 2π / total`, so the sequence runs
/// clockwise in y-up space. The base position is floored to whole units
/// before the integer jitter is added.
///
/// When `config.offset` is `None` the starting angle is drawn from `rng`
/// in `[0, 2π)` before any jitter.
///
/// # Errors
///
/// Returns [`GeometryError::TooFewPoints`] if `total` is zero and
/// [`GeometryError::InvalidConfig`] if `config` fails
/// [`SamplingConfig::validate`].
#[allow(clippy::cast_precision_loss)]
pub fn generate_points_around_circle<R: RandomSource + ?Sized>(
    total: usize,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<Vec<Point>, GeometryError> {
    if total == 0 {
        return Err(GeometryError::TooFewPoints {
            required: 1,
            actual: 0,
        });
    }
    config.validate()?;

    let offset = match config.offset {
        Some(offset) => offset,
        None => rng.random_float(0.0, TAU),
    };
    let step = TAU / total as f64;

    let points = (0..total)
        .map(|i| {
            let angle = (i as f64).mul_add(-step, offset);
            let x = (angle.cos() * config.radius).floor() + jitter(rng, config.spread);
            let y = (angle.sin() * config.radius).floor() + jitter(rng, config.spread);
            Point::new(x, y)
        })
        .collect();
    Ok(points)
}

/// Sample `total` integer points uniformly from the area centered on the
/// origin with half-extent `area`, shrunk by `padding` on every side.
///
/// x is drawn from `[ceil(padding - width), floor(width - padding)]` and y
/// likewise with `height`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidConfig`] if any value is non-finite,
/// `padding` is negative, or `padding` exceeds the half-extent so the
/// range would be empty.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn generate_random_points<R: RandomSource + ?Sized>(
    total: usize,
    area: Size,
    padding: f64,
    rng: &mut R,
) -> Result<Vec<Point>, GeometryError> {
    if !area.width.is_finite() || !area.height.is_finite() || !padding.is_finite() {
        return Err(GeometryError::InvalidConfig(
            "area and padding must be finite".to_string(),
        ));
    }
    if padding < 0.0 {
        return Err(GeometryError::InvalidConfig(format!(
            "padding must be non-negative, got {padding}"
        )));
    }

    let x_range = ((padding - area.width).ceil(), (area.width - padding).floor());
    let y_range = ((padding - area.height).ceil(), (area.height - padding).floor());
    if x_range.0 > x_range.1 || y_range.0 > y_range.1 {
        return Err(GeometryError::InvalidConfig(format!(
            "padding {padding} leaves no room in a {}x{} half-extent",
            area.width, area.height
        )));
    }

    let (x_min, x_max) = (x_range.0 as i64, x_range.1 as i64);
    let (y_min, y_max) = (y_range.0 as i64, y_range.1 as i64);

    let points = (0..total)
        .map(|_| {
            let x = rng.random_int(x_min, x_max) as f64;
            let y = rng.random_int(y_min, y_max) as f64;
            Point::new(x, y)
        })
        .collect();
    Ok(points)
}

/// Shift `point` by an independent integer offset in `[-radius, radius]`
/// on each axis.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn randomize_point<R: RandomSource + ?Sized>(point: Point, radius: u32, rng: &mut R) -> Point {
    let r = i64::from(radius);
    Point::new(
        point.x + rng.random_int(-r, r) as f64,
        point.y + rng.random_int(-r, r) as f64,
    )
}
