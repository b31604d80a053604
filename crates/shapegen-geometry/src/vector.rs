//! Minimal 2D vector arithmetic shared by the samplers and the smoother.
//!
//! [`scale`] floors its result, so chains of `add`/`scale` over integer
//! inputs stay on the integer pixel grid. The smoother relies on this to
//! reproduce rendered output exactly.

use crate::types::{Point, Size};

/// Coordinate-wise sum of all `points`, starting from the origin.
///
/// # Examples
///
/// ```
/// use shapegen_geometry::Point;
/// use shapegen_geometry::vector::add;
///
/// let sum = add(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(-1.0, 0.0)]);
/// assert_eq!(sum, Point::new(3.0, 6.0));
/// ```
#[must_use]
pub fn add(points: &[Point]) -> Point {
    points.iter().copied().fold(Point::ORIGIN, |acc, p| acc + p)
}

/// Multiply both coordinates by `factor`, flooring each result.
///
/// Flooring truncates toward negative infinity; it does not round.
///
/// ```
/// use shapegen_geometry::Point;
/// use shapegen_geometry::vector::scale;
///
/// assert_eq!(scale(Point::new(3.0, 5.0), 0.5), Point::new(1.0, 2.0));
/// assert_eq!(scale(Point::new(3.0, 5.0), -0.5), Point::new(-2.0, -3.0));
/// ```
#[must_use]
pub fn scale(point: Point, factor: f64) -> Point {
    Point::new((point.x * factor).floor(), (point.y * factor).floor())
}

/// Euclidean distance between two points.
#[must_use]
pub fn length(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

/// Convert a y-up point relative to `center` into y-down absolute
/// (screen) coordinates.
#[must_use]
pub fn rel_to_abs(center: Point, point: Point) -> Point {
    Point::new(center.x + point.x, center.y - point.y)
}

/// Convert a y-down absolute point into y-up coordinates relative to
/// `center`. Inverse of [`rel_to_abs`].
#[must_use]
pub fn abs_to_rel(center: Point, point: Point) -> Point {
    Point::new(point.x - center.x, center.y - point.y)
}

/// Center of a surface of the given measured size, floored to whole
/// pixels.
#[must_use]
pub fn center_of(size: Size) -> Point {
    Point::new((size.width / 2.0).floor(), (size.height / 2.0).floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_empty_is_origin() {
        assert_eq!(add(&[]), Point::ORIGIN);
    }

    #[test]
    fn add_single_is_identity() {
        assert_eq!(add(&[Point::new(2.5, -1.0)]), Point::new(2.5, -1.0));
    }

    #[test]
    fn scale_floors_not_rounds() {
        assert_eq!(scale(Point::new(3.0, 5.0), 0.5), Point::new(1.0, 2.0));
        assert_ne!(scale(Point::new(3.0, 5.0), 0.5), Point::new(2.0, 3.0));
    }

    #[test]
    fn scale_negative_floors_toward_negative_infinity() {
        assert_eq!(scale(Point::new(1.5, -1.5), -1.0), Point::new(-2.0, 1.0));
    }

    #[test]
    fn length_is_euclidean() {
        let d = length(Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn length_is_symmetric() {
        let a = Point::new(-3.0, 7.0);
        let b = Point::new(11.0, 2.0);
        assert!((length(a, b) - length(b, a)).abs() < f64::EPSILON);
    }

    #[test]
    fn rel_abs_roundtrip() {
        let center = Point::new(200.0, 150.0);
        let rel = Point::new(30.0, 40.0);
        let abs = rel_to_abs(center, rel);
        assert_eq!(abs, Point::new(230.0, 110.0));
        assert_eq!(abs_to_rel(center, abs), rel);
    }

    #[test]
    fn center_of_floors_odd_sizes() {
        assert_eq!(center_of(Size::new(401.0, 299.0)), Point::new(200.0, 149.0));
        assert_eq!(center_of(Size::new(640.5, 480.0)), Point::new(320.0, 240.0));
    }
}
