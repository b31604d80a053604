//! shapegen-geometry: Procedural blob geometry (sans-IO).
//!
//! Produces the point sets and closed Bezier outlines behind generative
//! SVG animations:
//!
//! - [`sample`]: jittered points around a circle, uniform points in an
//!   area, point perturbation.
//! - [`smooth`]: a tangent-continuous closed curve through an ordered
//!   point loop.
//! - [`tour`]: the shortest closed visiting order of a small unordered
//!   point set, by exhaustive search.
//! - [`keyframes`]: sequences of blob outlines for path morphing.
//!
//! This crate has **no I/O dependencies**. Randomness comes from a
//! caller-supplied [`RandomSource`]; seed it with [`random::seeded`] for
//! reproducible output. Rendering lives in `shapegen-export`.

pub mod keyframes;
pub mod path;
pub mod random;
pub mod sample;
pub mod smooth;
pub mod tour;
pub mod types;
pub mod vector;

pub use keyframes::{KeyframeConfig, generate_keyframes};
pub use path::{BezierSegment, SmoothPath, animation_values};
pub use random::RandomSource;
pub use sample::{generate_points_around_circle, generate_random_points, randomize_point};
pub use smooth::smooth_path;
pub use tour::{MAX_TOUR_POINTS, Tour, shortest_tour, shortest_tour_by};
pub use types::{GeometryError, Point, SamplingConfig, Size};
