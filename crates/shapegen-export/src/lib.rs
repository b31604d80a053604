//! shapegen-export: Pure SVG serializers (sans-IO)
//!
//! Turns keyframe sequences and point sets from `shapegen-geometry` into
//! SVG documents. Nothing here touches the filesystem; every function
//! returns a `String`.

pub mod svg;

pub use svg::{
    AnimatedLayer, DiagnosticOptions, SvgMetadata, polygon_points, to_animated_svg,
    to_diagnostic_svg, to_transition_svg,
};
