//! SVG export serializer.
//!
//! Three documents are produced, all built with the [`svg`] crate for
//! document construction and XML escaping:
//!
//! - [`to_animated_svg`]: one `<path>` per [`AnimatedLayer`], each
//!   carrying an `<animate attributeName="d">` child that morphs through
//!   the layer's keyframes and loops forever.
//! - [`to_diagnostic_svg`]: a point set drawn as a polygon with indexed
//!   markers, overlaid with its smoothed outline. Useful for checking
//!   the smoother and the tour order by eye.
//! - [`to_transition_svg`]: one keyframe with lines to where each of its
//!   points moves in the next keyframe.
//!
//! Optional [`SvgMetadata`] embeds `<title>`, `<desc>`, and a
//! `<metadata>` block holding the generating configuration as JSON.

use svg::Document;
use svg::node::element::{
    Animate, Circle, Description, Element, Group, Line, Path, Polygon, Title,
};
use svg::node::{Node, Text};

use shapegen_geometry::path::format_number;
use shapegen_geometry::{Point, Size, SmoothPath, animation_values};

/// Namespace of the `<shapegen:config>` metadata element.
const METADATA_NAMESPACE: &str = "https://shapegen.dev/ns/1";

/// Marker circle radius in diagnostic output.
const MARKER_RADIUS: f64 = 3.0;

/// Offset of a marker's index label from the marker center.
const LABEL_OFFSET: (f64, f64) = (9.0, -4.0);

/// Metadata to embed in the SVG document.
///
/// All fields are optional. Text values are XML-escaped by the `svg`
/// crate.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description, emitted as `<desc>`.
    pub description: Option<&'a str>,

    /// Serialized generating configuration, emitted inside
    /// `<metadata><shapegen:config>` so a file can be regenerated.
    pub config_json: Option<&'a str>,
}

/// One animated blob in an [`to_animated_svg`] document.
#[derive(Debug, Clone)]
pub struct AnimatedLayer<'a> {
    /// Outlines to morph through, in order. The last should equal the
    /// first for a seamless loop (as
    /// [`generate_keyframes`](shapegen_geometry::generate_keyframes)
    /// produces).
    pub keyframes: &'a [SmoothPath],

    /// Fill color.
    pub fill: &'a str,

    /// Fill opacity in `[0, 1]`.
    pub opacity: f64,

    /// Optional CSS class for styling by the embedding page.
    pub class: Option<&'a str>,
}

/// What [`to_diagnostic_svg`] draws besides the smoothed outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticOptions {
    /// Draw the input points as a filled polygon.
    pub polygon: bool,
    /// Draw a circle marker at each input point.
    pub markers: bool,
    /// Label each marker with its index.
    pub labels: bool,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            polygon: true,
            markers: true,
            labels: true,
        }
    }
}

/// Format points for a `<polygon points="...">` attribute: `x,y` pairs
/// separated by spaces.
///
/// # Examples
///
/// ```
/// use shapegen_geometry::Point;
/// use shapegen_export::polygon_points;
///
/// let points = [Point::new(0.0, 0.0), Point::new(10.5, 20.0)];
/// assert_eq!(polygon_points(&points), "0,0 10.5,20");
/// ```
#[must_use]
pub fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Start a document sized `dimensions` with the metadata elements added.
fn document(dimensions: Size, metadata: &SvgMetadata<'_>) -> Document {
    let w = dimensions.width;
    let h = dimensions.height;
    let mut doc = Document::new()
        .set("width", w)
        .set("height", h)
        .set(
            "viewBox",
            format!("0 0 {} {}", format_number(w), format_number(h)),
        );

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }

    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    if let Some(config_json) = metadata.config_json {
        let mut config_el = Element::new("shapegen:config");
        config_el.assign("xmlns:shapegen", METADATA_NAMESPACE);
        config_el.append(Text::new(config_json));
        let mut metadata_el = Element::new("metadata");
        metadata_el.append(config_el);
        doc = doc.add(metadata_el);
    }

    doc
}

/// Render the document with the XML declaration the `svg` crate omits.
fn finish(doc: &Document) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{doc}\n")
}

/// Serialize animated blob layers into an SVG document string.
///
/// Each layer becomes a `<path>` whose static `d` is its first keyframe,
/// with an `<animate attributeName="d" dur="{duration_secs}s"
/// repeatCount="indefinite">` child listing every keyframe. Layers with
/// no keyframes are skipped.
///
/// # Examples
///
/// ```
/// use shapegen_geometry::{Point, Size, smooth_path};
/// use shapegen_export::{AnimatedLayer, SvgMetadata, to_animated_svg};
///
/// let a = smooth_path(&[Point::new(0.0, 0.0), Point::new(40.0, 0.0), Point::new(0.0, 30.0)]).unwrap();
/// let frames = vec![a.clone(), a];
/// let layer = AnimatedLayer { keyframes: &frames, fill: "#8b5cf6", opacity: 0.7, class: None };
/// let svg = to_animated_svg(&[layer], Size::new(400.0, 300.0), &SvgMetadata::default(), 50.0);
/// assert!(svg.contains("attributeName=\"d\""));
/// assert!(svg.contains("dur=\"50s\""));
/// ```
#[must_use]
pub fn to_animated_svg(
    layers: &[AnimatedLayer<'_>],
    dimensions: Size,
    metadata: &SvgMetadata<'_>,
    duration_secs: f64,
) -> String {
    let mut doc = document(dimensions, metadata);

    for layer in layers {
        let Some(first) = layer.keyframes.first() else {
            continue;
        };

        let animate = Animate::new()
            .set("attributeName", "d")
            .set("dur", format!("{}s", format_number(duration_secs)))
            .set("repeatCount", "indefinite")
            .set("values", animation_values(layer.keyframes));

        let mut path = Path::new()
            .set("d", first.description())
            .set("fill", layer.fill)
            .set("fill-opacity", layer.opacity)
            .set("stroke", "none");
        if let Some(class) = layer.class {
            path = path.set("class", class);
        }

        doc = doc.add(path.add(animate));
    }

    finish(&doc)
}

/// Serialize a point set and its smoothed outline into a diagnostic SVG.
///
/// Draws, back to front: the polygon through `points` (if enabled), the
/// smoothed `path` (if any), then a marker at each point labelled with its
/// index (if enabled). Labels sit up and to the right of the marker.
#[must_use]
pub fn to_diagnostic_svg(
    points: &[Point],
    path: Option<&SmoothPath>,
    dimensions: Size,
    metadata: &SvgMetadata<'_>,
    options: DiagnosticOptions,
) -> String {
    let mut doc = document(dimensions, metadata);

    if options.polygon && !points.is_empty() {
        doc = doc.add(
            Polygon::new()
                .set("points", polygon_points(points))
                .set("fill", "#f3f4f6")
                .set("stroke", "#6b7280"),
        );
    }

    if let Some(path) = path {
        doc = doc.add(
            Path::new()
                .set("d", path.description())
                .set("fill", "none")
                .set("stroke", "#111827")
                .set("stroke-width", 2),
        );
    }

    if options.markers {
        doc = doc.add(markers("markers", points, options.labels));
    }

    finish(&doc)
}

/// A group of circle markers at `points`, optionally labelled with their
/// indices.
fn markers(id: &str, points: &[Point], labels: bool) -> Group {
    let mut group = Group::new().set("id", id);
    for (i, p) in points.iter().enumerate() {
        group = group.add(
            Circle::new()
                .set("cx", p.x)
                .set("cy", p.y)
                .set("r", MARKER_RADIUS)
                .set("fill", "none")
                .set("stroke", "#1f2937"),
        );
        if labels {
            let mut label = Element::new("text");
            label.assign("x", p.x + LABEL_OFFSET.0);
            label.assign("y", p.y + LABEL_OFFSET.1);
            label.assign("font-size", 12);
            label.append(Text::new(i.to_string()));
            group = group.add(label);
        }
    }
    group
}

/// Serialize the step from one keyframe to the next: how each point moves.
///
/// Draws the `current` outline, a line from each of its points to the
/// point with the same index in `next`, labelled markers on `current`
/// and unlabelled markers on `next`. Extra points of the longer keyframe
/// get markers but no line.
///
/// # Examples
///
/// ```
/// use shapegen_geometry::{Point, Size, smooth_path};
/// use shapegen_export::{SvgMetadata, to_transition_svg};
///
/// let a = smooth_path(&[Point::new(0.0, 0.0), Point::new(40.0, 0.0), Point::new(0.0, 30.0)]).unwrap();
/// let b = smooth_path(&[Point::new(5.0, 5.0), Point::new(45.0, 0.0), Point::new(0.0, 35.0)]).unwrap();
/// let svg = to_transition_svg(&a, &b, Size::new(100.0, 100.0), &SvgMetadata::default());
/// assert_eq!(svg.matches("<line").count(), 3);
/// ```
#[must_use]
pub fn to_transition_svg(
    current: &SmoothPath,
    next: &SmoothPath,
    dimensions: Size,
    metadata: &SvgMetadata<'_>,
) -> String {
    let mut doc = document(dimensions, metadata);

    doc = doc.add(
        Path::new()
            .set("d", current.description())
            .set("fill", "#f3f4f6")
            .set("stroke", "#6b7280"),
    );

    let from = current.vertices();
    let to = next.vertices();

    let mut moves = Group::new().set("id", "moves");
    for (a, b) in from.iter().zip(&to) {
        moves = moves.add(
            Line::new()
                .set("x1", a.x)
                .set("y1", a.y)
                .set("x2", b.x)
                .set("y2", b.y)
                .set("stroke", "#9ca3af")
                .set("stroke-dasharray", "4 2"),
        );
    }
    doc = doc.add(moves);

    doc = doc.add(markers("markers", &from, true));
    doc = doc.add(markers("next-markers", &to, false));

    finish(&doc)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shapegen_geometry::smooth_path;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(0.0, 30.0),
        ]
    }

    #[test]
    fn polygon_points_empty() {
        assert_eq!(polygon_points(&[]), "");
    }

    #[test]
    fn polygon_points_negative_zero() {
        assert_eq!(polygon_points(&[Point::new(-0.0, -2.0)]), "0,-2");
    }

    #[test]
    fn animated_svg_contains_keyframes() {
        let path = smooth_path(&triangle()).unwrap();
        let frames = vec![path.clone(), path.clone()];
        let layer = AnimatedLayer {
            keyframes: &frames,
            fill: "#22c55e",
            opacity: 0.7,
            class: Some("blob"),
        };
        let svg = to_animated_svg(&[layer], Size::new(400.0, 300.0), &SvgMetadata::default(), 50.0);

        let expected_values = format!("{};{}", path.description(), path.description());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<animate"));
        assert!(svg.contains(&format!("values=\"{expected_values}\"")));
        assert!(svg.contains("repeatCount=\"indefinite\""));
        assert!(svg.contains("class=\"blob\""));
        assert!(svg.contains("viewBox=\"0 0 400 300\""));
    }

    #[test]
    fn animated_svg_skips_empty_layers() {
        let layer = AnimatedLayer {
            keyframes: &[],
            fill: "red",
            opacity: 1.0,
            class: None,
        };
        let svg = to_animated_svg(&[layer], Size::new(10.0, 10.0), &SvgMetadata::default(), 5.0);
        assert!(!svg.contains("<path"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn animated_svg_one_path_per_layer() {
        let path = smooth_path(&triangle()).unwrap();
        let frames = vec![path.clone(), path];
        let layers: Vec<AnimatedLayer<'_>> = ["red", "green", "blue"]
            .into_iter()
            .map(|fill| AnimatedLayer {
                keyframes: &frames,
                fill,
                opacity: 0.5,
                class: None,
            })
            .collect();
        let svg = to_animated_svg(&layers, Size::new(100.0, 100.0), &SvgMetadata::default(), 1.5);
        assert_eq!(svg.matches("<path").count(), 3);
        assert_eq!(svg.matches("<animate").count(), 3);
        assert!(svg.contains("dur=\"1.5s\""));
    }

    #[test]
    fn metadata_is_embedded_and_escaped() {
        let metadata = SvgMetadata {
            title: Some("blobs & more"),
            description: Some("seed 7"),
            config_json: Some(r#"{"shapes":3}"#),
        };
        let svg = to_animated_svg(&[], Size::new(10.0, 10.0), &metadata, 1.0);
        assert!(svg.contains("<title>blobs &amp; more</title>"));
        assert!(svg.contains("<desc>seed 7</desc>"));
        assert!(svg.contains("<metadata>"));
        assert!(svg.contains("shapegen:config"));
        assert!(svg.contains(METADATA_NAMESPACE));
    }

    #[test]
    fn diagnostic_svg_draws_all_layers() {
        let points = triangle();
        let path = smooth_path(&points).unwrap();
        let svg = to_diagnostic_svg(
            &points,
            Some(&path),
            Size::new(100.0, 100.0),
            &SvgMetadata::default(),
            DiagnosticOptions::default(),
        );
        assert!(svg.contains("points=\"0,0 40,0 0,30\""));
        assert!(svg.contains(&format!("d=\"{}\"", path.description())));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains(">2</text>"));
    }

    #[test]
    fn diagnostic_svg_without_markers_or_polygon() {
        let points = triangle();
        let options = DiagnosticOptions {
            polygon: false,
            markers: false,
            labels: false,
        };
        let svg = to_diagnostic_svg(&points, None, Size::new(50.0, 50.0), &SvgMetadata::default(), options);
        assert!(!svg.contains("<polygon"));
        assert!(!svg.contains("<circle"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn diagnostic_svg_markers_without_labels() {
        let points = triangle();
        let options = DiagnosticOptions {
            labels: false,
            ..DiagnosticOptions::default()
        };
        let svg = to_diagnostic_svg(&points, None, Size::new(50.0, 50.0), &SvgMetadata::default(), options);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn transition_svg_links_matching_points() {
        let current = smooth_path(&triangle()).unwrap();
        let next = smooth_path(&[
            Point::new(2.0, 3.0),
            Point::new(44.0, 1.0),
            Point::new(1.0, 33.0),
        ])
        .unwrap();
        let svg = to_transition_svg(&current, &next, Size::new(100.0, 100.0), &SvgMetadata::default());

        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.contains("x1=\"40\""));
        assert!(svg.contains("x2=\"44\""));
        assert_eq!(svg.matches("<circle").count(), 6);
        // Only the current keyframe is labelled.
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains("id=\"next-markers\""));
        assert!(svg.contains(&format!("d=\"{}\"", current.description())));
    }

    #[test]
    fn transition_svg_uneven_keyframes_link_common_prefix() {
        let current = smooth_path(&triangle()).unwrap();
        let next = smooth_path(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        let svg = to_transition_svg(&current, &next, Size::new(50.0, 50.0), &SvgMetadata::default());
        assert_eq!(svg.matches("<line").count(), 3);
        assert_eq!(svg.matches("<circle").count(), 7);
    }
}
