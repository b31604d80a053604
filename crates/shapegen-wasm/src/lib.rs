//! WebAssembly entry points for browser-side blob animation.
//!
//! The browser driver measures its SVG element, then asks this module for
//! keyframe path descriptions to drop into an `<animate values>`
//! attribute. Every call crosses the boundary as plain strings and
//! numbers:
//!
//! - points travel as a JSON array of `[x, y]` pairs,
//! - configs travel as JSON (`KeyframeConfig`, missing fields take their
//!   defaults),
//! - results come back as a path description, a `;`-joined values list,
//!   or a JSON-serialized `Tour`.
//!
//! The `*_json` functions hold the logic and run on any target, so they
//! are what the tests exercise. The `#[wasm_bindgen]` wrappers only log
//! failures to the console and convert them to `JsError`.

use rand::rngs::StdRng;
use shapegen_geometry::keyframes::{KeyframeConfig, generate_keyframes};
use shapegen_geometry::{GeometryError, Point, animation_values, random, shortest_tour, smooth_path};
use wasm_bindgen::prelude::*;

/// Errors surfaced to JavaScript callers.
#[derive(Debug, thiserror::Error)]
pub enum WasmError {
    /// An input string was not the expected JSON shape.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// The geometry core rejected the input.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl WasmError {
    /// JSON form of the error for structured handling on the JS side.
    ///
    /// Geometry errors serialize as their tagged enum; parse errors as a
    /// plain string.
    #[must_use]
    pub fn to_json(&self) -> String {
        let encoded = match self {
            Self::Geometry(e) => serde_json::to_string(e),
            Self::Json(e) => serde_json::to_string(&e.to_string()),
        };
        encoded.unwrap_or_else(|ser_err| format!("\"serialization error: {ser_err}\""))
    }
}

fn parse_points(points_json: &str) -> Result<Vec<Point>, WasmError> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(points_json)?;
    Ok(pairs.into_iter().map(Point::from).collect())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map_or_else(random::from_entropy, random::seeded)
}

/// Smooth a closed loop of `[[x, y], ...]` points into an SVG path
/// description.
///
/// # Errors
///
/// Returns [`WasmError::Json`] for malformed input and
/// [`WasmError::Geometry`] when the smoother rejects the points.
pub fn smooth_path_description_json(points_json: &str) -> Result<String, WasmError> {
    let points = parse_points(points_json)?;
    Ok(smooth_path(&points)?.description())
}

/// Find the shortest closed tour through `[[x, y], ...]` points and
/// return it as `{"order": [...], "length": ...}`.
///
/// # Errors
///
/// Returns [`WasmError::Json`] for malformed input and
/// [`WasmError::Geometry`] for empty, oversized, or non-finite inputs.
pub fn shortest_tour_json(points_json: &str) -> Result<String, WasmError> {
    let points = parse_points(points_json)?;
    let tour = shortest_tour(&points)?;
    Ok(serde_json::to_string(&tour)?)
}

/// Generate a looping keyframe sequence around `(center_x, center_y)` and
/// return it as an `<animate values>` string.
///
/// An empty `config_json` uses [`KeyframeConfig::default`]. Without a
/// seed the keyframes draw from OS entropy.
///
/// # Errors
///
/// Returns [`WasmError::Json`] for a malformed config and
/// [`WasmError::Geometry`] when the config or center is invalid.
pub fn keyframe_values_json(
    center_x: f64,
    center_y: f64,
    config_json: &str,
    seed: Option<u64>,
) -> Result<String, WasmError> {
    let config: KeyframeConfig = if config_json.trim().is_empty() {
        KeyframeConfig::default()
    } else {
        serde_json::from_str(config_json)?
    };
    let center = Point::new(center_x, center_y);
    if !center.is_finite() {
        return Err(GeometryError::NonFiniteCoordinate { index: 0 }.into());
    }
    let frames = generate_keyframes(center, &config, &mut rng_for(seed))?;
    Ok(animation_values(&frames))
}

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn to_js_error(context: &str, err: &WasmError) -> JsError {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {}", err.to_json())));
    JsError::new(&err.to_string())
}

/// JS: `smoothPathDescription(pointsJson: string): string`
///
/// # Errors
///
/// Throws when the points are malformed or rejected by the smoother.
#[wasm_bindgen(js_name = smoothPathDescription)]
pub fn smooth_path_description(points_json: &str) -> Result<String, JsError> {
    smooth_path_description_json(points_json).map_err(|e| to_js_error("smoothPathDescription", &e))
}

/// JS: `shortestTour(pointsJson: string): string` (JSON `Tour`)
///
/// # Errors
///
/// Throws when the points are malformed, empty, or too many.
#[wasm_bindgen(js_name = shortestTour)]
pub fn shortest_tour_js(points_json: &str) -> Result<String, JsError> {
    shortest_tour_json(points_json).map_err(|e| to_js_error("shortestTour", &e))
}

/// JS: `keyframeValues(centerX, centerY, configJson, seed?): string`
///
/// # Errors
///
/// Throws when the config is malformed or invalid.
#[wasm_bindgen(js_name = keyframeValues)]
pub fn keyframe_values(
    center_x: f64,
    center_y: f64,
    config_json: &str,
    seed: Option<u64>,
) -> Result<String, JsError> {
    keyframe_values_json(center_x, center_y, config_json, seed)
        .map_err(|e| to_js_error("keyframeValues", &e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn smooths_triangle() {
        let description = smooth_path_description_json("[[0,0],[40,0],[0,30]]").unwrap();
        assert_eq!(
            description,
            "M 0 0 C 13 -9, 40 -6, 40 0 C 40 9, 14 30, 0 30 C -6 30, -7 6, 0 0 "
        );
    }

    #[test]
    fn malformed_points_are_json_errors() {
        let err = smooth_path_description_json("[[0,0],[1]]").unwrap_err();
        assert!(matches!(err, WasmError::Json(_)));
        assert!(err.to_json().starts_with('"'));
    }

    #[test]
    fn geometry_errors_serialize_structured() {
        let err = smooth_path_description_json("[[0,0],[1,1]]").unwrap_err();
        assert!(matches!(
            err,
            WasmError::Geometry(GeometryError::TooFewPoints { actual: 2, .. })
        ));
        let decoded: GeometryError = serde_json::from_str(&err.to_json()).unwrap();
        assert_eq!(
            decoded,
            GeometryError::TooFewPoints {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn tour_round_trips_as_json() {
        let json = shortest_tour_json("[[0,0],[1,1],[1,0],[0,1]]").unwrap();
        let tour: shapegen_geometry::Tour = serde_json::from_str(&json).unwrap();
        assert_eq!(tour.order, vec![0, 2, 1, 3]);
        assert!((tour.length - 4.0).abs() < 1e-12);
    }

    #[test]
    fn tour_rejects_empty() {
        assert!(matches!(
            shortest_tour_json("[]").unwrap_err(),
            WasmError::Geometry(GeometryError::TooFewPoints { .. })
        ));
    }

    #[test]
    fn seeded_keyframes_loop() {
        let values = keyframe_values_json(200.0, 150.0, r#"{"shapes": 4}"#, Some(3)).unwrap();
        let frames: Vec<&str> = values.split(';').collect();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0], frames[4]);
        assert_eq!(
            values,
            keyframe_values_json(200.0, 150.0, r#"{"shapes": 4}"#, Some(3)).unwrap()
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let values = keyframe_values_json(0.0, 0.0, "", Some(1)).unwrap();
        assert_eq!(
            values.split(';').count(),
            KeyframeConfig::DEFAULT_SHAPES + 1
        );
    }

    #[test]
    fn non_finite_center_is_rejected() {
        assert!(matches!(
            keyframe_values_json(f64::NAN, 0.0, "", Some(1)).unwrap_err(),
            WasmError::Geometry(GeometryError::NonFiniteCoordinate { .. })
        ));
    }
}
