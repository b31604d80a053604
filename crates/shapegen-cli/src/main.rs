//! shapegen: generate animated blob SVGs and inspect smoothed point sets.
//!
//! Two subcommands:
//!
//! - `animate`: layered, looping blob animations (one `<path>` with an
//!   `<animate>` per layer), the raw keyframe path descriptions as JSON
//!   with `--json`, or the first keyframe step with `--transition`.
//! - `scatter`: random points in the canvas, optionally reordered by the
//!   shortest closed tour, smoothed and drawn with indexed markers.
//!
//! Progress and the effective configuration go to stderr; the SVG or JSON
//! payload goes to stdout unless `--output` is given.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin shapegen -- --seed 7 animate --layers 3 > blobs.svg
//! cargo run --release --bin shapegen -- scatter --points 8 --tour --output scatter.svg
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use shapegen_export::{AnimatedLayer, DiagnosticOptions, SvgMetadata};
use shapegen_geometry::keyframes::{KeyframeConfig, generate_keyframes};
use shapegen_geometry::random::{self, RandomSource};
use shapegen_geometry::vector::{center_of, rel_to_abs};
use shapegen_geometry::{
    Point, Size, generate_random_points, randomize_point, shortest_tour, smooth_path,
};

/// Fill colors cycled across animation layers.
const LAYER_FILLS: [&str; 3] = ["#22c55e", "#3b82f6", "#a855f7"];

/// Procedural blob geometry for generative SVG animations.
#[derive(Parser)]
#[command(name = "shapegen", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for reproducible output. Uses OS entropy when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Canvas width in pixels.
    #[arg(long, global = true, default_value_t = 640.0)]
    width: f64,

    /// Canvas height in pixels.
    #[arg(long, global = true, default_value_t = 480.0)]
    height: f64,

    /// Write output to this file instead of stdout.
    #[arg(long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Layered looping blob animation.
    Animate(AnimateArgs),
    /// Random points, optionally tour-ordered, with their smoothed outline.
    Scatter(ScatterArgs),
}

#[derive(Args)]
struct AnimateArgs {
    /// Number of overlaid blobs.
    #[arg(long, default_value_t = 3, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    layers: usize,

    /// Keyframes per blob (before the closing repeat).
    #[arg(long, default_value_t = KeyframeConfig::DEFAULT_SHAPES)]
    shapes: usize,

    /// Points sampled per keyframe.
    #[arg(long, default_value_t = KeyframeConfig::DEFAULT_POINTS_PER_SHAPE)]
    points: usize,

    /// Per-keyframe center jitter in pixels.
    #[arg(long, default_value_t = 0)]
    randomize_center: u32,

    /// Center jitter of every layer after the first, in pixels.
    #[arg(long, default_value_t = 50)]
    layer_offset: u32,

    /// Smallest keyframe radius of the innermost layer.
    #[arg(long, default_value_t = 50)]
    min_radius: u32,

    /// Largest keyframe radius of the innermost layer.
    #[arg(long, default_value_t = 100)]
    max_radius: u32,

    /// Per-axis point jitter in pixels.
    #[arg(long, default_value_t = 20)]
    spread: u32,

    /// Duration of one animation loop in seconds.
    #[arg(long, default_value_t = 50.0)]
    duration: f64,

    /// Print keyframe path descriptions as JSON instead of an SVG.
    #[arg(long)]
    json: bool,

    /// Draw how the first layer's points move from its first keyframe to
    /// the second, instead of the animation.
    #[arg(long, conflicts_with = "json")]
    transition: bool,

    /// Full keyframe config as a JSON string.
    ///
    /// When provided, the keyframe flags (`--shapes`, `--points`,
    /// `--randomize-center`, radius and spread) are ignored. Layer radius
    /// growth is still applied on top of its `radius_range`.
    #[arg(long)]
    config_json: Option<String>,
}

#[derive(Args)]
struct ScatterArgs {
    /// Number of random points.
    #[arg(long, default_value_t = 6)]
    points: usize,

    /// Keep points at least this far from the canvas edge.
    #[arg(long, default_value_t = 20.0)]
    padding: f64,

    /// Reorder points along the shortest closed tour before smoothing.
    #[arg(long)]
    tour: bool,

    /// Omit point markers and index labels.
    #[arg(long)]
    no_markers: bool,
}

/// JSON payload of `animate --json`.
#[derive(Serialize)]
struct AnimationJson {
    width: f64,
    height: f64,
    layers: Vec<LayerJson>,
}

#[derive(Serialize)]
struct LayerJson {
    center: Point,
    keyframes: Vec<String>,
}

/// Build the base [`KeyframeConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual keyframe flags are ignored.
fn keyframe_config(args: &AnimateArgs) -> Result<KeyframeConfig, String> {
    if let Some(ref json) = args.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(KeyframeConfig {
        shapes: args.shapes,
        points_per_shape: args.points,
        randomize_center: args.randomize_center,
        radius_range: (args.min_radius, args.max_radius),
        spread: args.spread,
    })
}

/// Config for layer `index` of `layers`: inner layers are smaller, outer
/// ones larger, so stacked blobs stay visible.
fn layer_config(base: &KeyframeConfig, index: usize, layers: usize) -> KeyframeConfig {
    let steps = u32::try_from(layers - index).unwrap_or(u32::MAX);
    let (min, max) = base.radius_range;
    KeyframeConfig {
        radius_range: (
            min.saturating_add(steps.saturating_mul(10)),
            max.saturating_add(steps.saturating_mul(30)),
        ),
        ..*base
    }
}

fn run_animate<R: RandomSource>(
    cli: &Cli,
    args: &AnimateArgs,
    rng: &mut R,
) -> Result<String, String> {
    if !args.duration.is_finite() || args.duration <= 0.0 {
        return Err(format!(
            "--duration must be a positive number of seconds, got {}",
            args.duration
        ));
    }
    let base = keyframe_config(args)?;
    eprintln!("Config: {base:#?}");

    let size = Size::new(cli.width, cli.height);
    let center = center_of(size);

    let mut centers = Vec::with_capacity(args.layers);
    let mut layer_frames = Vec::with_capacity(args.layers);
    for index in 0..args.layers {
        let layer_center = if index == 0 {
            center
        } else {
            randomize_point(center, args.layer_offset, rng)
        };
        let config = layer_config(&base, index, args.layers);
        let frames = generate_keyframes(layer_center, &config, rng)
            .map_err(|e| format!("Layer {index}: {e}"))?;
        eprintln!(
            "Layer {index}: center ({}, {}), radius {:?}, {} keyframes",
            layer_center.x,
            layer_center.y,
            config.radius_range,
            frames.len(),
        );
        centers.push(layer_center);
        layer_frames.push(frames);
    }

    if args.json {
        let payload = AnimationJson {
            width: cli.width,
            height: cli.height,
            layers: centers
                .into_iter()
                .zip(&layer_frames)
                .map(|(center, frames)| LayerJson {
                    center,
                    keyframes: frames.iter().map(|f| f.description()).collect(),
                })
                .collect(),
        };
        return serde_json::to_string_pretty(&payload)
            .map_err(|e| format!("Error serializing keyframes: {e}"));
    }

    let config_json = serde_json::to_string(&base).ok();
    let description = cli
        .seed
        .map_or_else(|| "unseeded".to_string(), |seed| format!("seed {seed}"));

    if args.transition {
        let first_layer = layer_frames.first().map_or(&[][..], Vec::as_slice);
        let (Some(current), Some(next)) = (first_layer.first(), first_layer.get(1)) else {
            return Err("Transition needs at least one keyframe".to_string());
        };
        let metadata = SvgMetadata {
            title: Some("shapegen transition"),
            description: Some(&description),
            config_json: config_json.as_deref(),
        };
        return Ok(shapegen_export::to_transition_svg(
            current, next, size, &metadata,
        ));
    }

    let layers: Vec<AnimatedLayer<'_>> = layer_frames
        .iter()
        .zip(LAYER_FILLS.iter().copied().cycle())
        .map(|(frames, fill)| AnimatedLayer {
            keyframes: frames,
            fill,
            opacity: 0.7,
            class: None,
        })
        .collect();

    let metadata = SvgMetadata {
        title: Some("shapegen animation"),
        description: Some(&description),
        config_json: config_json.as_deref(),
    };
    Ok(shapegen_export::to_animated_svg(
        &layers,
        size,
        &metadata,
        args.duration,
    ))
}

fn run_scatter<R: RandomSource>(
    cli: &Cli,
    args: &ScatterArgs,
    rng: &mut R,
) -> Result<String, String> {
    let size = Size::new(cli.width, cli.height);
    let center = center_of(size);
    let half_extent = Size::new(center.x, center.y);

    let mut points: Vec<Point> = generate_random_points(args.points, half_extent, args.padding, rng)
        .map_err(|e| format!("Sampling failed: {e}"))?
        .into_iter()
        .map(|p| rel_to_abs(center, p))
        .collect();
    eprintln!("Sampled {} points", points.len());

    if args.tour {
        let tour = shortest_tour(&points).map_err(|e| format!("Tour search failed: {e}"))?;
        eprintln!("Tour order {:?}, length {:.3}", tour.order, tour.length);
        points = tour.apply(&points);
    }

    let path = smooth_path(&points).map_err(|e| format!("Smoothing failed: {e}"))?;
    eprintln!("Smoothed into {} segments", path.len());

    let options = DiagnosticOptions {
        markers: !args.no_markers,
        labels: !args.no_markers,
        ..DiagnosticOptions::default()
    };
    let metadata = SvgMetadata {
        title: Some("shapegen scatter"),
        ..SvgMetadata::default()
    };
    Ok(shapegen_export::to_diagnostic_svg(
        &points,
        Some(&path),
        size,
        &metadata,
        options,
    ))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut rng = cli.seed.map_or_else(random::from_entropy, random::seeded);
    match cli.seed {
        Some(seed) => eprintln!("Seed: {seed}"),
        None => eprintln!("Seed: from entropy"),
    }

    let outcome = match &cli.command {
        Command::Animate(args) => run_animate(&cli, args, &mut rng),
        Command::Scatter(args) => run_scatter(&cli, args, &mut rng),
    };

    let payload = match outcome {
        Ok(payload) => payload,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match cli.output {
        Some(ref path) => match std::fs::write(path, &payload) {
            Ok(()) => {
                eprintln!("Written to {} ({} bytes)", path.display(), payload.len());
            }
            Err(e) => {
                eprintln!("Error writing {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => println!("{payload}"),
    }

    ExitCode::SUCCESS
}
