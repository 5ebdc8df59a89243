//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use spaceapps_core::{AnimationSpeed, BackgroundLayers};

use crate::Config;

/// Command-line arguments.
///
/// CLI values override settings loaded from `config.toml`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "spaceapps",
    about = "NASA Space Apps Challenge Jabalpur, in your terminal"
)]
pub struct CliArgs {
    /// Number of stars in the background.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Number of nebula blobs in the background.
    #[arg(long)]
    pub blobs: Option<usize>,

    /// Random seed for a reproducible background.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frame cadence (slow, medium, fast).
    #[arg(long, value_parser = parse_speed)]
    pub speed: Option<AnimationSpeed>,

    /// Background layers to draw (full, stars, nebula, off).
    #[arg(long, value_parser = parse_layers)]
    pub layers: Option<BackgroundLayers>,

    /// Log filter (error, warn, info, debug, trace, or a RUST_LOG directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_speed(value: &str) -> Result<AnimationSpeed, String> {
    match value.to_ascii_lowercase().as_str() {
        "slow" => Ok(AnimationSpeed::Slow),
        "medium" => Ok(AnimationSpeed::Medium),
        "fast" => Ok(AnimationSpeed::Fast),
        other => Err(format!("unknown speed `{other}` (slow, medium, fast)")),
    }
}

fn parse_layers(value: &str) -> Result<BackgroundLayers, String> {
    match value.to_ascii_lowercase().as_str() {
        "full" => Ok(BackgroundLayers::Full),
        "stars" => Ok(BackgroundLayers::Stars),
        "nebula" => Ok(BackgroundLayers::Nebula),
        "off" => Ok(BackgroundLayers::Off),
        other => Err(format!("unknown layers `{other}` (full, stars, nebula, off)")),
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(stars) = args.stars {
            self.background.star_count = stars;
        }
        if let Some(blobs) = args.blobs {
            self.background.blob_count = blobs;
        }
        if let Some(seed) = args.seed {
            self.background.seed = Some(seed);
        }
        if let Some(speed) = args.speed {
            self.background.speed = speed;
        }
        if let Some(layers) = args.layers {
            self.background.layers = layers;
        }
        if let Some(ref level) = args.log_level {
            self.log.level = level.clone();
        }
    }
}
