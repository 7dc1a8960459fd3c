//! Sample command implementation
//!
//! Evaluates the fractal noise at a single coordinate.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use terragen_core::TerrainConfig;

use super::TerrainArgs;

/// Result of sampling one coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleOutput {
    pub x: f64,
    pub y: f64,
    pub seed: u32,
    /// Raw fractal sum.
    pub value: f64,
    /// `(value + 1) / 2`.
    pub height: f64,
}

/// Evaluate the configured fractal noise at `(x, y)`.
pub fn sample_at(config: &TerrainConfig, x: f64, y: f64) -> SampleOutput {
    let value = config.engine().fractal_noise(x, y, &config.fractal);
    SampleOutput {
        x,
        y,
        seed: config.seed,
        value,
        height: (value + 1.0) * 0.5,
    }
}

/// Run the sample command
///
/// # Arguments
/// * `x`, `y` - Coordinate to evaluate (pixel units, scaled by `scale`)
/// * `config_path` - Optional JSON terrain config
/// * `terrain` - Flag overrides for the config
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    x: f64,
    y: f64,
    config_path: Option<&str>,
    terrain: &TerrainArgs,
    json_output: bool,
) -> Result<ExitCode> {
    let config = terrain.resolve(config_path)?;
    let output = sample_at(&config, x, y);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} ({}, {})", "Sample:".cyan().bold(), x, y);
        println!("  {} {}", "value: ".dimmed(), output.value);
        println!("  {} {}", "height:".dimmed(), output.height);
    }

    Ok(ExitCode::SUCCESS)
}
