//! Generate command implementation
//!
//! Renders a heightmap from fractal noise and writes it as a grayscale PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use terragen_core::png::{write_heightmap_to_vec_with_hash, PngConfig};
use terragen_core::render_terrain;

use super::{shuffle_name, TerrainArgs};

/// Run the generate command
///
/// # Arguments
/// * `config_path` - Optional JSON terrain config
/// * `terrain` - Flag overrides for the config
/// * `output` - Path of the PNG to write
/// * `compression` - PNG preset name (default, fast, best)
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    config_path: Option<&str>,
    terrain: &TerrainArgs,
    output: &str,
    compression: &str,
) -> Result<ExitCode> {
    let start = Instant::now();
    let config = terrain.resolve(config_path)?;
    let png_config = png_preset(compression)?;

    println!("{} {}", "Generating:".cyan().bold(), output);
    println!(
        "{} {}x{}  {} {}  {} {}",
        "Resolution:".dimmed(),
        config.width,
        config.height,
        "Seed:".dimmed(),
        config.seed,
        "Shuffle:".dimmed(),
        shuffle_name(config.shuffle)
    );
    println!(
        "{} scale={} octaves={} persistence={} lacunarity={}",
        "Fractal:".dimmed(),
        config.fractal.scale,
        config.fractal.octaves,
        config.fractal.persistence,
        config.fractal.lacunarity
    );

    let engine = config.engine();
    let map = render_terrain(&engine, config.width, config.height, &config.fractal)
        .context("Failed to render heightmap")?;

    let (data, hash) =
        write_heightmap_to_vec_with_hash(&map, &png_config).context("Failed to encode PNG")?;

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(output, &data).with_context(|| format!("Failed to write PNG: {}", output))?;

    if let Some((lo, hi)) = map.min_max() {
        println!("{} [{:.4}, {:.4}]", "Height range:".dimmed(), lo, hi);
    }
    println!("{} {}", "BLAKE3:".dimmed(), hash);
    println!(
        "{} wrote {} bytes in {:.2?}",
        "OK".green().bold(),
        data.len(),
        start.elapsed()
    );

    Ok(ExitCode::SUCCESS)
}

fn png_preset(name: &str) -> Result<PngConfig> {
    match name {
        "default" => Ok(PngConfig::default()),
        "fast" => Ok(PngConfig::fast()),
        "best" => Ok(PngConfig::best_compression()),
        other => Err(anyhow::anyhow!(
            "unknown compression preset: {} (expected default, fast, or best)",
            other
        )),
    }
}
