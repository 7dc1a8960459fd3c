//! CLI command implementations

pub mod generate;
pub mod sample;
pub mod table;

use anyhow::{Context, Result};
use clap::Args;
use log::debug;
use std::path::Path;
use terragen_core::{ShuffleBound, TerrainConfig};

/// Terrain flags shared by commands that render or sample noise.
///
/// Every flag is optional; unset flags keep the value from `--config` or the
/// built-in default.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TerrainArgs {
    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for the permutation table
    #[arg(long)]
    pub seed: Option<u32>,

    /// Base frequency (smaller values give larger features)
    #[arg(long, allow_negative_numbers = true)]
    pub scale: Option<f64>,

    /// Number of octaves to sum
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Amplitude multiplier per octave
    #[arg(long, allow_negative_numbers = true)]
    pub persistence: Option<f64>,

    /// Frequency multiplier per octave
    #[arg(long, allow_negative_numbers = true)]
    pub lacunarity: Option<f64>,

    /// Draw swap partners from [i, 255] instead of [i, 254]
    #[arg(long)]
    pub unbiased_shuffle: bool,
}

impl TerrainArgs {
    /// Load the optional config file, apply flag overrides and validate.
    pub fn resolve(&self, config_path: Option<&str>) -> Result<TerrainConfig> {
        let mut config = match config_path {
            Some(path) => TerrainConfig::load(Path::new(path))
                .with_context(|| format!("Failed to load config file: {}", path))?,
            None => TerrainConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(scale) = self.scale {
            config.fractal.scale = scale;
        }
        if let Some(octaves) = self.octaves {
            config.fractal.octaves = octaves;
        }
        if let Some(persistence) = self.persistence {
            config.fractal.persistence = persistence;
        }
        if let Some(lacunarity) = self.lacunarity {
            config.fractal.lacunarity = lacunarity;
        }
        if self.unbiased_shuffle {
            config.shuffle = ShuffleBound::Unbiased;
        }

        config.validate().context("Invalid terrain settings")?;
        debug!("resolved terrain config: {:?}", config);
        Ok(config)
    }
}

/// Display name for a shuffle bound.
pub(crate) fn shuffle_name(bound: ShuffleBound) -> &'static str {
    match bound {
        ShuffleBound::Reference => "reference",
        ShuffleBound::Unbiased => "unbiased",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = TerrainArgs::default().resolve(None).unwrap();
        assert_eq!(config, TerrainConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terrain.json");
        std::fs::write(
            &path,
            r#"{ "width": 64, "seed": 3, "fractal": { "octaves": 2, "scale": 0.1 } }"#,
        )
        .unwrap();

        let args = TerrainArgs {
            seed: Some(9),
            octaves: Some(5),
            unbiased_shuffle: true,
            ..TerrainArgs::default()
        };
        let config = args.resolve(path.to_str()).unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.seed, 9);
        assert_eq!(config.fractal.octaves, 5);
        assert_eq!(config.fractal.scale, 0.1);
        assert_eq!(config.shuffle, ShuffleBound::Unbiased);
    }

    #[test]
    fn test_missing_config_file() {
        let err = TerrainArgs::default()
            .resolve(Some("/nonexistent/terrain.json"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config file"));
    }

    #[test]
    fn test_zero_height_rejected() {
        let args = TerrainArgs {
            height: Some(0),
            ..TerrainArgs::default()
        };
        assert!(args.resolve(None).is_err());
    }
}
