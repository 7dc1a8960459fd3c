//! Terrain rendering configuration.
//!
//! A JSON document describing one heightmap: image size, seed, shuffle
//! bound and fractal parameters. Every field is optional.
//!
//! ```json
//! {
//!   "width": 512,
//!   "height": 512,
//!   "seed": 42,
//!   "shuffle": "reference",
//!   "fractal": { "scale": 0.05, "octaves": 4, "persistence": 0.5, "lacunarity": 2.0 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::heightmap::{MAX_DIMENSION, MAX_PIXELS};
use crate::noise::{FractalParams, NoiseEngine};
use crate::permutation::ShuffleBound;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for a single terrain render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Seed for the permutation table.
    pub seed: u32,
    /// Shuffle bound used when building the table.
    pub shuffle: ShuffleBound,
    /// Fractal summation parameters.
    pub fractal: FractalParams,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            seed: 0,
            shuffle: ShuffleBound::default(),
            fractal: FractalParams::default(),
        }
    }
}

impl TerrainConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check dimensions and fractal parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "resolution {}x{} exceeds the PNG limit of {} per side",
                self.width, self.height, MAX_DIMENSION
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > MAX_PIXELS {
            return Err(ConfigError::Invalid(format!(
                "resolution {}x{} has {} pixels, at most {} allowed",
                self.width, self.height, pixels, MAX_PIXELS
            )));
        }

        let fractal = &self.fractal;
        for (name, value) in [
            ("scale", fractal.scale),
            ("persistence", fractal.persistence),
            ("lacunarity", fractal.lacunarity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "fractal.{} must be finite, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Build the noise engine this configuration describes.
    pub fn engine(&self) -> NoiseEngine {
        NoiseEngine::from_seed_with_shuffle(self.seed, self.shuffle)
    }
}
