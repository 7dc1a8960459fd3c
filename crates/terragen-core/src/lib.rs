//! Terragen core: gradient noise height fields
//!
//! This crate synthesizes 2D height fields from layered gradient noise.
//! Output is reproducible: the same seed and parameters always yield the
//! same samples, the same heightmap and a byte-identical PNG.
//!
//! # Features
//!
//! - **Permutation table**: seeded 256-entry shuffle, doubled to 512 entries
//! - **Gradient noise**: single-octave 2D noise with a quintic fade curve
//! - **Fractal sum**: octave layering with persistence and lacunarity
//! - **Heightmaps**: per-pixel rendering mapped to 8-bit grayscale
//! - **Deterministic PNG**: fixed compression settings and BLAKE3 hashing
//!
//! # Example
//!
//! ```no_run
//! use terragen_core::{render_terrain, FractalParams, NoiseEngine, PngConfig};
//! use std::path::Path;
//!
//! let engine = NoiseEngine::from_seed(42);
//! let value = engine.fractal_noise(10.0, 10.0, &FractalParams::default());
//! assert!(value.abs() <= 2.0);
//!
//! let map = render_terrain(&engine, 256, 256, &FractalParams::default()).unwrap();
//! terragen_core::png::write_heightmap(&map, Path::new("terrain.png"), &PngConfig::default())
//!     .unwrap();
//! ```
//!
//! # Determinism
//!
//! - PCG32 is the only random source used to build permutation tables
//! - The engine holds no mutable state after construction
//! - PNG encoding uses fixed compression and filter settings

pub mod config;
pub mod heightmap;
pub mod noise;
pub mod permutation;
pub mod png;
pub mod rng;

// Re-export main types for convenience
pub use config::{ConfigError, TerrainConfig};
pub use heightmap::{render_heightmap, render_terrain, Heightmap, RenderError};
pub use noise::{Fbm, FractalParams, Noise2D, NoiseEngine};
pub use permutation::{PermutationTable, ShuffleBound};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;
