//! Fractal Brownian Motion (FBM) summation.
//!
//! FBM layers multiple octaves of noise to create terrain-like detail.

use serde::{Deserialize, Serialize};

use super::Noise2D;

/// Parameters for fractal summation.
///
/// The defaults are the conventional terrain settings; nothing in the noise
/// engine depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FractalParams {
    /// Base frequency multiplier. Smaller values give larger features.
    pub scale: f64,
    /// Number of octaves to sum.
    pub octaves: u32,
    /// Amplitude multiplier per octave.
    /// Typical value: 0.5 (each octave is half the amplitude).
    pub persistence: f64,
    /// Frequency multiplier per octave.
    /// Typical value: 2.0 (each octave is twice the frequency).
    pub lacunarity: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            scale: 0.05,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

impl FractalParams {
    /// Set the base frequency.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the number of octaves. Zero octaves sums to 0.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Set the persistence (amplitude multiplier per octave).
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Set the lacunarity (frequency multiplier per octave).
    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sum of the absolute octave amplitudes, an upper bound on
    /// `|fractal_sum|` for noise bounded by 1.
    pub fn amplitude_bound(&self) -> f64 {
        let mut amplitude = 1.0_f64;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amplitude.abs();
            amplitude *= self.persistence;
        }
        total
    }
}

/// Sum `params.octaves` octaves of `noise` at `(x, y)`.
///
/// Octave `i` samples at frequency `scale * lacunarity^i` with amplitude
/// `persistence^i`. The total is returned as-is.
pub fn fractal_sum<N: Noise2D + ?Sized>(noise: &N, x: f64, y: f64, params: &FractalParams) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = params.scale;

    for _ in 0..params.octaves {
        total += noise.sample(x * frequency, y * frequency) * amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    total
}

/// Fractal Brownian Motion generator.
///
/// Wraps a base noise function so the fractal sum can be passed anywhere a
/// [`Noise2D`] is expected.
#[derive(Debug, Clone)]
pub struct Fbm<N: Noise2D> {
    /// The base noise function.
    noise: N,
    params: FractalParams,
}

impl<N: Noise2D> Fbm<N> {
    /// Create a new FBM generator with the conventional parameters.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            params: FractalParams::default(),
        }
    }

    /// Replace all fractal parameters.
    pub fn with_params(mut self, params: FractalParams) -> Self {
        self.params = params;
        self
    }

    /// Set the number of octaves.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.params.octaves = octaves;
        self
    }

    /// Current parameters.
    pub fn params(&self) -> &FractalParams {
        &self.params
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        fractal_sum(&self.noise, x, y, &self.params)
    }
}
