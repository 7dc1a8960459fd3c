//! Noise generation primitives.
//!
//! All noise functions are pure and produce deterministic output for a given
//! permutation table.

mod engine;
mod fbm;

pub use engine::{grad2d, NoiseEngine};
pub use fbm::{fractal_sum, Fbm, FractalParams};

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    /// Returns a value typically in the range [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sample the noise and normalize to [0, 1] range.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        (self.sample(x, y) + 1.0) * 0.5
    }
}

impl<N: Noise2D + ?Sized> Noise2D for &N {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        (**self).sample(x, y)
    }
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
