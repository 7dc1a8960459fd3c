//! Heightmap rendering.
//!
//! Iterates a pixel grid, takes one fractal sample per pixel and stores the
//! normalized height `(n + 1) / 2`.

use log::{info, trace};
use thiserror::Error;

use crate::noise::{Fbm, FractalParams, Noise2D, NoiseEngine};

/// Largest width or height a PNG header can carry.
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

/// Largest pixel count rendered in one heightmap (16384 x 16384).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Errors from heightmap rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Heightmap dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("Heightmap dimensions {width}x{height} are too large to render")]
    TooLarge { width: u32, height: u32 },
}

/// Single-channel height buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Normalized heights (row-major). Nominally [0, 1], not clamped.
    pub data: Vec<f64>,
}

impl Heightmap {
    /// Create a new heightmap filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a height at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set a height at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Smallest and largest stored height, or `None` when empty.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.data.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Convert to 8-bit grayscale bytes.
    pub fn to_gray8(&self) -> Vec<u8> {
        self.data.iter().map(|&h| height_to_gray(h)).collect()
    }
}

/// Map a normalized height to a gray level: `floor(h * 255)`, clamped.
#[inline]
pub fn height_to_gray(h: f64) -> u8 {
    // NaN casts to 0
    (h * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Render `noise` sampled at integer pixel coordinates into a heightmap.
pub fn render_heightmap<N: Noise2D + ?Sized>(
    noise: &N,
    width: u32,
    height: u32,
) -> Result<Heightmap, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyDimensions { width, height });
    }
    if width > MAX_DIMENSION
        || height > MAX_DIMENSION
        || u64::from(width) * u64::from(height) > MAX_PIXELS
    {
        return Err(RenderError::TooLarge { width, height });
    }

    info!("Generating terrain...");

    let mut map = Heightmap::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            map.set(x, y, noise.sample_01(x as f64, y as f64));
        }
        trace!("row {}/{} done", y + 1, height);
    }

    info!("Terrain generation finished.");
    Ok(map)
}

/// Render the fractal sum of `engine` with `params` into a heightmap.
pub fn render_terrain(
    engine: &NoiseEngine,
    width: u32,
    height: u32,
    params: &FractalParams,
) -> Result<Heightmap, RenderError> {
    let fbm = Fbm::new(engine).with_params(*params);
    render_heightmap(&fbm, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rejects_empty() {
        let engine = NoiseEngine::from_seed(1);
        let err = render_terrain(&engine, 0, 16, &FractalParams::default()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyDimensions { width: 0, height: 16 }));
    }

    #[test]
    fn test_render_rejects_oversized() {
        let engine = NoiseEngine::from_seed(1);
        let err = render_heightmap(&engine, 4_000_000_000, 4_000_000_000).unwrap_err();
        assert!(matches!(err, RenderError::TooLarge { .. }));

        let err = render_heightmap(&engine, 1 << 20, 1 << 10).unwrap_err();
        assert!(matches!(err, RenderError::TooLarge { .. }));
    }

    #[test]
    fn test_render_matches_fractal_noise() {
        let engine = NoiseEngine::from_seed(7);
        let params = FractalParams::default();
        let map = render_terrain(&engine, 32, 24, &params).unwrap();

        assert_eq!(map.data.len(), 32 * 24);
        for &(x, y) in &[(0u32, 0u32), (31, 0), (5, 23), (17, 11)] {
            let n = engine.fractal_noise(x as f64, y as f64, &params);
            assert_eq!(map.get(x, y), (n + 1.0) * 0.5);
        }
    }

    #[test]
    fn test_origin_pixel_is_mid_gray() {
        // (0, 0) is a lattice point at every octave
        let engine = NoiseEngine::from_seed(3);
        let map = render_terrain(&engine, 4, 4, &FractalParams::default()).unwrap();
        assert_eq!(map.get(0, 0), 0.5);
        assert_eq!(map.to_gray8()[0], 127);
    }

    #[test]
    fn test_height_to_gray_clamps() {
        assert_eq!(height_to_gray(-0.3), 0);
        assert_eq!(height_to_gray(0.0), 0);
        assert_eq!(height_to_gray(1.0), 255);
        assert_eq!(height_to_gray(1.4), 255);
        assert_eq!(height_to_gray(f64::NAN), 0);
    }

    #[test]
    fn test_min_max() {
        let mut map = Heightmap::new(2, 2, 0.5);
        map.set(1, 0, 0.1);
        map.set(0, 1, 0.9);
        assert_eq!(map.min_max(), Some((0.1, 0.9)));
        assert_eq!(Heightmap::new(0, 0, 0.0).min_max(), None);
    }
}
