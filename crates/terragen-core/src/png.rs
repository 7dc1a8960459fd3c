//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same heightmap always encodes to
//! the same bytes.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::heightmap::Heightmap;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Encoder settings for heightmap PNGs.
///
/// Both fields are fixed per preset, so a heightmap and a preset together
/// pin the output bytes (and the BLAKE3 hash printed by `generate`).
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Deflate level.
    pub compression: Compression,
    /// Per-scanline filter applied to the gray bytes.
    pub filter: FilterType,
}

impl Default for PngConfig {
    /// Unfiltered rows at the default deflate level.
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files. Paeth prediction suits the smooth gradients of a
    /// noise heightmap.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Quick previews of large maps.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a heightmap to a grayscale PNG file.
pub fn write_heightmap(map: &Heightmap, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_heightmap_to_writer(map, writer, config)
}

/// Write a heightmap as a grayscale PNG to any writer.
pub fn write_heightmap_to_writer<W: Write>(
    map: &Heightmap,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let expected = map.width as usize * map.height as usize;
    if map.width == 0 || map.height == 0 || map.data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} samples for {}x{}, got {}",
            expected,
            map.width,
            map.height,
            map.data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, map.width, map.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&map.to_gray8())?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write to a `Vec<u8>` and return the hash.
pub fn write_heightmap_to_vec_with_hash(
    map: &Heightmap,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_heightmap_to_writer(map, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}
