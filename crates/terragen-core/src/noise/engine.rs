//! Gradient noise engine.
//!
//! 2D Perlin-style noise over a seeded permutation table. Gradients are the
//! four axis-aligned directions picked by the low two bits of a corner hash.

use rand::Rng;

use super::fbm::{fractal_sum, FractalParams};
use super::{fade, lerp, Noise2D};
use crate::permutation::{PermutationTable, ShuffleBound, TABLE_SIZE};

const CELL_MASK: i64 = TABLE_SIZE as i64 - 1;

/// Dot product of an axis-aligned pseudo-gradient with `(x, y)`.
///
/// Bit 0 picks the axis (clear: `x`, set: `y`), bit 1 the sign
/// (clear: negated).
#[inline]
pub fn grad2d(hash: u8, x: f64, y: f64) -> f64 {
    let v = if hash & 1 == 0 { x } else { y };
    if hash & 2 == 0 {
        -v
    } else {
        v
    }
}

/// Single-octave gradient noise with fractal summation on top.
///
/// The engine owns its permutation table and never mutates it, so a shared
/// reference can be sampled from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseEngine {
    table: PermutationTable,
}

impl NoiseEngine {
    /// Build an engine from a random source using the reference shuffle.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_shuffle(rng, ShuffleBound::default())
    }

    /// Build an engine from a random source with an explicit shuffle bound.
    pub fn with_shuffle<R: Rng + ?Sized>(rng: &mut R, bound: ShuffleBound) -> Self {
        Self::from_table(PermutationTable::new(rng, bound))
    }

    /// Build an engine from a PCG32 stream seeded with `seed`.
    pub fn from_seed(seed: u32) -> Self {
        Self::from_seed_with_shuffle(seed, ShuffleBound::default())
    }

    /// Build an engine from a seed with an explicit shuffle bound.
    pub fn from_seed_with_shuffle(seed: u32, bound: ShuffleBound) -> Self {
        Self::from_table(PermutationTable::from_seed(seed, bound))
    }

    /// Wrap an existing permutation table.
    pub fn from_table(table: PermutationTable) -> Self {
        Self { table }
    }

    /// The permutation table backing this engine.
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Evaluate one octave of noise at `(x, y)`.
    ///
    /// Returns exactly 0 on integer lattice points and stays within [-1, 1]
    /// everywhere else: each corner term is bounded by its offset, and the
    /// interpolation is convex.
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();

        // Lattice cell, wrapped onto the table
        let cx = (x_floor as i64 & CELL_MASK) as usize;
        let cy = (y_floor as i64 & CELL_MASK) as usize;

        // Offset within the cell
        let fx = x - x_floor;
        let fy = y - y_floor;

        let u = fade(fx);
        let v = fade(fy);

        let h00 = self.table.hash(cx, cy);
        let h10 = self.table.hash(cx + 1, cy);
        let h01 = self.table.hash(cx, cy + 1);
        let h11 = self.table.hash(cx + 1, cy + 1);

        let n00 = grad2d(h00, fx, fy);
        let n10 = grad2d(h10, fx - 1.0, fy);
        let n01 = grad2d(h01, fx, fy - 1.0);
        let n11 = grad2d(h11, fx - 1.0, fy - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);
        lerp(nx0, nx1, v)
    }

    /// Sum `params.octaves` layers of noise at `(x, y)`.
    ///
    /// The result is not normalized; with the conventional parameters it
    /// stays well inside [-2, 2].
    pub fn fractal_noise(&self, x: f64, y: f64, params: &FractalParams) -> f64 {
        fractal_sum(self, x, y, params)
    }
}

impl Noise2D for NoiseEngine {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.evaluate(x, y)
    }
}
