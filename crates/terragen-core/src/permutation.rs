//! Permutation table for lattice hashing.
//!
//! A shuffled copy of `0..=255`, stored twice back to back so that a masked
//! lattice coordinate plus a `+1` corner offset can be looked up without a
//! second wrap.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rng::DeterministicRng;

/// Number of distinct gradient selectors.
pub const TABLE_SIZE: usize = 256;

/// Upper bound used when drawing the swap partner during the shuffle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShuffleBound {
    /// Partner drawn from `[i, 254]`. Index 255 never takes part in a swap,
    /// so value 255 always stays in the last slot. This is the historical
    /// behaviour and the default.
    #[default]
    Reference,
    /// Partner drawn from `[i, 255]`: a standard unbiased Fisher-Yates shuffle.
    Unbiased,
}

impl ShuffleBound {
    #[inline]
    fn upper(self) -> usize {
        match self {
            ShuffleBound::Reference => TABLE_SIZE - 2,
            ShuffleBound::Unbiased => TABLE_SIZE - 1,
        }
    }
}

/// 512-entry permutation table (256 values, doubled for wrapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Build a table by shuffling `0..=255` with the given random source.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bound: ShuffleBound) -> Self {
        let mut source = [0u8; TABLE_SIZE];
        for (i, slot) in source.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let upper = bound.upper();
        for i in 0..TABLE_SIZE - 1 {
            let r = rng.gen_range(i..=upper);
            source.swap(i, r);
        }

        Self::doubled(&source)
    }

    /// Build a table from a PCG32 stream seeded with `seed`.
    pub fn from_seed(seed: u32, bound: ShuffleBound) -> Self {
        let mut rng = DeterministicRng::new(seed);
        Self::new(&mut rng, bound)
    }

    /// Build a table from a recorded 256-entry permutation.
    ///
    /// Returns `None` if `base` is not a permutation of `0..=255`.
    pub fn from_base(base: [u8; TABLE_SIZE]) -> Option<Self> {
        let mut seen = [false; TABLE_SIZE];
        for &v in &base {
            if seen[v as usize] {
                return None;
            }
            seen[v as usize] = true;
        }
        Some(Self::doubled(&base))
    }

    fn doubled(base: &[u8; TABLE_SIZE]) -> Self {
        let mut perm = [0u8; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(base);
        perm[TABLE_SIZE..].copy_from_slice(base);
        Self { perm }
    }

    /// The shuffled 256-entry permutation.
    pub fn base(&self) -> &[u8] {
        &self.perm[..TABLE_SIZE]
    }

    /// All 512 entries.
    pub fn as_slice(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.perm
    }

    /// Entry at `index`, wrapping modulo 256.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.perm[index & (TABLE_SIZE - 1)]
    }

    /// Double-indirection hash of a lattice corner.
    ///
    /// `x` and `y` are masked cell coordinates, optionally plus one
    /// (so at most 256 each); the highest index touched is 511.
    #[inline]
    pub fn hash(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x <= TABLE_SIZE && y <= TABLE_SIZE);
        self.perm[self.perm[x] as usize + y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> PermutationTable {
        let mut base = [0u8; TABLE_SIZE];
        for (i, v) in base.iter_mut().enumerate() {
            *v = i as u8;
        }
        PermutationTable::from_base(base).unwrap()
    }

    #[test]
    fn test_base_is_permutation() {
        for bound in [ShuffleBound::Reference, ShuffleBound::Unbiased] {
            let table = PermutationTable::from_seed(42, bound);
            let mut sorted = table.base().to_vec();
            sorted.sort_unstable();
            let expected: Vec<u8> = (0..=255).collect();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_table_is_doubled() {
        let table = PermutationTable::from_seed(1234, ShuffleBound::Reference);
        let perm = table.as_slice();
        for i in 0..TABLE_SIZE {
            assert_eq!(perm[i], perm[i + TABLE_SIZE]);
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = PermutationTable::from_seed(99, ShuffleBound::Reference);
        let b = PermutationTable::from_seed(99, ShuffleBound::Reference);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = PermutationTable::from_seed(1, ShuffleBound::Reference);
        let b = PermutationTable::from_seed(2, ShuffleBound::Reference);
        assert_ne!(a, b);
    }

    #[test]
    fn test_bounds_diverge_for_same_seed() {
        let a = PermutationTable::from_seed(5, ShuffleBound::Reference);
        let b = PermutationTable::from_seed(5, ShuffleBound::Unbiased);
        assert_ne!(a.base(), b.base());
    }

    #[test]
    fn test_from_base_rejects_repeats() {
        let mut base = [0u8; TABLE_SIZE];
        for (i, v) in base.iter_mut().enumerate() {
            *v = i as u8;
        }
        base[10] = 11;
        assert!(PermutationTable::from_base(base).is_none());
    }

    #[test]
    fn test_get_wraps() {
        let table = PermutationTable::from_seed(3, ShuffleBound::Reference);
        assert_eq!(table.get(300), table.get(300 - 256));
        assert_eq!(table.get(511), table.base()[255]);
    }

    #[test]
    fn test_hash_identity_table() {
        let table = identity();
        assert_eq!(table.hash(0, 0), 0);
        assert_eq!(table.hash(3, 5), 8);
        // 255 + 256 is the largest reachable index
        assert_eq!(table.hash(255, 256), 255);
        assert_eq!(table.hash(256, 256), 0);
    }

    /// Index 255 never takes part in a swap under the reference bound.
    #[test]
    fn test_reference_bound_pins_last_slot() {
        for seed in 0..32 {
            let table = PermutationTable::from_seed(seed, ShuffleBound::Reference);
            assert_eq!(table.base()[255], 255);
        }
    }
}
