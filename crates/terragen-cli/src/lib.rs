//! Terragen CLI library.
//!
//! Command implementations for the `terragen` binary: rendering heightmaps to
//! PNG, sampling single coordinates and printing permutation tables.

pub mod commands;
