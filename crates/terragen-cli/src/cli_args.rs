//! CLI argument definitions for the Terragen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use terragen_cli::commands::TerrainArgs;

/// Terragen - layered gradient noise height fields
#[derive(Parser)]
#[command(name = "terragen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a heightmap and write it as a grayscale PNG
    Generate {
        /// Path to a JSON terrain config (flags override its values)
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        terrain: TerrainArgs,

        /// Output PNG path
        #[arg(short, long)]
        output: String,

        /// PNG compression preset
        #[arg(long, default_value = "default", value_parser = ["default", "fast", "best"])]
        compression: String,
    },

    /// Print the fractal noise value at a single coordinate
    Sample {
        /// X coordinate (in pixels, before scaling)
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,

        /// Y coordinate (in pixels, before scaling)
        #[arg(short, long, allow_negative_numbers = true)]
        y: f64,

        /// Path to a JSON terrain config (flags override its values)
        #[arg(short, long)]
        config: Option<String>,

        #[command(flatten)]
        terrain: TerrainArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the shuffled 256-entry permutation table for a seed
    Table {
        /// Seed for the permutation table
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        /// Draw swap partners from [i, 255] instead of [i, 254]
        #[arg(long)]
        unbiased_shuffle: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
