//! Terragen CLI - command-line interface for height-field rendering
//!
//! This binary renders fractal gradient noise to grayscale PNG heightmaps and
//! exposes the noise engine for inspection.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use terragen_cli::commands;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            terrain,
            output,
            compression,
        } => commands::generate::run(config.as_deref(), &terrain, &output, &compression),
        Commands::Sample {
            x,
            y,
            config,
            terrain,
            json,
        } => commands::sample::run(x, y, config.as_deref(), &terrain, json),
        Commands::Table {
            seed,
            unbiased_shuffle,
            json,
        } => commands::table::run(seed, unbiased_shuffle, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "terragen",
            "generate",
            "--seed",
            "42",
            "--octaves",
            "6",
            "--persistence",
            "-0.5",
            "-o",
            "out.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                terrain, output, ..
            } => {
                assert_eq!(output, "out.png");
                assert_eq!(terrain.seed, Some(42));
                assert_eq!(terrain.octaves, Some(6));
                assert_eq!(terrain.persistence, Some(-0.5));
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_sample_negative_coordinates() {
        let cli = Cli::try_parse_from(["terragen", "sample", "-x", "-3.5", "-y", "10"]).unwrap();
        match cli.command {
            Commands::Sample { x, y, json, .. } => {
                assert_eq!(x, -3.5);
                assert_eq!(y, 10.0);
                assert!(!json);
            }
            _ => panic!("Expected Sample command"),
        }
    }

    #[test]
    fn test_negative_octaves_rejected() {
        let result =
            Cli::try_parse_from(["terragen", "generate", "--octaves", "-1", "-o", "out.png"]);
        assert!(result.is_err());
    }
}
