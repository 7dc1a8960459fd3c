//! Table command implementation
//!
//! Prints the shuffled permutation table for a seed.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use terragen_core::permutation::TABLE_SIZE;
use terragen_core::{PermutationTable, ShuffleBound};

use super::shuffle_name;

/// Format the 256 base entries as 16 rows of 16 values.
pub fn format_rows(table: &PermutationTable) -> Vec<String> {
    (0..TABLE_SIZE)
        .step_by(16)
        .map(|start| {
            (start..start + 16)
                .map(|i| format!("{:>3}", table.get(i)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Run the table command
///
/// # Arguments
/// * `seed` - Seed for the permutation table
/// * `unbiased` - Use the `[i, 255]` shuffle bound
/// * `json_output` - Whether to output the entries as a JSON array
///
/// # Returns
/// Exit code: 0 success
pub fn run(seed: u32, unbiased: bool, json_output: bool) -> Result<ExitCode> {
    let bound = if unbiased {
        ShuffleBound::Unbiased
    } else {
        ShuffleBound::Reference
    };
    let table = PermutationTable::from_seed(seed, bound);

    if json_output {
        println!("{}", serde_json::to_string(table.base())?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} seed={} shuffle={}",
        "Permutation table:".cyan().bold(),
        seed,
        shuffle_name(bound)
    );
    for (i, row) in format_rows(&table).iter().enumerate() {
        println!("{} {}", format!("{:>3}:", i * 16).dimmed(), row);
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rows_shape() {
        let table = PermutationTable::from_seed(1, ShuffleBound::Reference);
        let rows = format_rows(&table);
        assert_eq!(rows.len(), 16);
        for row in &rows {
            assert_eq!(row.split_whitespace().count(), 16);
        }
    }

    #[test]
    fn test_format_rows_round_trip_values() {
        let table = PermutationTable::from_seed(8, ShuffleBound::Unbiased);
        let parsed: Vec<u8> = format_rows(&table)
            .iter()
            .flat_map(|row| row.split_whitespace().map(|v| v.parse::<u8>().unwrap()))
            .collect();
        assert_eq!(parsed, table.base());
    }

    #[test]
    fn test_format_rows_reference_ends_with_255() {
        let table = PermutationTable::from_seed(21, ShuffleBound::Reference);
        let rows = format_rows(&table);
        assert!(rows[15].ends_with("255"));
    }
}
