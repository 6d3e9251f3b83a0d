//! Preview command implementation
//!
//! Generates a batch of cassettes and draws them in the terminal.

use std::process::ExitCode;

use anyhow::Result;
use cassette_backend::CassetteGenerator;
use colored::Colorize;

use crate::cli_args::TuningArgs;
use crate::config::load_config;
use crate::render::{arrange, render_pixel_map, summarize};

/// Run the preview command
///
/// # Arguments
/// * `seed` - Base seed of the batch
/// * `count` - Number of cassettes
/// * `columns` - Cassettes per row
/// * `use_color` - Draw with 24-bit color
/// * `tuning` - Config file and overrides
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    seed: u32,
    count: u32,
    columns: usize,
    use_color: bool,
    tuning: &TuningArgs,
) -> Result<ExitCode> {
    let generator = CassetteGenerator::new(load_config(tuning)?)?;
    let cassettes = generator.generate_batch(seed, count)?;

    println!(
        "{} {} cassette{} from seed {}",
        "Preview:".cyan().bold(),
        count,
        if count == 1 { "" } else { "s" },
        seed
    );
    println!();

    let blocks: Vec<Vec<String>> = cassettes
        .iter()
        .map(|cassette| render_pixel_map(cassette.pixel_map(), use_color))
        .collect();
    for line in arrange(&blocks, columns, "  ") {
        println!("{}", line);
    }

    for (index, cassette) in cassettes.iter().enumerate() {
        println!(
            "  {} {}",
            format!("#{}", index).dimmed(),
            summarize(cassette.layout())
        );
    }

    Ok(ExitCode::SUCCESS)
}
