//! Stats command implementation
//!
//! Samples many cassettes and reports how often each randomized feature
//! appears, for checking tuned probabilities.

use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::Result;
use cassette_backend::{CassetteDescriptor, CassetteGenerator, DecalSize, StripeOrientation};
use colored::Colorize;
use serde::Serialize;

use crate::cli_args::TuningArgs;
use crate::config::load_config;

/// Feature frequencies over a sample of cassettes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub samples: usize,
    pub striped: usize,
    pub horizontal: usize,
    pub vertical: usize,
    pub large_decal: usize,
    pub small_decal: usize,
    /// Cassette count per bottom hole count.
    pub bottom_holes: BTreeMap<u32, usize>,
    pub with_overlays: usize,
    /// Mean stripe lines per striped cassette.
    pub mean_stripe_lines: f64,
    /// Mean overlay squares per cassette with overlays.
    pub mean_overlay_squares: f64,
}

impl StatsReport {
    /// Tally the features of a set of cassettes.
    pub fn collect(cassettes: &[CassetteDescriptor]) -> Self {
        let mut report = StatsReport {
            samples: cassettes.len(),
            striped: 0,
            horizontal: 0,
            vertical: 0,
            large_decal: 0,
            small_decal: 0,
            bottom_holes: [0, 2, 4].into_iter().map(|n| (n, 0)).collect(),
            with_overlays: 0,
            mean_stripe_lines: 0.0,
            mean_overlay_squares: 0.0,
        };
        let mut stripe_lines = 0usize;
        let mut overlay_squares = 0usize;

        for cassette in cassettes {
            let layout = cassette.layout();

            match layout.decal_size {
                DecalSize::Small => report.small_decal += 1,
                DecalSize::Large => report.large_decal += 1,
            }
            *report
                .bottom_holes
                .entry(layout.bottom_holes.count())
                .or_insert(0) += 1;

            if let Some(plan) = &layout.stripes {
                report.striped += 1;
                stripe_lines += plan.lines.len();
                match plan.orientation {
                    StripeOrientation::Horizontal => report.horizontal += 1,
                    StripeOrientation::Vertical => report.vertical += 1,
                }
            }

            if let Some(plan) = &layout.overlays {
                report.with_overlays += 1;
                overlay_squares += plan.positions.len();
            }
        }

        report.mean_stripe_lines = mean(stripe_lines, report.striped);
        report.mean_overlay_squares = mean(overlay_squares, report.with_overlays);
        report
    }
}

fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn percent(count: usize, samples: usize) -> String {
    format!("{:5.1}%", mean(count * 100, samples))
}

/// Run the stats command
///
/// # Arguments
/// * `samples` - Number of cassettes to generate
/// * `seed` - Base seed of the batch
/// * `json` - Print JSON instead of a colored table
/// * `tuning` - Config file and overrides
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(samples: u32, seed: u32, json: bool, tuning: &TuningArgs) -> Result<ExitCode> {
    let generator = CassetteGenerator::new(load_config(tuning)?)?;
    let cassettes = generator.generate_batch(seed, samples)?;
    let report = StatsReport::collect(&cassettes);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    let n = report.samples;
    println!("{} {} cassettes", "Stats:".cyan().bold(), n);
    println!("  {}: {}", "Stripes".dimmed(), percent(report.striped, n));
    println!(
        "    {}: {}",
        "horizontal".dimmed(),
        percent(report.horizontal, n)
    );
    println!("    {}: {}", "vertical".dimmed(), percent(report.vertical, n));
    println!(
        "    {}: {:.2}",
        "mean lines".dimmed(),
        report.mean_stripe_lines
    );
    println!(
        "  {}: {}",
        "Overlay squares".dimmed(),
        percent(report.with_overlays, n)
    );
    println!(
        "    {}: {:.2}",
        "mean squares".dimmed(),
        report.mean_overlay_squares
    );
    println!(
        "  {}: {} small, {} large",
        "Decal size".dimmed(),
        percent(report.small_decal, n),
        percent(report.large_decal, n)
    );
    for (holes, count) in &report.bottom_holes {
        println!(
            "  {}: {}",
            format!("{} bottom holes", holes).dimmed(),
            percent(*count, n)
        );
    }

    Ok(ExitCode::SUCCESS)
}
