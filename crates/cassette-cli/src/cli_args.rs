//! CLI argument definitions for the cassette command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};

/// Cassette - procedural pixel-art cassette generator
#[derive(Parser)]
#[command(name = "cassette")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log generation stages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate cassettes and draw them in the terminal
    Preview {
        /// Base seed of the batch
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        /// Number of cassettes to generate
        #[arg(short = 'n', long, default_value_t = 9)]
        count: u32,

        /// Cassettes per row
        #[arg(long, default_value_t = 3)]
        columns: usize,

        /// Draw with characters instead of 24-bit color
        #[arg(long)]
        no_color: bool,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Generate many cassettes and report how often each feature appears
    Stats {
        /// Number of cassettes to sample
        #[arg(long, default_value_t = 1000)]
        samples: u32,

        /// Base seed of the sample batch
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

/// Generator configuration sources. Flags override the config file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct TuningArgs {
    /// Path to a generator config file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Probability that a cassette has stripes
    #[arg(long)]
    pub stripe_chance: Option<f64>,

    /// Probability that a stripe is one cell thick
    #[arg(long)]
    pub thin_stripe_chance: Option<f64>,

    /// Probability that stripes run horizontally
    #[arg(long)]
    pub horizontal_stripe_chance: Option<f64>,

    /// Maximum number of stripes
    #[arg(long)]
    pub max_stripes: Option<u32>,
}
