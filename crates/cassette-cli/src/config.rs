//! Generator configuration loading.

use std::fs;

use anyhow::{Context, Result};
use cassette_spec::GeneratorConfig;

use crate::cli_args::TuningArgs;

/// Load the config file named in `args` (or the defaults) and apply the
/// command-line overrides on top.
pub fn load_config(args: &TuningArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            GeneratorConfig::from_json(&content)
                .with_context(|| format!("Failed to parse config file: {}", path))?
        }
        None => GeneratorConfig::default(),
    };

    if let Some(chance) = args.stripe_chance {
        config = config.with_stripe_chance(chance);
    }
    if let Some(chance) = args.thin_stripe_chance {
        config = config.with_thin_stripe_chance(chance);
    }
    if let Some(chance) = args.horizontal_stripe_chance {
        config = config.with_horizontal_stripe_chance(chance);
    }
    if let Some(max) = args.max_stripes {
        config = config.with_max_stripes(max);
    }

    tracing::debug!(?config, "loaded generator config");
    Ok(config)
}
