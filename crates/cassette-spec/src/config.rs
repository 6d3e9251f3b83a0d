//! Generator configuration.
//!
//! The tunable knobs of the cassette generator. Everything not listed here
//! (grid size, decal bounds, hole positions, overlay quadrants, tape color)
//! is a fixed constant of the cassette design and lives in the backend.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::palette::PaletteSpec;

/// Fixed lower bound of the stripe count range.
pub const MIN_STRIPES: u32 = 1;

/// Largest accepted `max_stripes`. Stripe counts are drawn as `i32`, and the
/// decal spans at most 22 columns, so larger counts only repaint lines.
pub const MAX_STRIPES: u32 = 64;

/// Probability that a cassette receives overlay squares.
pub const OVERLAY_CHANCE: f64 = 0.9;

/// Inclusive lower bound of the overlay square count.
pub const OVERLAY_COUNT_MIN: i32 = 3;

/// Exclusive upper bound of the overlay square count.
pub const OVERLAY_COUNT_MAX: i32 = 7;

/// Tunable generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Probability that a cassette has stripes.
    #[serde(default = "default_stripe_chance")]
    pub stripe_chance: f64,
    /// Probability that a single stripe is one cell thick (otherwise two).
    #[serde(default = "default_thin_stripe_chance")]
    pub thin_stripe_chance: f64,
    /// Probability that stripes run horizontally (otherwise vertically).
    #[serde(default = "default_horizontal_stripe_chance")]
    pub horizontal_stripe_chance: f64,
    /// Inclusive upper bound of the stripe count.
    #[serde(default = "default_max_stripes")]
    pub max_stripes: u32,
    /// Probability that an overlay square is placed next to an earlier one.
    #[serde(default = "default_overlay_neighbor_chance")]
    pub overlay_neighbor_chance: f64,
    /// Candidate colors.
    #[serde(default)]
    pub palette: PaletteSpec,
}

fn default_stripe_chance() -> f64 {
    0.7
}

fn default_thin_stripe_chance() -> f64 {
    0.6
}

fn default_horizontal_stripe_chance() -> f64 {
    0.5
}

fn default_max_stripes() -> u32 {
    4
}

fn default_overlay_neighbor_chance() -> f64 {
    0.6
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            stripe_chance: default_stripe_chance(),
            thin_stripe_chance: default_thin_stripe_chance(),
            horizontal_stripe_chance: default_horizontal_stripe_chance(),
            max_stripes: default_max_stripes(),
            overlay_neighbor_chance: default_overlay_neighbor_chance(),
            palette: PaletteSpec::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the stripe chance.
    pub fn with_stripe_chance(mut self, chance: f64) -> Self {
        self.stripe_chance = chance;
        self
    }

    /// Sets the thin stripe chance.
    pub fn with_thin_stripe_chance(mut self, chance: f64) -> Self {
        self.thin_stripe_chance = chance;
        self
    }

    /// Sets the horizontal stripe chance.
    pub fn with_horizontal_stripe_chance(mut self, chance: f64) -> Self {
        self.horizontal_stripe_chance = chance;
        self
    }

    /// Sets the maximum stripe count.
    pub fn with_max_stripes(mut self, max_stripes: u32) -> Self {
        self.max_stripes = max_stripes;
        self
    }

    /// Sets the chance that an overlay square clusters next to an earlier one.
    pub fn with_overlay_neighbor_chance(mut self, chance: f64) -> Self {
        self.overlay_neighbor_chance = chance;
        self
    }

    /// Replaces the palette catalog.
    pub fn with_palette(mut self, palette: PaletteSpec) -> Self {
        self.palette = palette;
        self
    }

    /// Checks every probability, the stripe range, and the palette.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("stripe_chance", self.stripe_chance)?;
        check_probability("thin_stripe_chance", self.thin_stripe_chance)?;
        check_probability("horizontal_stripe_chance", self.horizontal_stripe_chance)?;
        check_probability("overlay_neighbor_chance", self.overlay_neighbor_chance)?;

        if !(MIN_STRIPES..=MAX_STRIPES).contains(&self.max_stripes) {
            return Err(ConfigError::InvalidStripeRange {
                min: MIN_STRIPES,
                max: self.max_stripes,
                limit: MAX_STRIPES,
            });
        }

        self.palette.validate()
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { field, value })
    }
}
