//! Cassette Generator Configuration Library
//!
//! This crate provides the declarative configuration consumed by the cassette
//! texture generator: the tunable probabilities that drive the stripe and
//! overlay planners, and the palette catalog the base colors are sampled from.
//!
//! # Example
//!
//! ```
//! use cassette_spec::GeneratorConfig;
//!
//! let config = GeneratorConfig::default()
//!     .with_stripe_chance(0.9)
//!     .with_max_stripes(6);
//!
//! assert!(config.validate().is_ok());
//!
//! let json = config.to_json_pretty().unwrap();
//! let parsed = GeneratorConfig::from_json(&json).unwrap();
//! assert_eq!(parsed, config);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Generator configuration, defaults, and validation
//! - [`error`]: Configuration error types
//! - [`palette`]: Serialized palette catalog and the built-in default colors

pub mod config;
pub mod error;
pub mod palette;

pub use config::{
    GeneratorConfig, MAX_STRIPES, MIN_STRIPES, OVERLAY_CHANCE, OVERLAY_COUNT_MAX,
    OVERLAY_COUNT_MIN,
};
pub use error::ConfigError;
pub use palette::{CatalogKind, PaletteSpec, RgbTriple};
