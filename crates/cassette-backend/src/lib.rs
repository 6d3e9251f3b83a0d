//! Cassette Texture Generation Backend
//!
//! This crate procedurally generates the 28x19 pixel-art face of a cassette
//! tape. Every cell is assigned a color by ordered zone rules that consult a
//! layout of randomized decorations: stripes, overlay squares, bottom holes,
//! decal size, and a sampled palette.
//!
//! # Example
//!
//! ```
//! use cassette_backend::{CassetteGenerator, Rgba8};
//! use cassette_spec::GeneratorConfig;
//!
//! let generator = CassetteGenerator::new(GeneratorConfig::default()).unwrap();
//! let cassette = generator.generate_seeded(42).unwrap();
//!
//! assert_eq!(cassette.pixel_map().len(), 28 * 19);
//! assert_eq!(cassette.pixel_map().get(0, 0), Some(Rgba8::TRANSPARENT));
//! ```
//!
//! # Determinism
//!
//! Generation draws from an injected [`RandomSource`] in a fixed order. The
//! same sequence of draws and the same configuration always produce the
//! same descriptor. [`DeterministicRng`] provides seeded PCG32 draws, and
//! batch generation derives one seed per cassette with BLAKE3.
//!
//! Rendering the pixel map (textures, sprites, scene placement) is left to
//! the caller; [`PixelMap::to_rgba8`] gives bytes ready for upload with
//! nearest-neighbor sampling.

pub mod builder;
pub mod color;
pub mod descriptor;
pub mod error;
pub mod generate;
pub mod overlay;
pub mod palette;
pub mod pixel_map;
pub mod rng;
pub mod stripes;
pub mod zones;

// Re-export main types for convenience
pub use builder::{build_descriptor, build_pixel_map};
pub use color::{darken, lighten, random_opaque, Rgba8};
pub use descriptor::{
    BottomHoles, CassetteDescriptor, CassetteLayout, DecalBounds, DecalSize, GridPos,
    OverlayPlan, StripeLine, StripeOrientation, StripePlan, DECAL_BOUNDS, HEIGHT, WIDTH,
};
pub use error::CassetteError;
pub use generate::{generate_cassette, CassetteGenerator, DEFAULT_BATCH_SIZE};
pub use palette::{CassetteColors, PaletteCatalog, TAPE_COLOR};
pub use pixel_map::PixelMap;
pub use rng::{DeterministicRng, RandomSource};
pub use zones::{classify, color_at, Area, Zone};
