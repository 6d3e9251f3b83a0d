//! Cassette generation driver.
//!
//! Runs the stages in a fixed order, each returning the values it owns:
//! decal size, bottom holes, stripes, overlays, colors. The stages are
//! composed into an immutable [`CassetteLayout`] which the texture builder
//! then resolves cell by cell.

use cassette_spec::GeneratorConfig;
use rayon::prelude::*;

use crate::builder::build_descriptor;
use crate::descriptor::{
    BottomHoles, CassetteDescriptor, CassetteLayout, DecalSize, DECAL_BOUNDS,
};
use crate::error::CassetteError;
use crate::overlay::plan_overlays;
use crate::palette::{CassetteColors, PaletteCatalog};
use crate::rng::{DeterministicRng, RandomSource};
use crate::stripes::plan_stripes;

/// Number of cassettes in a default batch (a 3x3 sheet).
pub const DEFAULT_BATCH_SIZE: u32 = 9;

/// A validated configuration together with its palette catalog.
///
/// Holds no mutable state, so one generator can serve concurrent runs as
/// long as each run brings its own random source.
#[derive(Debug, Clone)]
pub struct CassetteGenerator {
    config: GeneratorConfig,
    catalog: PaletteCatalog,
}

impl CassetteGenerator {
    /// Validate `config` and build its palette catalog.
    pub fn new(config: GeneratorConfig) -> Result<Self, CassetteError> {
        config.validate()?;
        let catalog = PaletteCatalog::from_spec(&config.palette)?;
        Ok(Self { config, catalog })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &PaletteCatalog {
        &self.catalog
    }

    /// Make every random decision of one cassette.
    pub fn plan_layout<R: RandomSource + ?Sized>(&self, rng: &mut R) -> CassetteLayout {
        let decal_size = DecalSize::sample(rng);
        let bottom_holes = BottomHoles::sample(rng);
        tracing::debug!(?decal_size, holes = bottom_holes.count(), "sampled geometry");

        let stripes = plan_stripes(&self.config, &DECAL_BOUNDS, rng);
        if let Some(plan) = &stripes {
            tracing::debug!(
                orientation = ?plan.orientation,
                lines = plan.lines.len(),
                "planned stripes"
            );
        }

        let overlays = plan_overlays(&self.config, rng);
        if let Some(plan) = &overlays {
            tracing::debug!(squares = plan.positions.len(), "planned overlay squares");
        }

        let colors = CassetteColors::choose(&self.catalog, rng);
        tracing::debug!(
            edge = ?colors.edge_main,
            decal = ?colors.decal_main,
            overlay = ?colors.overlay_square,
            "chose colors"
        );

        CassetteLayout {
            decal_size,
            bottom_holes,
            stripes,
            overlays,
            colors,
        }
    }

    /// Generate one cassette from the given random source.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<CassetteDescriptor, CassetteError> {
        let layout = self.plan_layout(rng);
        build_descriptor(layout)
    }

    /// Generate one cassette from a seed.
    pub fn generate_seeded(&self, seed: u32) -> Result<CassetteDescriptor, CassetteError> {
        let mut rng = DeterministicRng::new(seed);
        self.generate(&mut rng)
    }

    /// Generate `count` cassettes in parallel.
    ///
    /// Cassette `i` is generated from `derive_cassette_seed(base_seed, i)`,
    /// so the result does not depend on scheduling and comes back in index
    /// order.
    pub fn generate_batch(
        &self,
        base_seed: u32,
        count: u32,
    ) -> Result<Vec<CassetteDescriptor>, CassetteError> {
        tracing::debug!(base_seed, count, "generating batch");
        (0..count)
            .into_par_iter()
            .map(|index| {
                self.generate_seeded(DeterministicRng::derive_cassette_seed(base_seed, index))
            })
            .collect()
    }
}

/// Generate a single cassette.
pub fn generate_cassette(
    config: &GeneratorConfig,
    seed: u32,
) -> Result<CassetteDescriptor, CassetteError> {
    CassetteGenerator::new(config.clone())?.generate_seeded(seed)
}
