//! Runtime palette catalog.
//!
//! Built once from a validated [`PaletteSpec`] and only read afterwards, so a
//! single catalog can be shared by any number of concurrent generation runs.

use cassette_spec::{CatalogKind, ConfigError, PaletteSpec};

use crate::color::{darken, lighten, Rgba8};
use crate::rng::RandomSource;

/// Fixed color of the visible tape.
pub const TAPE_COLOR: Rgba8 = Rgba8::opaque(98, 85, 101);

/// Three non-empty, ordered lists of candidate colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteCatalog {
    edge_main: Vec<Rgba8>,
    decal_main: Vec<Rgba8>,
    overlay_square: Vec<Rgba8>,
}

impl PaletteCatalog {
    /// Build a catalog, rejecting any empty list.
    pub fn from_spec(spec: &PaletteSpec) -> Result<Self, ConfigError> {
        spec.validate()?;

        let convert = |kind: CatalogKind| -> Vec<Rgba8> {
            spec.list(kind).iter().copied().map(Rgba8::from).collect()
        };
        Ok(Self {
            edge_main: convert(CatalogKind::EdgeMain),
            decal_main: convert(CatalogKind::DecalMain),
            overlay_square: convert(CatalogKind::OverlaySquare),
        })
    }

    /// Colors of one list.
    pub fn colors(&self, kind: CatalogKind) -> &[Rgba8] {
        match kind {
            CatalogKind::EdgeMain => &self.edge_main,
            CatalogKind::DecalMain => &self.decal_main,
            CatalogKind::OverlaySquare => &self.overlay_square,
        }
    }

    /// Pick one color of a list uniformly.
    pub fn sample<R: RandomSource + ?Sized>(&self, kind: CatalogKind, rng: &mut R) -> Rgba8 {
        let colors = self.colors(kind);
        let index = rng.range(0, colors.len() as i32) as usize;
        colors[index]
    }
}

impl TryFrom<&PaletteSpec> for PaletteCatalog {
    type Error = ConfigError;

    fn try_from(spec: &PaletteSpec) -> Result<Self, Self::Error> {
        Self::from_spec(spec)
    }
}

/// The colors chosen for one cassette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CassetteColors {
    pub edge_main: Rgba8,
    /// `lighten(edge_main)`.
    pub edge_accent: Rgba8,
    /// `darken(edge_main)`.
    pub bottom_line: Rgba8,
    pub decal_main: Rgba8,
    pub overlay_square: Rgba8,
    pub tape: Rgba8,
}

impl CassetteColors {
    /// Sample edge, decal, and overlay colors (in that order) and derive
    /// the shades from the edge color.
    pub fn choose<R: RandomSource + ?Sized>(catalog: &PaletteCatalog, rng: &mut R) -> Self {
        let edge_main = catalog.sample(CatalogKind::EdgeMain, rng);
        let decal_main = catalog.sample(CatalogKind::DecalMain, rng);
        let overlay_square = catalog.sample(CatalogKind::OverlaySquare, rng);

        Self {
            edge_main,
            edge_accent: lighten(edge_main),
            bottom_line: darken(edge_main),
            decal_main,
            overlay_square,
            tape: TAPE_COLOR,
        }
    }
}
