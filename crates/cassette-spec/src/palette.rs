//! Palette catalog types.
//!
//! A palette catalog holds three independent, ordered lists of candidate
//! colors. One color is sampled from each list per generated cassette:
//! the shell (edge) color, the decal background color, and the overlay
//! square color. Colors are stored as opaque `[r, g, b]` byte triples.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An opaque color as `[r, g, b]` bytes.
pub type RgbTriple = [u8; 3];

/// Names one of the three palette lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Cassette shell colors.
    EdgeMain,
    /// Decal background colors.
    DecalMain,
    /// Overlay square colors.
    OverlaySquare,
}

impl CatalogKind {
    /// All catalog kinds, in sampling order.
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::EdgeMain,
        CatalogKind::DecalMain,
        CatalogKind::OverlaySquare,
    ];

    /// Returns the serialized field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::EdgeMain => "edge_main",
            CatalogKind::DecalMain => "decal_main",
            CatalogKind::OverlaySquare => "overlay_square",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized palette catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteSpec {
    /// Candidate shell colors.
    pub edge_main: Vec<RgbTriple>,
    /// Candidate decal background colors.
    pub decal_main: Vec<RgbTriple>,
    /// Candidate overlay square colors.
    pub overlay_square: Vec<RgbTriple>,
}

impl PaletteSpec {
    /// Returns the list for a catalog kind.
    pub fn list(&self, kind: CatalogKind) -> &[RgbTriple] {
        match kind {
            CatalogKind::EdgeMain => &self.edge_main,
            CatalogKind::DecalMain => &self.decal_main,
            CatalogKind::OverlaySquare => &self.overlay_square,
        }
    }

    /// Checks that every list holds at least one color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in CatalogKind::ALL {
            if self.list(kind).is_empty() {
                return Err(ConfigError::EmptyCatalog(kind));
            }
        }
        Ok(())
    }
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self {
            edge_main: vec![
                [38, 38, 42],    // black shell
                [92, 94, 102],   // smoke
                [222, 220, 212], // chalk
                [214, 200, 170], // cream
                [170, 48, 52],   // red
                [40, 56, 110],   // navy
                [44, 120, 118],  // teal
                [196, 150, 46],  // mustard
            ],
            decal_main: vec![
                [240, 232, 210],
                [250, 200, 70],
                [230, 110, 60],
                [90, 170, 200],
                [200, 80, 120],
                [120, 190, 110],
                [245, 245, 245],
                [60, 60, 70],
            ],
            overlay_square: vec![
                [255, 255, 255],
                [20, 20, 24],
                [255, 90, 90],
                [80, 200, 255],
                [255, 220, 60],
                [150, 100, 220],
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_catalog_is_valid() {
        let palette = PaletteSpec::default();
        assert!(palette.validate().is_ok());
        for kind in CatalogKind::ALL {
            assert!(!palette.list(kind).is_empty());
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let mut palette = PaletteSpec::default();
        palette.overlay_square.clear();
        assert_eq!(
            palette.validate(),
            Err(ConfigError::EmptyCatalog(CatalogKind::OverlaySquare))
        );
    }

    #[test]
    fn test_first_empty_list_is_reported() {
        let palette = PaletteSpec {
            edge_main: vec![],
            decal_main: vec![],
            overlay_square: vec![[1, 2, 3]],
        };
        assert_eq!(
            palette.validate(),
            Err(ConfigError::EmptyCatalog(CatalogKind::EdgeMain))
        );
    }

    #[test]
    fn test_catalog_kind_serde_names() {
        for kind in CatalogKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_palette_parses_byte_triples() {
        let json = r#"{
            "edge_main": [[10, 20, 30]],
            "decal_main": [[40, 50, 60], [70, 80, 90]],
            "overlay_square": [[255, 255, 255]]
        }"#;
        let palette: PaletteSpec = serde_json::from_str(json).unwrap();
        assert_eq!(palette.edge_main, vec![[10, 20, 30]]);
        assert_eq!(palette.decal_main.len(), 2);
    }

    #[test]
    fn test_palette_rejects_out_of_range_channel() {
        let json = r#"{
            "edge_main": [[256, 0, 0]],
            "decal_main": [[0, 0, 0]],
            "overlay_square": [[0, 0, 0]]
        }"#;
        assert!(serde_json::from_str::<PaletteSpec>(json).is_err());
    }
}
