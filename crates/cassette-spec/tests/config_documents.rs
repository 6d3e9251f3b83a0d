//! Parsing of complete generator config documents.

use cassette_spec::{CatalogKind, ConfigError, GeneratorConfig, PaletteSpec};
use pretty_assertions::assert_eq;

const FULL_DOCUMENT: &str = r#"{
    "stripe_chance": 0.9,
    "thin_stripe_chance": 0.25,
    "horizontal_stripe_chance": 1.0,
    "max_stripes": 2,
    "overlay_neighbor_chance": 0.0,
    "palette": {
        "edge_main": [[20, 20, 20], [230, 230, 220]],
        "decal_main": [[250, 200, 70]],
        "overlay_square": [[255, 255, 255], [0, 0, 0]]
    }
}"#;

#[test]
fn test_full_document() {
    let config = GeneratorConfig::from_json(FULL_DOCUMENT).unwrap();
    assert!(config.validate().is_ok());

    assert_eq!(config.stripe_chance, 0.9);
    assert_eq!(config.thin_stripe_chance, 0.25);
    assert_eq!(config.horizontal_stripe_chance, 1.0);
    assert_eq!(config.max_stripes, 2);
    assert_eq!(config.overlay_neighbor_chance, 0.0);
    assert_eq!(
        config.palette,
        PaletteSpec {
            edge_main: vec![[20, 20, 20], [230, 230, 220]],
            decal_main: vec![[250, 200, 70]],
            overlay_square: vec![[255, 255, 255], [0, 0, 0]],
        }
    );
}

#[test]
fn test_document_round_trips_through_pretty_json() {
    let config = GeneratorConfig::from_json(FULL_DOCUMENT).unwrap();
    let again = GeneratorConfig::from_json(&config.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again, config);
}

#[test]
fn test_parse_succeeds_but_validation_fails() {
    let config = GeneratorConfig::from_json(
        r#"{"palette": {"edge_main": [], "decal_main": [[1,1,1]], "overlay_square": [[2,2,2]]}}"#,
    )
    .unwrap();
    assert_eq!(
        config.validate(),
        Err(ConfigError::EmptyCatalog(CatalogKind::EdgeMain))
    );
}

#[test]
fn test_partial_palette_is_rejected() {
    let err = GeneratorConfig::from_json(r#"{"palette": {"edge_main": [[1, 1, 1]]}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::JsonParse(_)));
}
