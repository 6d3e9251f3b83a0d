//! Integration tests for the CLI commands.

use std::io::Write;
use std::process::ExitCode;

use cassette_cli::cli_args::TuningArgs;
use cassette_cli::commands::{preview, stats};

fn config_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn tuning_for(file: &tempfile::NamedTempFile) -> TuningArgs {
    TuningArgs {
        config: Some(file.path().to_string_lossy().into_owned()),
        ..TuningArgs::default()
    }
}

#[test]
fn test_preview_succeeds_with_defaults() {
    let code = preview::run(3, 4, 2, false, &TuningArgs::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn test_stats_json_succeeds() {
    let code = stats::run(20, 0, true, &TuningArgs::default()).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn test_empty_palette_list_is_reported() {
    let file = config_file(
        r#"{
            "palette": {
                "edge_main": [[10, 10, 10]],
                "decal_main": [],
                "overlay_square": [[255, 255, 255]]
            }
        }"#,
    );

    let err = preview::run(0, 1, 1, false, &tuning_for(&file)).unwrap_err();
    assert!(err.to_string().contains("decal_main"), "{err}");
}

#[test]
fn test_oversized_max_stripes_is_reported() {
    for max in [i32::MAX as u32, 3_000_000_000] {
        let tuning = TuningArgs {
            stripe_chance: Some(1.0),
            max_stripes: Some(max),
            ..TuningArgs::default()
        };
        let err = preview::run(1, 1, 1, false, &tuning).unwrap_err();
        assert!(err.to_string().contains("max_stripes"), "{err}");
    }
}

#[test]
fn test_out_of_range_override_is_reported() {
    let tuning = TuningArgs {
        thin_stripe_chance: Some(2.0),
        ..TuningArgs::default()
    };
    let err = stats::run(5, 0, true, &tuning).unwrap_err();
    assert!(err.to_string().contains("thin_stripe_chance"), "{err}");
}

#[test]
fn test_custom_palette_file_is_used() {
    let file = config_file(
        r#"{
            "stripe_chance": 0.0,
            "palette": {
                "edge_main": [[10, 20, 30]],
                "decal_main": [[40, 50, 60]],
                "overlay_square": [[70, 80, 90]]
            }
        }"#,
    );
    let code = stats::run(10, 1, true, &tuning_for(&file)).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}
