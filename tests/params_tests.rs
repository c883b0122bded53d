#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::io::Write;

use forage::error::ConfigError;
use forage::simulation::params::Params;
use tempfile::NamedTempFile;

fn write_params(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes())
        .expect("Failed to write params");
    file
}

#[test]
fn test_defaults_are_valid() {
    let params = Params::default();
    assert!(params.validate().is_ok());
    assert_eq!(params.sick_chance, 1.0 / 8.0);
    assert_eq!(params.germination_chance, 1.0 / 15.0);
    assert_eq!(params.backward_factor, 0.25);
}

#[test]
fn test_load_partial_file() {
    let file = write_params(r#"{ "seed": 12, "n_shrubs": 30, "base_speed": 7.5 }"#);
    let path = file.path().to_str().expect("Invalid path");

    let params = Params::from_file(path).expect("Failed to load params");

    assert_eq!(params.seed, Some(12));
    assert_eq!(params.n_shrubs, 30);
    assert_eq!(params.base_speed, 7.5);
    // unspecified fields fall back to defaults
    assert_eq!(params.max_shrubs, Params::default().max_shrubs);
    assert_eq!(params.turn_speed, Params::default().turn_speed);
}

#[test]
fn test_roundtrip_through_json() {
    let original = Params {
        seed: Some(5),
        n_obstacles: 3,
        ..Params::default()
    };
    let file = write_params(&serde_json::to_string_pretty(&original).expect("Failed to serialize"));
    let path = file.path().to_str().expect("Invalid path");

    let loaded = Params::from_file(path).expect("Failed to load params");
    assert_eq!(loaded.seed, Some(5));
    assert_eq!(loaded.n_obstacles, 3);
}

#[test]
fn test_invalid_probability_is_rejected() {
    let file = write_params(r#"{ "sick_chance": 1.5 }"#);
    let path = file.path().to_str().expect("Invalid path");

    let err = Params::from_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { name: "sick_chance", .. }));
    assert!(err.to_string().contains("sick_chance"));
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases = [
        (
            Params {
                germination_chance: -0.1,
                ..Params::default()
            },
            "germination_chance",
        ),
        (
            Params {
                base_speed: 0.0,
                ..Params::default()
            },
            "base_speed",
        ),
        (
            Params {
                backward_factor: 2.0,
                ..Params::default()
            },
            "backward_factor",
        ),
        (
            Params {
                seed_jitter: -1.0,
                ..Params::default()
            },
            "seed_jitter",
        ),
        (
            Params {
                n_shrubs: 100,
                max_shrubs: 10,
                ..Params::default()
            },
            "n_shrubs",
        ),
        (
            Params {
                world_half_size: 1.0,
                player_width: 3.0,
                ..Params::default()
            },
            "player_width",
        ),
    ];

    for (params, field) in cases {
        match params.validate() {
            Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, field),
            other => panic!("expected {field} to be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_malformed_json() {
    let file = write_params("{ not json");
    let path = file.path().to_str().expect("Invalid path");

    let err = Params::from_file(path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.json");

    let err = Params::from_file(path.to_str().expect("Invalid path")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
