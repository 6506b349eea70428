//! Tests for TOML config loading.

use super::*;
use quadsplit_common::{ConfigError, SplitAxis};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_quadsplit_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.toml");
    std::fs::write(
        &path,
        r#"
split_axis = "vertical"
min_region_size = 60.0
snap_quantum = 0.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.split_axis, SplitAxis::Vertical);
    assert_eq!(config.min_region_size, 60.0);
    assert_eq!(config.snap_quantum, 0.0);
    // Defaults preserved
    assert!(config.shows_handle);
    assert!(!config.secondary_placement);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_empty_string_gives_defaults() {
    let config = load_from_str("").unwrap();
    assert_eq!(config, crate::LayoutConfig::default());
}

#[test]
fn unknown_axis_is_a_parse_error() {
    let result = load_from_str("split_axis = \"diagonal\"");
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_values_are_returned_with_warning() {
    let config = load_from_str("min_region_size = -10.0").unwrap();
    assert_eq!(config.min_region_size, -10.0);
}
