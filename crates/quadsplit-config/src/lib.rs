//! Split layout configuration.
//!
//! Provides the TOML-backed [`LayoutConfig`] consumed by the layout engine,
//! together with validation and loading helpers. Every field has a default,
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust
//! use quadsplit_config::{config_to_json, toml_loader, LayoutConfig};
//!
//! let config = toml_loader::load_from_str("inner_padding = 8.0").unwrap();
//! assert_eq!(config.min_region_size, LayoutConfig::default().min_region_size);
//! let json = config_to_json(&config);
//! assert!(json.contains("\"inner_padding\": 8.0"));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::LayoutConfig;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LayoutConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
