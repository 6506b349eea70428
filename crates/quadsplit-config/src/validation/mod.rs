//! Configuration validation.
//!
//! Checks every numeric constraint and collects all violations into a
//! single `ConfigError` rather than stopping at the first.

mod helpers;
mod layout;


use crate::schema::LayoutConfig;
use quadsplit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LayoutConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
