//! Layout configuration validation (padding, minimum size, snapping, handle).

use crate::schema::LayoutConfig;

use super::helpers::{validate_at_least, validate_positive};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &LayoutConfig) {
    validate_at_least(errors, "inner_padding", config.inner_padding, 0.0);
    validate_positive(errors, "min_region_size", config.min_region_size);
    validate_at_least(errors, "snap_quantum", config.snap_quantum, 0.0);
    validate_positive(errors, "handle_diameter", config.handle_diameter);
}
