//! Shared validation helpers.

/// Push an error if `value` is not a finite number `>= min`.
pub(crate) fn validate_at_least(errors: &mut Vec<String>, name: &str, value: f64, min: f64) {
    if !value.is_finite() || value < min {
        errors.push(format!("{name} = {value} must be a finite value >= {min}"));
    }
}

/// Push an error if `value` is not a finite number strictly above zero.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be a finite value > 0"));
    }
}
