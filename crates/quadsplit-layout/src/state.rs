//! Caller-owned split state.

use serde::{Deserialize, Serialize};

/// Ratios and drag flag owned by the host.
///
/// The layout engine reads this on every invocation and never caches it;
/// only the drag controller writes to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitState {
    /// Fraction of the top-level container given to the first group.
    pub primary_ratio: f64,
    /// Fraction governing the nested split(s) in 3- and 4-pane layouts.
    pub secondary_ratio: f64,
    pub is_dragging: bool,
}

impl Default for SplitState {
    fn default() -> Self {
        Self::new(0.5, 0.5)
    }
}

impl SplitState {
    pub fn new(primary_ratio: f64, secondary_ratio: f64) -> Self {
        Self {
            primary_ratio,
            secondary_ratio,
            is_dragging: false,
        }
    }

    /// Primary ratio as a whole percentage, for accessibility readouts.
    pub fn primary_percent(&self) -> u8 {
        percent(self.primary_ratio)
    }

    pub fn secondary_percent(&self) -> u8 {
        percent(self.secondary_ratio)
    }
}

fn percent(ratio: f64) -> u8 {
    if ratio.is_nan() {
        return 0;
    }
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_even_split_and_idle() {
        let state = SplitState::default();
        assert_eq!(state.primary_ratio, 0.5);
        assert_eq!(state.secondary_ratio, 0.5);
        assert!(!state.is_dragging);
    }

    #[test]
    fn percentages_round_and_saturate() {
        let state = SplitState::new(0.333, 0.6667);
        assert_eq!(state.primary_percent(), 33);
        assert_eq!(state.secondary_percent(), 67);
        assert_eq!(SplitState::new(1.7, -0.2).primary_percent(), 100);
        assert_eq!(SplitState::new(1.7, -0.2).secondary_percent(), 0);
        assert_eq!(SplitState::new(f64::NAN, 0.0).primary_percent(), 0);
    }
}
