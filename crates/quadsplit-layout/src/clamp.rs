//! Minimum-size clamping for split ratios.

use tracing::warn;

/// Ratio used when the valid range collapses to a single point.
pub const PINNED_RATIO: f64 = 0.5;

/// Valid `[min, max]` ratio range for one split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBounds {
    pub min: f64,
    pub max: f64,
}

impl RatioBounds {
    /// Bounds that keep both regions at least `min_region_size` along a
    /// split of `dimension`. `None` for a non-positive dimension.
    ///
    /// When `2 × min_region_size > dimension` the range is pinned to
    /// `[0.5, 0.5]`.
    pub fn for_dimension(dimension: f64, min_region_size: f64) -> Option<Self> {
        if !(dimension > 0.0) {
            return None;
        }
        let min = (min_region_size / dimension).max(0.0);
        if min > PINNED_RATIO {
            warn!(
                dimension,
                min_region_size,
                "container too small for two minimum-size regions; pinning ratio to 0.5"
            );
            return Some(Self {
                min: PINNED_RATIO,
                max: PINNED_RATIO,
            });
        }
        Some(Self { min, max: 1.0 - min })
    }

    pub fn is_pinned(&self) -> bool {
        self.min >= self.max
    }

    /// Clamp `proposed` into the range. `NaN` resolves to the midpoint.
    pub fn clamp(&self, proposed: f64) -> f64 {
        if proposed.is_nan() {
            return PINNED_RATIO.clamp(self.min, self.max);
        }
        proposed.clamp(self.min, self.max)
    }
}

/// Clamp a proposed ratio so neither side of a split of `dimension` drops
/// below `min_region_size`.
///
/// Out-of-range input, including negative or non-finite values, is clamped
/// rather than rejected. A degenerate dimension only bounds the ratio to
/// `[0, 1]`; the engine refuses to lay out such containers anyway.
pub fn clamp_ratio(proposed: f64, dimension: f64, min_region_size: f64) -> f64 {
    let bounds = RatioBounds::for_dimension(dimension, min_region_size)
        .unwrap_or(RatioBounds { min: 0.0, max: 1.0 });
    bounds.clamp(proposed)
}
