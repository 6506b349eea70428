//! Split layout configuration type.

use quadsplit_common::SplitAxis;
use serde::{Deserialize, Serialize};

/// Immutable settings for one layout invocation.
///
/// Nested sub-layouts never read this directly; they receive the copy
/// produced by [`LayoutConfig::nested`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Axis the top-level container divides along.
    pub split_axis: SplitAxis,
    /// Gap between adjacent regions, in container units (>= 0).
    pub inner_padding: f64,
    /// Whether the drag handle is drawn and accepts input.
    pub shows_handle: bool,
    /// Smallest width/height a region may shrink to (> 0).
    pub min_region_size: f64,
    /// Pointer coordinates snap to multiples of this value; 0 disables snapping.
    pub snap_quantum: f64,
    /// 3-pane layouts: `true` puts the nested pair at the leading/top edge,
    /// `false` at the trailing/bottom edge.
    pub secondary_placement: bool,
    /// Side length of the default handle indicator.
    pub handle_diameter: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            split_axis: SplitAxis::Horizontal,
            inner_padding: 0.0,
            shows_handle: true,
            min_region_size: 40.0,
            snap_quantum: 20.0,
            secondary_placement: false,
            handle_diameter: 24.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_axis(mut self, axis: SplitAxis) -> Self {
        self.split_axis = axis;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.inner_padding = padding;
        self
    }

    /// Config handed to a recursive sub-layout: complementary axis, no handle.
    pub fn nested(&self) -> Self {
        Self {
            split_axis: self.split_axis.complement(),
            shows_handle: false,
            ..*self
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
