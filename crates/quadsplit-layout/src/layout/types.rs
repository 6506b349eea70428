//! Layout engine types: the engine itself and its output.

use quadsplit_common::{Point, Rect};
use quadsplit_config::LayoutConfig;

use super::borders::SplitBorder;
use crate::tree::SplitNode;

/// Computes region rectangles for a fixed [`LayoutConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutEngine {
    pub config: LayoutConfig,
}

/// Where the drag handle is drawn and accepts input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleGeometry {
    /// Handle centre in the container's coordinate space.
    pub center: Point,
    /// Square the default indicator occupies.
    pub frame: Rect,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLayout {
    /// The tree this pass was computed from (`None` for zero slots).
    pub tree: Option<SplitNode>,
    /// One rectangle per slot, sorted by slot index.
    pub regions: Vec<(usize, Rect)>,
    /// One divider per split node, outermost first.
    pub borders: Vec<SplitBorder>,
    /// Present only for a top-level layout with two or more slots and
    /// `shows_handle` enabled.
    pub handle: Option<HandleGeometry>,
}

impl SplitLayout {
    pub fn empty() -> Self {
        Self {
            tree: None,
            regions: Vec::new(),
            borders: Vec::new(),
            handle: None,
        }
    }

    pub fn region(&self, slot: usize) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(index, _)| *index == slot)
            .map(|(_, rect)| *rect)
    }
}
