//! Layout calculation: recursive tree-to-rect computation.

use quadsplit_common::{LayoutError, Point, Rect, SplitAxis};
use quadsplit_config::LayoutConfig;
use tracing::debug;

use super::borders::SplitBorder;
use super::{HandleGeometry, LayoutEngine, SplitLayout};
use crate::clamp::clamp_ratio;
use crate::geometry::handle_position;
use crate::state::SplitState;
use crate::tree::SplitNode;

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lay out `slot_count` slots inside `container`.
    ///
    /// Pure in its inputs: the same `(slot_count, state, config, container)`
    /// always yields the same rectangles. Ratios outside their valid range
    /// are clamped here but never written back.
    pub fn compute(
        &self,
        slot_count: usize,
        state: &SplitState,
        container: Rect,
    ) -> Result<SplitLayout, LayoutError> {
        let tree = SplitNode::build(slot_count, &self.config)?;
        if container.size().is_degenerate() {
            return Err(LayoutError::DegenerateContainer {
                width: container.width,
                height: container.height,
            });
        }
        let Some(tree) = tree else {
            return Ok(SplitLayout::empty());
        };

        let mut regions = Vec::with_capacity(slot_count);
        let mut borders = Vec::new();
        self.layout_node(&tree, state, container, 0, &mut regions, &mut borders);
        regions.sort_by_key(|(slot, _)| *slot);

        let handle = self.handle_for(&tree, state, container);
        debug!(slot_count, ?container, regions = regions.len(), "computed split layout");

        Ok(SplitLayout {
            tree: Some(tree),
            regions,
            borders,
            handle,
        })
    }

    /// Handle geometry for `slot_count` slots, without computing regions.
    pub fn handle(
        &self,
        slot_count: usize,
        state: &SplitState,
        container: Rect,
    ) -> Option<HandleGeometry> {
        if container.size().is_degenerate() {
            return None;
        }
        let tree = SplitNode::build(slot_count, &self.config).ok()??;
        self.handle_for(&tree, state, container)
    }

    fn handle_for(
        &self,
        tree: &SplitNode,
        state: &SplitState,
        container: Rect,
    ) -> Option<HandleGeometry> {
        if !tree.shows_handle() {
            return None;
        }
        let axis = self.config.split_axis;
        let size = container.size();
        let min = self.config.min_region_size;
        let primary = clamp_ratio(state.primary_ratio, size.along(axis), min);
        let secondary = clamp_ratio(state.secondary_ratio, size.along(axis.complement()), min);
        let local = handle_position(primary, secondary, axis, tree.primary_from_leading(), size);
        let center = Point::new(container.x + local.x, container.y + local.y);
        Some(HandleGeometry {
            center,
            frame: Rect::centered_square(center, self.config.handle_diameter),
        })
    }

    fn layout_node(
        &self,
        node: &SplitNode,
        state: &SplitState,
        bounds: Rect,
        level: usize,
        regions: &mut Vec<(usize, Rect)>,
        borders: &mut Vec<SplitBorder>,
    ) {
        match node {
            SplitNode::Leaf { slot } => regions.push((*slot, bounds)),
            SplitNode::Split {
                config,
                role,
                first,
                second,
            } => {
                let axis = config.split_axis;
                let clamped = clamp_ratio(
                    role.ratio(state),
                    bounds.size().along(axis),
                    config.min_region_size,
                );
                let fraction = role.first_fraction(clamped);
                let (a, b, border) = divide(bounds, axis, fraction, config.inner_padding, level);
                borders.push(border);
                self.layout_node(first, state, a, level + 1, regions, borders);
                self.layout_node(second, state, b, level + 1, regions, borders);
            }
        }
    }
}

/// Split `bounds` along `axis` with the boundary at `fraction` of its extent.
///
/// Half of `padding` is taken from each side of the boundary; outer edges
/// are untouched.
fn divide(
    bounds: Rect,
    axis: SplitAxis,
    fraction: f64,
    padding: f64,
    level: usize,
) -> (Rect, Rect, SplitBorder) {
    let half = padding.max(0.0) / 2.0;
    match axis {
        SplitAxis::Horizontal => {
            let boundary = padded_boundary(bounds.width, fraction, half);
            let w1 = (boundary - half).max(0.0);
            let w2 = (bounds.width - boundary - half).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, w1, bounds.height),
                Rect::new(bounds.max_x() - w2, bounds.y, w2, bounds.height),
                SplitBorder {
                    axis,
                    position: bounds.x + boundary,
                    start: bounds.y,
                    end: bounds.max_y(),
                    level,
                    bounds,
                },
            )
        }
        SplitAxis::Vertical => {
            let boundary = padded_boundary(bounds.height, fraction, half);
            let h1 = (boundary - half).max(0.0);
            let h2 = (bounds.height - boundary - half).max(0.0);
            (
                Rect::new(bounds.x, bounds.y, bounds.width, h1),
                Rect::new(bounds.x, bounds.max_y() - h2, bounds.width, h2),
                SplitBorder {
                    axis,
                    position: bounds.y + boundary,
                    start: bounds.x,
                    end: bounds.max_x(),
                    level,
                    bounds,
                },
            )
        }
    }
}

/// Boundary at `fraction` of `extent`, kept at least `half` from either edge
/// so both sides plus the padding always add up to `extent`.
fn padded_boundary(extent: f64, fraction: f64, half: f64) -> f64 {
    if extent <= half * 2.0 {
        return extent / 2.0;
    }
    (extent * fraction).clamp(half, extent - half)
}
