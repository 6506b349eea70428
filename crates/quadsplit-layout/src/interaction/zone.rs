//! Hover cursor feedback for the handle.

use quadsplit_common::{Point, SplitAxis};

use crate::layout::borders::SplitBorder;
use crate::layout::SplitLayout;

/// Cursor a host should show for a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorZone {
    /// Not over the handle.
    None,
    /// Over a 2-pane horizontal handle (moves left/right).
    ColResize,
    /// Over a 2-pane vertical handle (moves up/down).
    RowResize,
    /// Over a 3/4-pane handle, which moves on both axes.
    Move,
}

/// Determine the cursor zone for `p` over `layout`.
pub fn cursor_zone(layout: &SplitLayout, p: Point) -> CursorZone {
    let Some(handle) = layout.handle else {
        return CursorZone::None;
    };
    if !handle.frame.inflate(SplitBorder::HIT_HALF_WIDTH).contains(p) {
        return CursorZone::None;
    }
    if layout.regions.len() > 2 {
        return CursorZone::Move;
    }
    match layout.tree.as_ref().and_then(|tree| tree.axis()) {
        Some(SplitAxis::Horizontal) => CursorZone::ColResize,
        Some(SplitAxis::Vertical) => CursorZone::RowResize,
        None => CursorZone::None,
    }
}
