//! Composition of layout, handle and caller content into one surface.

use quadsplit_common::{LayoutError, Rect};
use quadsplit_config::LayoutConfig;
use tracing::{debug, warn};

use super::decoration::{CircleHandle, HandleDecoration, HandlePainter};
use crate::interaction::DragController;
use crate::layout::{LayoutEngine, SplitLayout};
use crate::state::SplitState;

/// Surface a [`SplitView`] renders into.
pub trait Canvas<S>: HandlePainter {
    /// Draw the caller's content for one slot inside `rect`.
    fn draw_slot(&mut self, slot: &S, rect: Rect);
    /// Show a visible error in place of the layout.
    fn draw_diagnostic(&mut self, message: &str, rect: Rect);
}

/// What a render pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { regions: usize, handle: bool },
    /// Too many slots; a diagnostic placeholder was drawn instead.
    Diagnostic,
    /// Degenerate container; nothing was drawn this frame.
    Skipped,
}

/// Up to four slots laid out with one shared handle.
pub struct SplitView<'a, S> {
    slots: &'a [S],
    engine: LayoutEngine,
    decoration: Box<dyn HandleDecoration + 'a>,
}

impl<'a, S> SplitView<'a, S> {
    pub fn new(slots: &'a [S], config: LayoutConfig) -> Self {
        Self {
            slots,
            engine: LayoutEngine::new(config),
            decoration: Box::new(CircleHandle::default()),
        }
    }

    /// Replace the default circular handle indicator.
    pub fn with_decoration(mut self, decoration: impl HandleDecoration + 'a) -> Self {
        self.decoration = Box::new(decoration);
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.engine.config
    }

    pub fn layout(&self, state: &SplitState, container: Rect) -> Result<SplitLayout, LayoutError> {
        self.engine.compute(self.slots.len(), state, container)
    }

    /// A controller bound to this view's config and slot count.
    pub fn controller(&self) -> DragController {
        DragController::new(self.engine.config, self.slots.len())
    }

    /// Lay out and draw every slot, then the handle on top.
    pub fn render<C: Canvas<S>>(
        &self,
        canvas: &mut C,
        state: &SplitState,
        container: Rect,
    ) -> RenderOutcome {
        match self.layout(state, container) {
            Ok(layout) => {
                for (index, rect) in &layout.regions {
                    if let Some(slot) = self.slots.get(*index) {
                        canvas.draw_slot(slot, *rect);
                    }
                }
                if let Some(handle) = layout.handle {
                    self.decoration.paint(canvas, handle.frame, state.is_dragging);
                }
                RenderOutcome::Rendered {
                    regions: layout.regions.len(),
                    handle: layout.handle.is_some(),
                }
            }
            Err(err @ LayoutError::UnsupportedSlotCount { .. }) => {
                warn!("{err}");
                canvas.draw_diagnostic(&err.to_string(), container);
                RenderOutcome::Diagnostic
            }
            Err(err @ LayoutError::DegenerateContainer { .. }) => {
                debug!("skipping frame: {err}");
                RenderOutcome::Skipped
            }
        }
    }
}
