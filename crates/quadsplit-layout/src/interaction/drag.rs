//! Drag state machine for the split handle.

use quadsplit_common::{Point, Rect};
use quadsplit_config::LayoutConfig;
use tracing::debug;

use crate::clamp::clamp_ratio;
use crate::commands::SplitCommand;
use crate::geometry::pointer_to_ratio;
use crate::layout::borders::SplitBorder;
use crate::layout::LayoutEngine;
use crate::state::SplitState;
use crate::MAX_SLOTS;

/// Fraction of the dimension a nudge moves by when snapping is disabled.
const UNSNAPPED_NUDGE: f64 = 0.05;

/// Pointer input, in the same coordinate space as the container rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// The gesture was taken away (pointer left the tracking area, focus lost).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Owns the single handle of a top-level layout.
///
/// A press on the handle arms the controller; the first move after that
/// enters `Dragging`. Release or cancel returns to `Idle` and keeps the
/// last applied ratios.
#[derive(Debug, Clone)]
pub struct DragController {
    config: LayoutConfig,
    slot_count: usize,
    phase: DragPhase,
    pressed: bool,
}

impl DragController {
    pub fn new(config: LayoutConfig, slot_count: usize) -> Self {
        Self {
            config,
            slot_count,
            phase: DragPhase::Idle,
            pressed: false,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// False for hidden handles and for 0, 1 or more than four slots.
    pub fn is_enabled(&self) -> bool {
        self.config.shows_handle && (2..=MAX_SLOTS).contains(&self.slot_count)
    }

    /// Dispatch one pointer event. Returns `true` if the event was consumed.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        container: Rect,
        state: &mut SplitState,
    ) -> bool {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p, container, state),
            PointerEvent::Move(p) => self.pointer_move(p, container, state),
            PointerEvent::Up(_) | PointerEvent::Cancel => self.pointer_up(state),
        }
    }

    /// Arm a drag if `p` lands on the handle.
    pub fn pointer_down(&mut self, p: Point, container: Rect, state: &SplitState) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let engine = LayoutEngine::new(self.config);
        let Some(handle) = engine.handle(self.slot_count, state, container) else {
            return false;
        };
        if !handle.frame.inflate(SplitBorder::HIT_HALF_WIDTH).contains(p) {
            return false;
        }
        self.pressed = true;
        true
    }

    /// Enter or continue a drag and write the new ratios.
    pub fn pointer_move(&mut self, p: Point, container: Rect, state: &mut SplitState) -> bool {
        if !self.pressed || !self.is_enabled() || container.size().is_degenerate() {
            return false;
        }
        if self.phase == DragPhase::Idle {
            self.phase = DragPhase::Dragging;
            state.is_dragging = true;
            debug!(slot_count = self.slot_count, "split handle drag started");
        }
        self.drag_to(p, container, state);
        true
    }

    /// End the gesture. Ratios are left at their last dragged values.
    pub fn pointer_up(&mut self, state: &mut SplitState) -> bool {
        let was_active = self.pressed || self.phase == DragPhase::Dragging;
        self.pressed = false;
        if self.phase == DragPhase::Dragging {
            self.phase = DragPhase::Idle;
            state.is_dragging = false;
            debug!(
                primary = state.primary_ratio,
                secondary = state.secondary_ratio,
                "split handle drag ended"
            );
        }
        was_active
    }

    /// Step a ratio from the keyboard. Never touches `is_dragging`.
    pub fn apply(&self, command: SplitCommand, container: Rect, state: &mut SplitState) -> bool {
        if !self.is_enabled() || container.size().is_degenerate() {
            return false;
        }
        let axis = self.config.split_axis;
        let (target_axis, ratio) = match command {
            SplitCommand::GrowPrimary | SplitCommand::ShrinkPrimary => {
                (axis, &mut state.primary_ratio)
            }
            SplitCommand::GrowSecondary | SplitCommand::ShrinkSecondary => {
                if self.slot_count < 3 {
                    return false;
                }
                (axis.complement(), &mut state.secondary_ratio)
            }
        };
        let dimension = container.size().along(target_axis);
        let step = if self.config.snap_quantum > 0.0 {
            self.config.snap_quantum / dimension
        } else {
            UNSNAPPED_NUDGE
        };
        let delta = if command.grows() { step } else { -step };
        *ratio = clamp_ratio(*ratio + delta, dimension, self.config.min_region_size);
        true
    }

    fn primary_from_leading(&self) -> bool {
        self.slot_count != 3 || self.config.secondary_placement
    }

    fn drag_to(&self, p: Point, container: Rect, state: &mut SplitState) {
        let size = container.size();
        let axis = self.config.split_axis;
        let cross = axis.complement();
        let local = Point::new(p.x - container.x, p.y - container.y);
        let quantum = self.config.snap_quantum;
        let min = self.config.min_region_size;

        let raw_primary = pointer_to_ratio(local.along(axis), size.along(axis), quantum);
        let raw_secondary = pointer_to_ratio(local.along(cross), size.along(cross), quantum);
        let primary = if self.primary_from_leading() {
            raw_primary
        } else {
            1.0 - raw_primary
        };

        state.primary_ratio = clamp_ratio(primary, size.along(axis), min);
        state.secondary_ratio = clamp_ratio(raw_secondary, size.along(cross), min);
    }
}
