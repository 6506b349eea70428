//! Handle decorations: how the drag handle looks.

use quadsplit_common::{Color, Point, Rect};

/// Drawing primitives a decoration may use.
pub trait HandlePainter {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color);
}

/// Caller-suppliable appearance of the drag handle.
///
/// `frame` is the handle's square in container space; a decoration may
/// draw outside it, but input is only accepted near the frame.
pub trait HandleDecoration {
    fn paint(&self, painter: &mut dyn HandlePainter, frame: Rect, is_dragging: bool);
}

/// Default indicator: a filled, outlined circle that swells while dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleHandle {
    pub fill: Color,
    pub outline: Color,
    pub outline_width: f64,
    /// Radius multiplier applied while a drag is active.
    pub drag_scale: f64,
}

impl Default for CircleHandle {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba(255, 255, 255, 255),
            outline: Color::from_rgba(0, 0, 0, 64),
            outline_width: 1.0,
            drag_scale: 1.2,
        }
    }
}

impl HandleDecoration for CircleHandle {
    fn paint(&self, painter: &mut dyn HandlePainter, frame: Rect, is_dragging: bool) {
        let base = frame.width.min(frame.height) / 2.0;
        let radius = if is_dragging {
            base * self.drag_scale
        } else {
            base
        };
        let center = frame.center();
        painter.fill_circle(center, radius, self.fill);
        painter.stroke_circle(center, radius, self.outline_width, self.outline);
    }
}
