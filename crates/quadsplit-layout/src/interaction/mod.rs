//! Pointer interaction with the split handle.
//!
//! `DragController` turns pointer events into ratio updates on the
//! caller's `SplitState`; `cursor_zone` tells the host which cursor to
//! show while hovering.

mod drag;
mod zone;

pub use drag::{DragController, DragPhase, PointerEvent};
pub use zone::{cursor_zone, CursorZone};
