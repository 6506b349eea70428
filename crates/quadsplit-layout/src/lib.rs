//! Two-level split layout with a single drag handle.
//!
//! Lays out up to four content slots by splitting a container along one
//! axis and, for three or four slots, splitting the nested region(s) along
//! the complementary axis. One handle adjusts both split ratios at once.
//!
//! Ratios and the dragging flag live in a caller-owned [`SplitState`]; the
//! engine only reads it and the [`DragController`] is its only writer.

pub mod clamp;
pub mod commands;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod shell;
pub mod state;
pub mod tree;

pub use commands::SplitCommand;
pub use interaction::{CursorZone, DragController, DragPhase, PointerEvent};
pub use layout::{compute_layout, HandleGeometry, LayoutEngine, SplitLayout};
pub use quadsplit_config::LayoutConfig;
pub use shell::{Canvas, CircleHandle, HandleDecoration, HandlePainter, RenderOutcome, SplitView};
pub use state::SplitState;
pub use tree::{RatioRole, SplitNode};

/// Largest number of slots a single layout invocation accepts.
pub const MAX_SLOTS: usize = 4;
