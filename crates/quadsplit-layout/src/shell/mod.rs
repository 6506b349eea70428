//! Presentation shell: draws caller content into computed regions.

mod decoration;
mod view;

pub use decoration::{CircleHandle, HandleDecoration, HandlePainter};
pub use view::{Canvas, RenderOutcome, SplitView};
