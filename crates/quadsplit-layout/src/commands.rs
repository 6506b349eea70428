use serde::{Deserialize, Serialize};

/// Keyboard adjustments applied through the drag controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitCommand {
    GrowPrimary,
    ShrinkPrimary,
    GrowSecondary,
    ShrinkSecondary,
}

impl SplitCommand {
    pub fn grows(self) -> bool {
        matches!(self, SplitCommand::GrowPrimary | SplitCommand::GrowSecondary)
    }
}
