pub mod borders;
mod calculation;
mod types;

pub use types::*;

use quadsplit_common::{LayoutError, Rect};
use quadsplit_config::LayoutConfig;

use crate::state::SplitState;

/// Pair every slot with its rectangle.
///
/// Convenience over [`LayoutEngine::compute`] for callers that hold the
/// slot values themselves.
pub fn compute_layout<'s, S>(
    slots: &'s [S],
    state: &SplitState,
    config: &LayoutConfig,
    container: Rect,
) -> Result<Vec<(&'s S, Rect)>, LayoutError> {
    let layout = LayoutEngine::new(*config).compute(slots.len(), state, container)?;
    Ok(layout
        .regions
        .into_iter()
        .filter_map(|(index, rect)| slots.get(index).map(|slot| (slot, rect)))
        .collect())
}
