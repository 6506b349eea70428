//! Core types for the split tree: RatioRole and SplitNode.

use quadsplit_common::{LayoutError, SplitAxis};
use quadsplit_config::LayoutConfig;
use serde::{Deserialize, Serialize};

use crate::state::SplitState;

/// Which caller-owned ratio a split reads, and from which edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioRole {
    /// First child gets `primary_ratio`.
    Primary,
    /// First child gets `1 − primary_ratio`; the group the ratio describes
    /// sits at the trailing edge.
    PrimaryFromTrailing,
    /// First child gets `secondary_ratio`.
    Secondary,
}

impl RatioRole {
    /// The ratio this role reads, before any flip.
    pub fn ratio(self, state: &SplitState) -> f64 {
        match self {
            RatioRole::Primary | RatioRole::PrimaryFromTrailing => state.primary_ratio,
            RatioRole::Secondary => state.secondary_ratio,
        }
    }

    /// Turn an already clamped ratio into the first child's fraction.
    pub fn first_fraction(self, clamped: f64) -> f64 {
        match self {
            RatioRole::PrimaryFromTrailing => 1.0 - clamped,
            RatioRole::Primary | RatioRole::Secondary => clamped,
        }
    }
}

/// Split tree built fresh for every layout pass.
///
/// Nodes hold no ratio values, only the role naming which ratio of the
/// caller's [`SplitState`] they read, so a tree can be rebuilt or reused
/// without going stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitNode {
    Leaf {
        slot: usize,
    },
    Split {
        config: LayoutConfig,
        role: RatioRole,
        first: Box<SplitNode>,
        second: Box<SplitNode>,
    },
}

impl SplitNode {
    pub fn leaf(slot: usize) -> Self {
        SplitNode::Leaf { slot }
    }

    pub fn split(config: LayoutConfig, role: RatioRole, first: SplitNode, second: SplitNode) -> Self {
        SplitNode::Split {
            config,
            role,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Two adjacent slots `first_slot` and `first_slot + 1` under one split.
    fn pair(config: LayoutConfig, role: RatioRole, first_slot: usize) -> Self {
        Self::split(
            config,
            role,
            Self::leaf(first_slot),
            Self::leaf(first_slot + 1),
        )
    }

    /// Build the tree for `slot_count` slots.
    ///
    /// - 0 slots: `None`.
    /// - 1 slot: a single leaf.
    /// - 2 slots: one split along `config.split_axis`.
    /// - 3 slots: slots 0–1 form a nested pair on the complementary axis,
    ///   placed at the leading edge when `secondary_placement` is set and at
    ///   the trailing edge otherwise; slot 2 takes the remaining side.
    /// - 4 slots: two nested pairs (0–1, 2–3), both on the complementary axis.
    pub fn build(slot_count: usize, config: &LayoutConfig) -> Result<Option<Self>, LayoutError> {
        let nested = config.nested();
        let tree = match slot_count {
            0 => return Ok(None),
            1 => Self::leaf(0),
            2 => Self::pair(*config, RatioRole::Primary, 0),
            3 => {
                let pair = Self::pair(nested, RatioRole::Secondary, 0);
                let solo = Self::leaf(2);
                if config.secondary_placement {
                    Self::split(*config, RatioRole::Primary, pair, solo)
                } else {
                    Self::split(*config, RatioRole::PrimaryFromTrailing, solo, pair)
                }
            }
            4 => Self::split(
                *config,
                RatioRole::Primary,
                Self::pair(nested, RatioRole::Secondary, 0),
                Self::pair(nested, RatioRole::Secondary, 2),
            ),
            count => return Err(LayoutError::UnsupportedSlotCount { count }),
        };
        Ok(Some(tree))
    }

    /// Split axis of this node, `None` for a leaf.
    pub fn axis(&self) -> Option<SplitAxis> {
        match self {
            SplitNode::Leaf { .. } => None,
            SplitNode::Split { config, .. } => Some(config.split_axis),
        }
    }

    /// Whether this node draws and drives the handle.
    pub fn shows_handle(&self) -> bool {
        match self {
            SplitNode::Leaf { .. } => false,
            SplitNode::Split { config, .. } => config.shows_handle,
        }
    }

    /// True unless the primary ratio is measured from the trailing edge.
    pub fn primary_from_leading(&self) -> bool {
        !matches!(
            self,
            SplitNode::Split {
                role: RatioRole::PrimaryFromTrailing,
                ..
            }
        )
    }
}
