//! Read-only traversal of the split tree.

use super::SplitNode;

impl SplitNode {
    pub fn slot_count(&self) -> usize {
        match self {
            SplitNode::Leaf { .. } => 1,
            SplitNode::Split { first, second, .. } => first.slot_count() + second.slot_count(),
        }
    }

    pub fn contains_slot(&self, index: usize) -> bool {
        match self {
            SplitNode::Leaf { slot } => *slot == index,
            SplitNode::Split { first, second, .. } => {
                first.contains_slot(index) || second.contains_slot(index)
            }
        }
    }

    /// Collect slot indices in layout (depth-first, leading-to-trailing) order.
    pub fn collect_slots(&self) -> Vec<usize> {
        let mut slots = Vec::new();
        self.collect_slots_into(&mut slots);
        slots
    }

    fn collect_slots_into(&self, out: &mut Vec<usize>) {
        match self {
            SplitNode::Leaf { slot } => out.push(*slot),
            SplitNode::Split { first, second, .. } => {
                first.collect_slots_into(out);
                second.collect_slots_into(out);
            }
        }
    }

    /// Number of split levels below and including this node.
    pub fn depth(&self) -> usize {
        match self {
            SplitNode::Leaf { .. } => 0,
            SplitNode::Split { first, second, .. } => 1 + first.depth().max(second.depth()),
        }
    }

    /// Visit every split node with its nesting level (root = 0) and its parent.
    pub fn visit_splits<'a>(&'a self, f: &mut impl FnMut(&'a SplitNode, usize, Option<&'a SplitNode>)) {
        self.visit_splits_inner(0, None, f);
    }

    fn visit_splits_inner<'a>(
        &'a self,
        level: usize,
        parent: Option<&'a SplitNode>,
        f: &mut impl FnMut(&'a SplitNode, usize, Option<&'a SplitNode>),
    ) {
        if let SplitNode::Split { first, second, .. } = self {
            f(self, level, parent);
            first.visit_splits_inner(level + 1, Some(self), f);
            second.visit_splits_inner(level + 1, Some(self), f);
        }
    }
}
