//! Visible flattening: the display order of an outline.

use crate::domain::arena::{NodeId, OutlineArena, OutlineNode};

/// Depth-first, pre-order walk over the nodes eligible for display.
///
/// Starts at the root's children and only descends into expanded nodes.
pub struct VisibleIterator<'a> {
    arena: &'a OutlineArena,
    stack: Vec<NodeId>,
}

impl<'a> VisibleIterator<'a> {
    fn new(arena: &'a OutlineArena) -> Self {
        Self {
            arena,
            stack: arena.top_level().iter().rev().copied().collect(),
        }
    }
}

impl<'a> Iterator for VisibleIterator<'a> {
    type Item = (NodeId, &'a OutlineNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current) {
                if node.expanded {
                    self.stack.extend(node.children().iter().rev());
                }
                return Some((current, node));
            }
        }
        None
    }
}

impl OutlineArena {
    pub fn iter_visible(&self) -> VisibleIterator<'_> {
        VisibleIterator::new(self)
    }
}

/// Ordered list of visible nodes. Always recomputed from scratch.
pub fn flatten(outline: &OutlineArena) -> Vec<NodeId> {
    outline.iter_visible().map(|(id, _)| id).collect()
}
