//! Structural editing operations on the outline.
//!
//! Every operation either applies completely or leaves the outline untouched;
//! refusals are reported as `false` (or `None`) and logged at debug level.

use tracing::{debug, instrument};

use crate::domain::arena::{NodeId, OutlineArena};

impl OutlineArena {
    /// Make `node` the last child of its preceding sibling.
    ///
    /// The new parent is forced open so the moved node stays visible.
    /// Fails for detached nodes and for a parent's first child.
    #[instrument(level = "debug", skip(self))]
    pub fn indent(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.parent(node) else {
            debug!("indent refused: {} has no parent", node);
            return false;
        };
        let siblings = self.children(parent);
        let idx = match siblings.iter().position(|&c| c == node) {
            Some(idx) if idx > 0 => idx,
            _ => {
                debug!("indent refused: {} is the first child", node);
                return false;
            }
        };
        let new_parent = siblings[idx - 1];

        self.remove_child(parent, node);
        self.attach(new_parent, node, usize::MAX);
        self.set_expanded(new_parent, true);
        true
    }

    /// Move `node` out of its parent, directly after the parent's position.
    ///
    /// Fails for detached nodes and for top-level nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn unindent(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.parent(node) else {
            debug!("unindent refused: {} has no parent", node);
            return false;
        };
        let Some(grandparent) = self.parent(parent) else {
            debug!("unindent refused: {} is already top-level", node);
            return false;
        };
        let parent_idx = self.index(parent);

        self.remove_child(parent, node);
        self.attach(grandparent, node, parent_idx + 1);
        true
    }

    /// Insert `new_node` as the immediate next sibling of `anchor`.
    ///
    /// No-op (returns false) when `anchor` is the root or detached.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_after(&mut self, anchor: NodeId, new_node: NodeId) -> bool {
        let Some(parent) = self.parent(anchor) else {
            debug!("insert_after refused: {} has no parent", anchor);
            return false;
        };
        if new_node == anchor || self.check_attach(parent, new_node).is_err() {
            debug!("insert_after refused: cannot attach {} under {}", new_node, parent);
            return false;
        }

        self.detach(new_node);
        let idx = self.index(anchor);
        self.attach(parent, new_node, idx + 1);
        true
    }

    /// Insert `new_node` as the first child of `parent` and open `parent`.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, new_node: NodeId) -> bool {
        if let Err(e) = self.check_attach(parent, new_node) {
            debug!("insert_child refused: {}", e);
            return false;
        }

        self.detach(new_node);
        self.attach(parent, new_node, 0);
        self.set_expanded(parent, true);
        true
    }

    /// Delete `node` with its subtree and return the node that should take focus.
    ///
    /// The last remaining top-level node is never removed: its text is cleared
    /// and the node itself is returned. Otherwise focus goes to the previous
    /// sibling, else the sibling that moved into the freed slot, else the parent.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let idx = siblings.iter().position(|&c| c == node)?;

        if parent == self.root() && siblings.len() == 1 {
            debug!("delete refused: {} is the only top-level node, clearing text", node);
            self.set_text(node, "");
            return Some(node);
        }

        self.remove_child(parent, node);
        self.free_subtree(node);

        let siblings = self.children(parent);
        if idx > 0 {
            return Some(siblings[idx - 1]);
        }
        if let Some(&next) = siblings.first() {
            return Some(next);
        }
        assert_ne!(
            parent,
            self.root(),
            "outline lost its last top-level node"
        );
        Some(parent)
    }

    /// Collapse or expand `node`. Returns true if the flag changed.
    ///
    /// Leaves have nothing to hide and are never collapsed.
    pub fn set_folded(&mut self, node: NodeId, folded: bool) -> bool {
        if node == self.root() {
            return false;
        }
        if folded && self.children(node).is_empty() {
            return false;
        }
        let changed = self.is_expanded(node) == folded;
        changed && self.set_expanded(node, !folded)
    }
}
