use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};

/// Stable identity of an outline node.
///
/// Backed by a generational arena index: once a node is freed its slot may be
/// recycled, but the generation changes, so an old `NodeId` never resolves to
/// a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}.{}", slot, generation)
    }
}

/// Outline node in the arena-based hierarchy.
#[derive(Debug, Clone)]
pub struct OutlineNode {
    /// Label shown in the editor and in the export
    pub text: String,
    /// Whether children take part in visible traversal and export
    pub expanded: bool,
    /// Parent node in the arena, None for the root and for detached nodes
    parent: Option<NodeId>,
    /// Ordered child nodes
    children: Vec<NodeId>,
}

impl OutlineNode {
    fn new(text: String) -> Self {
        Self {
            text,
            expanded: true,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Display for OutlineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Arena-based outline tree.
///
/// Owns exactly one invisible root node; the root's children are the
/// top-level entries of the outline. Parent links are arena indices, so the
/// only owning edge is the child list.
#[derive(Debug, Clone)]
pub struct OutlineArena {
    arena: Arena<OutlineNode>,
    root: NodeId,
}

impl Default for OutlineArena {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineArena {
    /// Create an outline holding only the root (an empty forest).
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(OutlineNode::new(String::new())));
        Self { arena, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root and detached nodes included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Allocate a detached node with a fresh identity.
    #[instrument(level = "trace", skip(self, text))]
    pub fn new_node(&mut self, text: impl Into<String>) -> NodeId {
        NodeId(self.arena.insert(OutlineNode::new(text.into())))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    pub fn get_node(&self, id: NodeId) -> Option<&OutlineNode> {
        self.arena.get(id.0)
    }

    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut OutlineNode> {
        self.arena.get_mut(id.0)
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get_node(id).map(|n| n.text.as_str())
    }

    /// Replace a node's text. Returns false if the node does not exist.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> bool {
        match self.get_node_mut(id) {
            Some(node) => {
                node.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.get_node(id).is_some_and(|n| n.expanded)
    }

    /// Set the expanded flag. Returns false if the node does not exist.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        match self.get_node_mut(id) {
            Some(node) => {
                node.expanded = expanded;
                true
            }
            None => false,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get_node(id).and_then(|n| n.parent)
    }

    /// Children of a node; empty for unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get_node(id).map(|n| n.children()).unwrap_or(&[])
    }

    /// Top-level entries (the root's children).
    pub fn top_level(&self) -> &[NodeId] {
        self.children(self.root)
    }

    /// Append `child` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        self.add_child_at(parent, child, usize::MAX)
    }

    /// Insert `child` at `index` among `parent`'s children, appending when
    /// `index` is past the end.
    ///
    /// A child that is still attached elsewhere is moved, never duplicated.
    /// Attaching the root, or a node beneath itself, is refused without
    /// touching the structure.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child_at(&mut self, parent: NodeId, child: NodeId, index: usize) -> DomainResult<()> {
        self.check_attach(parent, child)?;
        self.detach(child);
        self.attach(parent, child, index);
        Ok(())
    }

    /// Validate that `child` may be placed under `parent`.
    pub(crate) fn check_attach(&self, parent: NodeId, child: NodeId) -> DomainResult<()> {
        if !self.contains(parent) {
            return Err(DomainError::NodeNotFound(parent));
        }
        if !self.contains(child) {
            return Err(DomainError::NodeNotFound(child));
        }
        if child == self.root {
            return Err(DomainError::RootNotAttachable);
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(DomainError::CycleDetected { parent, child });
        }
        Ok(())
    }

    /// Remove `child` from `parent`'s children by identity.
    ///
    /// Clears the child's parent link on success. The child stays allocated as
    /// a detached node so it can be re-attached.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(parent_node) = self.arena.get_mut(parent.0) else {
            return false;
        };
        let Some(pos) = parent_node.children.iter().position(|&c| c == child) else {
            return false;
        };
        parent_node.children.remove(pos);
        if let Some(child_node) = self.arena.get_mut(child.0) {
            child_node.parent = None;
        }
        true
    }

    /// Link an already validated, detached child under `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId, index: usize) {
        if let Some(parent_node) = self.arena.get_mut(parent.0) {
            let index = index.min(parent_node.children.len());
            parent_node.children.insert(index, child);
        }
        if let Some(child_node) = self.arena.get_mut(child.0) {
            child_node.parent = Some(parent);
        }
    }

    /// Unlink a node from its current parent, returning its former index.
    pub(crate) fn detach(&mut self, child: NodeId) -> Option<usize> {
        let parent = self.parent(child)?;
        let pos = self.children(parent).iter().position(|&c| c == child)?;
        self.remove_child(parent, child);
        Some(pos)
    }

    /// Free a node and its whole subtree. The node must already be detached.
    pub(crate) fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current.0) {
                trace!("freed node {}", current);
                stack.extend(node.children);
            }
        }
    }

    /// True if `ancestor` lies on the parent chain of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// Nesting level below the root: top-level nodes (and the root itself) are 0.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(p) = current {
            if p == self.root {
                break;
            }
            depth += 1;
            current = self.parent(p);
        }
        depth
    }

    /// Position among siblings; 0 for the root and for detached nodes.
    #[instrument(level = "trace", skip(self))]
    pub fn index(&self, id: NodeId) -> usize {
        self.parent(id)
            .and_then(|p| self.children(p).iter().position(|&c| c == id))
            .unwrap_or(0)
    }

    /// True for the root, detached nodes, and the final child of a parent.
    #[instrument(level = "trace", skip(self))]
    pub fn is_last_child(&self, id: NodeId) -> bool {
        match self.parent(id) {
            None => true,
            Some(p) => self.children(p).last() == Some(&id),
        }
    }

    /// Pre-order traversal of every attached node, root first, ignoring the
    /// expanded flags.
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a OutlineArena,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a OutlineArena) -> Self {
        Self {
            arena,
            stack: vec![arena.root()],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, &'a OutlineNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev());
                return Some((current, node));
            }
        }
        None
    }
}
