//! Edit/focus session: a cursor over the visible list plus the text buffer
//! of the focused node.
//!
//! Every structural operation follows the same procedure: commit the buffer,
//! mutate the outline, recompute the visible list, then re-resolve the cursor
//! with [`Refocus`].

use tracing::{debug, instrument, trace};

use crate::application::buffer::{TextBuffer, DEFAULT_CHAR_LIMIT};
use crate::domain::{flatten, AsciiRenderer, NodeId, OutlineArena, TreeNodeConvert};

/// How the cursor is re-resolved after the visible list is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refocus {
    /// Keep the numeric position, clamped into the new list.
    Clamp,
    /// Follow a node by identity; clamps if it is no longer visible.
    Node(NodeId),
}

#[derive(Debug, Clone)]
pub struct EditSession {
    outline: OutlineArena,
    visible: Vec<NodeId>,
    cursor: usize,
    buffer: TextBuffer,
}

impl EditSession {
    pub fn new(outline: OutlineArena) -> Self {
        Self::with_char_limit(outline, DEFAULT_CHAR_LIMIT)
    }

    /// Start a session focused on the first visible node.
    pub fn with_char_limit(outline: OutlineArena, char_limit: usize) -> Self {
        let mut session = Self {
            outline,
            visible: Vec::new(),
            cursor: 0,
            buffer: TextBuffer::new(char_limit),
        };
        session.refresh(Refocus::Clamp);
        session
    }

    pub fn outline(&self) -> &OutlineArena {
        &self.outline
    }

    pub fn into_outline(mut self) -> OutlineArena {
        self.commit();
        self.outline
    }

    pub fn visible(&self) -> &[NodeId] {
        &self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn current_node(&self) -> Option<NodeId> {
        self.visible.get(self.cursor).copied()
    }

    /// Write the buffer into the focused node.
    pub fn commit(&mut self) {
        if let Some(node) = self.current_node() {
            if self.outline.text(node) != Some(self.buffer.value()) {
                self.outline.set_text(node, self.buffer.value());
            }
        }
    }

    /// Apply a text edit to the buffer and write it through to the node.
    pub fn edit(&mut self, f: impl FnOnce(&mut TextBuffer) -> bool) -> bool {
        let changed = f(&mut self.buffer);
        if changed {
            self.commit();
        }
        changed
    }

    /// Move the cursor by `delta` rows, clamped to the visible list.
    #[instrument(level = "trace", skip(self))]
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        self.commit();
        if self.visible.is_empty() {
            return false;
        }
        let last = self.visible.len() as isize - 1;
        let target = (self.cursor as isize + delta).clamp(0, last) as usize;
        if target == self.cursor {
            return false;
        }
        self.cursor = target;
        self.refresh(Refocus::Clamp);
        true
    }

    pub fn indent(&mut self) -> bool {
        self.with_current(|outline, node| (outline.indent(node), Refocus::Node(node)))
    }

    pub fn unindent(&mut self) -> bool {
        self.with_current(|outline, node| (outline.unindent(node), Refocus::Node(node)))
    }

    /// Create an empty sibling after the focused node and focus it.
    pub fn insert_sibling(&mut self) -> Option<NodeId> {
        self.insert_with(OutlineArena::insert_after)
    }

    /// Create an empty first child of the focused node and focus it.
    pub fn insert_child(&mut self) -> Option<NodeId> {
        self.insert_with(OutlineArena::insert_child)
    }

    /// Delete the focused node and move focus to the node the outline picks.
    pub fn delete(&mut self) -> Option<NodeId> {
        self.commit();
        let node = self.current_node()?;
        let next = self.outline.delete(node);
        let focus = next.map(Refocus::Node).unwrap_or(Refocus::Clamp);
        self.refresh(focus);
        next
    }

    /// Collapse the focused node.
    pub fn fold(&mut self) -> bool {
        self.with_current(|outline, node| (outline.set_folded(node, true), Refocus::Node(node)))
    }

    /// Expand the focused node.
    pub fn unfold(&mut self) -> bool {
        self.with_current(|outline, node| (outline.set_folded(node, false), Refocus::Node(node)))
    }

    /// Commit pending text and render the whole outline.
    pub fn export(&mut self, renderer: &AsciiRenderer) -> String {
        self.commit();
        renderer.render(&self.outline)
    }

    fn with_current(
        &mut self,
        op: impl FnOnce(&mut OutlineArena, NodeId) -> (bool, Refocus),
    ) -> bool {
        self.commit();
        let Some(node) = self.current_node() else {
            return false;
        };
        let (changed, focus) = op(&mut self.outline, node);
        self.refresh(focus);
        changed
    }

    fn insert_with(
        &mut self,
        insert: impl FnOnce(&mut OutlineArena, NodeId, NodeId) -> bool,
    ) -> Option<NodeId> {
        self.commit();
        let anchor = self.current_node()?;
        let new_node = self.outline.new_node("");
        if !insert(&mut self.outline, anchor, new_node) {
            self.outline.free_subtree(new_node);
            return None;
        }
        self.refresh(Refocus::Node(new_node));
        Some(new_node)
    }

    /// Recompute the visible list, re-resolve the cursor and reload the buffer.
    fn refresh(&mut self, focus: Refocus) {
        self.visible = flatten(&self.outline);
        let located = match focus {
            Refocus::Node(id) => self.visible.iter().position(|&n| n == id),
            Refocus::Clamp => None,
        };
        if located.is_none() && focus != Refocus::Clamp {
            debug!("{:?} not visible, clamping cursor", focus);
        }
        self.cursor =
            located.unwrap_or_else(|| self.cursor.min(self.visible.len().saturating_sub(1)));

        let text = self
            .current_node()
            .and_then(|n| self.outline.text(n))
            .unwrap_or_default()
            .to_string();
        self.buffer.set_value(&text);
        trace!(cursor = self.cursor, "outline:\n{}", self.outline.to_tree_string());
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(crate::domain::create_document())
    }
}
