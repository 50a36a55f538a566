//! Structural dump of an outline for diagnostics.
//!
//! Unlike the export renderer this shows every node, collapsed or not,
//! together with its identity, so it is only used in logs and tests.

use termtree::Tree;

use crate::domain::arena::{NodeId, OutlineArena};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for OutlineArena {
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(arena: &OutlineArena, node_idx: NodeId, parent_tree: &mut Tree<String>) {
            for &child_idx in arena.children(node_idx) {
                if let Some(child) = arena.get_node(child_idx) {
                    let marker = if !child.expanded && child.has_children() {
                        " (collapsed)"
                    } else {
                        ""
                    };
                    let label = format!("{:?} {}{}", child.text, child_idx, marker);
                    let mut child_tree = Tree::new(label);
                    build_tree(arena, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        let mut tree = Tree::new(format!("(root) {}", self.root()));
        build_tree(self, self.root(), &mut tree);
        tree
    }
}
