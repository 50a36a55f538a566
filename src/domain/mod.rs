//! Domain layer: the outline document model
//!
//! This layer is independent of external concerns (no I/O, no terminal, no config loading).

pub mod arena;
pub mod convert;
pub mod edit;
pub mod error;
pub mod render;
pub mod visible;

pub use arena::{NodeId, OutlineArena, OutlineNode};
pub use convert::TreeNodeConvert;
pub use error::{DomainError, DomainResult};
pub use render::{render, render_lines, AsciiRenderer, RenderStyle};
pub use visible::{flatten, VisibleIterator};

/// New outline holding exactly one empty top-level node.
pub fn create_document() -> OutlineArena {
    let mut outline = OutlineArena::new();
    let first = outline.new_node("");
    outline.attach(outline.root(), first, 0);
    outline
}
