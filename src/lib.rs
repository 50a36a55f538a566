//! Terminal outline editor.
//!
//! The core is an arena-backed outline ([`domain::OutlineArena`]) with
//! structural edits, a visible flattening that honours collapsed nodes, and a
//! renderer producing `tree(1)`-style ASCII art. [`application::EditSession`]
//! keeps a cursor and a text buffer consistent with the outline across edits;
//! the `infrastructure` layer hosts it in a crossterm terminal.
//!
//! ```
//! use ttree::domain::{create_document, render};
//!
//! let mut outline = create_document();
//! let first = outline.top_level()[0];
//! outline.set_text(first, "notes");
//! let todo = outline.new_node("todo");
//! outline.add_child(first, todo).unwrap();
//! assert_eq!(render(&outline), "└── notes\n    └── todo\n");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{create_document, flatten, render, render_lines, NodeId, OutlineArena};
