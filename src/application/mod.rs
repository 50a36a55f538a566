//! Application layer: editing session and key handling
//!
//! This layer drives the domain model and depends on I/O boundary traits.

pub mod app;
pub mod buffer;
pub mod error;
pub mod keymap;
pub mod session;

pub use app::App;
pub use buffer::TextBuffer;
pub use error::{ApplicationError, ApplicationResult};
pub use keymap::{Action, KeyBindings, KeyMap};
pub use session::{EditSession, Refocus};
