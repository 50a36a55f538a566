//! Infrastructure layer: terminal, clipboard and DI container
//!
//! This layer implements I/O boundary traits and wires up the editor.

pub mod di;
pub mod error;
pub mod terminal;
pub mod traits;
pub mod view;

pub use error::{InfraError, InfraResult};
