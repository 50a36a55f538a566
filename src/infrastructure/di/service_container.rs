//! Service container for dependency injection
//!
//! Wires the editor with its I/O collaborators.

use std::sync::Arc;

use crate::application::App;
use crate::config::Settings;
use crate::infrastructure::traits::{Clipboard, CommandRunner, RealCommandRunner, SystemClipboard};

/// Container holding the settings and I/O collaborators of the editor.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,

    /// Clipboard abstraction
    pub clipboard: Arc<dyn Clipboard>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let cmd: Arc<dyn CommandRunner> = Arc::new(RealCommandRunner);
        let clipboard = Arc::new(SystemClipboard::new(
            Arc::clone(&cmd),
            settings.clipboard.command.as_deref(),
        ));
        Self::with_deps(settings, cmd, clipboard)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        cmd: Arc<dyn CommandRunner>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            cmd,
            clipboard,
        }
    }

    /// Build a fresh editor with one empty node.
    pub fn app(&self) -> App {
        App::new(&self.settings, Arc::clone(&self.clipboard))
    }
}
