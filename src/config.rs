//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/ttree/ttree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TTREE_*` prefix, `__` between nested keys
//!    (e.g. `TTREE_CLIPBOARD__COMMAND="xclip -selection clipboard"`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::buffer::DEFAULT_CHAR_LIMIT;
use crate::application::keymap::KeyBindings;
use crate::application::ApplicationError;
use crate::domain::RenderStyle;

/// Editor pane behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum characters per node label
    pub char_limit: usize,
    /// Show the live ASCII preview next to the editor
    pub preview: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
            preview: true,
        }
    }
}

/// Clipboard integration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Command receiving the export on stdin; tries known helpers when unset
    pub command: Option<String>,
}

/// Unified configuration for ttree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Branch glyphs of the ASCII export
    pub style: RenderStyle,
    pub editor: EditorConfig,
    pub clipboard: ClipboardConfig,
    /// Chord lists per editor action
    pub keys: KeyBindings,
}

/// Get the XDG config directory for ttree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ttree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("ttree.toml"))
}

/// Log file used while the editor owns the terminal and no `--log-file` is given.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ttree").map(|dirs| dirs.cache_dir().join("ttree.log"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned unchanged.
pub fn expand_env_vars(value: &str) -> String {
    shellexpand::full(value)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), explicit)
    }

    /// Load from the given global and explicit files plus `TTREE_*` variables.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load_layers(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Config::builder();

        if let Some(global_path) = global {
            builder = builder.add_source(
                File::from(global_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("TTREE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.expand_paths();
        settings.validate()?;
        Ok(settings)
    }

    /// Expand shell variables and tilde in the clipboard command.
    fn expand_paths(&mut self) {
        if let Some(command) = &self.clipboard.command {
            self.clipboard.command = Some(expand_env_vars(command));
        }
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.editor.char_limit == 0 {
            return Err(ApplicationError::Config {
                message: "editor.char_limit must be at least 1".to_string(),
            });
        }
        let glyphs = [
            &self.style.branch,
            &self.style.last_branch,
            &self.style.vertical,
            &self.style.space,
        ];
        if glyphs.iter().any(|g| g.contains('\n')) {
            return Err(ApplicationError::Config {
                message: "style glyphs must not contain newlines".to_string(),
            });
        }
        Ok(())
    }
}
