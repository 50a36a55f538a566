//! Application controller: turns key chords into session operations.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::keymap::{Action, KeyMap};
use crate::application::session::EditSession;
use crate::config::Settings;
use crate::domain::{create_document, AsciiRenderer};
use crate::infrastructure::traits::Clipboard;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Actions listed in the footer when help is hidden.
const SHORT_HELP: &[Action] = &[
    Action::Up,
    Action::Down,
    Action::Indent,
    Action::Unindent,
    Action::NewSibling,
    Action::Delete,
    Action::Copy,
    Action::Quit,
    Action::Help,
];

pub struct App {
    session: EditSession,
    keymap: KeyMap,
    renderer: AsciiRenderer,
    clipboard: Arc<dyn Clipboard>,
    message: Option<String>,
    show_help: bool,
    show_preview: bool,
}

impl App {
    pub fn new(settings: &Settings, clipboard: Arc<dyn Clipboard>) -> Self {
        let session = EditSession::with_char_limit(create_document(), settings.editor.char_limit);
        let mut app = Self::with_parts(
            session,
            KeyMap::new(settings.keys.clone()),
            AsciiRenderer::new(settings.style.clone()),
            clipboard,
        );
        app.show_preview = settings.editor.preview;
        app
    }

    pub fn with_parts(
        session: EditSession,
        keymap: KeyMap,
        renderer: AsciiRenderer,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            session,
            keymap,
            renderer,
            clipboard,
            message: None,
            show_help: false,
            show_preview: true,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    /// Preview of the export, cursor independent.
    pub fn preview_lines(&self) -> Vec<String> {
        self.renderer.render_lines(self.session.outline())
    }

    /// Footer text: the short hint, or every binding when help is open.
    pub fn help_line(&self) -> String {
        if self.show_help {
            self.keymap.hint(&Action::ALL)
        } else {
            self.keymap.hint(SHORT_HELP)
        }
    }

    /// Commit pending text and render the outline.
    pub fn export(&mut self) -> String {
        self.session.export(&self.renderer)
    }

    /// Handle one key chord. Returns false once the editor should quit.
    #[instrument(level = "debug", skip(self))]
    pub fn handle_chord(&mut self, chord: &str) -> bool {
        self.message = None;

        let Some(action) = self.keymap.action_for(chord) else {
            self.edit_text(chord);
            return true;
        };
        debug!(?action, "dispatch");

        match action {
            Action::Quit => {
                self.session.commit();
                info!("quit requested");
                return false;
            }
            Action::Copy => self.copy(),
            Action::Help => self.show_help = !self.show_help,
            Action::Up => {
                self.session.move_cursor(-1);
            }
            Action::Down => {
                self.session.move_cursor(1);
            }
            Action::Indent => {
                self.session.indent();
            }
            Action::Unindent => {
                self.session.unindent();
            }
            Action::NewSibling => {
                self.session.insert_sibling();
            }
            Action::NewChild => {
                self.session.insert_child();
            }
            Action::Delete => {
                self.session.delete();
            }
            Action::Fold => {
                self.session.fold();
            }
            Action::Unfold => {
                self.session.unfold();
            }
        }
        true
    }

    /// Commit pending text and put the rendered outline on the clipboard.
    ///
    /// Returns the number of bytes copied.
    pub fn copy_to_clipboard(&mut self) -> ApplicationResult<usize> {
        let output = self.export();
        self.clipboard
            .copy(&output)
            .map_err(|source| ApplicationError::Clipboard { source })?;
        info!(bytes = output.len(), "copied outline to clipboard");
        Ok(output.len())
    }

    fn copy(&mut self) {
        self.message = Some(match self.copy_to_clipboard() {
            Ok(_) => COPIED_MESSAGE.to_string(),
            Err(e) => {
                debug!("clipboard copy failed: {}", e);
                format!("Failed to copy: {}", e)
            }
        });
    }

    /// Unbound chords edit the focused node's text.
    fn edit_text(&mut self, chord: &str) -> bool {
        match chord {
            "backspace" => self.session.edit(|b| b.backspace()),
            "delete" => self.session.edit(|b| b.delete_forward()),
            "left" => self.session.edit(|b| b.move_left()),
            "right" => self.session.edit(|b| b.move_right()),
            "home" => self.session.edit(|b| b.move_home()),
            "end" => self.session.edit(|b| b.move_end()),
            _ => {
                let mut chars = chord.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => self.session.edit(|b| b.insert_char(c)),
                    _ => {
                        debug!("unbound chord {:?}", chord);
                        false
                    }
                }
            }
        }
    }
}
