//! Key bindings: chord strings (as produced by the terminal layer) to actions.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Editor commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Copy,
    Help,
    Up,
    Down,
    Indent,
    Unindent,
    NewSibling,
    NewChild,
    Delete,
    Fold,
    Unfold,
}

impl Action {
    /// Lookup order when a chord is bound to more than one action.
    pub const ALL: [Action; 12] = [
        Action::Quit,
        Action::Copy,
        Action::Help,
        Action::Up,
        Action::Down,
        Action::Indent,
        Action::Unindent,
        Action::NewSibling,
        Action::NewChild,
        Action::Delete,
        Action::Fold,
        Action::Unfold,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::Copy => "copy",
            Action::Help => "help",
            Action::Up => "up",
            Action::Down => "down",
            Action::Indent => "indent",
            Action::Unindent => "unindent",
            Action::NewSibling => "new",
            Action::NewChild => "new child",
            Action::Delete => "delete",
            Action::Fold => "fold",
            Action::Unfold => "unfold",
        }
    }
}

/// Chords per action, as stored in the `[keys]` config section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: Vec<String>,
    pub copy: Vec<String>,
    pub help: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub indent: Vec<String>,
    pub unindent: Vec<String>,
    pub new_sibling: Vec<String>,
    pub new_child: Vec<String>,
    pub delete: Vec<String>,
    pub fold: Vec<String>,
    pub unfold: Vec<String>,
}

fn chords(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: chords(&["ctrl+q", "esc"]),
            copy: chords(&["ctrl+c"]),
            help: chords(&["f1"]),
            up: chords(&["up"]),
            down: chords(&["down"]),
            indent: chords(&["tab"]),
            unindent: chords(&["shift+tab"]),
            new_sibling: chords(&["enter"]),
            new_child: chords(&["alt+enter"]),
            delete: chords(&["ctrl+d", "ctrl+backspace"]),
            fold: chords(&["ctrl+left"]),
            unfold: chords(&["ctrl+right"]),
        }
    }
}

impl KeyBindings {
    pub fn chords(&self, action: Action) -> &[String] {
        match action {
            Action::Quit => &self.quit,
            Action::Copy => &self.copy,
            Action::Help => &self.help,
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Indent => &self.indent,
            Action::Unindent => &self.unindent,
            Action::NewSibling => &self.new_sibling,
            Action::NewChild => &self.new_child,
            Action::Delete => &self.delete,
            Action::Fold => &self.fold,
            Action::Unfold => &self.unfold,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: KeyBindings,
}

impl KeyMap {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Action bound to `chord`, if any.
    pub fn action_for(&self, chord: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| self.bindings.chords(action).iter().any(|c| c == chord))
    }

    /// One-line summary such as `up:up │ tab:indent`, using each action's first chord.
    pub fn hint(&self, actions: &[Action]) -> String {
        actions
            .iter()
            .filter_map(|&a| {
                self.bindings
                    .chords(a)
                    .first()
                    .map(|c| format!("{}:{}", c, a.label()))
            })
            .join(" │ ")
    }
}
