//! Terminal event loop built on crossterm.

use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use tracing::{debug, instrument, warn};

use crate::application::App;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::view;

/// Translate a key event into the chord string used by the key map.
///
/// Plain characters map to themselves (`"a"`, `"A"`, `" "`); everything else
/// gets a name with `ctrl+`, `alt+` and `shift+` prefixes, e.g. `"ctrl+d"`,
/// `"shift+tab"`, `"alt+enter"`.
pub fn chord_for(event: &KeyEvent) -> Option<String> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let mods = event.modifiers;
    let ctrl = mods.contains(KeyModifiers::CONTROL);
    let alt = mods.contains(KeyModifiers::ALT);

    let name = match event.code {
        KeyCode::Char(c) if !ctrl && !alt => return Some(c.to_string()),
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::BackTab => return Some("shift+tab".to_string()),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        _ => return None,
    };

    let mut chord = String::new();
    if ctrl {
        chord.push_str("ctrl+");
    }
    if alt {
        chord.push_str("alt+");
    }
    if mods.contains(KeyModifiers::SHIFT) && !matches!(event.code, KeyCode::Char(_)) {
        chord.push_str("shift+");
    }
    chord.push_str(&name);
    Some(chord)
}

/// Raw mode plus alternate screen for as long as the guard lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut Stdout) -> InfraResult<Self> {
        terminal::enable_raw_mode().map_err(|e| InfraError::io("enable raw mode", e))?;
        // From here on Drop restores the terminal, even if the next step fails
        let guard = TerminalGuard;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .map_err(|e| InfraError::io("enter alternate screen", e))?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {}", e);
        }
    }
}

/// Run the editor until the quit action, redrawing after every event.
#[instrument(level = "debug", skip_all)]
pub fn run(app: &mut App) -> InfraResult<()> {
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    let (mut width, mut height) =
        terminal::size().map_err(|e| InfraError::io("query terminal size", e))?;

    loop {
        view::draw(&mut stdout, app, width, height).map_err(|e| InfraError::io("draw screen", e))?;

        match event::read().map_err(|e| InfraError::io("read terminal event", e))? {
            Event::Key(key) => {
                if let Some(chord) = chord_for(&key) {
                    if !app.handle_chord(&chord) {
                        break;
                    }
                }
            }
            Event::Resize(w, h) => {
                debug!(w, h, "resize");
                width = w;
                height = h;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some("a"))]
    #[case(KeyCode::Char('A'), KeyModifiers::SHIFT, Some("A"))]
    #[case(KeyCode::Char(' '), KeyModifiers::NONE, Some(" "))]
    #[case(KeyCode::Char('d'), KeyModifiers::CONTROL, Some("ctrl+d"))]
    #[case(KeyCode::Char('Q'), KeyModifiers::CONTROL | KeyModifiers::SHIFT, Some("ctrl+q"))]
    #[case(KeyCode::Tab, KeyModifiers::NONE, Some("tab"))]
    #[case(KeyCode::BackTab, KeyModifiers::SHIFT, Some("shift+tab"))]
    #[case(KeyCode::Enter, KeyModifiers::ALT, Some("alt+enter"))]
    #[case(KeyCode::Left, KeyModifiers::CONTROL, Some("ctrl+left"))]
    #[case(KeyCode::Backspace, KeyModifiers::CONTROL, Some("ctrl+backspace"))]
    #[case(KeyCode::F(1), KeyModifiers::NONE, Some("f1"))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, Some("esc"))]
    #[case(KeyCode::Null, KeyModifiers::NONE, None)]
    fn given_key_event_when_translating_then_returns_chord(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] expected: Option<&str>,
    ) {
        let event = KeyEvent::new(code, modifiers);
        assert_eq!(chord_for(&event).as_deref(), expected);
    }

    #[test]
    fn given_release_event_when_translating_then_ignored() {
        let event = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(chord_for(&event), None);
    }
}
