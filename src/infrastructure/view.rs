//! Screen layout: editor pane, preview pane, help and status lines.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::App;

pub const TITLE: &str = " ttree - Tree Editor";
const CARET: char = '▏';
const SEPARATOR: &str = " │ ";

/// One screen row: the editor segment (possibly highlighted) and the preview segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLine {
    pub left: String,
    pub right: String,
    pub highlight: bool,
}

impl ScreenLine {
    fn plain(text: String) -> Self {
        Self {
            left: text,
            ..Default::default()
        }
    }
}

/// Pad or cut `text` to exactly `width` terminal columns.
///
/// A wide char that would straddle the edge is dropped and replaced by padding.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Editor pane rows, one per visible node.
pub fn editor_lines(app: &App) -> Vec<String> {
    let session = app.session();
    let outline = session.outline();
    session
        .visible()
        .iter()
        .enumerate()
        .map(|(row, &id)| {
            let indent = "  ".repeat(outline.depth(id));
            let folded = outline
                .get_node(id)
                .is_some_and(|n| !n.expanded && n.has_children());
            let bullet = if folded { "▸ " } else { "• " };
            let text = if row == session.cursor() {
                let (before, after) = session.buffer().split_at_caret();
                format!("{before}{CARET}{after}")
            } else {
                let text = outline.text(id).unwrap_or_default();
                if text.is_empty() {
                    " ".to_string()
                } else {
                    text.to_string()
                }
            };
            format!("{indent}{bullet}{text}")
        })
        .collect()
}

/// Lay out the whole screen for a `width` x `height` terminal.
pub fn compose(app: &App, width: u16, height: u16) -> Vec<ScreenLine> {
    let width = width as usize;
    let height = height as usize;
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let (editor_width, preview_width) = if app.show_preview() {
        let separator = SEPARATOR.width();
        let editor = width.saturating_sub(separator) / 2;
        (editor, width.saturating_sub(editor + separator))
    } else {
        (width, 0)
    };

    let mut screen = vec![ScreenLine::plain(fit(TITLE, width))];
    let body_height = height.saturating_sub(3);

    let editor = editor_lines(app);
    let cursor = app.session().cursor();
    let offset = (cursor + 1).saturating_sub(body_height);
    let preview = if app.show_preview() {
        app.preview_lines()
    } else {
        Vec::new()
    };

    for row in 0..body_height {
        let left = editor.get(offset + row).map(String::as_str).unwrap_or("");
        let right = if app.show_preview() {
            let text = preview.get(row).map(String::as_str).unwrap_or("");
            format!("{SEPARATOR}{}", fit(text, preview_width))
        } else {
            String::new()
        };
        screen.push(ScreenLine {
            left: fit(left, editor_width),
            right,
            highlight: offset + row == cursor && offset + row < editor.len(),
        });
    }

    if height >= 2 {
        screen.push(ScreenLine::plain(fit(&format!(" {} ", app.help_line()), width)));
    }
    if height >= 3 {
        screen.push(ScreenLine::plain(fit(app.message().unwrap_or(""), width)));
    }
    screen.truncate(height);
    screen
}

/// Draw the composed screen.
pub fn draw(out: &mut impl Write, app: &App, width: u16, height: u16) -> io::Result<()> {
    for (row, line) in compose(app, width, height).into_iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Clear(ClearType::CurrentLine))?;
        if line.highlight {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(&line.left),
                SetAttribute(Attribute::Reset)
            )?;
        } else {
            queue!(out, Print(&line.left))?;
        }
        queue!(out, Print(&line.right))?;
    }
    out.flush()
}
