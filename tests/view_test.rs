//! Tests for screen composition

use std::io;
use std::sync::Arc;

use ttree::application::App;
use ttree::config::Settings;
use ttree::infrastructure::traits::Clipboard;
use unicode_width::UnicodeWidthStr;

use ttree::infrastructure::view::{compose, draw, editor_lines, fit, TITLE};

struct NullClipboard;

impl Clipboard for NullClipboard {
    fn copy(&self, _text: &str) -> io::Result<()> {
        Ok(())
    }
}

fn app(preview: bool) -> App {
    let mut settings = Settings::default();
    settings.editor.preview = preview;
    App::new(&settings, Arc::new(NullClipboard))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_chord(&c.to_string());
    }
}

#[test]
fn given_nested_outline_when_listing_editor_lines_then_indents_by_depth() {
    let mut app = app(true);
    type_text(&mut app, "parent");
    app.handle_chord("alt+enter");
    type_text(&mut app, "child");
    app.handle_chord("enter");

    let lines = editor_lines(&app);

    assert_eq!(lines, vec!["• parent", "  • child", "  • ▏"]);
}

#[test]
fn given_caret_inside_text_when_listing_editor_lines_then_caret_drawn_there() {
    let mut app = app(true);
    type_text(&mut app, "ab");
    app.handle_chord("left");

    assert_eq!(editor_lines(&app), vec!["• a▏b"]);
}

#[test]
fn given_folded_parent_when_listing_editor_lines_then_marked_and_children_hidden() {
    let mut app = app(true);
    type_text(&mut app, "parent");
    app.handle_chord("alt+enter");
    type_text(&mut app, "child");
    app.handle_chord("up");
    app.handle_chord("ctrl+left");
    app.handle_chord("enter");

    assert_eq!(editor_lines(&app), vec!["▸ parent", "• ▏"]);
}

#[test]
fn given_small_terminal_when_composing_then_fills_exact_height() {
    let mut app = app(true);
    type_text(&mut app, "item");

    let screen = compose(&app, 40, 6);

    assert_eq!(screen.len(), 6);
    assert!(screen[0].left.starts_with(TITLE));
    assert!(screen[1].highlight);
    assert!(screen[1].left.starts_with("• item▏"));
    assert!(screen[1].right.contains("└── item"));
    assert!(!screen[2].highlight);
    for line in &screen {
        let width = line.left.width() + line.right.width();
        assert_eq!(width, 40);
    }
}

#[test]
fn given_preview_disabled_when_composing_then_editor_spans_full_width() {
    let app = app(false);

    let screen = compose(&app, 30, 5);

    assert_eq!(screen[1].left.width(), 30);
    assert!(screen[1].right.is_empty());
}

#[test]
fn given_status_message_when_composing_then_last_row_shows_it() {
    let mut app = app(true);
    app.handle_chord("ctrl+c");

    let screen = compose(&app, 60, 8);

    assert!(screen[7].left.starts_with("Copied to clipboard!"));
    assert!(screen[6].left.contains("tab:indent"));
}

#[test]
fn given_cursor_below_body_when_composing_then_scrolls_to_keep_it_visible() {
    let mut app = app(false);
    for label in ["a", "b", "c", "d", "e"] {
        type_text(&mut app, label);
        app.handle_chord("enter");
    }

    // title + 3 body rows + help + status
    let screen = compose(&app, 20, 6);

    let body: Vec<&str> = screen[1..4].iter().map(|l| l.left.trim_end()).collect();
    assert_eq!(body, vec!["• d", "• e", "• ▏"]);
    assert!(screen[3].highlight);
}

#[test]
fn given_zero_size_when_composing_then_nothing() {
    let app = app(true);
    assert!(compose(&app, 0, 10).is_empty());
    assert!(compose(&app, 10, 0).is_empty());
}

#[test]
fn given_app_when_drawing_then_writes_title_and_labels() {
    let mut app = app(true);
    type_text(&mut app, "drawn");
    let mut out = Vec::new();

    draw(&mut out, &app, 40, 6).unwrap();

    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("ttree - Tree Editor"));
    assert!(text.contains("└── drawn"));
}

#[test]
fn given_wide_label_when_composing_then_rows_keep_terminal_width() {
    let mut app = app(true);
    type_text(&mut app, "日本語のメモ");

    let screen = compose(&app, 40, 6);

    assert!(screen[1].left.starts_with("• 日本語のメモ▏"));
    assert!(screen[1].right.contains("└── 日本語のメモ"));
    for line in &screen {
        assert_eq!(line.left.width() + line.right.width(), 40, "{:?}", line);
    }
    // the separator sits right after the editor pane: (40 - 3) / 2 columns
    assert_eq!(screen[1].left.width(), 18);
}

#[test]
fn given_wide_label_when_pane_too_narrow_then_cut_at_column_boundary() {
    let mut app = app(true);
    type_text(&mut app, "日本語のメモ");

    let screen = compose(&app, 20, 5);

    assert_eq!(screen[1].left, "• 日本語");
    assert_eq!(screen[1].right, " │ └── 日本 ");
    assert_eq!(screen[1].left.width() + screen[1].right.width(), 20);
}

#[test]
fn given_wide_char_straddling_edge_when_fitting_then_padded_instead() {
    assert_eq!(fit("a日", 2), "a ");
    assert_eq!(fit("日本", 4), "日本");
    assert_eq!(fit("", 3), "   ");
}
