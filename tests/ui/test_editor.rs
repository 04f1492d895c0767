//! Rendering tests for the editor panes

use insta::assert_snapshot;

use panediff::app::App;
use panediff::engine::CompareOptions;

use crate::support::draw;

#[test]
fn test_editor_shows_both_panes() {
    let app = App::with_text("hello\nworld", "hi", CompareOptions::default());
    let terminal = draw(&app, 40, 6);

    assert_snapshot!(terminal.backend(), @r#"
    "┏ Left ━━━━━━━━━━━━┓┌ Right ───────────┐"
    "┃ 1 hello          ┃│ 1 hi             │"
    "┃ 2 world          ┃│                  │"
    "┃                  ┃│                  │"
    "┗━━━━━━━━━━━━━━━━━━┛└──────────────────┘"
    " left   2 | 1 lines   [^R] Compare   [Ta"
    "#);
}

#[test]
fn test_editor_placeholder_and_focus() {
    let mut app = App::new();
    app.editor.switch_focus();
    let terminal = draw(&app, 40, 6);

    assert_snapshot!(terminal.backend(), @r#"
    "┌ Left ────────────┐┏ Right ━━━━━━━━━━━┓"
    "│ Paste or type tex│┃ Paste or type tex┃"
    "│                  │┃                  ┃"
    "│                  │┃                  ┃"
    "└──────────────────┘┗━━━━━━━━━━━━━━━━━━┛"
    " right   0 | 0 lines   [^R] Compare   [T"
    "#);
}

#[test]
fn test_editor_shows_error_banner() {
    let mut app = App::new();
    app.error_message = Some("Something failed".to_string());
    let terminal = draw(&app, 40, 6);

    // Last text row of the panes, just inside the left border
    let buffer = terminal.backend().buffer();
    let row: String = (0..40).map(|x| buffer[(x, 3)].symbol()).collect();
    assert!(row.starts_with("┃  Error  Something failed "), "{row}");
    assert_eq!(buffer[(2, 3)].bg, panediff::ui::theme::message::ERROR);
}
