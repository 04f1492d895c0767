//! Rendering tests for the Compare View

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::style::Color;

use panediff::app::App;
use panediff::engine::CompareOptions;
use panediff::ui::theme::compare_view;

use crate::support::draw;

fn compared(left: &str, right: &str) -> App {
    let mut app = App::with_text(left, right, CompareOptions::default());
    app.run_compare();
    // Keep the summary notification off the pane border
    app.notification = None;
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_compare_view_modified_row() {
    let app = compared("a\nb\nc", "a\nx\nc");
    let terminal = draw(&app, 80, 6);

    assert_snapshot!(terminal.backend(), @r#"
    "┏ Left ~1 -0 +0 [strip-spaces] ━━━━━━━━┓┌ Right ───────────────────────────────┐"
    "┃>1 a                                  ┃│ 1 a                                  │"
    "┃ 2 b                                  ┃│ 2 x                                  │"
    "┃ 3 c                                  ┃│ 3 c                                  │"
    "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛└──────────────────────────────────────┘"
    " left   row 1/3   [n/N] Diff   [v] Select   [y] Copy   [w] Spaces   [e] Edit   ["
    "#);

    let buffer = terminal.backend().buffer();
    // Border, marker, gutter, space, then text of row 1
    assert_eq!(buffer[(4, 2)].bg, compare_view::DIFF_LEFT_BG);
    assert_eq!(buffer[(44, 2)].bg, compare_view::DIFF_RIGHT_BG);
    assert_eq!(buffer[(4, 3)].bg, Color::Reset);
}

#[test]
fn test_compare_view_gap_row() {
    let app = compared("a\nb", "a");
    let terminal = draw(&app, 80, 6);

    assert_snapshot!(terminal.backend(), @r#"
    "┏ Left ~0 -1 +0 [strip-spaces] ━━━━━━━━┓┌ Right ───────────────────────────────┐"
    "┃>1 a                                  ┃│ 1 a                                  │"
    "┃ 2 b                                  ┃│                                      │"
    "┃                                      ┃│                                      │"
    "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛└──────────────────────────────────────┘"
    " left   row 1/2   [n/N] Diff   [v] Select   [y] Copy   [w] Spaces   [e] Edit   ["
    "#);

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(4, 2)].bg, compare_view::DELETE_BG);
    assert_eq!(buffer[(44, 2)].bg, compare_view::GAP_BG);
}

#[test]
fn test_compare_view_summary_on_border() {
    let mut app = App::with_text("a", "a", CompareOptions::default());
    app.run_compare();
    let terminal = draw(&app, 80, 5);

    assert_snapshot!(terminal.backend(), @r#"
    "┏ Left ~0 -0 +0 [strip-spaces] ━━━━━━━━┓┌ Right ───────────────────────────────┐"
    "┃>1 a                                  ┃│ 1 a                                  │"
    "┃                                      ┃│                                      │"
    "┗━━━━━━━━━━━━━━━━ Info  No differences ┛└──────────────────────────────────────┘"
    " left   row 1/1   [n/N] Diff   [v] Select   [y] Copy   [w] Spaces   [e] Edit   ["
    "#);
}

#[test]
fn test_status_bar_counts_selected_rows() {
    let mut app = compared("a\nb\nc", "a\nb\nc");
    app.on_key_event(key(KeyCode::Char('v')));
    app.on_key_event(key(KeyCode::Char('j')));
    let terminal = draw(&app, 40, 3);

    let buffer = terminal.backend().buffer();
    let status: String = (0..40).map(|x| buffer[(x, 2)].symbol()).collect();
    assert!(status.starts_with(" left   2 rows selected "), "{status}");
}

#[test]
fn test_empty_comparison() {
    let app = compared("", "");
    let terminal = draw(&app, 50, 7);

    assert_snapshot!(terminal.backend(), @r#"
    "╭────────────── panediff - Compare ──────────────╮"
    "│              Both panes are empty.             │"
    "│                                                │"
    "│     Press e to go back and paste some text.    │"
    "│                                                │"
    "╰────────────────────────────────────────────────╯"
    " left   row 1/1   [n/N] Diff   [v] Select   [y] Co"
    "#);
}
