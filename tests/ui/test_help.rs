//! Rendering tests for the Help panel

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use panediff::ui::widgets::render_help_panel;

fn help(width: u16, height: u16, scroll: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), scroll))
        .unwrap();
    terminal
}

#[test]
fn test_help_panel_top() {
    assert_snapshot!(help(40, 10, 0).backend(), @r#"
    "╭────────── panediff - Help ───────────╮"
    "│Key bindings:                         │"
    "│                                      │"
    "│Global:                               │"
    "│  Ctrl+Q    Quit                      │"
    "│  F1        Help                      │"
    "│                                      │"
    "│Editor:                               │"
    "│  Ctrl+R    Compare both panes        │"
    "╰──────────────────────────────────────╯"
    "#);
}

#[test]
fn test_help_panel_scrolled() {
    // The first two lines are scrolled out of view
    assert_snapshot!(help(40, 6, 2).backend(), @r#"
    "╭────────── panediff - Help ───────────╮"
    "│Global:                               │"
    "│  Ctrl+Q    Quit                      │"
    "│  F1        Help                      │"
    "│                                      │"
    "╰──────────────────────────────────────╯"
    "#);
}
