//! Help panel widget
//!
//! Key binding table for all views. `build_help_lines()` is the single
//! source of both the rendered text and the scroll bounds.

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::keys;
use crate::ui::components;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Editor", keys::EDIT_KEYS);
    push_section(&mut lines, "Compare View", keys::COMPARE_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }

    // Blank separator
    lines.push(Line::from(""));
}

/// Number of lines in the help panel (for scroll bounds)
pub fn help_line_count() -> usize {
    build_help_lines().len()
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top). Values beyond the
/// content length are clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" panediff - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(components::panel_block(title))
            .scroll((scroll, 0)),
        area,
    );
}
