//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::{self, KeyHint};
use crate::model::Side;
use crate::ui::views::{CompareView, EditorView};

/// Rows taken by the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

fn hint_span(hint: &KeyHint) -> Span<'static> {
    Span::styled(
        format!(" [{}] {} ", hint.key, hint.label),
        Style::default().fg(Color::Black).bg(hint.color),
    )
}

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(hint_span(hint));
    }

    Line::from(spans)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(hint_span(hint));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - STATUS_BAR_HEIGHT,
        width: area.width,
        height: STATUS_BAR_HEIGHT,
    })
}

fn side_badge(side: Side) -> Span<'static> {
    Span::styled(
        format!(" {} ", side.label()),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )
}

/// Render the status bar for the editor panes
pub fn render_editor_status_bar(frame: &mut Frame, editor: &EditorView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let prefix = vec![
        side_badge(editor.focus),
        Span::raw(" "),
        Span::styled(
            format!(
                " {} | {} lines ",
                editor.line_count(Side::Left),
                editor.line_count(Side::Right)
            ),
            Style::default().fg(Color::Cyan),
        ),
    ];

    let status = build_status_bar_with_prefix(prefix, keys::EDIT_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar for the compare view
pub fn render_compare_status_bar(frame: &mut Frame, view: &CompareView) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let context = match view.selection() {
        Some(selection) => format!(" {} rows selected ", selection.row_count()),
        None => format!(" row {}/{} ", view.cursor + 1, view.total_rows().max(1)),
    };

    let prefix = vec![
        side_badge(view.active),
        Span::raw(" "),
        Span::styled(context, Style::default().fg(Color::Cyan)),
    ];

    let status = build_status_bar_with_prefix(prefix, keys::COMPARE_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render the status bar for the help view
pub fn render_help_status_bar(frame: &mut Frame) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar(keys::HELP_VIEW_HINTS);
    frame.render_widget(Paragraph::new(status), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_status_bar() {
        let hints = &[
            KeyHint {
                key: "q",
                label: "Quit",
                color: Color::Red,
            },
            KeyHint {
                key: "?",
                label: "Help",
                color: Color::Cyan,
            },
        ];

        let line = build_status_bar(hints);
        // badge, separator, badge
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, " [q] Quit ");
    }

    #[test]
    fn test_build_status_bar_with_prefix() {
        let prefix = vec![Span::raw("Test: ")];
        let hints = &[KeyHint {
            key: "q",
            label: "Quit",
            color: Color::Red,
        }];

        let line = build_status_bar_with_prefix(prefix, hints);
        assert_eq!(line.spans[0].content, "Test: ");
        assert_eq!(line.spans[2].content, " [q] Quit ");
    }
}
