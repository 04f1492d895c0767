//! One-line messages
//!
//! Errors and notifications share the same shape: a colored badge followed
//! by the message text in the badge color.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::Notification;
use crate::ui::theme::{self, message};

fn badge_line(label: &str, color: Color, text: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {label} "),
            Style::default().fg(message::BADGE_FG).bg(color),
        ),
        Span::raw(" "),
        Span::styled(text, Style::default().fg(color)),
    ])
}

/// Error banner line: `[ Error ] message`
pub fn build_error_line(error: &str) -> Line<'static> {
    badge_line("Error", message::ERROR, error.to_string())
}

/// Notification line that fits in `max_width` columns
///
/// The message is cut with "…" when it does not fit. Returns an empty line
/// when not even the badge and one character fit.
pub fn build_notification_title(notification: &Notification, max_width: usize) -> Line<'static> {
    let label = notification.kind.label();
    // badge padding on both sides, separator, trailing space
    let room = max_width.saturating_sub(label.len() + 4);
    if room == 0 {
        return Line::default();
    }

    let text = truncate_to_width(&notification.message, room);
    badge_line(
        label,
        theme::notification_color(notification.kind),
        format!("{text} "),
    )
}

/// Cut `text` to at most `width` display columns, marking the cut with "…"
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if Span::raw(text).width() <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = Span::raw(ch.to_string()).width();
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
