//! Placeholder shown instead of an empty comparison

use ratatui::{
    layout::Alignment,
    style::Stylize,
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};

/// Message with an optional dimmed hint below it, both centered
///
/// `height` is the inner height the paragraph will be drawn into; the text
/// is padded from the top so it sits in the vertical middle.
pub fn centered_message(message: &str, hint: Option<&str>, height: u16) -> Paragraph<'static> {
    let mut body = vec![Line::from(message.to_string()).bold()];
    if let Some(hint) = hint {
        body.push(Line::default());
        body.push(Line::from(hint.to_string()).dark_gray());
    }

    let pad = (height as usize).saturating_sub(body.len()) / 2;
    let mut lines = vec![Line::default(); pad];
    lines.extend(body);

    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Shown when both panes are empty
pub fn nothing_to_compare_state(height: u16) -> Paragraph<'static> {
    centered_message(
        "Both panes are empty.",
        Some("Press e to go back and paste some text."),
        height,
    )
}
