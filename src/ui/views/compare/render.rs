//! Rendering for CompareView

use ratatui::{
    prelude::*,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Notification, Side};
use crate::ui::{components, theme};

use super::{CompareView, expand_tabs};

impl CompareView {
    /// Render both panes (without status bar - rendered by App)
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        if self.is_empty() {
            let title = Line::from(" panediff - Compare ").bold().centered();
            frame.render_widget(
                components::nothing_to_compare_state(area.height.saturating_sub(2))
                    .block(components::panel_block(title)),
                area,
            );
            return;
        }

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        self.render_pane(frame, left_area, Side::Left, notification);
        self.render_pane(frame, right_area, Side::Right, None);
    }

    fn render_pane(
        &self,
        frame: &mut Frame,
        area: Rect,
        side: Side,
        notification: Option<&Notification>,
    ) {
        let mut block = components::pane_block(self.pane_title(side), side == self.active);

        if let Some(notif) = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, area.width.saturating_sub(4) as usize))
            .filter(|line| !line.spans.is_empty())
        {
            block = block.title_bottom(notif.right_aligned());
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;
        let gutter_width = self.gutter_width();

        let lines: Vec<Line> = (self.scroll_offset..self.total_rows())
            .take(inner_height)
            .map(|row| self.build_row_line(side, row, gutter_width, inner_width))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Pane title: side name plus, on the left, the comparison summary
    fn pane_title(&self, side: Side) -> Line<'static> {
        match side {
            Side::Left => Line::from(vec![
                Span::raw(" Left ").bold(),
                Span::styled(
                    format!("~{} ", self.stats.modified),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("-{} ", self.stats.left_only),
                    Style::default().fg(Color::Red),
                ),
                Span::styled(
                    format!("+{} ", self.stats.right_only),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("[{}] ", self.normalization.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Side::Right => Line::from(" Right ").bold(),
        }
    }

    /// Width of the line number column (digits of the largest number)
    fn gutter_width(&self) -> usize {
        self.total_rows().max(1).to_string().len()
    }

    /// Build one display row: cursor marker, line number, text padded to width
    fn build_row_line(
        &self,
        side: Side,
        row: usize,
        gutter_width: usize,
        inner_width: usize,
    ) -> Line<'static> {
        let is_cursor = row == self.cursor;
        let is_active = side == self.active;
        let is_selected = is_active && self.is_selected(row);

        let marker = if is_cursor && is_active { ">" } else { " " };
        let number = self
            .line_number(side, row)
            .map(|n| format!("{n:>gutter_width$}"))
            .unwrap_or_else(|| " ".repeat(gutter_width));
        let gutter_style = if is_cursor {
            Style::default()
                .fg(Color::White)
                .bg(theme::compare_view::CURSOR_BG)
        } else if is_selected {
            Style::default()
                .fg(Color::White)
                .bg(theme::compare_view::SELECTION_BG)
        } else {
            Style::default().fg(theme::compare_view::LINE_NUMBER)
        };

        let text = self
            .slot(side, row)
            .map(|slot| display_text(slot.text(), self.h_offset))
            .unwrap_or_default();
        let text_width = inner_width.saturating_sub(gutter_width + 2);
        let text = fit_to_width(&text, text_width);

        let mut text_style = theme::highlight_style(self.highlight_at(side, row), side);
        if is_selected {
            text_style = text_style.add_modifier(Modifier::REVERSED);
        }

        Line::from(vec![
            Span::styled(format!("{marker}{number}"), gutter_style),
            Span::raw(" "),
            Span::styled(text, text_style),
        ])
    }
}

/// Expand tabs and drop the first `h_offset` characters
fn display_text(text: &str, h_offset: usize) -> String {
    expand_tabs(text)
        .chars()
        .skip(h_offset)
        .collect()
}

/// Truncate or pad with spaces so highlights span the whole row
fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = Span::raw(ch.to_string()).width();
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_expands_tabs_and_scrolls() {
        assert_eq!(display_text("\tab", 0), "    ab");
        assert_eq!(display_text("abcdef", 2), "cdef");
        assert_eq!(display_text("ab", 5), "");
    }

    #[test]
    fn test_fit_to_width_pads() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn test_fit_to_width_truncates() {
        assert_eq!(fit_to_width("abcdef", 3), "abc");
        assert_eq!(fit_to_width("abc", 0), "");
    }

    #[test]
    fn test_fit_to_width_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(fit_to_width("日本語", 5), "日本 ");
    }
}
