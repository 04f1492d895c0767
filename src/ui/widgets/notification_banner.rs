//! Notification banner for the editor screen
//!
//! The compare view draws notifications on the bottom border of its left pane.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::Notification;
use crate::ui::components;

/// Draw `notification` over the bottom border of `area`, right-aligned
pub fn render_notification_banner(frame: &mut Frame, area: Rect, notification: &Notification) {
    if area.height == 0 {
        return;
    }

    let banner_area = Rect {
        x: area.x + 2,
        y: area.bottom() - 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let line = components::build_notification_title(notification, banner_area.width as usize);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), banner_area);
}
