//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::model::Notification;
use crate::ui::widgets::{
    STATUS_BAR_HEIGHT, render_compare_status_bar, render_editor_status_bar, render_error_banner,
    render_help_panel, render_help_status_bar, render_notification_banner,
};

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        let area = frame.area();
        self.last_frame_height.set(area.height);

        // Reserve space for status bar at bottom
        let main_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(STATUS_BAR_HEIGHT),
        };

        match self.current_view {
            View::Edit => self.render_editor_view(frame, main_area, notification),
            View::Compare => {
                // Notification is drawn on the left pane border
                self.compare_view.render(frame, main_area, notification);
                render_compare_status_bar(frame, &self.compare_view);
            }
            View::Help => {
                render_help_panel(frame, main_area, self.help_scroll);
                render_help_status_bar(frame);
            }
        }

        // Render error banner above status bar (errors are always shown prominently)
        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error);
        }
    }

    fn render_editor_view(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
    ) {
        self.editor.render(frame, area);
        if let Some(notification) = notification {
            render_notification_banner(frame, area, notification);
        }
        render_editor_status_bar(frame, &self.editor);
    }
}
