//! Application state and view management

use std::cell::Cell;

use crate::config::Config;
use crate::engine::CompareOptions;
use crate::model::Notification;
use crate::session::CompareSession;
use crate::ui::views::{CompareView, EditorView};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Edit,
    Compare,
    Help,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Previous view (for back navigation)
    pub(crate) previous_view: Option<View>,
    /// Raw text panes
    pub editor: EditorView,
    /// Aligned rendering of the latest comparison
    pub compare_view: CompareView,
    /// Comparison state shared by the views
    pub session: CompareSession,
    /// Options used by the next comparison
    pub options: CompareOptions,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/warning messages)
    pub notification: Option<Notification>,
    /// Help panel scroll offset
    pub help_scroll: u16,
    /// Last known frame height (updated during render, uses Cell for interior mutability)
    pub(crate) last_frame_height: Cell<u16>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Construct a new instance of [`App`] with empty panes.
    pub fn new() -> Self {
        Self::with_text("", "", CompareOptions::default())
    }

    /// Construct an [`App`] with both panes preloaded.
    pub fn with_text(left: &str, right: &str, options: CompareOptions) -> Self {
        Self {
            running: true,
            current_view: View::Edit,
            previous_view: None,
            editor: EditorView::with_text(left, right),
            compare_view: CompareView::new(),
            session: CompareSession::new(),
            options,
            error_message: None,
            notification: None,
            help_scroll: 0,
            last_frame_height: Cell::new(24), // Default terminal height
        }
    }

    /// Build the application from command-line configuration and loaded inputs.
    ///
    /// With `--compare` the first comparison runs immediately.
    pub fn from_config(config: &Config, left: &str, right: &str) -> Self {
        let mut app = Self::with_text(left, right, config.compare_options());
        if config.compare {
            app.run_compare();
        }
        app
    }

    /// Navigate to a specific view
    pub(crate) fn go_to_view(&mut self, view: View) {
        if self.current_view != view {
            self.previous_view = Some(self.current_view);
            self.current_view = view;

            if view == View::Help {
                self.help_scroll = 0;
            }
        }
    }

    /// Go back to previous view
    pub(crate) fn go_back(&mut self) {
        self.current_view = self.previous_view.take().unwrap_or(View::Edit);
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_edit_view() {
        let app = App::new();
        assert!(app.running);
        assert_eq!(app.current_view, View::Edit);
        assert!(!app.session.has_result());
    }

    #[test]
    fn test_go_back_returns_to_previous_view() {
        let mut app = App::new();
        app.go_to_view(View::Compare);
        app.go_to_view(View::Help);
        app.go_back();
        assert_eq!(app.current_view, View::Compare);
        // Nothing left to go back to
        app.go_back();
        assert_eq!(app.current_view, View::Edit);
    }

    #[test]
    fn test_go_to_same_view_keeps_history() {
        let mut app = App::new();
        app.go_to_view(View::Compare);
        app.go_to_view(View::Compare);
        assert_eq!(app.previous_view, Some(View::Edit));
    }

    #[test]
    fn test_from_config_with_compare_flag() {
        let config = Config {
            compare: true,
            ..Config::default()
        };
        let app = App::from_config(&config, "a\nb", "a\nc");
        assert_eq!(app.current_view, View::Compare);
        assert_eq!(app.compare_view.stats.modified, 1);
    }

    #[test]
    fn test_from_config_without_compare_flag() {
        let app = App::from_config(&Config::default(), "a", "b");
        assert_eq!(app.current_view, View::Edit);
        assert_eq!(app.editor.content(crate::model::Side::Left), "a");
    }

    #[test]
    fn test_clear_expired_notification() {
        let mut app = App::new();
        app.notification = Some(Notification::info("kept"));
        app.clear_expired_notification();
        assert!(app.notification.is_some());

        app.notification = Some(Notification::info("gone").with_ttl(std::time::Duration::ZERO));
        app.clear_expired_notification();
        assert!(app.notification.is_none());
    }
}
