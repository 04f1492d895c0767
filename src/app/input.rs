//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{CompareAction, EditorAction};
use crate::ui::widgets;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_quit_key(&key) {
            self.quit();
            return;
        }

        match self.current_view {
            View::Edit => {
                let action = self.editor.handle_key(key);
                self.handle_editor_action(action);
            }
            View::Compare => {
                // Panes take the whole height minus status bar and borders
                let visible_height = self.last_frame_height.get().saturating_sub(3) as usize;
                let action = self
                    .compare_view
                    .handle_key_with_height(key, visible_height.max(1));
                self.handle_compare_action(action);
            }
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_editor_action(&mut self, action: EditorAction) {
        match action {
            EditorAction::None => {}
            EditorAction::Compare => self.run_compare(),
            EditorAction::Paste => self.paste_from_clipboard(),
            EditorAction::Help => self.go_to_view(View::Help),
        }
    }

    fn handle_compare_action(&mut self, action: CompareAction) {
        match action {
            CompareAction::None => {}
            CompareAction::Copy => self.copy_selection(),
            CompareAction::CycleNormalization => self.cycle_normalization(),
            CompareAction::Edit => self.go_to_view(View::Edit),
            CompareAction::Help => self.go_to_view(View::Help),
            CompareAction::Quit => self.quit(),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        let visible = self.last_frame_height.get().saturating_sub(3);
        let max_scroll = (widgets::help_line_count() as u16).saturating_sub(visible);

        match key.code {
            keys::QUIT | keys::ESC | keys::HELP | keys::HELP_F1 => self.go_back(),
            code if keys::is_move_down(code) => {
                self.help_scroll = (self.help_scroll + 1).min(max_scroll);
            }
            code if keys::is_move_up(code) => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            keys::GO_TOP => self.help_scroll = 0,
            keys::GO_BOTTOM => self.help_scroll = max_scroll,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CompareOptions;
    use crate::model::Side;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn app(left: &str, right: &str) -> App {
        App::with_text(left, right, CompareOptions::default())
    }

    #[test]
    fn test_ctrl_q_quits_from_any_view() {
        for view in [View::Edit, View::Compare, View::Help] {
            let mut app = app("", "");
            app.current_view = view;
            app.on_key_event(ctrl('q'));
            assert!(!app.running, "{view:?}");
        }
    }

    #[test]
    fn test_q_types_in_editor() {
        let mut app = app("", "");
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.editor.content(Side::Left), "q");
    }

    #[test]
    fn test_compare_and_back_to_edit() {
        let mut app = app("a\nb", "a\nc");
        app.on_key_event(ctrl('r'));
        assert_eq!(app.current_view, View::Compare);

        app.on_key_event(key(KeyCode::Char('e')));
        assert_eq!(app.current_view, View::Edit);
        assert_eq!(app.editor.content(Side::Left), "a\nb");
    }

    #[test]
    fn test_q_quits_compare_view() {
        let mut app = app("a", "b");
        app.on_key_event(ctrl('r'));
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_help_from_compare_and_back() {
        let mut app = app("a", "b");
        app.on_key_event(ctrl('r'));
        app.on_key_event(key(KeyCode::Char('?')));
        assert_eq!(app.current_view, View::Help);

        app.on_key_event(key(KeyCode::Esc));
        assert_eq!(app.current_view, View::Compare);
    }

    #[test]
    fn test_f1_opens_help_from_editor() {
        let mut app = app("", "");
        app.on_key_event(key(KeyCode::F(1)));
        assert_eq!(app.current_view, View::Help);
        app.on_key_event(key(KeyCode::Char('q')));
        assert_eq!(app.current_view, View::Edit);
        assert!(app.running);
    }

    #[test]
    fn test_help_scroll_is_bounded() {
        let mut app = app("", "");
        app.last_frame_height.set(10);
        app.on_key_event(key(KeyCode::F(1)));
        app.on_key_event(key(KeyCode::Char('k')));
        assert_eq!(app.help_scroll, 0);

        app.on_key_event(key(KeyCode::Char('G')));
        let max = (widgets::help_line_count() as u16).saturating_sub(7);
        assert_eq!(app.help_scroll, max);
        app.on_key_event(key(KeyCode::Char('j')));
        assert_eq!(app.help_scroll, max);
    }

    #[test]
    fn test_copy_without_selection_notifies() {
        let mut app = app("a", "b");
        app.on_key_event(ctrl('r'));
        app.on_key_event(key(KeyCode::Char('y')));
        let message = app.notification.as_ref().map(|n| n.message.as_str());
        assert_eq!(message, Some("Nothing to copy"));
    }

    #[test]
    fn test_w_cycles_normalization() {
        let mut app = app("a b", "ab");
        app.on_key_event(ctrl('r'));
        app.on_key_event(key(KeyCode::Char('w')));
        assert_eq!(app.compare_view.stats.modified, 1);
    }

    #[test]
    fn test_error_cleared_on_key() {
        let mut app = app("", "");
        app.set_error("boom");
        app.on_key_event(key(KeyCode::Tab));
        assert!(app.error_message.is_none());
        assert_eq!(app.editor.focus, Side::Right);
    }
}
