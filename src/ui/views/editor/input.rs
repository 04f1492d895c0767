//! Key handling for EditorView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{EditorAction, EditorView};

impl EditorView {
    /// Handle key input
    ///
    /// Keys not bound to an editor action are forwarded to the focused
    /// text area (typing, cursor movement, internal copy/cut/undo).
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if keys::is_compare_key(&key) {
            return EditorAction::Compare;
        }
        if keys::is_paste_key(&key) {
            return EditorAction::Paste;
        }
        if keys::is_select_all_key(&key) {
            self.select_all();
            return EditorAction::None;
        }
        if keys::is_clear_key(&key) {
            self.clear_focused();
            return EditorAction::None;
        }

        match key.code {
            keys::TAB | keys::BACK_TAB => {
                self.switch_focus();
                EditorAction::None
            }
            keys::HELP_F1 => EditorAction::Help,
            _ => {
                let focus = self.focus;
                self.textarea_mut(focus).input(key);
                EditorAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Side;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_str(view: &mut EditorView, text: &str) {
        for ch in text.chars() {
            let code = if ch == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(ch)
            };
            view.handle_key(key(code));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_pane() {
        let mut view = EditorView::new();
        type_str(&mut view, "ab\ncd");
        assert_eq!(view.content(Side::Left), "ab\ncd");

        view.handle_key(key(KeyCode::Tab));
        type_str(&mut view, "x");
        assert_eq!(view.content(Side::Right), "x");
    }

    #[test]
    fn test_compare_and_paste_actions() {
        let mut view = EditorView::new();
        assert_eq!(view.handle_key(ctrl('r')), EditorAction::Compare);
        assert_eq!(view.handle_key(ctrl('v')), EditorAction::Paste);
        assert_eq!(view.handle_key(key(KeyCode::F(1))), EditorAction::Help);
    }

    #[test]
    fn test_plain_q_is_text() {
        let mut view = EditorView::new();
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), EditorAction::None);
        assert_eq!(view.content(Side::Left), "q");
    }

    #[test]
    fn test_ctrl_l_clears_focused_pane() {
        let mut view = EditorView::with_text("abc", "def");
        view.handle_key(ctrl('l'));
        assert_eq!(view.content(Side::Left), "");
        assert_eq!(view.content(Side::Right), "def");
    }

    #[test]
    fn test_backtab_switches_focus() {
        let mut view = EditorView::new();
        view.handle_key(key(KeyCode::BackTab));
        assert_eq!(view.focus, Side::Right);
    }
}
