//! Key handling for CompareView

use crossterm::event::KeyEvent;

use crate::keys;

use super::{CompareAction, CompareView};

impl CompareView {
    /// Handle key input
    #[cfg(test)]
    pub fn handle_key(&mut self, key: KeyEvent) -> CompareAction {
        self.handle_key_with_height(key, Self::DEFAULT_VISIBLE_HEIGHT)
    }

    /// Handle key input with explicit visible height
    pub fn handle_key_with_height(
        &mut self,
        key: KeyEvent,
        visible_height: usize,
    ) -> CompareAction {
        // Always update visible_height to ensure accurate scroll bounds
        self.visible_height = visible_height;

        if keys::is_copy_key(&key) {
            return CompareAction::Copy;
        }
        if keys::is_select_all_key(&key) {
            self.select_all();
            return CompareAction::None;
        }
        if keys::is_half_page_down(&key) {
            self.half_page_down();
            return CompareAction::None;
        }
        if keys::is_half_page_up(&key) {
            self.half_page_up();
            return CompareAction::None;
        }

        match key.code {
            code if keys::is_move_down(code) => self.move_down(),
            code if keys::is_move_up(code) => self.move_up(),
            code if keys::is_scroll_left(code) => self.scroll_left(),
            code if keys::is_scroll_right(code) => self.scroll_right(),
            keys::PAGE_DOWN => self.page_down(),
            keys::PAGE_UP => self.page_up(),
            keys::GO_TOP => self.jump_to_top(),
            keys::GO_BOTTOM => self.jump_to_bottom(),
            keys::NEXT_DIFF => self.next_hunk(),
            keys::PREV_DIFF => self.prev_hunk(),
            keys::TAB | keys::BACK_TAB => self.switch_side(),
            keys::VISUAL => self.toggle_visual(),
            keys::YANK => return CompareAction::Copy,
            keys::NORMALIZE_CYCLE => return CompareAction::CycleNormalization,
            keys::EDIT | keys::ESC => {
                // Esc first drops an active selection
                if key.code == keys::ESC && self.anchor.is_some() {
                    self.clear_selection();
                } else {
                    return CompareAction::Edit;
                }
            }
            keys::HELP | keys::HELP_F1 => return CompareAction::Help,
            keys::QUIT => return CompareAction::Quit,
            _ => {}
        }
        CompareAction::None
    }
}
