//! Rendering for EditorView

use ratatui::prelude::*;

use crate::model::Side;

use super::EditorView;

impl EditorView {
    /// Render both panes side by side (without status bar - rendered by App)
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        frame.render_widget(self.textarea(Side::Left), left_area);
        frame.render_widget(self.textarea(Side::Right), right_area);
    }
}
