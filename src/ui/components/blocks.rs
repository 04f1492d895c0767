//! Pane and panel frames

use ratatui::{
    text::Line,
    widgets::{Block, BorderType},
};

use crate::ui::theme;

/// Frame of an editor or compare pane; the focused one gets the accent border
pub fn pane_block<'a>(title: impl Into<Line<'a>>, focused: bool) -> Block<'a> {
    Block::bordered()
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(theme::border_style(focused))
        .title(title)
}

/// Frame of a full-screen panel (help, empty comparison)
pub fn panel_block<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::bordered().border_type(BorderType::Rounded).title(title)
}
