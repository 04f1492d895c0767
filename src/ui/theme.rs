//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::{Color, Style};

use crate::engine::Highlight;
use crate::model::{NotificationKind, Side};

/// Border of the pane that has focus (editor) or is active (compare)
pub const FOCUSED_BORDER: Color = Color::Yellow;
/// Border of the other pane
pub const UNFOCUSED_BORDER: Color = Color::DarkGray;

/// Colors for the editor panes
pub mod editor {
    use super::*;

    /// Line number gutter
    pub const LINE_NUMBER: Color = Color::DarkGray;
}

/// Colors for error and notification messages
pub mod message {
    use super::*;

    pub const ERROR: Color = Color::Red;
    pub const SUCCESS: Color = Color::Green;
    pub const INFO: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    /// Text on a colored badge
    pub const BADGE_FG: Color = Color::Black;
}

/// Colors for the Compare View
pub mod compare_view {
    use super::*;

    /// Modified line, left side
    pub const DIFF_LEFT_BG: Color = Color::Rgb(0xFF, 0xC0, 0xC0);
    /// Modified line, right side
    pub const DIFF_RIGHT_BG: Color = Color::Rgb(0xC0, 0xFF, 0xC0);
    /// Deleted line (left only)
    pub const DELETE_BG: Color = Color::Rgb(0xFF, 0xD0, 0xD0);
    /// Inserted line (right only)
    pub const INSERT_BG: Color = Color::Rgb(0xD0, 0xFF, 0xD0);
    /// Filler row opposite an inserted/deleted line
    pub const GAP_BG: Color = Color::Rgb(0xF0, 0xF0, 0xF0);
    /// Text drawn on top of a highlight
    pub const HIGHLIGHT_FG: Color = Color::Black;
    /// Original line number gutter
    pub const LINE_NUMBER: Color = Color::DarkGray;
    /// Cursor row background
    pub const CURSOR_BG: Color = Color::DarkGray;
    /// Selected rows background
    pub const SELECTION_BG: Color = Color::Blue;
}

/// Style for one side of a row with the given highlight
pub fn highlight_style(highlight: Highlight, side: Side) -> Style {
    use compare_view::*;

    let bg = match (highlight, side) {
        (Highlight::None, _) => return Style::default(),
        (Highlight::Diff, Side::Left) => DIFF_LEFT_BG,
        (Highlight::Diff, Side::Right) => DIFF_RIGHT_BG,
        (Highlight::Delete, _) => DELETE_BG,
        (Highlight::Insert, _) => INSERT_BG,
        (Highlight::Gap, _) => GAP_BG,
    };
    Style::default().fg(HIGHLIGHT_FG).bg(bg)
}

/// Accent color of a notification
pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => message::SUCCESS,
        NotificationKind::Info => message::INFO,
        NotificationKind::Warning => message::WARNING,
    }
}

/// Border style of a pane
pub fn border_style(focused: bool) -> Style {
    Style::default().fg(if focused {
        FOCUSED_BORDER
    } else {
        UNFOCUSED_BORDER
    })
}
