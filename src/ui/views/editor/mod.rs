//! Editor View
//!
//! Two editable panes holding the raw, unpadded input of each side.
//! The aligned rendering never touches these panes, so a new comparison
//! always starts from what the user typed.

mod input;
mod render;

use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use tui_textarea::TextArea;

use crate::model::Side;
use crate::ui::{components, theme};

/// Actions that EditorView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// No action needed
    None,
    /// Compare both panes
    Compare,
    /// Paste clipboard content into the focused pane
    Paste,
    /// Show help
    Help,
}

/// Editor view state
#[derive(Debug)]
pub struct EditorView {
    left: TextArea<'static>,
    right: TextArea<'static>,
    /// Pane receiving key input
    pub focus: Side,
}

impl Default for EditorView {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorView {
    /// Create a view with two empty panes
    pub fn new() -> Self {
        Self::with_text("", "")
    }

    /// Create a view with preloaded text
    pub fn with_text(left: &str, right: &str) -> Self {
        let mut view = Self {
            left: new_textarea(left),
            right: new_textarea(right),
            focus: Side::Left,
        };
        view.apply_focus_styles();
        view
    }

    /// Raw text of one pane, lines joined with `\n`
    pub fn content(&self, side: Side) -> String {
        self.textarea(side).lines().join("\n")
    }

    /// Replace the text of one pane
    pub fn set_content(&mut self, side: Side, text: &str) {
        *self.textarea_mut(side) = new_textarea(text);
        self.apply_focus_styles();
    }

    /// Empty the focused pane
    pub fn clear_focused(&mut self) {
        self.set_content(self.focus, "");
    }

    /// Move focus to the other pane
    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
        self.apply_focus_styles();
    }

    /// Select everything in the focused pane
    pub fn select_all(&mut self) {
        self.textarea_mut(self.focus).select_all();
    }

    /// Insert text at the cursor of the focused pane, replacing the selection
    pub fn paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n");
        let textarea = self.textarea_mut(self.focus);
        if textarea.is_selecting() {
            textarea.cut();
        }
        textarea.insert_str(text);
    }

    /// Number of lines one pane contributes to a comparison
    ///
    /// An empty last row after a final newline is not a line of its own.
    pub fn line_count(&self, side: Side) -> usize {
        let lines = self.textarea(side).lines();
        match lines.last() {
            Some(last) if last.is_empty() => lines.len() - 1,
            _ => lines.len(),
        }
    }

    pub(crate) fn textarea(&self, side: Side) -> &TextArea<'static> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn textarea_mut(&mut self, side: Side) -> &mut TextArea<'static> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn apply_focus_styles(&mut self) {
        for side in [Side::Left, Side::Right] {
            let focused = side == self.focus;
            let cursor_line = if focused {
                Style::default().underlined()
            } else {
                Style::default()
            };
            let title = match side {
                Side::Left => " Left ",
                Side::Right => " Right ",
            };

            let textarea = self.textarea_mut(side);
            textarea.set_block(
                components::pane_block(Line::from(title).bold(), focused),
            );
            textarea.set_cursor_line_style(cursor_line);
            textarea.set_cursor_style(if focused {
                Style::default().reversed()
            } else {
                Style::default()
            });
        }
    }
}

fn new_textarea(text: &str) -> TextArea<'static> {
    // One textarea row per `\n` piece, so `content()` gives the text back
    // unchanged, trailing newlines included
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    let mut textarea = TextArea::new(lines);
    textarea.set_line_number_style(Style::default().fg(theme::editor::LINE_NUMBER));
    textarea.set_placeholder_text("Paste or type text here");
    textarea
}
