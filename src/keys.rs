//! Keybinding definitions for panediff
//!
//! All keybindings are defined here for easy modification and future config file support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+<ch>
/// Note: Accept both lower and upper case for terminal compatibility
fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

/// Ctrl+Q: quit from anywhere
pub fn is_quit_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'q')
}

/// Ctrl+R: run the comparison
pub fn is_compare_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'r')
}

/// Ctrl+V: paste from the system clipboard
pub fn is_paste_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'v')
}

/// Ctrl+A: select everything in the focused pane
pub fn is_select_all_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'a')
}

/// Ctrl+L: clear the focused pane
pub fn is_clear_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'l')
}

/// Ctrl+C: copy the selection (Compare View)
pub fn is_copy_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'c')
}

/// Ctrl+D: half page down (Compare View)
pub fn is_half_page_down(key: &KeyEvent) -> bool {
    is_ctrl(key, 'd')
}

/// Ctrl+U: half page up (Compare View)
pub fn is_half_page_up(key: &KeyEvent) -> bool {
    is_ctrl(key, 'u')
}

// =============================================================================
// Global keys
// =============================================================================

/// Quit application or go back (Compare/Help View)
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Show help (Compare View)
pub const HELP: KeyCode = KeyCode::Char('?');

/// Show help (any view, safe while editing)
pub const HELP_F1: KeyCode = KeyCode::F(1);

/// Go back
pub const ESC: KeyCode = KeyCode::Esc;

/// Switch focused pane
pub const TAB: KeyCode = KeyCode::Tab;

/// Switch focused pane (reverse)
pub const BACK_TAB: KeyCode = KeyCode::BackTab;

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Scroll left (vim style)
pub const SCROLL_LEFT: KeyCode = KeyCode::Char('h');

/// Scroll left (arrow key)
pub const SCROLL_LEFT_ARROW: KeyCode = KeyCode::Left;

/// Scroll right (vim style)
pub const SCROLL_RIGHT: KeyCode = KeyCode::Char('l');

/// Scroll right (arrow key)
pub const SCROLL_RIGHT_ARROW: KeyCode = KeyCode::Right;

/// Page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

/// Check if key is scroll left (h or ←)
pub fn is_scroll_left(code: KeyCode) -> bool {
    matches!(code, SCROLL_LEFT | SCROLL_LEFT_ARROW)
}

/// Check if key is scroll right (l or →)
pub fn is_scroll_right(code: KeyCode) -> bool {
    matches!(code, SCROLL_RIGHT | SCROLL_RIGHT_ARROW)
}

// =============================================================================
// Compare View keys
// =============================================================================

/// Jump to next difference
pub const NEXT_DIFF: KeyCode = KeyCode::Char('n');

/// Jump to previous difference
pub const PREV_DIFF: KeyCode = KeyCode::Char('N');

/// Start / stop visual row selection
pub const VISUAL: KeyCode = KeyCode::Char('v');

/// Copy selected original lines of the active side
pub const YANK: KeyCode = KeyCode::Char('y');

/// Cycle normalization mode and re-compare
pub const NORMALIZE_CYCLE: KeyCode = KeyCode::Char('w');

/// Return to the editor panes
pub const EDIT: KeyCode = KeyCode::Char('e');

// =============================================================================
// Help display
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Ctrl+Q",
        description: "Quit",
    },
    KeyBindEntry {
        key: "F1",
        description: "Help",
    },
];

/// Editor key bindings for help display
pub const EDIT_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "Ctrl+R",
        description: "Compare both panes",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch pane",
    },
    KeyBindEntry {
        key: "Ctrl+V",
        description: "Paste from clipboard",
    },
    KeyBindEntry {
        key: "Ctrl+A",
        description: "Select all",
    },
    KeyBindEntry {
        key: "Ctrl+L",
        description: "Clear pane",
    },
];

/// Compare view key bindings for help display
pub const COMPARE_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "j/k",
        description: "Move down/up (both panes)",
    },
    KeyBindEntry {
        key: "h/l",
        description: "Scroll left/right",
    },
    KeyBindEntry {
        key: "^D/^U",
        description: "Half page down/up",
    },
    KeyBindEntry {
        key: "g/G",
        description: "Go to top/bottom",
    },
    KeyBindEntry {
        key: "n/N",
        description: "Next/prev difference",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Switch active side",
    },
    KeyBindEntry {
        key: "v",
        description: "Start/stop row selection",
    },
    KeyBindEntry {
        key: "Ctrl+A",
        description: "Select all rows",
    },
    KeyBindEntry {
        key: "y/Ctrl+C",
        description: "Copy original lines",
    },
    KeyBindEntry {
        key: "w",
        description: "Cycle whitespace mode",
    },
    KeyBindEntry {
        key: "e/Esc",
        description: "Back to editing",
    },
    KeyBindEntry {
        key: "q",
        description: "Quit",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "F1",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "^Q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_COMPARE: KeyHint = KeyHint {
    key: "^R",
    label: "Compare",
    color: Color::Green,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "Tab",
    label: "Pane",
    color: Color::Blue,
};
pub const HINT_PASTE: KeyHint = KeyHint {
    key: "^V",
    label: "Paste",
    color: Color::Magenta,
};
pub const HINT_NEXT: KeyHint = KeyHint {
    key: "n/N",
    label: "Diff",
    color: Color::Yellow,
};
pub const HINT_VISUAL: KeyHint = KeyHint {
    key: "v",
    label: "Select",
    color: Color::Magenta,
};
pub const HINT_YANK: KeyHint = KeyHint {
    key: "y",
    label: "Copy",
    color: Color::Green,
};
pub const HINT_NORMALIZE: KeyHint = KeyHint {
    key: "w",
    label: "Spaces",
    color: Color::Cyan,
};
pub const HINT_EDIT: KeyHint = KeyHint {
    key: "e",
    label: "Edit",
    color: Color::Blue,
};
pub const HINT_BACK: KeyHint = KeyHint {
    key: "q",
    label: "Back",
    color: Color::Red,
};

/// Status bar hints for the editor panes
pub const EDIT_VIEW_HINTS: &[KeyHint] = &[
    HINT_COMPARE,
    HINT_SWITCH,
    HINT_PASTE,
    HINT_HELP,
    HINT_QUIT,
];

/// Status bar hints for the compare view
pub const COMPARE_VIEW_HINTS: &[KeyHint] = &[
    HINT_NEXT,
    HINT_VISUAL,
    HINT_YANK,
    HINT_NORMALIZE,
    HINT_EDIT,
    HINT_HELP,
    HINT_QUIT,
];

/// Status bar hints for the help view
pub const HELP_VIEW_HINTS: &[KeyHint] = &[HINT_BACK];
