//! Compare View
//!
//! Shows the aligned rows of the latest comparison side by side, with a
//! single cursor and scroll position shared by both panes.

mod input;
mod render;

use crate::engine::{DiffStats, Highlight, Normalization, PositionMap};
use crate::model::{Side, Slot};
use crate::session::{CompareSession, RowSelection};
use crate::surface::DisplaySurface;

/// Action returned by CompareView key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareAction {
    /// No action needed
    None,
    /// Copy the selection of the active side
    Copy,
    /// Switch to the next normalization mode and re-compare
    CycleNormalization,
    /// Return to the editor panes
    Edit,
    /// Show help
    Help,
    /// Quit the application
    Quit,
}

/// Compare view state
#[derive(Debug)]
pub struct CompareView {
    left: Vec<Slot>,
    right: Vec<Slot>,
    /// Per-row highlight, indexed `[left, right]`
    highlights: Vec<[Highlight; 2]>,
    left_map: PositionMap,
    right_map: PositionMap,
    /// Row where each difference block starts
    hunk_starts: Vec<usize>,
    /// Generation of the comparison being shown
    generation: u64,
    /// Row counts per category
    pub stats: DiffStats,
    /// Normalization the rows were compared with
    pub normalization: Normalization,
    /// Cursor row (aligned coordinates)
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// First visible column
    pub h_offset: usize,
    /// Side that selections and copies refer to
    pub active: Side,
    /// Anchor row of the visual selection
    anchor: Option<usize>,
    /// Last known visible height (updated during key handling)
    visible_height: usize,
}

impl Default for CompareView {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareView {
    /// Default visible height for scroll calculations when not specified
    const DEFAULT_VISIBLE_HEIGHT: usize = 20;

    /// Columns moved per horizontal scroll step
    const H_SCROLL_STEP: usize = 4;

    /// Create an empty view
    pub fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
            highlights: Vec::new(),
            left_map: PositionMap::default(),
            right_map: PositionMap::default(),
            hunk_starts: Vec::new(),
            generation: 0,
            stats: DiffStats::default(),
            normalization: Normalization::default(),
            cursor: 0,
            scroll_offset: 0,
            h_offset: 0,
            active: Side::Left,
            anchor: None,
            visible_height: Self::DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Show the current result of a session
    ///
    /// Resets cursor, scrolling and selection.
    pub fn load(&mut self, session: &CompareSession) {
        session.present(self);

        self.left_map = session
            .position_map(Side::Left)
            .cloned()
            .unwrap_or_default();
        self.right_map = session
            .position_map(Side::Right)
            .cloned()
            .unwrap_or_default();
        self.hunk_starts = session
            .alignment()
            .map(|a| a.hunk_starts())
            .unwrap_or_default();
        self.generation = session.generation();
        self.stats = session.stats();
        self.normalization = session
            .options()
            .map(|o| o.normalization)
            .unwrap_or_default();
        self.cursor = 0;
        self.scroll_offset = 0;
        self.h_offset = 0;
        self.anchor = None;
    }

    /// Number of aligned rows
    pub fn total_rows(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Slot of one side at a row
    pub fn slot(&self, side: Side, row: usize) -> Option<&Slot> {
        match side {
            Side::Left => self.left.get(row),
            Side::Right => self.right.get(row),
        }
    }

    /// Highlight of one side at a row
    pub fn highlight_at(&self, side: Side, row: usize) -> Highlight {
        self.highlights
            .get(row)
            .map(|h| h[side_index(side)])
            .unwrap_or_default()
    }

    /// 1-based original line number shown in the gutter
    pub fn line_number(&self, side: Side, row: usize) -> Option<usize> {
        let map = match side {
            Side::Left => &self.left_map,
            Side::Right => &self.right_map,
        };
        map.get(row).map(|index| index + 1)
    }

    /// Rows where differences start
    pub fn hunk_starts(&self) -> &[usize] {
        &self.hunk_starts
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Current selection in aligned rows, or `None` when nothing is selected
    pub fn selection(&self) -> Option<RowSelection> {
        let anchor = self.anchor?;
        if self.is_empty() {
            return None;
        }
        Some(RowSelection {
            generation: self.generation,
            start: anchor,
            end: self.cursor,
        })
    }

    /// Whether a row is inside the current selection
    pub fn is_selected(&self, row: usize) -> bool {
        self.selection().is_some_and(|sel| {
            let (start, end) = sel.ordered();
            (start..=end).contains(&row)
        })
    }

    /// Start a selection at the cursor, or drop the current one
    pub fn toggle_visual(&mut self) {
        self.anchor = match self.anchor {
            Some(_) => None,
            None if self.is_empty() => None,
            None => Some(self.cursor),
        };
    }

    /// Select every row
    pub fn select_all(&mut self) {
        if self.is_empty() {
            return;
        }
        self.anchor = Some(0);
        self.cursor = self.total_rows() - 1;
        self.ensure_cursor_visible();
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Make the other side active
    pub fn switch_side(&mut self) {
        self.active = self.active.other();
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move cursor down by one row
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.total_rows() {
            self.cursor += 1;
        }
        self.ensure_cursor_visible();
    }

    /// Move cursor up by one row
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_cursor_visible();
    }

    /// Move down by half page
    pub fn half_page_down(&mut self) {
        let half = (self.visible_height / 2).max(1);
        self.cursor = (self.cursor + half).min(self.last_row());
        self.ensure_cursor_visible();
    }

    /// Move up by half page
    pub fn half_page_up(&mut self) {
        let half = (self.visible_height / 2).max(1);
        self.cursor = self.cursor.saturating_sub(half);
        self.ensure_cursor_visible();
    }

    /// Move down by a full page
    pub fn page_down(&mut self) {
        self.cursor = (self.cursor + self.visible_height.max(1)).min(self.last_row());
        self.ensure_cursor_visible();
    }

    /// Move up by a full page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height.max(1));
        self.ensure_cursor_visible();
    }

    /// Jump to the top
    pub fn jump_to_top(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Jump to the bottom
    pub fn jump_to_bottom(&mut self) {
        self.cursor = self.last_row();
        self.ensure_cursor_visible();
    }

    /// Jump to the next difference block (wraps around)
    pub fn next_hunk(&mut self) {
        let Some(&first) = self.hunk_starts.first() else {
            return;
        };
        self.cursor = self
            .hunk_starts
            .iter()
            .copied()
            .find(|&row| row > self.cursor)
            .unwrap_or(first);
        self.ensure_cursor_visible();
    }

    /// Jump to the previous difference block (wraps around)
    pub fn prev_hunk(&mut self) {
        let Some(&last) = self.hunk_starts.last() else {
            return;
        };
        self.cursor = self
            .hunk_starts
            .iter()
            .copied()
            .rfind(|&row| row < self.cursor)
            .unwrap_or(last);
        self.ensure_cursor_visible();
    }

    /// Scroll both panes left
    pub fn scroll_left(&mut self) {
        self.h_offset = self.h_offset.saturating_sub(Self::H_SCROLL_STEP);
    }

    /// Scroll both panes right
    pub fn scroll_right(&mut self) {
        let max = self.max_line_width();
        self.h_offset = (self.h_offset + Self::H_SCROLL_STEP).min(max);
    }

    fn last_row(&self) -> usize {
        self.total_rows().saturating_sub(1)
    }

    fn max_line_width(&self) -> usize {
        self.left
            .iter()
            .chain(&self.right)
            .map(|slot| expand_tabs(slot.text()).chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Move the cursor to `row`, clamped to the last row
    pub fn set_cursor(&mut self, row: usize) {
        self.cursor = row.min(self.total_rows().saturating_sub(1));
        self.ensure_cursor_visible();
    }

    /// Adjust scroll offset so the cursor row is on screen
    fn ensure_cursor_visible(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Tabs are expanded to this many spaces for display
const TAB_WIDTH: usize = 4;

/// Row text as displayed, with tabs expanded
fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl DisplaySurface for CompareView {
    fn render(&mut self, left: &[Slot], right: &[Slot]) {
        let rows = left.len().max(right.len());
        self.left = left.to_vec();
        self.right = right.to_vec();
        self.left.resize(rows, Slot::Gap);
        self.right.resize(rows, Slot::Gap);
        self.highlights = vec![[Highlight::None; 2]; rows];
    }

    fn clear_highlights(&mut self) {
        self.highlights.fill([Highlight::None; 2]);
    }

    fn highlight(&mut self, side: Side, row: usize, highlight: Highlight) {
        if let Some(entry) = self.highlights.get_mut(row) {
            entry[side_index(side)] = highlight;
        }
    }
}
