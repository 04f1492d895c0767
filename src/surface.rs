//! Display surface abstraction
//!
//! The comparison session pushes results through this trait; the compare
//! view implements it for the terminal, tests implement it with a recorder.

use crate::engine::Highlight;
use crate::model::{Side, Slot};

/// Something that can show an aligned comparison
pub trait DisplaySurface {
    /// Replace both panels' content, one aligned row per line
    fn render(&mut self, left: &[Slot], right: &[Slot]);

    /// Remove every highlight from both panels
    fn clear_highlights(&mut self);

    /// Style one side of one row
    fn highlight(&mut self, side: Side, row: usize, highlight: Highlight);
}

/// In-memory surface recording everything it is told
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub left: Vec<Slot>,
    pub right: Vec<Slot>,
    pub highlights: Vec<(Side, usize, Highlight)>,
    pub render_count: usize,
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, left: &[Slot], right: &[Slot]) {
        self.left = left.to_vec();
        self.right = right.to_vec();
        self.render_count += 1;
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn highlight(&mut self, side: Side, row: usize, highlight: Highlight) {
        self.highlights.push((side, row, highlight));
    }
}
