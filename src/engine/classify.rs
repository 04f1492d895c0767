//! Row classification
//!
//! Decides per aligned row whether the two sides match, and which
//! highlight each side gets.

use crate::model::Side;

use super::align::AlignedRow;

/// How the two sides of an aligned row relate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Normalized texts match
    Equal,
    /// Both sides have content, and it differs
    Modified,
    /// Only the left side has content (deleted)
    LeftOnly,
    /// Only the right side has content (inserted)
    RightOnly,
}

/// Visual style of one side of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Content differs from the other side
    Diff,
    /// Line exists only on this (left) side
    Delete,
    /// Line exists only on this (right) side
    Insert,
    /// Filler row opposite a deleted/inserted line
    Gap,
}

impl Category {
    /// Classify a single row
    pub fn of(row: &AlignedRow) -> Self {
        match (row.left.is_gap(), row.right.is_gap()) {
            (true, _) => Self::RightOnly,
            (_, true) => Self::LeftOnly,
            _ if row.left_norm == row.right_norm => Self::Equal,
            _ => Self::Modified,
        }
    }

    pub fn is_equal(self) -> bool {
        self == Self::Equal
    }

    /// Highlight for one side of a row in this category
    pub fn highlight(self, side: Side) -> Highlight {
        match (self, side) {
            (Self::Equal, _) => Highlight::None,
            (Self::Modified, _) => Highlight::Diff,
            (Self::LeftOnly, Side::Left) => Highlight::Delete,
            (Self::LeftOnly, Side::Right) => Highlight::Gap,
            (Self::RightOnly, Side::Left) => Highlight::Gap,
            (Self::RightOnly, Side::Right) => Highlight::Insert,
        }
    }
}

/// Classify every row, by index
pub fn classify(rows: &[AlignedRow]) -> Vec<Category> {
    rows.iter().map(Category::of).collect()
}

/// Row counts per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub equal: usize,
    pub modified: usize,
    pub left_only: usize,
    pub right_only: usize,
}

impl DiffStats {
    pub fn from_categories(categories: &[Category]) -> Self {
        categories
            .iter()
            .fold(Self::default(), |mut stats, category| {
                match category {
                    Category::Equal => stats.equal += 1,
                    Category::Modified => stats.modified += 1,
                    Category::LeftOnly => stats.left_only += 1,
                    Category::RightOnly => stats.right_only += 1,
                }
                stats
            })
    }

    /// Number of rows that are not equal
    pub fn changed(&self) -> usize {
        self.modified + self.left_only + self.right_only
    }

    pub fn is_identical(&self) -> bool {
        self.changed() == 0
    }
}
