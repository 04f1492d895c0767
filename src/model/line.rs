//! Line-level data model
//!
//! One side's captured input ([`LineSequence`]), the side selector
//! ([`Side`]) and the per-row slot of an aligned rendering ([`Slot`]).

use std::ops::Index;

/// Which panel a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// The opposite panel
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// One side's raw input, split on line boundaries
///
/// Immutable once captured; a new comparison captures a new sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split raw text on `\n` / `\r\n`.
    ///
    /// A trailing line terminator does not produce an extra empty line,
    /// and empty text yields an empty sequence.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Index<usize> for LineSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.lines[index]
    }
}

impl<S: Into<String>> FromIterator<S> for LineSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Content of one side of an aligned row
///
/// `Gap` is a filler row with no original line behind it. A genuinely
/// empty original line is `Line("")`, never a gap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    Gap,
    Line(String),
}

impl Slot {
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    /// Text to display (empty for gaps)
    pub fn text(&self) -> &str {
        match self {
            Self::Gap => "",
            Self::Line(text) => text,
        }
    }

    pub fn as_line(&self) -> Option<&str> {
        match self {
            Self::Gap => None,
            Self::Line(text) => Some(text),
        }
    }
}
