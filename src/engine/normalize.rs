//! Line normalization applied before equality comparison
//!
//! Normalized text only decides which lines match. Displayed and copied
//! text is always the original line.

use std::borrow::Cow;

use clap::ValueEnum;

/// How lines are normalized before they are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Normalization {
    /// Remove every ASCII space (U+0020); tabs and other whitespace stay
    #[default]
    StripSpaces,
    /// Compare lines byte for byte
    Exact,
    /// Remove every Unicode whitespace character
    IgnoreWhitespace,
}

impl Normalization {
    /// Normalize a single line
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(line),
            Self::StripSpaces if !line.contains(' ') => Cow::Borrowed(line),
            Self::StripSpaces => Cow::Owned(line.replace(' ', "")),
            Self::IgnoreWhitespace if !line.chars().any(char::is_whitespace) => {
                Cow::Borrowed(line)
            }
            Self::IgnoreWhitespace => {
                Cow::Owned(line.chars().filter(|c| !c.is_whitespace()).collect())
            }
        }
    }

    /// Cycle to next mode
    pub fn next(self) -> Self {
        match self {
            Self::StripSpaces => Self::Exact,
            Self::Exact => Self::IgnoreWhitespace,
            Self::IgnoreWhitespace => Self::StripSpaces,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::StripSpaces => "strip-spaces",
            Self::Exact => "exact",
            Self::IgnoreWhitespace => "ignore-whitespace",
        }
    }

    /// 1-indexed position in cycle (for notification)
    pub fn position(&self) -> usize {
        match self {
            Self::StripSpaces => 1,
            Self::Exact => 2,
            Self::IgnoreWhitespace => 3,
        }
    }

    /// Total number of modes
    pub const COUNT: usize = 3;
}
