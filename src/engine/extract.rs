//! Position translation from aligned rows back to original lines
//!
//! Selections in the compare view are made in aligned coordinates. The
//! [`PositionMap`] of a side turns such a row range back into the original
//! lines, skipping gap rows.

use crate::model::LineSequence;

/// Aligned row -> original line index for one side (`None` on gap rows)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionMap(Vec<Option<usize>>);

impl PositionMap {
    pub fn new(entries: Vec<Option<usize>>) -> Self {
        Self(entries)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Original index behind an aligned row
    pub fn get(&self, row: usize) -> Option<usize> {
        self.0.get(row).copied().flatten()
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.0
    }

    /// All original indices in row order, gaps skipped
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(|entry| *entry)
    }

    /// Original indices behind an inclusive row range
    ///
    /// The bounds may be given in either order; rows past the end are ignored.
    pub fn indices_in(&self, start: usize, end: usize) -> impl Iterator<Item = usize> + '_ {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        self.0
            .iter()
            .skip(start)
            .take(end.saturating_sub(start).saturating_add(1))
            .filter_map(|entry| *entry)
    }
}

impl FromIterator<Option<usize>> for PositionMap {
    fn from_iter<I: IntoIterator<Item = Option<usize>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Original lines behind an inclusive aligned row range, in original order
pub fn extract_lines<'a>(
    map: &PositionMap,
    start: usize,
    end: usize,
    original: &'a LineSequence,
) -> Vec<&'a str> {
    map.indices_in(start, end)
        .filter_map(|index| original.get(index))
        .collect()
}

/// Original text behind an inclusive aligned row range, joined with `\n`
pub fn extract_original(
    map: &PositionMap,
    start: usize,
    end: usize,
    original: &LineSequence,
) -> String {
    extract_lines(map, start, end, original).join("\n")
}
