//! Comparison session
//!
//! Owns the inputs and results of the latest comparison. Every call to
//! [`CompareSession::compare`] replaces the whole state at once and bumps
//! the generation, so selections made against an older comparison can be
//! recognized and refused.

use thiserror::Error;

use crate::engine::{
    Alignment, Category, CompareOptions, DiffStats, PositionMap, align, classify, extract_original,
};
use crate::model::{LineSequence, Side};
use crate::surface::DisplaySurface;

/// Errors returned when reading from a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No comparison has been run yet")]
    NoComparison,

    #[error("Selection belongs to an older comparison (generation {selection}, current {current})")]
    StaleSelection { selection: u64, current: u64 },
}

/// Inclusive range of aligned rows, tagged with the comparison it was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSelection {
    pub generation: u64,
    pub start: usize,
    pub end: usize,
}

impl RowSelection {
    /// Bounds in ascending order
    pub fn ordered(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    pub fn row_count(&self) -> usize {
        let (start, end) = self.ordered();
        end - start + 1
    }
}

/// Results of one comparison run
#[derive(Debug, Clone)]
struct Snapshot {
    left: LineSequence,
    right: LineSequence,
    alignment: Alignment,
    categories: Vec<Category>,
    left_map: PositionMap,
    right_map: PositionMap,
    options: CompareOptions,
}

/// State of the comparison shown in the compare view
#[derive(Debug, Default)]
pub struct CompareSession {
    snapshot: Option<Snapshot>,
    generation: u64,
}

impl CompareSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split both texts, align and classify them, and replace the session state
    pub fn compare(&mut self, left_text: &str, right_text: &str, options: CompareOptions) {
        self.compare_sequences(
            LineSequence::from_text(left_text),
            LineSequence::from_text(right_text),
            options,
        );
    }

    fn compare_sequences(
        &mut self,
        left: LineSequence,
        right: LineSequence,
        options: CompareOptions,
    ) {
        let alignment = align(&left, &right, &options);
        let categories = classify(alignment.rows());
        let left_map = alignment.position_map(Side::Left);
        let right_map = alignment.position_map(Side::Right);

        let stats = DiffStats::from_categories(&categories);
        tracing::debug!(
            left_lines = left.len(),
            right_lines = right.len(),
            rows = alignment.len(),
            modified = stats.modified,
            left_only = stats.left_only,
            right_only = stats.right_only,
            normalization = options.normalization.label(),
            algorithm = options.algorithm.label(),
            "comparison finished"
        );

        self.snapshot = Some(Snapshot {
            left,
            right,
            alignment,
            categories,
            left_map,
            right_map,
            options,
        });
        self.generation += 1;
    }

    /// Re-run the last comparison on the same inputs with different options
    ///
    /// Returns false when there is nothing to re-run.
    pub fn recompare(&mut self, options: CompareOptions) -> bool {
        let Some(snapshot) = self.snapshot.take() else {
            return false;
        };
        self.compare_sequences(snapshot.left, snapshot.right, options);
        true
    }

    pub fn has_result(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Counter bumped by every comparison (0 = none yet)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alignment(&self) -> Option<&Alignment> {
        self.snapshot.as_ref().map(|s| &s.alignment)
    }

    pub fn categories(&self) -> &[Category] {
        self.snapshot
            .as_ref()
            .map(|s| s.categories.as_slice())
            .unwrap_or_default()
    }

    pub fn stats(&self) -> DiffStats {
        DiffStats::from_categories(self.categories())
    }

    pub fn options(&self) -> Option<CompareOptions> {
        self.snapshot.as_ref().map(|s| s.options)
    }

    /// Captured original lines of one side
    pub fn original(&self, side: Side) -> Option<&LineSequence> {
        self.snapshot.as_ref().map(|s| match side {
            Side::Left => &s.left,
            Side::Right => &s.right,
        })
    }

    pub fn position_map(&self, side: Side) -> Option<&PositionMap> {
        self.snapshot.as_ref().map(|s| match side {
            Side::Left => &s.left_map,
            Side::Right => &s.right_map,
        })
    }

    /// Push the current result to a display surface
    ///
    /// Highlights are cleared before rendering so nothing from a previous
    /// comparison survives.
    pub fn present(&self, surface: &mut impl DisplaySurface) {
        surface.clear_highlights();
        let Some(snapshot) = &self.snapshot else {
            surface.render(&[], &[]);
            return;
        };

        let alignment = &snapshot.alignment;
        surface.render(&alignment.slots(Side::Left), &alignment.slots(Side::Right));
        for (row, category) in snapshot.categories.iter().enumerate() {
            if category.is_equal() {
                continue;
            }
            for side in [Side::Left, Side::Right] {
                surface.highlight(side, row, category.highlight(side));
            }
        }
    }

    /// Original text of one side behind a row selection
    ///
    /// `Ok(None)` means nothing to copy: the selection only covers gap rows.
    pub fn copy_rows(
        &self,
        side: Side,
        selection: RowSelection,
    ) -> Result<Option<String>, SessionError> {
        let snapshot = self.snapshot.as_ref().ok_or(SessionError::NoComparison)?;
        if selection.generation != self.generation {
            return Err(SessionError::StaleSelection {
                selection: selection.generation,
                current: self.generation,
            });
        }

        let (map, original) = match side {
            Side::Left => (&snapshot.left_map, &snapshot.left),
            Side::Right => (&snapshot.right_map, &snapshot.right),
        };
        let (start, end) = selection.ordered();
        if map.indices_in(start, end).next().is_none() {
            return Ok(None);
        }
        Ok(Some(extract_original(map, start, end, original)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Highlight, Normalization};
    use crate::model::Slot;
    use crate::surface::RecordingSurface;

    fn selection(session: &CompareSession, start: usize, end: usize) -> RowSelection {
        RowSelection {
            generation: session.generation(),
            start,
            end,
        }
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = CompareSession::new();
        assert!(!session.has_result());
        assert_eq!(session.generation(), 0);
        assert!(session.categories().is_empty());
        assert!(session.alignment().is_none());
    }

    #[test]
    fn test_compare_bumps_generation() {
        let mut session = CompareSession::new();
        session.compare("a", "a", CompareOptions::default());
        session.compare("a", "b", CompareOptions::default());
        assert_eq!(session.generation(), 2);
        assert_eq!(session.categories(), [Category::Modified]);
    }

    #[test]
    fn test_copy_skips_gap_rows() {
        // rows: ("a","a"), ("b", gap)
        let mut session = CompareSession::new();
        session.compare("a\nb", "a", CompareOptions::default());
        assert_eq!(session.alignment().map(Alignment::len), Some(2));

        let right = session.copy_rows(Side::Right, selection(&session, 0, 1));
        assert_eq!(right, Ok(Some("a".to_string())));
        let left = session.copy_rows(Side::Left, selection(&session, 1, 0));
        assert_eq!(left, Ok(Some("a\nb".to_string())));
    }

    #[test]
    fn test_copy_only_gaps_is_nothing() {
        let mut session = CompareSession::new();
        session.compare("", "a\nb", CompareOptions::default());
        let copied = session.copy_rows(Side::Left, selection(&session, 0, 1));
        assert_eq!(copied, Ok(None));
    }

    #[test]
    fn test_copy_before_compare() {
        let session = CompareSession::new();
        let copied = session.copy_rows(Side::Left, selection(&session, 0, 0));
        assert_eq!(copied, Err(SessionError::NoComparison));
    }

    #[test]
    fn test_stale_selection_is_refused() {
        let mut session = CompareSession::new();
        session.compare("a", "a", CompareOptions::default());
        let old = selection(&session, 0, 0);
        session.compare("b", "b", CompareOptions::default());
        assert_eq!(
            session.copy_rows(Side::Left, old),
            Err(SessionError::StaleSelection {
                selection: 1,
                current: 2
            })
        );
    }

    #[test]
    fn test_present_renders_and_highlights() {
        let mut session = CompareSession::new();
        session.compare("a\nb", "a", CompareOptions::default());

        let mut surface = RecordingSurface::default();
        surface.highlights.push((Side::Left, 9, Highlight::Diff));
        session.present(&mut surface);

        assert_eq!(
            surface.left,
            [Slot::Line("a".into()), Slot::Line("b".into())]
        );
        assert_eq!(surface.right, [Slot::Line("a".into()), Slot::Gap]);
        assert_eq!(
            surface.highlights,
            [
                (Side::Left, 1, Highlight::Delete),
                (Side::Right, 1, Highlight::Gap)
            ]
        );
    }

    #[test]
    fn test_present_without_result_clears_surface() {
        let session = CompareSession::new();
        let mut surface = RecordingSurface {
            left: vec![Slot::Gap],
            ..RecordingSurface::default()
        };
        session.present(&mut surface);
        assert!(surface.left.is_empty());
        assert_eq!(surface.render_count, 1);
    }

    #[test]
    fn test_recompare_with_other_normalization() {
        let mut session = CompareSession::new();
        assert!(!session.recompare(CompareOptions::default()));

        session.compare("a  b", "ab", CompareOptions::default());
        assert_eq!(session.categories(), [Category::Equal]);

        let exact = CompareOptions {
            normalization: Normalization::Exact,
            ..CompareOptions::default()
        };
        assert!(session.recompare(exact));
        assert_eq!(session.categories(), [Category::Modified]);
        assert_eq!(session.generation(), 2);
        assert_eq!(session.options(), Some(exact));
    }

    #[test]
    fn test_row_selection_ordering() {
        let sel = RowSelection {
            generation: 1,
            start: 5,
            end: 2,
        };
        assert_eq!(sel.ordered(), (2, 5));
        assert_eq!(sel.row_count(), 4);
    }
}
