//! Opcode decomposition of two line sequences
//!
//! Thin layer over `similar`: runs the selected algorithm and converts its
//! captured ops into [`Opcode`]s. Delete runs directly followed by insert
//! runs are merged into [`OpTag::Replace`].

use std::hash::Hash;
use std::ops::Range;
use std::time::Instant;

use clap::ValueEnum;
use similar::{Algorithm, DiffTag, capture_diff_slices_deadline};

/// Sequence alignment algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiffAlgorithm {
    /// Myers shortest edit script
    #[default]
    Myers,
    /// Patience diff (anchors on unique lines)
    Patience,
    /// Classic longest common subsequence
    Lcs,
}

impl DiffAlgorithm {
    fn to_similar(self) -> Algorithm {
        match self {
            Self::Myers => Algorithm::Myers,
            Self::Patience => Algorithm::Patience,
            Self::Lcs => Algorithm::Lcs,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        }
    }
}

/// How a left range relates to a right range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// A contiguous span of the alignment
///
/// `left` indexes the left sequence, `right` the right one (half-open).
/// Delete has an empty right range, Insert an empty left range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub left: Range<usize>,
    pub right: Range<usize>,
}

impl Opcode {
    /// Number of aligned rows this opcode produces
    pub fn row_count(&self) -> usize {
        self.left.len().max(self.right.len())
    }
}

/// Compute opcodes covering both sequences in order.
///
/// When `deadline` passes, the algorithm stops refining and the remaining
/// region is reported as a coarser (still complete) replacement.
pub fn compute_opcodes<T: Eq + Hash + Ord>(
    left: &[T],
    right: &[T],
    algorithm: DiffAlgorithm,
    deadline: Option<Instant>,
) -> Vec<Opcode> {
    capture_diff_slices_deadline(algorithm.to_similar(), left, right, deadline)
        .into_iter()
        .map(|op| {
            let (tag, left, right) = op.as_tag_tuple();
            let tag = match tag {
                DiffTag::Equal => OpTag::Equal,
                DiffTag::Replace => OpTag::Replace,
                DiffTag::Delete => OpTag::Delete,
                DiffTag::Insert => OpTag::Insert,
            };
            Opcode { tag, left, right }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opcodes(left: &[&str], right: &[&str]) -> Vec<Opcode> {
        compute_opcodes(left, right, DiffAlgorithm::Myers, None)
    }

    /// Ranges must be contiguous and cover both sides completely
    fn assert_covering(ops: &[Opcode], left_len: usize, right_len: usize) {
        let (mut i, mut j) = (0, 0);
        for op in ops {
            assert_eq!(op.left.start, i);
            assert_eq!(op.right.start, j);
            i = op.left.end;
            j = op.right.end;
        }
        assert_eq!(i, left_len);
        assert_eq!(j, right_len);
    }

    #[test]
    fn test_identical_is_single_equal() {
        let ops = opcodes(&["a", "b"], &["a", "b"]);
        assert_eq!(
            ops,
            vec![Opcode {
                tag: OpTag::Equal,
                left: 0..2,
                right: 0..2
            }]
        );
    }

    #[test]
    fn test_replace_in_the_middle() {
        let ops = opcodes(&["a", "b", "c"], &["a", "x", "c"]);
        let tags: Vec<_> = ops.iter().map(|op| op.tag).collect();
        assert_eq!(tags, [OpTag::Equal, OpTag::Replace, OpTag::Equal]);
        assert_eq!(ops[1].left, 1..2);
        assert_eq!(ops[1].right, 1..2);
    }

    #[test]
    fn test_trailing_delete() {
        let ops = opcodes(&["a", "b"], &["a"]);
        assert_eq!(ops.last().map(|op| op.tag), Some(OpTag::Delete));
        assert_covering(&ops, 2, 1);
    }

    #[test]
    fn test_empty_left_is_insert() {
        let ops = opcodes(&[], &["a", "b"]);
        assert_eq!(
            ops,
            vec![Opcode {
                tag: OpTag::Insert,
                left: 0..0,
                right: 0..2
            }]
        );
    }

    #[test]
    fn test_both_empty() {
        assert!(opcodes(&[], &[]).is_empty());
    }

    #[test]
    fn test_all_algorithms_cover() {
        let left = ["a", "b", "c", "d", "e"];
        let right = ["b", "c", "x", "e", "f", "g"];
        for alg in [
            DiffAlgorithm::Myers,
            DiffAlgorithm::Patience,
            DiffAlgorithm::Lcs,
        ] {
            let ops = compute_opcodes(&left, &right, alg, None);
            assert_covering(&ops, left.len(), right.len());
        }
    }

    #[test]
    fn test_owned_and_non_string_items() {
        let left: Vec<String> = vec!["a".into(), "b".into()];
        let right: Vec<String> = vec!["a".into()];
        let ops = compute_opcodes(&left, &right, DiffAlgorithm::Patience, None);
        assert_covering(&ops, 2, 1);

        let ops = compute_opcodes(&[1u32, 2, 3], &[1, 3], DiffAlgorithm::Lcs, None);
        let tags: Vec<_> = ops.iter().map(|op| op.tag).collect();
        assert_eq!(tags, [OpTag::Equal, OpTag::Delete, OpTag::Equal]);
    }

    #[test]
    fn test_row_count() {
        let op = Opcode {
            tag: OpTag::Replace,
            left: 2..5,
            right: 2..3,
        };
        assert_eq!(op.row_count(), 3);
    }
}
