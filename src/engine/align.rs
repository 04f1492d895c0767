//! Line alignment
//!
//! Turns two [`LineSequence`]s into one sequence of [`AlignedRow`]s of
//! common length, padding the shorter side of every non-equal block with
//! [`Slot::Gap`] rows so corresponding content lands on the same row.

use std::time::{Duration, Instant};

use crate::model::{LineSequence, Side, Slot};

use super::extract::PositionMap;
use super::normalize::Normalization;
use super::opcodes::{DiffAlgorithm, OpTag, Opcode, compute_opcodes};

/// Options controlling how two sequences are aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    pub normalization: Normalization,
    pub algorithm: DiffAlgorithm,
    /// Upper bound on time spent refining the alignment
    pub timeout: Option<Duration>,
}

/// One row of the side-by-side rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    pub left: Slot,
    pub right: Slot,
    /// Normalized left text (`None` on a gap)
    pub left_norm: Option<String>,
    /// Normalized right text (`None` on a gap)
    pub right_norm: Option<String>,
    /// Index into the original left sequence
    pub left_index: Option<usize>,
    /// Index into the original right sequence
    pub right_index: Option<usize>,
}

impl AlignedRow {
    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn index(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left_index,
            Side::Right => self.right_index,
        }
    }

    pub fn norm(&self, side: Side) -> Option<&str> {
        match side {
            Side::Left => self.left_norm.as_deref(),
            Side::Right => self.right_norm.as_deref(),
        }
    }
}

/// Result of aligning two sequences
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    rows: Vec<AlignedRow>,
    opcodes: Vec<Opcode>,
}

impl Alignment {
    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    /// Opcodes the rows were built from
    pub fn opcodes(&self) -> &[Opcode] {
        &self.opcodes
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Aligned slots of one side, in row order
    pub fn slots(&self, side: Side) -> Vec<Slot> {
        self.rows.iter().map(|row| row.slot(side).clone()).collect()
    }

    /// Aligned display text of one side (gaps render as empty strings)
    pub fn texts(&self, side: Side) -> Vec<&str> {
        self.rows.iter().map(|row| row.slot(side).text()).collect()
    }

    /// Normalized text of one side (gaps render as empty strings)
    pub fn normalized(&self, side: Side) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.norm(side).unwrap_or_default())
            .collect()
    }

    /// Aligned row -> original line index map of one side
    pub fn position_map(&self, side: Side) -> PositionMap {
        self.rows.iter().map(|row| row.index(side)).collect()
    }

    /// Row indices where a non-equal opcode starts
    pub fn hunk_starts(&self) -> Vec<usize> {
        let mut starts = Vec::new();
        let mut row = 0;
        for op in &self.opcodes {
            if op.tag != OpTag::Equal {
                starts.push(row);
            }
            row += op.row_count();
        }
        starts
    }
}

/// Align two line sequences.
///
/// Matching is decided on normalized lines; the rows carry the original
/// text. Opcode order is kept as produced, and replace blocks pair lines
/// positionally (k-th left with k-th right).
pub fn align(left: &LineSequence, right: &LineSequence, options: &CompareOptions) -> Alignment {
    let norm_left: Vec<String> = left
        .iter()
        .map(|line| options.normalization.apply(line).into_owned())
        .collect();
    let norm_right: Vec<String> = right
        .iter()
        .map(|line| options.normalization.apply(line).into_owned())
        .collect();

    let deadline = options.timeout.map(|timeout| Instant::now() + timeout);
    let opcodes = compute_opcodes(&norm_left, &norm_right, options.algorithm, deadline);

    let mut rows = Vec::with_capacity(opcodes.iter().map(Opcode::row_count).sum());
    for op in &opcodes {
        match op.tag {
            OpTag::Equal => {
                for (i, j) in op.left.clone().zip(op.right.clone()) {
                    let norm = norm_left[i].clone();
                    rows.push(AlignedRow {
                        left: Slot::Line(left[i].to_string()),
                        right: Slot::Line(right[j].to_string()),
                        left_norm: Some(norm.clone()),
                        right_norm: Some(norm),
                        left_index: Some(i),
                        right_index: Some(j),
                    });
                }
            }
            OpTag::Replace | OpTag::Delete | OpTag::Insert => {
                for k in 0..op.row_count() {
                    let i = (k < op.left.len()).then_some(op.left.start + k);
                    let j = (k < op.right.len()).then_some(op.right.start + k);
                    rows.push(AlignedRow {
                        left: i.map_or(Slot::Gap, |i| Slot::Line(left[i].to_string())),
                        right: j.map_or(Slot::Gap, |j| Slot::Line(right[j].to_string())),
                        left_norm: i.map(|i| norm_left[i].clone()),
                        right_norm: j.map(|j| norm_right[j].clone()),
                        left_index: i,
                        right_index: j,
                    });
                }
            }
        }
    }

    Alignment { rows, opcodes }
}
