//! Comparison core
//!
//! Pure functions, no I/O:
//! - [`normalize`]: line normalization used for matching
//! - [`opcodes`]: opcode decomposition of two sequences
//! - [`align`]: padded side-by-side rows
//! - [`classify`]: per-row category and highlight
//! - [`extract`]: aligned rows back to original lines

pub mod align;
pub mod classify;
pub mod extract;
pub mod normalize;
pub mod opcodes;

pub use align::{AlignedRow, Alignment, CompareOptions, align};
pub use classify::{Category, DiffStats, Highlight, classify};
pub use extract::{PositionMap, extract_lines, extract_original};
pub use normalize::Normalization;
pub use opcodes::{DiffAlgorithm, OpTag, Opcode, compute_opcodes};
