//! panediff - side-by-side line comparison in the terminal
//!
//! Two editable panes, compared line by line into an aligned view where
//! matching lines share a row and missing lines are padded with gaps.
//!
//! This library provides:
//! - [`engine`]: Normalization, alignment, classification and line extraction
//! - [`session`]: Comparison state shared by the views
//! - [`surface`]: The display seam the session renders through
//! - [`config`]: Command-line configuration
//! - [`app`]: Application state and logic
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod engine;
pub mod keys;
pub mod model;
pub mod session;
pub mod surface;
pub mod ui;
