//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct and view management
//! - `actions`: comparison, clipboard and normalization operations
//! - `input`: Key event handling
//! - `render`: UI rendering

mod actions;
pub mod clipboard;
mod input;
mod render;
mod state;

pub use state::{App, View};
