//! Data models for panediff
//!
//! This module contains UI-independent data structures: captured input
//! lines, aligned slots, and user-facing notifications.

mod line;
mod notification;

pub use line::{LineSequence, Side, Slot};
pub use notification::{Notification, NotificationKind};
