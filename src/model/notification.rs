//! Short-lived feedback shown after a key press
//!
//! Copy results, normalization switches and comparison summaries. A
//! notification disappears on its own once its time to live has passed.

use std::time::{Duration, Instant};

use super::Side;

/// How long a notification stays on screen
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Severity of a notification; picks its badge and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

impl NotificationKind {
    /// Badge text
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Done",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
            ttl: NOTIFICATION_TTL,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Result of copying original lines of one side
    pub fn copied(lines: usize, side: Side) -> Self {
        let noun = if lines == 1 { "line" } else { "lines" };
        Self::success(format!("Copied {lines} {noun} from {}", side.label()))
    }

    /// Override the time to live
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Whether the notification is gone at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}
