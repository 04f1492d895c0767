//! Operations triggered by view actions

use crate::model::{Notification, Side};
use crate::session::SessionError;

use super::clipboard;
use super::state::{App, View};

impl App {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set an info notification (cyan)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::info(msg));
    }

    /// Set a warning notification (yellow)
    pub(crate) fn notify_warning(&mut self, msg: impl Into<String>) {
        self.notification = Some(Notification::warning(msg));
    }

    /// Set an error message (displayed in error area)
    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    // ── Comparison ────────────────────────────────────────────────────

    /// Compare the raw text of both panes and show the result
    pub fn run_compare(&mut self) {
        let left = self.editor.content(Side::Left);
        let right = self.editor.content(Side::Right);

        self.session.compare(&left, &right, self.options);
        self.compare_view.load(&self.session);
        self.go_to_view(View::Compare);

        let stats = self.session.stats();
        if self.compare_view.is_empty() {
            self.notification = None;
        } else if stats.is_identical() {
            self.notify_info("No differences");
        } else {
            self.notify_info(format!(
                "{} modified, {} left only, {} right only",
                stats.modified, stats.left_only, stats.right_only
            ));
        }
    }

    /// Switch to the next normalization and re-compare the same input
    pub(crate) fn cycle_normalization(&mut self) {
        self.options.normalization = self.options.normalization.next();
        if !self.session.recompare(self.options) {
            return;
        }

        let cursor = self.compare_view.cursor;
        let active = self.compare_view.active;
        self.compare_view.load(&self.session);
        self.compare_view.active = active;
        self.compare_view.set_cursor(cursor);

        tracing::info!(
            normalization = self.options.normalization.label(),
            "normalization changed"
        );
        self.notify_info(format!(
            "Normalization: {}",
            self.options.normalization.label()
        ));
    }

    // ── Clipboard ─────────────────────────────────────────────────────

    /// Original text behind the compare view's selection on its active side
    pub fn selected_text(&self) -> Result<Option<String>, SessionError> {
        let Some(selection) = self.compare_view.selection() else {
            return Ok(None);
        };
        self.session.copy_rows(self.compare_view.active, selection)
    }

    /// Copy the selection of the active side to the system clipboard
    pub(crate) fn copy_selection(&mut self) {
        let text = match self.selected_text() {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.notify_info("Nothing to copy");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy rejected");
                self.set_error(e.to_string());
                return;
            }
        };

        let lines = text.lines().count().max(1);
        match clipboard::copy_to_clipboard(&text) {
            Ok(()) => {
                tracing::debug!(lines, "copied selection");
                self.compare_view.clear_selection();
                self.notification = Some(Notification::copied(lines, self.compare_view.active));
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.notify_warning(format!("Copy failed: {e}"));
            }
        }
    }

    /// Paste the system clipboard into the focused pane
    ///
    /// A clipboard failure leaves the pane unchanged.
    pub(crate) fn paste_from_clipboard(&mut self) {
        match clipboard::paste_from_clipboard() {
            Ok(text) => self.paste_text(&text),
            Err(e) => tracing::debug!(error = %e, "clipboard paste failed"),
        }
    }

    /// Insert text into the focused pane, replacing its selection
    ///
    /// Used for clipboard pastes and bracketed pastes from the terminal.
    pub fn paste_text(&mut self, text: &str) {
        if self.current_view != View::Edit || text.is_empty() {
            return;
        }
        // Terminals send CR line endings in bracketed pastes
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.editor.paste(&text);
    }
}
