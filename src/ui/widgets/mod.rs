//! Reusable UI widgets

mod error_banner;
mod help_panel;
mod notification_banner;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help_panel::{build_help_lines, help_line_count, render_help_panel};
pub use notification_banner::render_notification_banner;
pub use status_bar::{
    STATUS_BAR_HEIGHT, build_status_bar, build_status_bar_with_prefix, render_compare_status_bar,
    render_editor_status_bar, render_help_status_bar,
};
