//! Shared setup for the rendering tests

use ratatui::{Terminal, backend::TestBackend};

use panediff::app::App;

/// Draw the app once on a terminal of the given size
pub fn draw(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}
