//! panediff - side-by-side line comparison in the terminal
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use panediff::app::App;
use panediff::config::Config;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();

    if let Some(ref path) = config.log_file {
        init_logging(path)?;
    }

    let (left, right) = config.load_inputs().wrap_err("failed to load input files")?;
    let app = App::from_config(&config, &left, &right);

    let terminal = ratatui::init();
    let _guard = scopeguard::guard((), |_| {
        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();
    });
    execute!(stdout(), EnableBracketedPaste).wrap_err("failed to enable bracketed paste")?;

    run(terminal, app)
}

/// Send tracing output to a file so the terminal UI stays clean
fn init_logging(path: &Path) -> color_eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "panediff started");
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    tracing::info!("panediff exiting");
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications disappear
/// without waiting for the next key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            Event::Paste(text) => app.paste_text(&text),
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
