//! System clipboard access
//!
//! Detects available clipboard tools and pipes text through them.
//! Detection order: macOS → Wayland → X11 (xclip) → X11 fallback (xsel)

use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

use thiserror::Error;

/// Errors that can occur while talking to the clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (install pbcopy, xclip, or wl-copy)")]
    NoTool,

    #[error("Failed to run {program}: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited unsuccessfully")]
    Failed { program: &'static str },
}

const COPY_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

const PASTE_COMMANDS: &[&[&str]] = &[
    &["pbpaste"],
    &["wl-paste", "--no-newline"],
    &["xclip", "-selection", "clipboard", "-o"],
    &["xsel", "--clipboard", "--output"],
];

/// Copy text to system clipboard.
///
/// Tries platform-specific commands in priority order:
/// 1. `pbcopy` (macOS)
/// 2. `wl-copy` (Wayland Linux)
/// 3. `xclip -selection clipboard` (X11 Linux)
/// 4. `xsel --clipboard --input` (X11 Linux fallback)
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut last_error = ClipboardError::NoTool;

    for cmd_args in COPY_COMMANDS {
        let program = cmd_args[0];
        if !is_available(program) {
            continue;
        }

        let io_err = |source| ClipboardError::Io { program, source };
        let mut child = Command::new(program)
            .args(&cmd_args[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        // Dropping stdin closes the pipe so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = finish(&mut child, written).map_err(io_err)?;
        if status.success() {
            tracing::debug!(program, bytes = text.len(), "copied to clipboard");
            return Ok(());
        }
        last_error = ClipboardError::Failed { program };
    }

    Err(last_error)
}

/// Read text from the system clipboard.
///
/// Same tool order as [`copy_to_clipboard`], using the paste counterparts.
pub fn paste_from_clipboard() -> Result<String, ClipboardError> {
    let mut last_error = ClipboardError::NoTool;

    for cmd_args in PASTE_COMMANDS {
        let program = cmd_args[0];
        if !is_available(program) {
            continue;
        }

        let io_err = |source| ClipboardError::Io { program, source };
        let mut child = Command::new(program)
            .args(&cmd_args[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        let mut bytes = Vec::new();
        let read = match child.stdout.take() {
            Some(mut stdout) => stdout.read_to_end(&mut bytes).map(drop),
            None => Ok(()),
        };

        let status = finish(&mut child, read).map_err(io_err)?;
        if status.success() {
            return Ok(String::from_utf8_lossy(&bytes).into_owned());
        }
        last_error = ClipboardError::Failed { program };
    }

    Err(last_error)
}

/// Reap the child after piping to or from it.
///
/// On a pipe error the child is killed first, so it is never left running
/// or unreaped.
fn finish(child: &mut Child, piped: io::Result<()>) -> io::Result<ExitStatus> {
    if let Err(e) = piped {
        let _ = child.kill();
        let _ = child.wait();
        return Err(e);
    }
    child.wait()
}

/// Check if a command is available on the system
fn is_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
