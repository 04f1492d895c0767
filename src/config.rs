//! Command-line and environment configuration

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::engine::{CompareOptions, DiffAlgorithm, Normalization};

/// Errors that can occur while loading input files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Side-by-side text comparator for the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "panediff", version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Start with two empty panes, paste text, press Ctrl+R
    panediff

    # Preload both panes from files and compare right away
    panediff old.txt new.txt --compare

    # Whitespace must match exactly
    panediff old.txt new.txt --normalize exact")]
pub struct Config {
    /// File preloaded into the left pane
    pub left: Option<PathBuf>,

    /// File preloaded into the right pane
    pub right: Option<PathBuf>,

    /// Open the compare view immediately
    #[arg(short, long)]
    pub compare: bool,

    /// Normalization applied before lines are compared
    #[arg(short, long, value_enum, default_value_t, env = "PANEDIFF_NORMALIZE")]
    pub normalize: Normalization,

    /// Line alignment algorithm
    #[arg(short, long, value_enum, default_value_t, env = "PANEDIFF_ALGORITHM")]
    pub algorithm: DiffAlgorithm,

    /// Stop refining the alignment after this many milliseconds
    #[arg(long, env = "PANEDIFF_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, env = "PANEDIFF_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
            compare: false,
            normalize: Normalization::default(),
            algorithm: DiffAlgorithm::default(),
            timeout_ms: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Options for the comparison engine
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            normalization: self.normalize,
            algorithm: self.algorithm,
            timeout: self.timeout_ms.map(Duration::from_millis),
        }
    }

    /// Read the preloaded pane contents (empty when no file was given)
    pub fn load_inputs(&self) -> Result<(String, String), LoadError> {
        Ok((
            read_optional(self.left.as_deref())?,
            read_optional(self.right.as_deref())?,
        ))
    }
}

fn read_optional(path: Option<&Path>) -> Result<String, LoadError> {
    let Some(path) = path else {
        return Ok(String::new());
    };
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
