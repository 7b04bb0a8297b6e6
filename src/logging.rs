use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Where log output goes. The TUI owns the terminal, so it logs to a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Stderr,
}

pub fn log_dir() -> PathBuf {
    std::env::var("KOTOBA_LOG_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|d| d.join("kotoba")))
        .unwrap_or_else(std::env::temp_dir)
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env("KOTOBA_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("kotoba=debug,warn")
        } else {
            EnvFilter::new("kotoba=info,warn")
        }
    })
}

/// Install the global subscriber. Returns the log file path when logging to
/// a file. A file that cannot be opened disables logging instead of
/// writing over the TUI.
pub fn init(verbose: bool, target: LogTarget) -> Option<PathBuf> {
    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            let _ = tracing_subscriber::registry()
                .with(filter(verbose))
                .with(layer)
                .try_init();
            None
        }
        LogTarget::File => {
            let dir = log_dir();
            fs::create_dir_all(&dir).ok()?;
            let path = dir.join("kotoba.log");
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter(verbose))
                .with(layer)
                .try_init()
                .ok()?;
            tracing::info!(path = %path.display(), "logging initialized");
            Some(path)
        }
    }
}
