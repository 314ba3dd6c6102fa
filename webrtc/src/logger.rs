//! Opt-in `tracing` subscriber for binaries embedding the crate.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed, either by [`init`] or by the host application.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("LoggerError: cannot open log file: {0}")]
    OpenLogFile(#[from] io::Error),
    #[error("LoggerError: a global subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Installs a global fmt subscriber at `level`, appending to `log_file` when
/// given and writing to stderr otherwise.
pub fn init(level: Level, log_file: Option<&Path>) -> Result<(), LoggerError> {
    let builder = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let installed = match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(open_append(path)?))
            .try_init(),
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|err| LoggerError::AlreadyInstalled(err.to_string()))
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
