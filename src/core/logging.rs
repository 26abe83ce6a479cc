//! Tracing setup.
//!
//! The terminal binary draws on stdout, so its log goes to a file in the
//! platform data directory. Headless tools log to stderr.

use crate::core::constants::LOG_FILE_NAME;
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `default` (e.g. "info").
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Where the terminal game writes its log.
pub fn log_file_path() -> io::Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "flappy_bird").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    Ok(dirs.data_local_dir().join(LOG_FILE_NAME))
}

fn open_log_file() -> io::Result<(File, PathBuf)> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Log to a file. Returns the path, or None when no log file could be opened
/// (the game then runs without logging).
pub fn init_file_logging() -> Option<PathBuf> {
    let (file, path) = open_log_file().ok()?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;
    Some(path)
}

/// Log to stderr at `default` verbosity unless `RUST_LOG` says otherwise.
pub fn init_stderr_logging(default: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_ends_with_file_name() {
        // Headless CI may have no home directory; only check when resolvable
        if let Ok(path) = log_file_path() {
            assert!(path.ends_with(LOG_FILE_NAME));
        }
    }
}
