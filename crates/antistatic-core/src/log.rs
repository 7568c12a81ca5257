//! Best-effort plaintext diagnostic log
//!
//! One event per line, prefixed with a local timestamp. The file is truncated
//! when opened and closed when the [`LaunchLog`] is dropped. Failing to open
//! or write the file never interrupts a launch; the log simply goes quiet.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Append-only diagnostic log sink
#[derive(Debug)]
pub struct LaunchLog {
    path: Option<PathBuf>,
    file: Option<File>,
}

impl LaunchLog {
    /// Create (or truncate) the log at `path`.
    ///
    /// Returns a disabled sink if the file cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::create(path) {
            Ok(file) => Self {
                path: Some(path.to_path_buf()),
                file: Some(file),
            },
            Err(_) => Self::disabled(),
        }
    }

    /// A sink that drops every line
    pub fn disabled() -> Self {
        Self {
            path: None,
            file: None,
        }
    }

    /// Whether lines reach a file
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Path of the open log file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one line, ignoring failures
    pub fn line(&mut self, message: impl AsRef<str>) {
        if let Some(file) = self.file.as_mut() {
            let stamp = Local::now().format(TIMESTAMP_FORMAT);
            let _ = writeln!(file, "{} {}", stamp, message.as_ref());
            let _ = file.flush();
        }
    }
}
