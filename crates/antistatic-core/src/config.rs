//! Launch configuration

use std::path::{Path, PathBuf};

/// Diagnostic log written next to the launcher on every run
pub const DEFAULT_LOG_FILE: &str = "./debug.txt";

/// Bundled Node.js binary
#[cfg(windows)]
pub const DEFAULT_INTERPRETER: &str = "./node.exe";
/// Bundled Node.js binary
#[cfg(not(windows))]
pub const DEFAULT_INTERPRETER: &str = "./node";

/// Engine script handed to the interpreter
pub const DEFAULT_ENTRY_POINT: &str = "./app/dist/src/engine.js";

/// Disables `eval` and `new Function` in the interpreter
pub const SECURITY_FLAG: &str = "--disallow-code-generation-from-strings";

/// Launcher configuration
///
/// Built once at startup and handed to the launcher by reference. All paths
/// are resolved against the current working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Plaintext diagnostic log, truncated on each run
    pub log_file: PathBuf,
    /// Interpreter executable
    pub interpreter_path: PathBuf,
    /// Entry-point script
    pub entry_point: PathBuf,
    /// Flag passed to the interpreter ahead of the entry point
    pub security_flag: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            interpreter_path: PathBuf::from(DEFAULT_INTERPRETER),
            entry_point: PathBuf::from(DEFAULT_ENTRY_POINT),
            security_flag: SECURITY_FLAG.to_string(),
        }
    }
}

impl LauncherConfig {
    /// Use a different log file
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Use a different interpreter executable
    pub fn with_interpreter(mut self, path: impl Into<PathBuf>) -> Self {
        self.interpreter_path = path.into();
        self
    }

    /// Use a different entry-point script
    pub fn with_entry_point(mut self, path: impl Into<PathBuf>) -> Self {
        self.entry_point = path.into();
        self
    }

    /// Whether the interpreter executable is present.
    ///
    /// Plain existence check; permissions are left for the spawn to report.
    pub fn interpreter_exists(&self) -> bool {
        path_exists(&self.interpreter_path)
    }
}

fn path_exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok()
}
