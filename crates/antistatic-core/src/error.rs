//! Error types for the launcher

use std::path::PathBuf;
use thiserror::Error;

/// Exit code reported for every launcher-side failure
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    /// Interpreter executable missing at the configured path
    #[error("Interpreter not found at {}", .0.display())]
    InterpreterNotFound(PathBuf),

    /// The OS refused to create the child process
    #[error("Process creation failed{}: {message}", code_suffix(.code))]
    Spawn {
        /// Raw OS error code, if the platform reported one
        code: Option<i32>,
        /// Human-readable system message
        message: String,
    },

    /// Waiting on the child failed
    #[error("Wait failed: {0}")]
    Wait(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for launcher operations
pub type LauncherResult<T> = Result<T, LauncherError>;

impl LauncherError {
    /// Build a spawn error from the error returned by process creation
    pub fn from_spawn_io(err: &std::io::Error) -> Self {
        LauncherError::Spawn {
            code: err.raw_os_error(),
            message: system_message(err),
        }
    }

    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

fn code_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}

/// Message text without the " (os error N)" suffix std appends
fn system_message(err: &std::io::Error) -> String {
    let text = err.to_string();
    let trimmed = match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {code})"))
            .unwrap_or(&text),
        None => &text,
    };
    trimmed.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LauncherError::InterpreterNotFound(PathBuf::from("./node"));
        assert_eq!(err.to_string(), "Interpreter not found at ./node");

        let err = LauncherError::Spawn {
            code: Some(13),
            message: "Permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "Process creation failed (code 13): Permission denied");

        let err = LauncherError::Spawn {
            code: None,
            message: "no such thing".to_string(),
        };
        assert_eq!(err.to_string(), "Process creation failed: no such thing");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }

    #[test]
    fn test_from_spawn_io_keeps_os_code() {
        let io_err = std::io::Error::from_raw_os_error(2);
        let err = LauncherError::from_spawn_io(&io_err);
        match err {
            LauncherError::Spawn { code, message } => {
                assert_eq!(code, Some(2));
                assert!(!message.is_empty());
                assert!(!message.contains("os error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_every_failure_exits_one() {
        let errors = [
            LauncherError::InterpreterNotFound(PathBuf::from("x")),
            LauncherError::Spawn {
                code: None,
                message: String::new(),
            },
            LauncherError::Wait("gone".to_string()),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1);
        }
    }
}
