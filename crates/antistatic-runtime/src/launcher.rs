//! Launch sequence
//!
//! Check for the interpreter, assemble the command line, spawn the child,
//! wait for it and mirror its exit code. Every step is recorded in the
//! diagnostic log; none of them is retried.

use antistatic_core::{
    CommandLine, ExitOutcome, LaunchLog, LauncherConfig, LauncherError, LauncherResult,
};
use tracing::{debug, error, info};

use crate::traits::Spawner;

/// First line of every diagnostic log
pub const LOG_BANNER: &str = "Antistatic Loader";

/// Runs the interpreter for one launcher invocation
pub struct Launcher<S: Spawner> {
    config: LauncherConfig,
    spawner: S,
}

impl<S: Spawner> Launcher<S> {
    /// Create a new launcher
    pub fn new(config: LauncherConfig, spawner: S) -> Self {
        Self { config, spawner }
    }

    /// Launcher configuration
    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Run the launch sequence, logging to the configured log file.
    ///
    /// Returns the exit code the launcher process should exit with.
    pub async fn run(&self, args: &[String]) -> i32 {
        let mut log = LaunchLog::open(&self.config.log_file);
        if !log.is_enabled() {
            debug!(path = %self.config.log_file.display(), "Diagnostic log unavailable");
        }
        self.run_with_log(args, &mut log).await
    }

    /// Run the launch sequence against an explicit log sink
    pub async fn run_with_log(&self, args: &[String], log: &mut LaunchLog) -> i32 {
        log.line(LOG_BANNER);
        log.line(format!("Args: {}", args.len()));
        info!(args = args.len(), spawner = self.spawner.name(), "Launching");

        match self.launch(args, log).await {
            Ok(outcome) => {
                let code = outcome.code();
                log.line(format!("Exit code: {code}"));
                info!(exit_code = code, "Child {}", outcome);
                code
            }
            Err(err) => {
                record_error(log, &err);
                error!(error = %err, "Launch failed");
                err.exit_code()
            }
        }
    }

    async fn launch(&self, args: &[String], log: &mut LaunchLog) -> LauncherResult<ExitOutcome> {
        // Advisory only: the file may still vanish before the spawn.
        if !self.config.interpreter_exists() {
            return Err(LauncherError::InterpreterNotFound(
                self.config.interpreter_path.clone(),
            ));
        }

        let command = CommandLine::native(&self.config, args);
        log.line(format!("Executing: {command}"));
        debug!(command = %command, "Assembled command line");

        let child = self.spawner.spawn(&command).await?;
        let pid = child.id().unwrap_or(0);
        log.line(format!("Process started (PID {pid})"));
        info!(pid = pid, "Process started");

        child.wait().await
    }
}

fn record_error(log: &mut LaunchLog, err: &LauncherError) {
    match err {
        LauncherError::InterpreterNotFound(path) => {
            log.line(format!("ERROR: Interpreter not found at {}", path.display()));
        }
        LauncherError::Spawn { code, message } => {
            match code {
                Some(code) => log.line(format!("ERROR: Process creation failed (code {code})")),
                None => log.line("ERROR: Process creation failed"),
            }
            if !message.is_empty() {
                log.line(message);
            }
        }
        other => log.line(format!("ERROR: {other}")),
    }
}
