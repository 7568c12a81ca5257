//! OS process spawner
//!
//! One implementation per platform family, selected at compile time:
//! - POSIX: the command string is run by `/bin/sh -c`
//! - Windows: the interpreter is started directly with the escaped tail as
//!   its raw command line and `CREATE_NO_WINDOW`, so no console appears

use antistatic_core::{CommandLine, ExitOutcome, LauncherError, LauncherResult};
use async_trait::async_trait;
use std::process::Command as StdCommand;
use tokio::process::{Child, Command};
use tracing::{debug, error};

use crate::traits::{RunningChild, Spawner};

/// Shell that interprets the command string on POSIX platforms
#[cfg(unix)]
pub const POSIX_SHELL: &str = "/bin/sh";

/// `CREATE_NO_WINDOW` process creation flag
#[cfg(windows)]
pub const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Spawner backed by the platform's native process creation
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessSpawner;

impl ProcessSpawner {
    /// Create a new process spawner
    pub fn new() -> Self {
        Self
    }

    /// Build the command that runs `command`
    #[cfg(unix)]
    fn build_command(&self, command: &CommandLine) -> Command {
        let mut cmd = StdCommand::new(POSIX_SHELL);
        cmd.arg("-c").arg(command.as_str());
        Command::from(cmd)
    }

    /// Build the command that runs `command`
    #[cfg(windows)]
    fn build_command(&self, command: &CommandLine) -> Command {
        use std::os::windows::process::CommandExt;

        let mut cmd = StdCommand::new(command.interpreter());
        cmd.raw_arg(command.tail());
        cmd.creation_flags(CREATE_NO_WINDOW);
        Command::from(cmd)
    }
}

#[async_trait]
impl Spawner for ProcessSpawner {
    async fn spawn(&self, command: &CommandLine) -> LauncherResult<Box<dyn RunningChild>> {
        let mut cmd = self.build_command(command);

        match cmd.spawn() {
            Ok(child) => {
                debug!(pid = child.id().unwrap_or(0), "Child process spawned");
                Ok(Box::new(ProcessChild { child }))
            }
            Err(e) => {
                error!(error = %e, "Failed to spawn child process");
                Err(LauncherError::from_spawn_io(&e))
            }
        }
    }

    fn name(&self) -> &'static str {
        "process"
    }
}

/// Handle to a child created by [`ProcessSpawner`]
struct ProcessChild {
    child: Child,
}

#[async_trait]
impl RunningChild for ProcessChild {
    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    async fn wait(self: Box<Self>) -> LauncherResult<ExitOutcome> {
        let ProcessChild { mut child } = *self;
        let status = child
            .wait()
            .await
            .map_err(|e| LauncherError::Wait(e.to_string()))?;
        Ok(ExitOutcome::from(status))
    }
}
