//! Spawn capability trait definitions

use antistatic_core::{CommandLine, ExitOutcome, LauncherResult};
use async_trait::async_trait;

/// Creates a child process running an assembled command line
#[async_trait]
pub trait Spawner: Send + Sync {
    /// Spawn the child; on the windowed platform no console is attached
    async fn spawn(&self, command: &CommandLine) -> LauncherResult<Box<dyn RunningChild>>;

    /// Get the spawner name
    fn name(&self) -> &'static str;
}

/// A spawned child owned by the launcher until it exits
#[async_trait]
pub trait RunningChild: Send {
    /// OS process id, if still known
    fn id(&self) -> Option<u32>;

    /// Block until the child exits, then release its handle
    async fn wait(self: Box<Self>) -> LauncherResult<ExitOutcome>;
}
