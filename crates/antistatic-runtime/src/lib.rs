//! antistatic-runtime: Spawning and the launch sequence
//!
//! This crate provides:
//! - The `Spawner` capability and its platform implementation
//! - The `Launcher` that checks, assembles, spawns, waits and logs

pub mod launcher;
pub mod process;
pub mod traits;

pub use launcher::Launcher;
pub use process::ProcessSpawner;
pub use traits::{RunningChild, Spawner};
