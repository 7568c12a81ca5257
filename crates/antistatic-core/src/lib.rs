//! antistatic-core: Core types for the Antistatic launcher
//!
//! This crate holds the platform-neutral pieces of the launcher:
//! - Launch configuration
//! - Error handling
//! - Argument escaping and command-line assembly
//! - Child exit status translation
//! - The best-effort diagnostic log

pub mod command;
pub mod config;
pub mod error;
pub mod escape;
pub mod exit;
pub mod log;

pub use command::*;
pub use config::*;
pub use error::*;
pub use escape::*;
pub use exit::*;
pub use log::*;
