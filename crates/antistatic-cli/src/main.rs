//! Antistatic launcher
//!
//! Runs the bundled engine script under the bundled Node.js runtime and
//! exits with the engine's exit code. Every argument is forwarded.

#![windows_subsystem = "windows"]

use std::ffi::OsString;

use antistatic_core::LauncherConfig;
use antistatic_runtime::{Launcher, ProcessSpawner};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Antistatic launcher - starts the engine with code generation from strings disabled
#[derive(Parser, Debug)]
#[command(name = "antistatic")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Arguments forwarded to the engine
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    forwarded: Vec<OsString>,
}

impl Args {
    /// Parse a full argv, treating everything after the program name as a value.
    ///
    /// An end-of-options marker is inserted after the program name so no
    /// caller token, `--` included, is consumed by the parser.
    fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("antistatic"));
        let argv = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        Self::parse_from(argv)
    }

    fn forwarded(&self) -> Vec<String> {
        self.forwarded
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::from_argv(std::env::args_os());

    let log_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let launcher = Launcher::new(LauncherConfig::default(), ProcessSpawner::new());
    let code = runtime.block_on(launcher.run(&args.forwarded()));

    drop(runtime);
    std::process::exit(code);
}
