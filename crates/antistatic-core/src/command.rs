//! Command-line assembly

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::escape::ShellDialect;

/// A fully escaped command line ready to hand to the platform spawner.
///
/// Token order is fixed: interpreter, security flag, entry point, then the
/// caller's arguments in the order given. Every token is escaped with the
/// same dialect, the fixed paths included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    dialect: ShellDialect,
    interpreter: PathBuf,
    tokens: Vec<String>,
    line: String,
}

impl CommandLine {
    /// Assemble the command line for `config` and the forwarded `args`
    pub fn assemble<I, S>(config: &LauncherConfig, args: I, dialect: ShellDialect) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = vec![
            dialect.escape(&path_text(&config.interpreter_path)),
            dialect.escape(&config.security_flag),
            dialect.escape(&path_text(&config.entry_point)),
        ];
        tokens.extend(args.into_iter().map(|arg| dialect.escape(arg.as_ref())));

        let line = tokens.join(" ");
        Self {
            dialect,
            interpreter: config.interpreter_path.clone(),
            tokens,
            line,
        }
    }

    /// Assemble using the platform's native dialect
    pub fn native<I, S>(config: &LauncherConfig, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::assemble(config, args, ShellDialect::native())
    }

    /// The whole command string
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Escaped tokens in command order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Unescaped interpreter path
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Escaped interpreter token
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Everything after the interpreter token
    pub fn tail(&self) -> &str {
        self.line.get(self.tokens[0].len() + 1..).unwrap_or_default()
    }

    /// Dialect the tokens were escaped with
    pub fn dialect(&self) -> ShellDialect {
        self.dialect
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LauncherConfig {
        LauncherConfig::default()
            .with_interpreter("./node")
            .with_entry_point("./app/dist/src/engine.js")
    }

    #[test]
    fn test_forwarding_order_posix() {
        let cmd = CommandLine::assemble(
            &config(),
            ["--seed", "42", "a value with spaces"],
            ShellDialect::Posix,
        );
        assert_eq!(
            cmd.as_str(),
            "./node --disallow-code-generation-from-strings ./app/dist/src/engine.js \
             --seed 42 'a value with spaces'"
        );
        assert_eq!(cmd.tokens().len(), 6);
    }

    #[test]
    fn test_forwarding_order_windows() {
        let config = config().with_interpreter("./node.exe");
        let cmd = CommandLine::assemble(
            &config,
            ["--seed", "42", "a value with spaces"],
            ShellDialect::Windows,
        );
        assert_eq!(
            cmd.as_str(),
            "./node.exe --disallow-code-generation-from-strings ./app/dist/src/engine.js \
             --seed 42 \"a value with spaces\""
        );
    }

    #[test]
    fn test_fixed_paths_are_escaped() {
        let config = config()
            .with_interpreter("/opt/my node/node")
            .with_entry_point("/srv/it's here/engine.js");
        let cmd = CommandLine::assemble(&config, Vec::<String>::new(), ShellDialect::Posix);
        assert_eq!(cmd.program(), "'/opt/my node/node'");
        assert_eq!(cmd.interpreter(), Path::new("/opt/my node/node"));
        assert_eq!(
            cmd.as_str(),
            "'/opt/my node/node' --disallow-code-generation-from-strings \
             '/srv/it'\\''s here/engine.js'"
        );
    }

    #[test]
    fn test_program_and_tail() {
        let config = config().with_interpreter("C:\\Program Files\\node.exe");
        let cmd = CommandLine::assemble(&config, ["x"], ShellDialect::Windows);
        assert_eq!(cmd.program(), "\"C:\\Program Files\\node.exe\"");
        assert_eq!(
            cmd.tail(),
            "--disallow-code-generation-from-strings ./app/dist/src/engine.js x"
        );
        assert_eq!(cmd.to_string(), format!("{} {}", cmd.program(), cmd.tail()));
        assert_eq!(cmd.dialect(), ShellDialect::Windows);
    }

    #[test]
    fn test_empty_argument_survives() {
        let cmd = CommandLine::assemble(&config(), ["", "b"], ShellDialect::Posix);
        assert!(cmd.as_str().ends_with(" '' b"));
    }
}
