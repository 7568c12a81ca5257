//! Argument escaping for the shell that receives the command line
//!
//! Two dialects are supported:
//! - `Windows`: the `CommandLineToArgvW` / MSVC CRT parsing rules used by
//!   `CreateProcess` children
//! - `Posix`: `/bin/sh` word splitting
//!
//! Escaping a token and letting the target shell parse it back yields the
//! original string.

/// Characters that force quoting under the Windows rules
const WINDOWS_SPECIAL: &[char] = &[' ', '\t', '\n', '\u{0B}', '"'];

/// Characters that force quoting under `/bin/sh`
const POSIX_SPECIAL: &[char] = &[
    ' ', '\t', '\n', '\u{0B}', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{',
    '}', ';', '<', '>', '|', '&',
];

/// Only special at the start of a shell word
const POSIX_WORD_START: &[char] = &['~', '#'];

/// Shell dialect used to quote tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellDialect {
    /// Double-quote wrapping with backslash-run doubling
    Windows,
    /// Single-quote wrapping, `'\''` for embedded quotes
    Posix,
}

impl ShellDialect {
    /// Dialect matching this platform's process-spawn mechanism
    pub const fn native() -> Self {
        #[cfg(windows)]
        {
            ShellDialect::Windows
        }
        #[cfg(not(windows))]
        {
            ShellDialect::Posix
        }
    }

    /// Whether `arg` must be quoted to survive as a single word
    pub fn needs_quoting(self, arg: &str) -> bool {
        if arg.is_empty() {
            return true;
        }
        match self {
            ShellDialect::Windows => arg.contains(WINDOWS_SPECIAL),
            ShellDialect::Posix => {
                arg.contains(POSIX_SPECIAL) || arg.starts_with(POSIX_WORD_START)
            }
        }
    }

    /// Escape a single argument
    pub fn escape(self, arg: &str) -> String {
        if !self.needs_quoting(arg) {
            return arg.to_string();
        }
        match self {
            ShellDialect::Windows => escape_windows(arg),
            ShellDialect::Posix => escape_posix(arg),
        }
    }
}

/// Escape `arg` for the native dialect
pub fn escape_arg(arg: &str) -> String {
    ShellDialect::native().escape(arg)
}

fn escape_windows(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len() + 2);
    escaped.push('"');

    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                // Backslashes before a quote are literal only when doubled.
                push_backslashes(&mut escaped, backslashes * 2 + 1);
                escaped.push('"');
                backslashes = 0;
            }
            _ => {
                push_backslashes(&mut escaped, backslashes);
                escaped.push(c);
                backslashes = 0;
            }
        }
    }
    // Trailing run sits before the closing quote.
    push_backslashes(&mut escaped, backslashes * 2);

    escaped.push('"');
    escaped
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat('\\').take(count));
}

fn escape_posix(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len() + 2);
    escaped.push('\'');
    for c in arg.chars() {
        if c == '\'' {
            escaped.push_str("'\\''");
        } else {
            escaped.push(c);
        }
    }
    escaped.push('\'');
    escaped
}
