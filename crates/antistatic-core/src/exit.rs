//! Child exit status translation

use std::fmt;
use std::process::ExitStatus;

use crate::error::FAILURE_EXIT_CODE;

/// Offset added to a terminating signal number, as shells do
pub const SIGNAL_EXIT_BASE: i32 = 128;

/// How the child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal termination with an exit code
    Exited(i32),
    /// Killed by a signal (POSIX only)
    Signaled(i32),
    /// Neither could be determined
    Unknown,
}

impl ExitOutcome {
    /// Exit code the launcher mirrors for this outcome
    pub fn code(self) -> i32 {
        match self {
            ExitOutcome::Exited(code) => code,
            ExitOutcome::Signaled(signal) => SIGNAL_EXIT_BASE + signal,
            ExitOutcome::Unknown => FAILURE_EXIT_CODE,
        }
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitOutcome::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Signaled(signal);
            }
        }

        ExitOutcome::Unknown
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Exited(code) => write!(f, "exited with code {code}"),
            ExitOutcome::Signaled(signal) => write!(f, "terminated by signal {signal}"),
            ExitOutcome::Unknown => f.write_str("ended with unknown status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_codes() {
        assert_eq!(ExitOutcome::Exited(0).code(), 0);
        assert_eq!(ExitOutcome::Exited(42).code(), 42);
        assert_eq!(ExitOutcome::Exited(255).code(), 255);
        assert_eq!(ExitOutcome::Signaled(9).code(), 137);
        assert_eq!(ExitOutcome::Signaled(15).code(), 143);
        assert_eq!(ExitOutcome::Unknown.code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_unix_status() {
        use std::os::unix::process::ExitStatusExt;

        // wait(2) encoding: exit code in the high byte, signal in the low bits
        assert_eq!(ExitOutcome::from(ExitStatus::from_raw(7 << 8)), ExitOutcome::Exited(7));
        assert_eq!(ExitOutcome::from(ExitStatus::from_raw(0)), ExitOutcome::Exited(0));
        assert_eq!(ExitOutcome::from(ExitStatus::from_raw(9)), ExitOutcome::Signaled(9));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ExitOutcome::Exited(3).to_string(), "exited with code 3");
        assert_eq!(ExitOutcome::Signaled(2).to_string(), "terminated by signal 2");
    }
}
