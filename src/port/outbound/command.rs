//! External command port.
//!
//! The topic creator and deleter are opaque executables: they take the
//! ZooKeeper host list and a topic name, exit zero on success, and explain
//! failures on standard error. This port captures exactly that contract.

use std::borrow::Cow;
use std::fmt;

use crate::error::CommandError;

/// How a command that did start finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// Non-zero exit. `code` is `None` when the process was killed by a signal.
    Failed { code: Option<i32> },
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "exit status 0"),
            Self::Failed { code: Some(code) } => write!(f, "exit status {code}"),
            Self::Failed { code: None } => write!(f, "terminated by signal"),
        }
    }
}

/// Captured result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub status: CommandStatus,
}

impl CommandOutput {
    /// Successful run with empty output.
    #[must_use]
    pub fn success() -> Self {
        Self {
            stdout: Vec::new(),
            stderr: Vec::new(),
            status: CommandStatus::Success,
        }
    }

    /// Failed run that wrote `stderr` and exited with `code`.
    #[must_use]
    pub fn failure(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: stderr.into(),
            status: CommandStatus::Failed { code: Some(code) },
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == CommandStatus::Success
    }

    /// Standard error decoded lossily, for marker matching and logs.
    #[must_use]
    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    /// One-line failure description for the operator log.
    #[must_use]
    pub fn failure_detail(&self) -> String {
        let stderr = self.stderr_text();
        let stderr = stderr.trim();
        if stderr.is_empty() {
            self.status.to_string()
        } else {
            format!("{}: {}", self.status, stderr)
        }
    }
}

/// Runs an external executable and captures its output.
///
/// Implementations block until the command exits. There is no timeout and no
/// retry; a hung command hangs the caller.
///
/// # Errors
///
/// Returns [`CommandError`] only when the command could not be started. A
/// command that ran and failed is reported through [`CommandOutput::status`].
pub trait CommandRunner: Send + Sync {
    fn run(&self, name: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_detail_includes_status_and_stderr() {
        let output = CommandOutput::failure(2, "Topic missing\n");
        assert_eq!(output.failure_detail(), "exit status 2: Topic missing");
        assert!(!output.is_success());
    }

    #[test]
    fn failure_detail_without_stderr_is_just_the_status() {
        let output = CommandOutput {
            stdout: Vec::new(),
            stderr: Vec::new(),
            status: CommandStatus::Failed { code: None },
        };
        assert_eq!(output.failure_detail(), "terminated by signal");
    }
}
