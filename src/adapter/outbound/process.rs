//! Command runner backed by child processes.

use std::process::Command;

use tracing::debug;

use crate::error::CommandError;
use crate::port::outbound::command::{CommandOutput, CommandRunner, CommandStatus};

/// Production runner that executes the named program directly, without a
/// shell, and captures both output streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, name: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        debug!(command = name, ?args, "Running external command");

        let output = Command::new(name)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: name.to_string(),
                source,
            })?;

        let status = if output.status.success() {
            CommandStatus::Success
        } else {
            CommandStatus::Failed {
                code: output.status.code(),
            }
        };

        debug!(command = name, %status, "External command finished");

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            status,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_streams_and_exit_code() {
        let output = ProcessRunner
            .run("sh", &["-c", "echo out; echo err >&2; exit 3"])
            .expect("sh starts");

        assert_eq!(output.stdout, b"out\n");
        assert_eq!(output.stderr_text(), "err\n");
        assert_eq!(output.status, CommandStatus::Failed { code: Some(3) });
    }

    #[test]
    fn passes_arguments_verbatim() {
        let output = ProcessRunner
            .run("sh", &["-c", "printf '%s|' \"$@\"", "sh", "z1,z2", "my topic"])
            .expect("sh starts");

        assert!(output.is_success());
        assert_eq!(output.stdout, b"z1,z2|my topic|");
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let result = ProcessRunner.run("/nonexistent/topic_creator", &["z1", "t"]);

        match result {
            Err(CommandError::Spawn { command, .. }) => {
                assert_eq!(command, "/nonexistent/topic_creator");
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }
}
