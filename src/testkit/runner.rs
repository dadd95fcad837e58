//! Scripted command runner.

use std::collections::VecDeque;
use std::io;

use parking_lot::Mutex;

use crate::error::CommandError;
use crate::port::outbound::command::{CommandOutput, CommandRunner};

/// One recorded command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(name: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }
}

/// Runner that records invocations and replays scripted outputs in order.
///
/// Once the script is exhausted every further call succeeds with empty
/// output.
pub struct RecordingRunner {
    outputs: Mutex<VecDeque<CommandOutput>>,
    calls: Mutex<Vec<Invocation>>,
    unstartable: bool,
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRunner {
    /// Runner whose commands always succeed.
    pub fn new() -> Self {
        Self::with_outputs(Vec::new())
    }

    /// Runner replaying `outputs` one per call.
    pub fn with_outputs(outputs: Vec<CommandOutput>) -> Self {
        Self {
            outputs: Mutex::new(outputs.into()),
            calls: Mutex::new(Vec::new()),
            unstartable: false,
        }
    }

    /// Runner whose commands can never be started.
    pub fn unstartable() -> Self {
        Self {
            unstartable: true,
            ..Self::new()
        }
    }

    /// Invocations so far, oldest first.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, name: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        self.calls.lock().push(Invocation::new(name, args));

        if self.unstartable {
            return Err(CommandError::Spawn {
                command: name.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file or directory"),
            });
        }

        Ok(self
            .outputs
            .lock()
            .pop_front()
            .unwrap_or_else(CommandOutput::success))
    }
}
