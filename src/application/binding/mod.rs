//! Topic bindings.
//!
//! A binding is a Kafka topic named after the binding id, created and
//! deleted through external executables that talk to ZooKeeper. The
//! executables report why they failed only on standard error, so failures are
//! classified by matching known marker text there.

mod create;
mod delete;

use tracing::debug;

use crate::domain::role::ZOOKEEPER_SERVER;
use crate::domain::HostsByRole;
use crate::error::{AdapterError, BindingError};
use crate::port::outbound::command::{CommandOutput, CommandRunner};

/// Arbitrary parameter naming an extra topic to create alongside the binding.
pub const TOPIC_PARAM: &str = "topic";

/// Key under which binding credentials expose the broker addresses.
pub const BOOTSTRAP_SERVERS: &str = "bootstrap_servers";

/// Creates and deletes topic bindings through an injected [`CommandRunner`].
pub struct Binder<R> {
    runner: R,
    topic_creator: String,
    topic_deleter: String,
    allowed_params: Vec<String>,
}

impl<R: CommandRunner> Binder<R> {
    /// Binder accepting only the `topic` arbitrary parameter.
    pub fn new(runner: R, topic_creator: impl Into<String>, topic_deleter: impl Into<String>) -> Self {
        Self {
            runner,
            topic_creator: topic_creator.into(),
            topic_deleter: topic_deleter.into(),
            allowed_params: vec![TOPIC_PARAM.to_string()],
        }
    }

    /// Replace the set of arbitrary parameters a binding request may carry.
    #[must_use]
    pub fn with_allowed_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_params = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn is_allowed(&self, param: &str) -> bool {
        self.allowed_params.iter().any(|allowed| allowed == param)
    }

    /// Run a topic command with the ZooKeeper hosts and topic name.
    fn run_topic_command(
        &self,
        command: &str,
        zookeeper_hosts: &str,
        topic: &str,
    ) -> Result<CommandOutput, AdapterError> {
        debug!(command, topic, "Running topic command");
        self.runner
            .run(command, &[zookeeper_hosts, topic])
            .map_err(|err| AdapterError::binding(BindingError::Generic(String::new()), err.to_string()))
    }
}

/// Hosts for `role`, or `None` when the deployment has none.
fn hosts_for<'a>(hosts_by_role: &'a HostsByRole, role: &str) -> Option<&'a [String]> {
    hosts_by_role
        .get(role)
        .map(Vec::as_slice)
        .filter(|hosts| !hosts.is_empty())
}

/// ZooKeeper hosts joined for the topic executables.
fn zookeeper_hosts(hosts_by_role: &HostsByRole) -> Result<String, AdapterError> {
    hosts_for(hosts_by_role, ZOOKEEPER_SERVER)
        .map(|hosts| hosts.join(","))
        .ok_or_else(|| {
            AdapterError::binding(
                BindingError::Generic(String::new()),
                format!("no VMs for job {ZOOKEEPER_SERVER}"),
            )
        })
}
