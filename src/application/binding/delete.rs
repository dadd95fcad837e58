use tracing::info;

use super::{zookeeper_hosts, Binder};
use crate::domain::{HostsByRole, Manifest, RequestParameters};
use crate::error::{AdapterError, BindingError};
use crate::port::outbound::command::CommandRunner;

/// Prefix the topic deleter prints when the topic does not exist.
const TOPIC_MISSING_PREFIX: &str = "Topic ";
/// Suffix following the topic name in the not-found message.
const TOPIC_MISSING_SUFFIX: &str = " does not exist on ZK path";

impl<R: CommandRunner> Binder<R> {
    /// Delete the topic named `binding_id`.
    ///
    /// Request parameters are accepted but not validated.
    ///
    /// # Errors
    ///
    /// `Generic` when there are no ZooKeeper hosts, `NotFound` when the
    /// deleter reports the topic missing, `Generic` with an empty message for
    /// every other failure.
    pub fn delete_binding(
        &self,
        binding_id: &str,
        hosts_by_role: &HostsByRole,
        _manifest: Option<&Manifest>,
        _request_params: &RequestParameters,
    ) -> Result<(), AdapterError> {
        let zookeeper_hosts = zookeeper_hosts(hosts_by_role)?;

        let output = self.run_topic_command(&self.topic_deleter, &zookeeper_hosts, binding_id)?;
        if output.is_success() {
            info!(topic = binding_id, "Deleted binding topic");
            return Ok(());
        }

        let missing = format!("{TOPIC_MISSING_PREFIX}{binding_id}{TOPIC_MISSING_SUFFIX}");
        if output.stderr_text().contains(&missing) {
            return Err(AdapterError::binding(
                BindingError::NotFound,
                format!("topic '{binding_id}' not found"),
            ));
        }

        Err(AdapterError::binding(
            BindingError::Generic(String::new()),
            format!("Error deleting topic: {}", output.failure_detail()),
        ))
    }
}
