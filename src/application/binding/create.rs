use serde_json::Value;
use tracing::info;

use super::{hosts_for, zookeeper_hosts, Binder, BOOTSTRAP_SERVERS, TOPIC_PARAM};
use crate::domain::role::{KAFKA_PORT, KAFKA_SERVER};
use crate::domain::{Binding, HostsByRole, Manifest, Properties, RequestParameters};
use crate::error::{AdapterError, BindingError};
use crate::port::outbound::command::CommandRunner;

/// Marker the topic creator prints when the topic is already there.
const TOPIC_EXISTS_MARKER: &str = "kafka.common.TopicExistsException";

impl<R: CommandRunner> Binder<R> {
    /// Create a topic named `binding_id` and return broker credentials.
    ///
    /// If the request carries a non-null `topic` parameter, that topic is
    /// created too, after the binding's own topic. A failure there does not
    /// undo the first topic.
    ///
    /// # Errors
    ///
    /// - unsupported arbitrary parameters: `Generic` with a message listing
    ///   them, before any command runs;
    /// - no broker or ZooKeeper hosts: `Generic`;
    /// - the binding topic exists: `AlreadyExists`;
    /// - any other command failure: `Generic` with an empty message.
    pub fn create_binding(
        &self,
        binding_id: &str,
        hosts_by_role: &HostsByRole,
        _manifest: Option<&Manifest>,
        request_params: &RequestParameters,
    ) -> Result<Binding, AdapterError> {
        let params = request_params.arbitrary_params();

        let mut invalid: Vec<&str> = params
            .keys()
            .map(String::as_str)
            .filter(|key| !self.is_allowed(key))
            .collect();
        if !invalid.is_empty() {
            invalid.sort_unstable();
            let message = format!(
                "unsupported parameter(s) for this service: {}",
                invalid.join(", ")
            );
            return Err(AdapterError::binding(BindingError::Generic(message.clone()), message));
        }

        let kafka_hosts = hosts_for(hosts_by_role, KAFKA_SERVER).ok_or_else(|| {
            AdapterError::binding(
                BindingError::Generic(String::new()),
                format!("no VMs for instance group {KAFKA_SERVER}"),
            )
        })?;
        let bootstrap_servers: Vec<Value> = kafka_hosts
            .iter()
            .map(|host| Value::String(format!("{host}:{KAFKA_PORT}")))
            .collect();

        let zookeeper_hosts = zookeeper_hosts(hosts_by_role)?;

        let output = self.run_topic_command(&self.topic_creator, &zookeeper_hosts, binding_id)?;
        if !output.is_success() {
            if output.stderr_text().contains(TOPIC_EXISTS_MARKER) {
                return Err(AdapterError::binding(
                    BindingError::AlreadyExists,
                    format!("topic '{binding_id}' already exists"),
                ));
            }
            return Err(AdapterError::binding(
                BindingError::Generic(String::new()),
                format!("Error creating topic: {}", output.failure_detail()),
            ));
        }
        info!(topic = binding_id, "Created binding topic");

        if let Some(topic) = params.get(TOPIC_PARAM).filter(|topic| !topic.is_null()) {
            let Some(topic) = topic.as_str() else {
                return Err(AdapterError::binding(
                    BindingError::Generic(String::new()),
                    format!("Error creating topic: parameter {TOPIC_PARAM} must be a string"),
                ));
            };

            let output = self.run_topic_command(&self.topic_creator, &zookeeper_hosts, topic)?;
            if !output.is_success() {
                return Err(AdapterError::binding(
                    BindingError::Generic(String::new()),
                    format!("Error creating topic: {}", output.failure_detail()),
                ));
            }
            info!(topic, "Created requested topic");
        }

        let mut credentials = Properties::new();
        credentials.insert(BOOTSTRAP_SERVERS.into(), Value::Array(bootstrap_servers));
        Ok(Binding { credentials })
    }
}
