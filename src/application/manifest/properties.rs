//! Resolution of broker properties from plan, request and previous manifest.
//!
//! `auto_create_topics` is taken from the first source that sets it:
//!
//! 1. the caller's arbitrary parameters,
//! 2. the previous manifest's properties,
//! 3. the plan's properties,
//! 4. the default, `true`.
//!
//! `default_replication_factor` only comes from the plan (default `3`). The
//! caller cannot override it.

use serde_json::{json, Value};

use crate::domain::role::METRON_AGENT;
use crate::domain::{DomainError, Manifest, Plan, Properties, RequestParameters, ServiceRelease};

pub const AUTO_CREATE_TOPICS: &str = "auto_create_topics";
pub const DEFAULT_REPLICATION_FACTOR: &str = "default_replication_factor";
pub const LOGGING: &str = "logging";

const DEFAULT_AUTO_CREATE_TOPICS: bool = true;
const DEFAULT_REPLICATION_FACTOR_VALUE: i64 = 3;

/// Log forwarding settings lifted from the plan's `logging` property.
///
/// Values are carried through to the manifest unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Telemetry {
    pub syslog_address: Value,
    pub syslog_port: Value,
    pub etcd_machines: Vec<Value>,
    pub shared_secret: Value,
}

impl Telemetry {
    /// Parse the `logging` property.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidLogging`] when the value is not an object, a
    /// field is missing, or `loggregator_etcd_addresses` is not a list.
    pub fn from_logging(logging: &Value) -> Result<Self, DomainError> {
        let Value::Object(fields) = logging else {
            return Err(DomainError::InvalidLogging {
                reason: format!("expected an object, got {}", type_name(logging)),
            });
        };

        let field = |name: &str| {
            fields
                .get(name)
                .cloned()
                .ok_or_else(|| DomainError::InvalidLogging {
                    reason: format!("missing field {name}"),
                })
        };

        let etcd_machines = match field("loggregator_etcd_addresses")? {
            Value::Array(machines) => machines,
            other => {
                return Err(DomainError::InvalidLogging {
                    reason: format!(
                        "loggregator_etcd_addresses must be a list, got {}",
                        type_name(&other)
                    ),
                })
            }
        };

        Ok(Self {
            syslog_address: field("syslog_address")?,
            syslog_port: field("syslog_port")?,
            etcd_machines,
            shared_secret: field("loggregator_shared_secret")?,
        })
    }

    /// Top-level manifest properties consumed by the forwarder jobs.
    #[must_use]
    pub fn manifest_properties(&self, deployment_name: &str) -> Properties {
        let mut properties = Properties::new();
        properties.insert(
            "syslog_daemon_config".into(),
            json!({
                "address": self.syslog_address,
                "port": self.syslog_port,
            }),
        );
        properties.insert(
            "metron_agent".into(),
            json!({
                "zone": "",
                "deployment": deployment_name,
            }),
        );
        properties.insert(
            "loggregator".into(),
            json!({
                "etcd": { "machines": self.etcd_machines },
            }),
        );
        properties.insert(
            "metron_endpoint".into(),
            json!({
                "shared_secret": self.shared_secret,
            }),
        );
        properties
    }

    /// Forwarding is only possible if some release ships the forwarder job.
    ///
    /// # Errors
    ///
    /// [`DomainError::TelemetryReleaseMissing`] when none does.
    pub fn ensure_release(releases: &[ServiceRelease]) -> Result<(), DomainError> {
        if releases.iter().any(|release| release.provides(METRON_AGENT)) {
            Ok(())
        } else {
            Err(DomainError::TelemetryReleaseMissing { job: METRON_AGENT })
        }
    }
}

/// Resolves properties for one generation call.
pub struct PropertyResolver<'a> {
    plan: &'a Plan,
    arbitrary: Properties,
    previous_manifest: Option<&'a Manifest>,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(
        plan: &'a Plan,
        request_params: &RequestParameters,
        previous_manifest: Option<&'a Manifest>,
    ) -> Self {
        Self {
            plan,
            arbitrary: request_params.arbitrary_params(),
            previous_manifest,
        }
    }

    /// # Errors
    ///
    /// [`DomainError::InvalidParameter`] for a non-boolean caller value,
    /// [`DomainError::InvalidProperty`] for a non-boolean stored value.
    pub fn auto_create_topics(&self) -> Result<bool, DomainError> {
        if let Some(value) = self.arbitrary.get(AUTO_CREATE_TOPICS) {
            return value.as_bool().ok_or_else(|| DomainError::InvalidParameter {
                parameter: AUTO_CREATE_TOPICS,
                reason: format!("expected a boolean, got {}", type_name(value)),
            });
        }

        let previous = self
            .previous_manifest
            .and_then(|manifest| manifest.properties.get(AUTO_CREATE_TOPICS));
        let stored = previous.or_else(|| self.plan.properties.get(AUTO_CREATE_TOPICS));

        match stored {
            Some(value) => value.as_bool().ok_or_else(|| DomainError::InvalidProperty {
                property: AUTO_CREATE_TOPICS,
                reason: format!("expected a boolean, got {}", type_name(value)),
            }),
            None => Ok(DEFAULT_AUTO_CREATE_TOPICS),
        }
    }

    /// Plan value truncated toward zero, or the default.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidProperty`] for a non-numeric plan value.
    pub fn default_replication_factor(&self) -> Result<i64, DomainError> {
        let Some(value) = self.plan.properties.get(DEFAULT_REPLICATION_FACTOR) else {
            return Ok(DEFAULT_REPLICATION_FACTOR_VALUE);
        };

        value
            .as_i64()
            .or_else(|| value.as_f64().map(|factor| factor.trunc() as i64))
            .ok_or_else(|| DomainError::InvalidProperty {
                property: DEFAULT_REPLICATION_FACTOR,
                reason: format!("expected a number, got {}", type_name(value)),
            })
    }

    /// Forwarding settings, when the plan has a `logging` property.
    ///
    /// # Errors
    ///
    /// See [`Telemetry::from_logging`].
    pub fn telemetry(&self) -> Result<Option<Telemetry>, DomainError> {
        self.plan
            .properties
            .get(LOGGING)
            .map(Telemetry::from_logging)
            .transpose()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{logging_property, plan_with_properties};
    use serde_json::json;

    fn params(value: Value) -> RequestParameters {
        match value {
            Value::Object(map) => RequestParameters::from_arbitrary(map),
            _ => RequestParameters::default(),
        }
    }

    fn manifest_with(properties: Value) -> Manifest {
        let Value::Object(properties) = properties else {
            panic!("manifest properties must be an object");
        };
        Manifest {
            properties,
            ..Manifest::default()
        }
    }

    #[test]
    fn auto_create_topics_defaults_to_true() {
        let plan = plan_with_properties(json!({}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(resolver.auto_create_topics(), Ok(true));
    }

    #[test]
    fn plan_value_beats_default() {
        let plan = plan_with_properties(json!({"auto_create_topics": false}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(resolver.auto_create_topics(), Ok(false));
    }

    #[test]
    fn previous_manifest_beats_plan() {
        let plan = plan_with_properties(json!({"auto_create_topics": true}));
        let previous = manifest_with(json!({"auto_create_topics": false}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), Some(&previous));
        assert_eq!(resolver.auto_create_topics(), Ok(false));
    }

    #[test]
    fn arbitrary_parameter_beats_every_other_source() {
        for stored in [true, false] {
            let plan = plan_with_properties(json!({"auto_create_topics": stored}));
            let previous = manifest_with(json!({"auto_create_topics": stored}));
            for requested in [true, false] {
                let request = params(json!({"auto_create_topics": requested}));
                let resolver = PropertyResolver::new(&plan, &request, Some(&previous));
                assert_eq!(resolver.auto_create_topics(), Ok(requested));
            }
        }
    }

    #[test]
    fn previous_manifest_without_the_property_falls_through_to_plan() {
        let plan = plan_with_properties(json!({"auto_create_topics": false}));
        let previous = manifest_with(json!({"unrelated": 1}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), Some(&previous));
        assert_eq!(resolver.auto_create_topics(), Ok(false));
    }

    #[test]
    fn non_boolean_arbitrary_parameter_is_rejected() {
        let plan = plan_with_properties(json!({}));
        let request = params(json!({"auto_create_topics": "yes"}));
        let resolver = PropertyResolver::new(&plan, &request, None);

        assert_eq!(
            resolver.auto_create_topics(),
            Err(DomainError::InvalidParameter {
                parameter: AUTO_CREATE_TOPICS,
                reason: "expected a boolean, got a string".into(),
            })
        );
    }

    #[test]
    fn non_boolean_plan_value_is_rejected() {
        let plan = plan_with_properties(json!({"auto_create_topics": 1}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert!(matches!(
            resolver.auto_create_topics(),
            Err(DomainError::InvalidProperty { property: AUTO_CREATE_TOPICS, .. })
        ));
    }

    #[test]
    fn replication_factor_comes_from_plan_or_defaults_to_three() {
        let plan = plan_with_properties(json!({"default_replication_factor": 55}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(resolver.default_replication_factor(), Ok(55));

        let plan = plan_with_properties(json!({}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(resolver.default_replication_factor(), Ok(3));
    }

    #[test]
    fn replication_factor_is_truncated() {
        let plan = plan_with_properties(json!({"default_replication_factor": 4.9}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(resolver.default_replication_factor(), Ok(4));
    }

    #[test]
    fn replication_factor_ignores_caller_and_previous_manifest() {
        let plan = plan_with_properties(json!({}));
        let request = params(json!({"default_replication_factor": 7}));
        let previous = manifest_with(json!({"default_replication_factor": 9}));
        let resolver = PropertyResolver::new(&plan, &request, Some(&previous));
        assert_eq!(resolver.default_replication_factor(), Ok(3));
    }

    #[test]
    fn non_numeric_replication_factor_is_rejected() {
        let plan = plan_with_properties(json!({"default_replication_factor": "three"}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert!(resolver.default_replication_factor().is_err());
    }

    #[test]
    fn telemetry_is_inactive_without_logging() {
        let plan = plan_with_properties(json!({}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(resolver.telemetry(), Ok(None));
    }

    #[test]
    fn telemetry_builds_the_four_manifest_blocks() {
        let plan = plan_with_properties(json!({"logging": logging_property()}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);

        let telemetry = resolver.telemetry().unwrap().expect("logging is configured");
        let properties = telemetry.manifest_properties("my-deployment");

        assert_eq!(
            Value::Object(properties),
            json!({
                "syslog_daemon_config": {"address": "syslog.example.com", "port": 514},
                "metron_agent": {"zone": "", "deployment": "my-deployment"},
                "loggregator": {"etcd": {"machines": ["10.0.0.1", "10.0.0.2"]}},
                "metron_endpoint": {"shared_secret": "secret"},
            })
        );
    }

    #[test]
    fn logging_must_be_an_object() {
        let plan = plan_with_properties(json!({"logging": "syslog.example.com"}));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert_eq!(
            resolver.telemetry(),
            Err(DomainError::InvalidLogging {
                reason: "expected an object, got a string".into()
            })
        );
    }

    #[test]
    fn logging_requires_every_field() {
        for missing in [
            "syslog_address",
            "syslog_port",
            "loggregator_etcd_addresses",
            "loggregator_shared_secret",
        ] {
            let mut logging = logging_property();
            logging.as_object_mut().unwrap().remove(missing);
            let plan = plan_with_properties(json!({ "logging": logging }));
            let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);

            let err = resolver.telemetry().unwrap_err();
            assert_eq!(err.to_string(), format!("invalid logging property: missing field {missing}"));
        }
    }

    #[test]
    fn etcd_addresses_must_be_a_list() {
        let mut logging = logging_property();
        logging["loggregator_etcd_addresses"] = json!("10.0.0.1");
        let plan = plan_with_properties(json!({ "logging": logging }));
        let resolver = PropertyResolver::new(&plan, &RequestParameters::default(), None);
        assert!(matches!(resolver.telemetry(), Err(DomainError::InvalidLogging { .. })));
    }

    #[test]
    fn forwarding_needs_a_release_with_the_agent_job() {
        let kafka = ServiceRelease {
            name: "kafka".into(),
            version: "1".into(),
            jobs: vec!["kafka_server".into()],
        };
        assert_eq!(
            Telemetry::ensure_release(std::slice::from_ref(&kafka)),
            Err(DomainError::TelemetryReleaseMissing { job: "metron_agent" })
        );

        let loggregator = ServiceRelease {
            name: "loggregator".into(),
            version: "2".into(),
            jobs: vec!["metron_agent".into()],
        };
        assert!(Telemetry::ensure_release(&[kafka, loggregator]).is_ok());
    }
}
