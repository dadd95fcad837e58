//! Builders for domain values used across tests.
//!
//! Provides concise factory functions for [`Plan`], [`ServiceDeployment`],
//! [`HostsByRole`] and [`RequestParameters`] so tests focus on assertions
//! rather than construction boilerplate.

use serde_json::{json, Value};

use crate::domain::role::{KAFKA_SERVER, SMOKE_TESTS, ZOOKEEPER_SERVER};
use crate::domain::{
    HostsByRole, InstanceGroupSpec, Plan, RequestParameters, ServiceDeployment, ServiceRelease,
    StemcellSpec,
};

/// Deployment `some-name` with one `kafka` release providing the three
/// service jobs, on a `Windows`/`3.1` stemcell.
pub fn deployment() -> ServiceDeployment {
    ServiceDeployment {
        deployment_name: "some-name".into(),
        releases: vec![ServiceRelease {
            name: "kafka".into(),
            version: "9.1".into(),
            jobs: vec![KAFKA_SERVER.into(), ZOOKEEPER_SERVER.into(), SMOKE_TESTS.into()],
        }],
        stemcell: StemcellSpec {
            os: "Windows".into(),
            version: "3.1".into(),
        },
    }
}

/// Plan group named `name` with `instances` VMs on a single network.
pub fn instance_group_spec(name: &str, instances: u32) -> InstanceGroupSpec {
    InstanceGroupSpec {
        name: name.into(),
        vm_type: "small".into(),
        persistent_disk_type: Some("ten".into()),
        instances,
        networks: vec!["kafka-network".into()],
        azs: vec!["z1".into()],
        ..InstanceGroupSpec::default()
    }
}

/// Valid plan with the given broker and ZooKeeper instance counts.
pub fn plan(kafka_instances: u32, zookeeper_instances: u32) -> Plan {
    Plan {
        instance_groups: vec![
            instance_group_spec(KAFKA_SERVER, kafka_instances),
            instance_group_spec(ZOOKEEPER_SERVER, zookeeper_instances),
        ],
        ..Plan::default()
    }
}

/// Valid single-instance plan carrying `properties`.
///
/// Anything other than a JSON object yields an empty property map.
pub fn plan_with_properties(properties: Value) -> Plan {
    let mut plan = plan(1, 1);
    if let Value::Object(properties) = properties {
        plan.properties = properties;
    }
    plan
}

/// Complete `logging` plan property.
pub fn logging_property() -> Value {
    json!({
        "syslog_address": "syslog.example.com",
        "syslog_port": 514,
        "loggregator_etcd_addresses": ["10.0.0.1", "10.0.0.2"],
        "loggregator_shared_secret": "secret",
    })
}

/// Request parameters nesting `params` under `parameters`.
///
/// Anything other than a JSON object yields empty request parameters.
pub fn arbitrary_params(params: Value) -> RequestParameters {
    match params {
        Value::Object(params) => RequestParameters::from_arbitrary(params),
        _ => RequestParameters::default(),
    }
}

/// Host map from `(role, hosts)` pairs.
pub fn hosts(entries: &[(&str, &[&str])]) -> HostsByRole {
    entries
        .iter()
        .map(|(role, hosts)| {
            (
                (*role).to_string(),
                hosts.iter().map(|host| (*host).to_string()).collect(),
            )
        })
        .collect()
}
