//! Service plans as configured by the operator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::manifest::Update;
use super::Properties;

/// Declarative description of the desired topology for one service instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Service-specific properties (`auto_create_topics`, `logging`, ...).
    #[serde(default)]
    pub properties: Properties,

    /// Instance groups the plan asks for.
    #[serde(default)]
    pub instance_groups: Vec<InstanceGroupSpec>,

    /// Rollout policy; the generator falls back to defaults when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Update>,
}

impl Plan {
    /// Instance count per group name.
    ///
    /// If a name appears more than once the last declaration wins.
    #[must_use]
    pub fn instance_counts(&self) -> BTreeMap<&str, u32> {
        self.instance_groups
            .iter()
            .map(|group| (group.name.as_str(), group.instances))
            .collect()
    }

    /// Names of the declared groups, in declaration order.
    #[must_use]
    pub fn group_names(&self) -> Vec<&str> {
        self.instance_groups
            .iter()
            .map(|group| group.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn has_group(&self, name: &str) -> bool {
        self.instance_groups.iter().any(|group| group.name == name)
    }
}

/// One instance group as described by a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceGroupSpec {
    pub name: String,

    pub vm_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vm_extensions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_disk_type: Option<String>,

    pub instances: u32,

    #[serde(default)]
    pub networks: Vec<String>,

    #[serde(default)]
    pub azs: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_broker_plan_json() {
        let plan: Plan = serde_json::from_str(
            r#"{
                "instance_groups": [
                    {
                        "name": "kafka_server",
                        "vm_type": "small",
                        "persistent_disk_type": "ten",
                        "networks": ["example-network"],
                        "azs": ["example-az"],
                        "instances": 2
                    }
                ],
                "properties": {"auto_create_topics": false},
                "update": {
                    "canaries": 2,
                    "max_in_flight": 5,
                    "canary_watch_time": "1000-2000",
                    "update_watch_time": "3000-4000"
                }
            }"#,
        )
        .expect("plan decodes");

        assert_eq!(plan.instance_groups[0].persistent_disk_type.as_deref(), Some("ten"));
        assert_eq!(plan.instance_counts().get("kafka_server"), Some(&2));
        assert_eq!(plan.properties["auto_create_topics"], false);

        let update = plan.update.expect("update block");
        assert_eq!(update.canaries, 2);
        assert_eq!(update.serial, None);
    }

    #[test]
    fn missing_properties_default_to_empty() {
        let plan: Plan = serde_json::from_str(r#"{"instance_groups": []}"#).unwrap();
        assert!(plan.properties.is_empty());
        assert!(plan.update.is_none());
    }

    #[test]
    fn group_names_keep_declaration_order() {
        let plan: Plan = serde_json::from_str(
            r#"{"instance_groups": [
                {"name": "zookeeper_server", "vm_type": "m", "instances": 1},
                {"name": "kafka_server", "vm_type": "s", "instances": 1}
            ]}"#,
        )
        .unwrap();

        assert_eq!(plan.group_names(), vec!["zookeeper_server", "kafka_server"]);
        assert!(plan.has_group("kafka_server"));
        assert!(!plan.has_group("smoke_tests"));
    }
}
