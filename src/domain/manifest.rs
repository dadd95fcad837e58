//! Deployment manifests handed back to the broker.
//!
//! Field order and omission rules follow the director's manifest schema so
//! that the YAML encoding is stable and readable.

use serde::{Deserialize, Serialize};

use super::Properties;

/// A complete deployment descriptor.
///
/// Also used to decode the previous manifest, so every field tolerates being
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub name: String,
    pub releases: Vec<Release>,
    pub stemcells: Vec<Stemcell>,
    pub instance_groups: Vec<InstanceGroup>,
    pub update: Update,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl Manifest {
    /// Look up a mapped instance group by name.
    #[must_use]
    pub fn instance_group(&self, name: &str) -> Option<&InstanceGroup> {
        self.instance_groups.iter().find(|group| group.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stemcell {
    pub alias: String,
    pub os: String,
    pub version: String,
}

/// Concrete instance group: VMs, networks and the jobs placed on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<String>,
    pub instances: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    pub vm_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vm_extensions: Vec<String>,
    pub stemcell: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_disk_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub azs: Vec<String>,
    pub networks: Vec<Network>,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

impl InstanceGroup {
    /// Mutable access to the job with the given name, if placed on this group.
    pub fn job_mut(&mut self, name: &str) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|job| job.name == name)
    }

    #[must_use]
    pub fn job(&self, name: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub name: String,
    pub release: String,
    #[serde(skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
}

/// Rollout policy for instance updates.
///
/// [`Update::default`] is the policy applied when a plan does not supply one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub canaries: u32,
    pub canary_watch_time: String,
    pub update_watch_time: String,
    pub max_in_flight: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<bool>,
}

impl Default for Update {
    fn default() -> Self {
        Self {
            canaries: 1,
            canary_watch_time: "30000-240000".into(),
            update_watch_time: "30000-240000".into(),
            max_in_flight: 10,
            serial: Some(false),
        }
    }
}
