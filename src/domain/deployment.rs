//! The deployment the broker wants a manifest for.

use serde::{Deserialize, Serialize};

/// Deployment name, available releases and stemcell chosen by the broker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDeployment {
    pub deployment_name: String,

    #[serde(default)]
    pub releases: Vec<ServiceRelease>,

    pub stemcell: StemcellSpec,
}

/// A release uploaded to the director and the jobs it provides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRelease {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub jobs: Vec<String>,
}

impl ServiceRelease {
    /// True when this release ships a job with the given name.
    #[must_use]
    pub fn provides(&self, job: &str) -> bool {
        self.jobs.iter().any(|provided| provided == job)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemcellSpec {
    #[serde(rename = "stemcell_os")]
    pub os: String,
    #[serde(rename = "stemcell_version")]
    pub version: String,
}
