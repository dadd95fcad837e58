//! Deployment domain types shared by manifest generation and binding.
//!
//! Everything here is plain data decoded from the broker's arguments or
//! encoded back into its results. No module in `domain` performs I/O.

pub mod binding;
pub mod deployment;
pub mod error;
pub mod manifest;
pub mod plan;
pub mod request;
pub mod role;

pub use binding::{Binding, DashboardUrl, HostsByRole};
pub use deployment::{ServiceDeployment, ServiceRelease, StemcellSpec};
pub use error::DomainError;
pub use manifest::{InstanceGroup, Job, Manifest, Network, Release, Stemcell, Update};
pub use plan::{InstanceGroupSpec, Plan};
pub use request::RequestParameters;

/// Free-form property map carried by plans, manifests and jobs.
///
/// Backed by an ordered map so encoding the same properties twice yields
/// identical output.
pub type Properties = serde_json::Map<String, serde_json::Value>;
