//! Instance group mapping port.
//!
//! Turns the abstract instance groups of a plan into concrete manifest
//! instance groups by deciding which release supplies each job. The manifest
//! generator receives a mapper at construction so tests can substitute one.

use std::collections::BTreeMap;

use crate::domain::{InstanceGroup, InstanceGroupSpec, ServiceRelease};
use crate::error::MappingError;

/// Jobs to place on each instance group, keyed by group name.
pub type RoleJobs = BTreeMap<String, Vec<String>>;

/// Maps plan instance groups onto releases and jobs.
///
/// Implementations must be pure: the same input always yields the same
/// groups, and nothing outside the arguments is read.
pub trait InstanceGroupMapper: Send + Sync {
    /// Build manifest instance groups.
    ///
    /// # Arguments
    ///
    /// * `groups` - Instance groups declared by the plan.
    /// * `releases` - Releases available to the deployment.
    /// * `stemcell_alias` - Alias every group's `stemcell` field refers to.
    /// * `role_jobs` - Jobs to place on each group, by group name.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError`] when a job cannot be attributed to exactly
    /// one release or the plan declares no groups.
    fn map(
        &self,
        groups: &[InstanceGroupSpec],
        releases: &[ServiceRelease],
        stemcell_alias: &str,
        role_jobs: &RoleJobs,
    ) -> Result<Vec<InstanceGroup>, MappingError>;
}

impl<F> InstanceGroupMapper for F
where
    F: Fn(
            &[InstanceGroupSpec],
            &[ServiceRelease],
            &str,
            &RoleJobs,
        ) -> Result<Vec<InstanceGroup>, MappingError>
        + Send
        + Sync,
{
    fn map(
        &self,
        groups: &[InstanceGroupSpec],
        releases: &[ServiceRelease],
        stemcell_alias: &str,
        role_jobs: &RoleJobs,
    ) -> Result<Vec<InstanceGroup>, MappingError> {
        self(groups, releases, stemcell_alias, role_jobs)
    }
}
