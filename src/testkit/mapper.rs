//! Scripted instance group mapper.

use parking_lot::Mutex;

use crate::domain::{InstanceGroup, InstanceGroupSpec, ServiceRelease};
use crate::error::MappingError;
use crate::port::outbound::mapper::{InstanceGroupMapper, RoleJobs};

/// Arguments of one [`StubMapper`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperCall {
    pub groups: Vec<InstanceGroupSpec>,
    pub releases: Vec<ServiceRelease>,
    pub stemcell_alias: String,
    pub role_jobs: RoleJobs,
}

/// Mapper that returns a fixed result and records every call.
pub struct StubMapper {
    result: Result<Vec<InstanceGroup>, MappingError>,
    calls: Mutex<Vec<MapperCall>>,
}

impl StubMapper {
    /// Mapper that always returns `groups`.
    pub fn returning(groups: Vec<InstanceGroup>) -> Self {
        Self {
            result: Ok(groups),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mapper that always fails with `err`.
    pub fn failing(err: MappingError) -> Self {
        Self {
            result: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<MapperCall> {
        self.calls.lock().clone()
    }
}

impl InstanceGroupMapper for StubMapper {
    fn map(
        &self,
        groups: &[InstanceGroupSpec],
        releases: &[ServiceRelease],
        stemcell_alias: &str,
        role_jobs: &RoleJobs,
    ) -> Result<Vec<InstanceGroup>, MappingError> {
        self.calls.lock().push(MapperCall {
            groups: groups.to_vec(),
            releases: releases.to_vec(),
            stemcell_alias: stemcell_alias.to_string(),
            role_jobs: role_jobs.clone(),
        });
        self.result.clone()
    }
}
