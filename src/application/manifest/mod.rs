//! Manifest generation.
//!
//! [`ManifestGenerator`] turns a plan into a deployment manifest:
//!
//! 1. reject migrations that shrink a required role,
//! 2. check the required groups are declared,
//! 3. resolve log forwarding and add its job to every group,
//! 4. map plan groups onto releases through the injected mapper,
//! 5. check the broker group's network and inject broker properties,
//! 6. attach releases, stemcell, top-level properties and update policy.

mod properties;
mod validate;

pub use properties::{
    PropertyResolver, Telemetry, AUTO_CREATE_TOPICS, DEFAULT_REPLICATION_FACTOR, LOGGING,
};
pub use validate::PlanValidator;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::role::{
    KAFKA_SERVER, METRON_AGENT, ONLY_STEMCELL_ALIAS, SMOKE_TESTS, ZOOKEEPER_SERVER,
};
use crate::domain::{
    DomainError, Manifest, Plan, Properties, Release, RequestParameters, ServiceDeployment,
    Stemcell,
};
use crate::error::AdapterError;
use crate::port::outbound::mapper::{InstanceGroupMapper, RoleJobs};

/// Job-level property carrying the broker group's network name.
const NETWORK: &str = "network";

/// Generates manifests using an injected instance group mapper.
pub struct ManifestGenerator<M> {
    mapper: M,
    validator: PlanValidator,
}

impl<M: InstanceGroupMapper> ManifestGenerator<M> {
    pub fn new(mapper: M) -> Self {
        Self {
            mapper,
            validator: PlanValidator::default(),
        }
    }

    #[must_use]
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Build the manifest for `deployment` from `plan`.
    ///
    /// `previous_manifest` and `previous_plan` are absent on first deploy.
    /// Identical input always yields an identical manifest.
    ///
    /// # Errors
    ///
    /// Returns an [`AdapterError`] whose detail explains the failure to the
    /// operator. Plan configuration problems tell the caller to contact their
    /// operator; migration and mapping failures tell the caller nothing.
    pub fn generate_manifest(
        &self,
        deployment: &ServiceDeployment,
        plan: &Plan,
        request_params: &RequestParameters,
        previous_manifest: Option<&Manifest>,
        previous_plan: Option<&Plan>,
    ) -> Result<Manifest, AdapterError> {
        self.validator.check_migration(previous_plan, plan)?;
        self.validator.check_required_groups(plan)?;

        let resolver = PropertyResolver::new(plan, request_params, previous_manifest);
        let telemetry = resolver.telemetry()?;
        if telemetry.is_some() {
            Telemetry::ensure_release(&deployment.releases)?;
        }

        let role_jobs = role_jobs(telemetry.is_some());
        let mut instance_groups = self.mapper.map(
            &plan.instance_groups,
            &deployment.releases,
            ONLY_STEMCELL_ALIAS,
            &role_jobs,
        )?;

        let broker_group = instance_groups
            .iter_mut()
            .find(|group| group.name == KAFKA_SERVER)
            .ok_or_else(|| DomainError::MissingMappedGroup {
                group: KAFKA_SERVER.into(),
            })?;
        PlanValidator::check_network_count(broker_group)?;

        let auto_create_topics = resolver.auto_create_topics()?;
        let default_replication_factor = resolver.default_replication_factor()?;
        debug!(
            auto_create_topics,
            default_replication_factor,
            telemetry = telemetry.is_some(),
            "Resolved broker properties"
        );

        let network = broker_group.networks[0].name.clone();
        if let Some(job) = broker_group.job_mut(KAFKA_SERVER) {
            let mut properties = Properties::new();
            properties.insert(
                DEFAULT_REPLICATION_FACTOR.into(),
                Value::from(default_replication_factor),
            );
            properties.insert(AUTO_CREATE_TOPICS.into(), Value::Bool(auto_create_topics));
            properties.insert(NETWORK.into(), Value::String(network));
            job.properties = properties;
        }

        let properties = telemetry
            .as_ref()
            .map(|telemetry| telemetry.manifest_properties(&deployment.deployment_name))
            .unwrap_or_default();

        info!(
            deployment = %deployment.deployment_name,
            instance_groups = instance_groups.len(),
            "Generated manifest"
        );

        Ok(Manifest {
            name: deployment.deployment_name.clone(),
            releases: deployment
                .releases
                .iter()
                .map(|release| Release {
                    name: release.name.clone(),
                    version: release.version.clone(),
                })
                .collect(),
            stemcells: vec![Stemcell {
                alias: ONLY_STEMCELL_ALIAS.into(),
                os: deployment.stemcell.os.clone(),
                version: deployment.stemcell.version.clone(),
            }],
            instance_groups,
            update: plan.update.clone().unwrap_or_default(),
            properties,
        })
    }
}

/// Jobs placed on each role, with the forwarder added everywhere when
/// telemetry is active.
fn role_jobs(telemetry: bool) -> RoleJobs {
    [KAFKA_SERVER, ZOOKEEPER_SERVER, SMOKE_TESTS]
        .into_iter()
        .map(|role| {
            let mut jobs = vec![role.to_string()];
            if telemetry {
                jobs.push(METRON_AGENT.to_string());
            }
            (role.to_string(), jobs)
        })
        .collect()
}
