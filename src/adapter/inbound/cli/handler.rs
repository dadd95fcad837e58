//! Dispatches broker callbacks to the application services.

use tracing::info;

use super::command::Commands;
use super::decode;
use crate::adapter::outbound::{ProcessRunner, ReleaseJobMapper};
use crate::application::{Binder, DashboardUrlGenerator, ManifestGenerator};
use crate::domain::{HostsByRole, Manifest, Plan, RequestParameters, ServiceDeployment};
use crate::error::Result;
use crate::infrastructure::config::Settings;
use crate::port::outbound::command::CommandRunner;
use crate::port::outbound::mapper::InstanceGroupMapper;

/// The adapter as the broker sees it: one method per callback.
pub struct ServiceAdapter<M, R> {
    generator: ManifestGenerator<M>,
    binder: Binder<R>,
    dashboard: DashboardUrlGenerator,
}

impl ServiceAdapter<ReleaseJobMapper, ProcessRunner> {
    /// Production wiring: release-lookup mapping and real child processes.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            ManifestGenerator::new(ReleaseJobMapper),
            Binder::new(
                ProcessRunner,
                settings.topic_creator_command.clone(),
                settings.topic_deleter_command.clone(),
            ),
            DashboardUrlGenerator::default(),
        )
    }
}

impl<M: InstanceGroupMapper, R: CommandRunner> ServiceAdapter<M, R> {
    pub fn new(generator: ManifestGenerator<M>, binder: Binder<R>, dashboard: DashboardUrlGenerator) -> Self {
        Self {
            generator,
            binder,
            dashboard,
        }
    }

    /// Run one callback and return what belongs on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument cannot be decoded, the callback
    /// fails, or the result cannot be encoded.
    pub fn handle(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::GenerateManifest {
                service_deployment,
                plan,
                request_params,
                previous_manifest,
                previous_plan,
            } => {
                let deployment: ServiceDeployment =
                    decode::json("service deployment", service_deployment)?;
                let plan: Plan = decode::json("plan", plan)?;
                let request_params: RequestParameters =
                    decode::json_or_default("request params", request_params)?;
                let previous_manifest: Option<Manifest> =
                    decode::optional_yaml("previous manifest", previous_manifest)?;
                let previous_plan: Option<Plan> =
                    decode::optional_json("previous plan", previous_plan)?;

                let manifest = self.generator.generate_manifest(
                    &deployment,
                    &plan,
                    &request_params,
                    previous_manifest.as_ref(),
                    previous_plan.as_ref(),
                )?;
                info!(deployment = %manifest.name, "Generated manifest");
                Ok(serde_yaml::to_string(&manifest)?)
            }

            Commands::CreateBinding {
                binding_id,
                bosh_vms,
                manifest,
                request_params,
            } => {
                let hosts: HostsByRole = decode::json("bosh VMs", bosh_vms)?;
                let manifest: Option<Manifest> = decode::optional_yaml("manifest", manifest)?;
                let request_params: RequestParameters =
                    decode::json_or_default("request params", request_params)?;

                let binding =
                    self.binder
                        .create_binding(binding_id, &hosts, manifest.as_ref(), &request_params)?;
                Ok(serde_json::to_string(&binding)?)
            }

            Commands::DeleteBinding {
                binding_id,
                bosh_vms,
                manifest,
                request_params,
            } => {
                let hosts: HostsByRole = decode::json("bosh VMs", bosh_vms)?;
                let manifest: Option<Manifest> = decode::optional_yaml("manifest", manifest)?;
                let request_params: RequestParameters =
                    decode::json_or_default("request params", request_params)?;

                self.binder
                    .delete_binding(binding_id, &hosts, manifest.as_ref(), &request_params)?;
                Ok(String::new())
            }

            Commands::DashboardUrl {
                instance_id,
                plan,
                manifest,
            } => {
                let plan: Plan = decode::json("plan", plan)?;
                let manifest: Option<Manifest> = decode::optional_yaml("manifest", manifest)?;

                let url = self
                    .dashboard
                    .dashboard_url(instance_id, &plan, manifest.as_ref());
                Ok(serde_json::to_string(&url)?)
            }
        }
    }
}
