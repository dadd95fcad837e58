//! Command-line interface definitions.
//!
//! One subcommand per broker callback. Every argument is positional and is
//! passed verbatim by the broker, so an empty string stands for "absent".

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kafka on-demand service adapter
#[derive(Parser, Debug)]
#[command(name = "service-adapter")]
#[command(version)]
pub struct Cli {
    /// Optional TOML settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Broker callbacks.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a deployment manifest (YAML on stdout)
    GenerateManifest {
        /// Service deployment JSON
        service_deployment: String,
        /// Plan JSON
        plan: String,
        /// Request parameters JSON
        request_params: String,
        /// Previous manifest YAML, empty on first deploy
        previous_manifest: String,
        /// Previous plan JSON, empty or `null` on first deploy
        previous_plan: String,
    },

    /// Create a binding topic (credentials JSON on stdout)
    CreateBinding {
        binding_id: String,
        /// Hosts by instance group, JSON
        bosh_vms: String,
        /// Current manifest YAML
        manifest: String,
        /// Request parameters JSON
        request_params: String,
    },

    /// Delete a binding topic
    DeleteBinding {
        binding_id: String,
        /// Hosts by instance group, JSON
        bosh_vms: String,
        /// Current manifest YAML
        manifest: String,
        /// Request parameters JSON
        request_params: String,
    },

    /// Print the dashboard URL for an instance (JSON on stdout)
    DashboardUrl {
        instance_id: String,
        /// Plan JSON
        plan: String,
        /// Current manifest YAML
        manifest: String,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line. Safe to log, unlike the
    /// arguments, which carry manifests and caller parameters.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GenerateManifest { .. } => "generate-manifest",
            Self::CreateBinding { .. } => "create-binding",
            Self::DeleteBinding { .. } => "delete-binding",
            Self::DashboardUrl { .. } => "dashboard-url",
        }
    }
}
