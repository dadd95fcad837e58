//! Kafka service adapter - manifest generation and topic bindings for an
//! on-demand service broker.
//!
//! The broker drives the adapter through a fixed set of callbacks, each a
//! separate process invocation:
//!
//! - **generate-manifest** - Turn a plan into a deployment manifest, checking
//!   that the plan is complete and never shrinks an existing deployment
//! - **create-binding** / **delete-binding** - Create or delete the Kafka
//!   topic behind a binding through external topic executables
//! - **dashboard-url** - Link to the instance dashboard
//!
//! # Architecture
//!
//! - [`domain`] - Plans, deployments, manifests and their invariants
//! - [`port`] - Traits for the instance group mapper and command execution
//! - [`application`] - Manifest generation, binding lifecycle, dashboard links
//! - [`adapter`] - CLI front end, child-process runner, release-lookup mapper
//! - [`infrastructure`] - Settings and logging
//! - [`error`] - Error types and the operator/caller error split
//!
//! # Example
//!
//! ```no_run
//! use kafka_service_adapter::adapter::inbound::cli::{Commands, ServiceAdapter};
//! use kafka_service_adapter::infrastructure::config::Settings;
//!
//! let settings = Settings::load(None).unwrap();
//! let adapter = ServiceAdapter::from_settings(&settings);
//! let output = adapter.handle(&Commands::DashboardUrl {
//!     instance_id: "instance-id".into(),
//!     plan: "{}".into(),
//!     manifest: String::new(),
//! });
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
