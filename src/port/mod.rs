//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where the adapter touches things it does not own:
//! the executables that manage topics and the function that turns plan
//! instance groups into deployment topology.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │         Application          │
//!  broker ──CLI──▶│  ManifestGenerator   Binder  │
//!                 └──────┬───────────────┬───────┘
//!                        │               │
//!                        ▼               ▼
//!             ┌─────────────────────┐ ┌───────────────┐
//!             │ InstanceGroupMapper │ │ CommandRunner │
//!             └─────────────────────┘ └───────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`CommandRunner`] - Runs the topic creator and deleter executables
//! - [`InstanceGroupMapper`] - Maps plan instance groups onto releases and jobs

pub mod outbound;

pub use outbound::command::{CommandOutput, CommandRunner, CommandStatus};
pub use outbound::mapper::{InstanceGroupMapper, RoleJobs};
