//! Plan and property validation errors.
//!
//! These errors describe why a plan cannot be turned into a manifest. Their
//! `Display` text is the operator-facing detail; what the broker's caller sees
//! is decided by [`crate::error::AdapterError`].
//!
//! # Examples
//!
//! ```
//! use kafka_service_adapter::domain::error::DomainError;
//!
//! let err = DomainError::WrongNetworkCount {
//!     group: "kafka_server".into(),
//!     got: 2,
//! };
//! assert_eq!(err.to_string(), "expected 1 network for kafka_server, got 2");
//! ```

use thiserror::Error;

/// Errors raised when a plan or its properties violate an invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required instance groups are absent from the plan.
    #[error(
        "Invalid instance group configuration: expected to find: '{}' in list: '{}'",
        missing.join(", "),
        present.join(", ")
    )]
    MissingGroups {
        /// Missing group names, in required-group order.
        missing: Vec<String>,
        /// Every group name the plan does declare.
        present: Vec<String>,
    },

    /// A required role would lose instances across a plan migration.
    #[error("cannot migrate to a smaller plan: {role} would shrink from {previous} to {current} instances")]
    PlanShrunk {
        role: String,
        previous: u32,
        current: u32,
    },

    /// The primary broker group must be attached to exactly one network.
    #[error("expected 1 network for {group}, got {got}")]
    WrongNetworkCount { group: String, got: usize },

    /// The instance group mapper did not produce a group the manifest needs.
    #[error("mapped instance groups do not include {group}")]
    MissingMappedGroup { group: String },

    /// A plan, manifest or request property has the wrong type.
    #[error("invalid value for property {property}: {reason}")]
    InvalidProperty {
        property: &'static str,
        reason: String,
    },

    /// A caller-supplied arbitrary parameter has the wrong type.
    #[error("invalid value for parameter {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    /// The `logging` plan property is present but malformed.
    #[error("invalid logging property: {reason}")]
    InvalidLogging { reason: String },

    /// Logging is configured but no release can supply the forwarder job.
    #[error("logging is configured but no release provides the {job} job")]
    TelemetryReleaseMissing { job: &'static str },
}

impl DomainError {
    /// True for errors the operator fixes by correcting plan configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            Self::PlanShrunk { .. }
                | Self::MissingMappedGroup { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// True for errors caused by the caller's own request.
    #[must_use]
    pub fn is_caller_input(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
