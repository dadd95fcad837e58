//! Application services (use cases).
//!
//! These services implement the broker callbacks on top of the domain types
//! and the outbound ports.

pub mod binding;
pub mod dashboard;
pub mod manifest;

pub use binding::Binder;
pub use dashboard::DashboardUrlGenerator;
pub use manifest::ManifestGenerator;
