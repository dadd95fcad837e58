//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: where the topic executables live and how logs are emitted.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
pub mod config;
