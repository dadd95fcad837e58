//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for plans, deployments, host maps and request
//!   parameters.
//! - [`mapper`] - `StubMapper`, a scripted
//!   [`InstanceGroupMapper`](crate::port::outbound::mapper::InstanceGroupMapper).
//! - [`runner`] - `RecordingRunner`, a scripted
//!   [`CommandRunner`](crate::port::outbound::command::CommandRunner).

pub mod domain;
pub mod mapper;
pub mod runner;
