//! Outbound adapters (driven side).

pub mod mapper;
pub mod process;

pub use mapper::ReleaseJobMapper;
pub use process::ProcessRunner;
