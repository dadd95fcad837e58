//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - The command-line surface the broker invokes.
//! - [`outbound`] - Process execution and the default instance group mapper.

pub mod inbound;
pub mod outbound;
