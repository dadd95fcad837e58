//! CLI module graph.
//!
//! The broker calls the adapter as a subprocess, one callback per invocation.
//! Arguments arrive as JSON or YAML strings; results leave on stdout.

pub mod command;
pub mod decode;
pub mod handler;

pub use command::{Cli, Commands};
pub use handler::ServiceAdapter;
