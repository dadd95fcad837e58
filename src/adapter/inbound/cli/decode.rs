//! Argument decoding.
//!
//! Failures name the argument so the broker's caller can tell which input
//! was rejected.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decode a required JSON argument.
pub fn json<T: DeserializeOwned>(argument: &'static str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| Error::Decode {
        argument,
        reason: err.to_string(),
    })
}

/// Decode a JSON argument that may be empty; empty means `T::default()`.
pub fn json_or_default<T: DeserializeOwned + Default>(argument: &'static str, raw: &str) -> Result<T> {
    if raw.trim().is_empty() {
        return Ok(T::default());
    }
    json(argument, raw)
}

/// Decode a JSON argument that may be absent, written as empty or `null`.
pub fn optional_json<T: DeserializeOwned>(argument: &'static str, raw: &str) -> Result<Option<T>> {
    if is_absent(raw) {
        return Ok(None);
    }
    json(argument, raw).map(Some)
}

/// Decode a YAML argument that may be absent, written as empty or `null`.
pub fn optional_yaml<T: DeserializeOwned>(argument: &'static str, raw: &str) -> Result<Option<T>> {
    if is_absent(raw) {
        return Ok(None);
    }
    serde_yaml::from_str(raw)
        .map(Some)
        .map_err(|err| Error::Decode {
            argument,
            reason: err.to_string(),
        })
}

fn is_absent(raw: &str) -> bool {
    matches!(raw.trim(), "" | "null")
}
