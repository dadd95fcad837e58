//! Binding credentials and dashboard links returned to the broker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Properties;

/// Host addresses of the running deployment, keyed by instance group name.
pub type HostsByRole = BTreeMap<String, Vec<String>>;

/// Credentials handed to the application bound to the service instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub credentials: Properties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardUrl {
    pub dashboard_url: String,
}
