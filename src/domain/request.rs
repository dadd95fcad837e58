//! Request parameters forwarded by the broker.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Properties;

/// Key under which the broker nests the user's arbitrary parameters.
const ARBITRARY_PARAMS_KEY: &str = "parameters";

/// Raw request parameters for a provision, update or bind request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParameters(Properties);

impl RequestParameters {
    #[must_use]
    pub fn new(raw: Properties) -> Self {
        Self(raw)
    }

    /// Wrap user-supplied parameters the way the broker nests them.
    #[must_use]
    pub fn from_arbitrary(params: Properties) -> Self {
        let mut raw = Properties::new();
        raw.insert(ARBITRARY_PARAMS_KEY.into(), Value::Object(params));
        Self(raw)
    }

    /// The user-supplied `parameters` object, or an empty map when it is
    /// missing or not an object.
    #[must_use]
    pub fn arbitrary_params(&self) -> Properties {
        match self.0.get(ARBITRARY_PARAMS_KEY) {
            Some(Value::Object(params)) => params.clone(),
            _ => Properties::new(),
        }
    }
}
