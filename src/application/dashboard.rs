//! Dashboard link for a service instance.

use url::Url;

use crate::domain::{DashboardUrl, Manifest, Plan};
use crate::error::Result;

const DEFAULT_DASHBOARD_BASE: &str = "http://example_dashboard.com/";

/// Builds dashboard links by appending the instance id to a base URL.
#[derive(Debug, Clone)]
pub struct DashboardUrlGenerator {
    base: String,
}

impl Default for DashboardUrlGenerator {
    fn default() -> Self {
        Self {
            base: DEFAULT_DASHBOARD_BASE.to_string(),
        }
    }
}

impl DashboardUrlGenerator {
    /// Generator rooted at `base`. A trailing `/` is added when missing so the
    /// instance id is appended rather than replacing the last path segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self> {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        Url::parse(&base)?;
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Link for `instance_id`, appended verbatim to the base. The plan and
    /// manifest do not influence it.
    #[must_use]
    pub fn dashboard_url(
        &self,
        instance_id: &str,
        _plan: &Plan,
        _manifest: Option<&Manifest>,
    ) -> DashboardUrl {
        DashboardUrl {
            dashboard_url: format!("{}{instance_id}", self.base),
        }
    }
}
