//! Connection settings for the perk backend.

use std::time::Duration;

/// Default backend address used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Path of the "all public perks" listing endpoint
pub const DEFAULT_PERKS_PATH: &str = "/api/perks/all";

/// Where and how to fetch the perk collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub perks_path: String,
    /// Request timeout. `None` waits for the backend indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_perks_path(mut self, path: impl Into<String>) -> Self {
        self.perks_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the listing endpoint, tolerating a trailing slash on the
    /// base and a missing leading slash on the path.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.perks_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            perks_path: DEFAULT_PERKS_PATH.to_string(),
            timeout: None,
        }
    }
}
