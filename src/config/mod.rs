pub mod file;

use crate::utils::error::{DirectLinkError, Result};
use crate::utils::validation::{validate_range, validate_url, validate_version_date, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://directlink.cloud.ibm.com/v1";

/// Default API version date sent as the `version` query parameter.
pub const DEFAULT_VERSION: &str = "2024-10-30";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service endpoint, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version date (`YYYY-MM-DD`), appended to every request.
    #[serde(default = "default_version")]
    pub version: String,

    /// Per-request timeout. `None` leaves reqwest's default in place.
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
            timeout_seconds: None,
        }
    }

    /// Read configuration from `DIRECTLINK_URL`, `DIRECTLINK_VERSION` and
    /// `DIRECTLINK_TIMEOUT`, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("DIRECTLINK_URL").unwrap_or_else(|_| default_base_url());
        let version = std::env::var("DIRECTLINK_VERSION").unwrap_or_else(|_| default_version());
        let timeout_seconds = match std::env::var("DIRECTLINK_TIMEOUT") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| DirectLinkError::ConfigError {
                message: format!("DIRECTLINK_TIMEOUT is not a number: {}", e),
            })?),
            Err(_) => None,
        };

        let config = Self {
            base_url,
            version,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_version_date("version", &self.version)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 600)?;
        }
        Ok(())
    }
}
