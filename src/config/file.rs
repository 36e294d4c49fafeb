use crate::config::ClientConfig;
use crate::utils::error::{DirectLinkError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Credentials-file style configuration:
///
/// ```toml
/// [directlink]
/// base_url = "https://directlink.cloud.ibm.com/v1"
/// version = "2024-10-30"
/// timeout_seconds = 60
/// token = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFile {
    pub directlink: Profile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub client: ClientConfig,

    /// Optional static bearer token.
    pub token: Option<String>,
}

impl ProfileFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DirectLinkError::ConfigError {
                message: format!("Config file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let profile: ProfileFile =
            toml::from_str(&content).map_err(|e| DirectLinkError::ConfigError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        profile.directlink.client.validate()?;
        Ok(profile)
    }
}
