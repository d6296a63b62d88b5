use crate::{ConfigError, ConfigErrorResult, DEFAULT_REMOTE_URL};

use serde::Deserialize;

/// Remote customer feed. Read-only: the application never writes back.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// GraphQL endpoint serving the customer list
    pub url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_REMOTE_URL),
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::remote(format!(
                "remote.url must be an http(s) URL, got {}",
                self.url
            )));
        }

        Ok(())
    }
}
