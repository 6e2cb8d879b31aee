use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deployment configuration for the review service endpoint. Not part of the
/// ingestion contract itself; the session only ever sees a transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Optional whole-request timeout. Off by default: a hung response is
    /// left to the caller, matching the service's streaming semantics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_endpoint() -> String {
    "/api/review".to_string()
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            timeout_seconds: None,
        }
    }
}

impl ReviewConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("REVIEW_API_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(endpoint) = std::env::var("REVIEW_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("REVIEW_TIMEOUT_SECONDS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.timeout_seconds = Some(seconds);
            }
        }

        config
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }
}
