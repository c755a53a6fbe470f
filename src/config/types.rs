use serde::{Deserialize, Serialize};

use super::defaults::{
    clamp_connect_timeout, clamp_read_timeout, clamp_response_bytes, default_base_url,
    default_connect_timeout_secs, default_max_response_bytes,
};
use super::errors::ConfigError;
use crate::service::Hyperparameters;

/// Settings persisted in `config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub network: NetworkSettings,
    /// Initial values for the training form.
    #[serde(default)]
    pub training_defaults: Hyperparameters,
}

/// Where the remote training/prediction service lives.
///
/// Config keys: `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Scheme and host (optionally a path prefix); `/train` and `/predict` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Transport limits for service calls.
///
/// Config keys: `connect_timeout_secs`, `read_timeout_secs`, `max_response_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Unset means a request may stay pending indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout_secs: Option<u64>,
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: None,
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

impl AppConfig {
    /// Clamp numeric settings and tidy the base URL.
    pub(crate) fn normalized(mut self) -> Self {
        self.network.connect_timeout_secs = clamp_connect_timeout(self.network.connect_timeout_secs);
        self.network.read_timeout_secs = clamp_read_timeout(self.network.read_timeout_secs);
        self.network.max_response_bytes = clamp_response_bytes(self.network.max_response_bytes);
        let trimmed = self.service.base_url.trim().trim_end_matches('/');
        self.service.base_url = trimmed.to_string();
        self
    }

    /// Reject base URLs that cannot address an HTTP service.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let raw = &self.service.base_url;
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
            reason,
        };
        let parsed = url::Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme {other:?}"))),
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query strings and fragments are not allowed".to_string()));
        }
        Ok(())
    }
}
