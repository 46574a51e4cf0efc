//! Anexia CloudDNS backend

mod api;
mod error;
mod http;
mod types;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{ProviderError, Result};

pub(crate) use types::{CloudDnsRecord, ZoneListResponse};

/// CloudDNS v1 API prefix, relative to the configured base URL.
pub(crate) const API_PREFIX: &str = "/api/clouddns/v1";

/// Anexia CloudDNS API client implementing [`ZoneApi`](crate::ZoneApi).
#[derive(Debug)]
pub struct CloudDnsClient {
    pub(crate) client: Client,
    pub(crate) config: ClientConfig,
}

impl CloudDnsClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: crate::PROVIDER_NAME.to_string(),
                detail: format!("failed to build HTTP client: {e}"),
            })?;

        log::debug!("CloudDNS client created: {config:?}");
        Ok(Self { client, config })
    }

    /// Create a client from `ANEXIA_TOKEN` and friends.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
