//! CloudDNS client configuration.

use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::mask_secret;

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://engine.anexia-it.com";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Read requests are retried this many times by default.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Environment variable holding the API token.
pub const ENV_TOKEN: &str = "ANEXIA_TOKEN";
/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "ANEXIA_BASE_URL";
/// Environment variable overriding the read retry count.
pub const ENV_MAX_RETRIES: &str = "ANEXIA_MAX_RETRIES";

/// Connection settings for [`CloudDnsClient`](crate::CloudDnsClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// API token sent as `Authorization: Token <token>`.
    pub token: String,
    /// Base URL without trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Retries for idempotent reads. Mutations are never retried.
    pub max_retries: u32,
}

impl ClientConfig {
    /// Configuration with default endpoint, timeouts and retries.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Build from `ANEXIA_TOKEN`, `ANEXIA_BASE_URL` and `ANEXIA_MAX_RETRIES`.
    ///
    /// Fails with [`ProviderError::InvalidCredentials`] when no token is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(ENV_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidCredentials {
                provider: crate::PROVIDER_NAME.to_string(),
                raw_message: Some(format!("{ENV_TOKEN} is not set")),
            })?;

        let mut config = Self::new(token.trim());
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|u| !u.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            config.max_retries =
                raw.trim()
                    .parse()
                    .map_err(|_| ProviderError::InvalidParameter {
                        provider: crate::PROVIDER_NAME.to_string(),
                        param: ENV_MAX_RETRIES.to_string(),
                        detail: format!("expected a non-negative integer, got '{raw}'"),
                    })?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &mask_secret(&self.token))
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
