//! Shared HTTP plumbing for the CloudDNS client
//!
//! Sending, logging, status triage and JSON decoding live here so that the
//! per-endpoint methods only build requests and interpret payloads.
//!
//! Only requests explicitly marked as retryable go through
//! [`HttpUtils::send_with_retry`]; mutations are sent exactly once.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Upper bound for a server-suggested `Retry-After` wait.
const MAX_RETRY_AFTER_SECS: u64 = 30;
/// Upper bound for the exponential backoff delay.
const MAX_BACKOFF_MS: u64 = 10_000;
/// First backoff step.
const BASE_BACKOFF_MS: u64 = 100;

/// Raw HTTP response: status code plus body text.
#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Send a request once and read the whole body.
    ///
    /// Transport failures become `Timeout`/`NetworkError`, HTTP 429 becomes
    /// `RateLimited` and 502-504 become `NetworkError`. Every other status is
    /// handed back to the caller for endpoint-specific mapping.
    pub async fn send(
        request_builder: RequestBuilder,
        provider_name: &str,
        method: &str,
        url: &str,
    ) -> Result<HttpResponse, ProviderError> {
        log::debug!("[{provider_name}] {method} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        // Retry-After 必须在读取 body 之前取出
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&body)
        );

        match status {
            429 => {
                log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
                Err(ProviderError::RateLimited {
                    provider: provider_name.to_string(),
                    retry_after,
                    raw_message: Some(body),
                })
            }
            502..=504 => {
                log::warn!("[{provider_name}] Server error (HTTP {status})");
                Err(ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
                })
            }
            _ => Ok(HttpResponse { status, body }),
        }
    }

    /// Send a request, retrying transient failures up to `max_retries` times.
    ///
    /// Falls back to a single attempt when the request cannot be cloned.
    pub async fn send_with_retry(
        request_builder: RequestBuilder,
        provider_name: &str,
        method: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<HttpResponse, ProviderError> {
        let mut attempt = 0;
        loop {
            let Some(request) = request_builder.try_clone() else {
                log::warn!("[{provider_name}] Cannot clone request, sending without retry");
                return Self::send(request_builder, provider_name, method, url).await;
            };

            match Self::send(request, provider_name, method, url).await {
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    attempt += 1;
                    log::warn!(
                        "[{provider_name}] {method} {url} failed (attempt {attempt}/{max_retries}), retrying in {:.1}s: {e}",
                        delay.as_secs_f32()
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    /// Decode a JSON body, logging a truncated copy of it on failure.
    pub fn parse_json<T>(body: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!("[{provider_name}] Raw response: {}", truncate_for_log(body));
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// `Retry-After` wins when present (capped), otherwise exponential backoff.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    match error {
        ProviderError::RateLimited {
            retry_after: Some(secs),
            ..
        } => Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)),
        _ => backoff_delay(attempt),
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let shift = attempt.min(20);
    let delay_ms = BASE_BACKOFF_MS
        .saturating_mul(1_u64 << shift)
        .min(MAX_BACKOFF_MS);
    Duration::from_millis(delay_ms)
}
