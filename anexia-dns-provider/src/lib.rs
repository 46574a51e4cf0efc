//! # anexia-dns-provider
//!
//! Client library for the [Anexia CloudDNS](https://engine.anexia-it.com/docs/en/module/clouddns/)
//! API and the [`ZoneApi`] capability trait the `anexia-dns-core` reconciler consumes.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use anexia_dns_provider::{ClientConfig, CloudDnsClient, ZoneApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CloudDnsClient::new(ClientConfig::new("your-token"))?;
//!
//!     for zone in client.list_zones().await? {
//!         for record in client.list_records(&zone.name).await? {
//!             println!("{}.{} {} {}", record.name, zone.name, record.record_type, record.data);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! Read requests (`list_zones`, `list_records`) retry transient failures
//! (`NetworkError`, `Timeout`, `RateLimited`) with exponential backoff;
//! mutations are sent exactly once.

mod config;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

/// Provider identifier carried by every [`ProviderError`].
pub const PROVIDER_NAME: &str = "clouddns";

pub use config::{ClientConfig, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_TOKEN};
pub use error::{ProviderError, Result};
pub use providers::CloudDnsClient;
pub use traits::ZoneApi;
pub use types::{Record, RecordRequest, Zone};
pub use utils::log_sanitizer;
