//! # anexia-dns-core
//!
//! Reconciles an external-dns style desired-state delta against Anexia
//! CloudDNS zones, and reports the zones' current records as endpoints.
//!
//! - `records()` lists every zone and record and projects the supported
//!   record types into [`Endpoint`]s ([`RecordLister`]).
//! - `apply_changes()` turns a [`Changes`] delta into ordered change set
//!   entries ([`ChangeSetBuilder`]), then resolves each entry's owning zone
//!   and record identifier against a fresh snapshot and dispatches it
//!   ([`Reconciler`]).
//!
//! Both operations are sequential and stateless: every call re-reads the
//! backend. The first failure aborts an apply; nothing is rolled back.
//!
//! ```rust,no_run
//! use anexia_dns_core::{AnexiaProvider, Provider, ProviderConfig};
//!
//! # async fn run() -> anexia_dns_core::SyncResult<()> {
//! let provider = AnexiaProvider::from_env(ProviderConfig::default())?;
//! for endpoint in provider.records().await? {
//!     println!("{} {} {:?}", endpoint.dns_name, endpoint.record_type, endpoint.targets);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod changeset;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod index;
pub mod lister;
pub mod plan;
pub mod provider;
pub mod reconciler;
pub mod resolver;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::{ZoneCatalog, ZoneRecords, ZoneSnapshot};
pub use changeset::{ChangeAction, ChangeSetBuilder, ChangeSetEntry};
pub use config::{DEFAULT_SUPPORTED_RECORD_TYPES, ProviderConfig};
pub use endpoint::{Endpoint, Ttl};
pub use error::{ProviderError, SyncError, SyncResult};
pub use index::RecordIndex;
pub use lister::RecordLister;
pub use plan::Changes;
pub use provider::{AnexiaProvider, Provider};
pub use reconciler::Reconciler;
pub use resolver::{ResolvedName, ZoneIdName};
