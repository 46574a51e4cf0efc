//! Unified error type definition

use std::time::Duration;

use thiserror::Error;

// Re-export library error type
pub use anexia_dns_provider::ProviderError;

/// Reconciliation error type
#[derive(Error, Debug)]
pub enum SyncError {
    /// Backend or transport failure, propagated as-is
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// No known zone is a suffix of the name
    #[error("No zone found for DNS name '{dns_name}'")]
    ZoneNotFound { dns_name: String },

    /// Update/delete references a record absent from the zone snapshot
    #[error("Record '{name}' not found in zone '{zone}'")]
    RecordNotFound { zone: String, name: String },

    /// Endpoint reached the change set builder without any target
    #[error("Endpoint '{dns_name}' has no targets")]
    EmptyTargets { dns_name: String },

    /// The configured deadline expired before the operation finished
    #[error("Operation did not complete within {0:?}")]
    DeadlineExceeded(Duration),
}

impl SyncError {
    /// Errors caused by the input plan or zone state rather than by the backend.
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::ZoneNotFound { .. } | Self::RecordNotFound { .. } | Self::EmptyTargets { .. }
        )
    }
}

/// Reconciliation result type alias
pub type SyncResult<T> = std::result::Result<T, SyncError>;
