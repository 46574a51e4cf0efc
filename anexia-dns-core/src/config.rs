//! Reconciler configuration.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::endpoint::{
    RECORD_TYPE_A, RECORD_TYPE_AAAA, RECORD_TYPE_CNAME, RECORD_TYPE_MX, RECORD_TYPE_NAPTR,
    RECORD_TYPE_NS, RECORD_TYPE_PTR, RECORD_TYPE_SRV, RECORD_TYPE_TXT,
};

/// Record types the planner manages unless configured otherwise.
pub const DEFAULT_SUPPORTED_RECORD_TYPES: &[&str] = &[
    RECORD_TYPE_A,
    RECORD_TYPE_AAAA,
    RECORD_TYPE_CNAME,
    RECORD_TYPE_MX,
    RECORD_TYPE_NAPTR,
    RECORD_TYPE_NS,
    RECORD_TYPE_PTR,
    RECORD_TYPE_SRV,
    RECORD_TYPE_TXT,
];

/// Settings for [`AnexiaProvider`](crate::AnexiaProvider).
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Upper-case record types reported by `records()`.
    supported_record_types: BTreeSet<String>,
    /// Bound on a whole `records()`/`apply_changes()` call.
    pub deadline: Option<Duration>,
    /// Region attached to every record request, if any.
    pub default_region: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            supported_record_types: DEFAULT_SUPPORTED_RECORD_TYPES
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
            deadline: None,
            default_region: None,
        }
    }
}

impl ProviderConfig {
    /// Replace the supported record type set.
    #[must_use]
    pub fn with_supported_record_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.supported_record_types = types
            .into_iter()
            .map(|t| t.as_ref().trim().to_ascii_uppercase())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = Some(region.into());
        self
    }

    pub fn is_supported(&self, record_type: &str) -> bool {
        self.supported_record_types
            .contains(&record_type.to_ascii_uppercase())
    }

    pub fn supported_record_types(&self) -> impl Iterator<Item = &str> {
        self.supported_record_types.iter().map(String::as_str)
    }
}
