//! Provider-agnostic endpoint model shared with the planner.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const RECORD_TYPE_A: &str = "A";
pub const RECORD_TYPE_AAAA: &str = "AAAA";
pub const RECORD_TYPE_CNAME: &str = "CNAME";
pub const RECORD_TYPE_MX: &str = "MX";
pub const RECORD_TYPE_NAPTR: &str = "NAPTR";
pub const RECORD_TYPE_NS: &str = "NS";
pub const RECORD_TYPE_PTR: &str = "PTR";
pub const RECORD_TYPE_SRV: &str = "SRV";
pub const RECORD_TYPE_TXT: &str = "TXT";

/// Record TTL that keeps "not configured" apart from an explicit zero.
///
/// Serialized as a bare number, or omitted/`null` when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ttl(Option<u32>);

impl Ttl {
    /// No TTL configured; the zone default applies.
    pub const UNSET: Self = Self(None);

    pub const fn new(seconds: u32) -> Self {
        Self(Some(seconds))
    }

    pub const fn is_configured(self) -> bool {
        self.0.is_some()
    }

    pub const fn seconds(self) -> Option<u32> {
        self.0
    }
}

impl From<Option<u32>> for Ttl {
    fn from(value: Option<u32>) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Ttl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(secs) => write!(f, "{secs}s"),
            None => write!(f, "unset"),
        }
    }
}

/// A desired or observed DNS record in planner terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Fully-qualified name, e.g. `"www.example.test"`.
    pub dns_name: String,
    /// Target values. Only the first one is written to the backend.
    #[serde(default)]
    pub targets: Vec<String>,
    pub record_type: String,
    #[serde(rename = "recordTTL", default, skip_serializing_if = "ttl_unset")]
    pub record_ttl: Ttl,
    /// Planner bookkeeping; never sent to the backend.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Endpoint {
    /// Endpoint with a single target and no TTL.
    pub fn new(
        dns_name: impl Into<String>,
        record_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            dns_name: dns_name.into(),
            targets: vec![target.into()],
            record_type: record_type.into(),
            record_ttl: Ttl::UNSET,
            labels: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Ttl) -> Self {
        self.record_ttl = ttl;
        self
    }

    /// First target, the only one the backend stores.
    pub fn primary_target(&self) -> Option<&str> {
        self.targets.first().map(String::as_str)
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn ttl_unset(ttl: &Ttl) -> bool {
    !ttl.is_configured()
}

/// `true` when the type stores a hostname that must be fully qualified.
pub fn is_alias_type(record_type: &str) -> bool {
    record_type.eq_ignore_ascii_case(RECORD_TYPE_CNAME)
}

/// Append a trailing dot unless one is already present.
pub fn ensure_trailing_dot(hostname: &str) -> String {
    if hostname.ends_with('.') {
        hostname.to_string()
    } else {
        format!("{hostname}.")
    }
}
