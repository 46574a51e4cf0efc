//! Owning-zone lookup for fully-qualified names.

use std::collections::BTreeMap;

use crate::error::{SyncError, SyncResult};

/// Zone identifier → zone name table with longest-suffix lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneIdName(BTreeMap<String, String>);

/// A fully-qualified name split against its owning zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub zone_id: String,
    pub zone_name: String,
    /// Name with the zone suffix removed, e.g. `"www"`. Empty at the apex.
    pub relative_name: String,
}

impl ZoneIdName {
    pub fn add(&mut self, zone_id: impl Into<String>, zone_name: impl Into<String>) {
        self.0.insert(zone_id.into(), zone_name.into());
    }

    /// Zone whose name is the longest label-aligned suffix of `hostname`.
    ///
    /// Matching ignores case and a trailing dot on either side.
    pub fn find_zone(&self, hostname: &str) -> Option<(&str, &str)> {
        let host = normalize(hostname);
        self.0
            .iter()
            .filter(|(_, zone_name)| is_within_zone(&host, &normalize(zone_name)))
            .max_by_key(|(_, zone_name)| normalize(zone_name).len())
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Resolve `hostname` or fail with [`SyncError::ZoneNotFound`].
    pub fn resolve(&self, hostname: &str) -> SyncResult<ResolvedName> {
        let (zone_id, zone_name) =
            self.find_zone(hostname)
                .ok_or_else(|| SyncError::ZoneNotFound {
                    dns_name: hostname.to_string(),
                })?;
        Ok(ResolvedName {
            zone_id: zone_id.to_string(),
            zone_name: zone_name.to_string(),
            relative_name: relative_name(hostname, zone_name),
        })
    }
}

fn normalize(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

fn is_within_zone(host: &str, zone: &str) -> bool {
    if zone.is_empty() {
        return false;
    }
    host == zone
        || host
            .strip_suffix(zone)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Strip the zone suffix from `hostname`, then any `.` or space at either end.
///
/// `hostname` must lie within `zone_name`; otherwise it is only trimmed.
pub fn relative_name(hostname: &str, zone_name: &str) -> String {
    let host = hostname.trim().trim_end_matches('.');
    let zone_len = normalize(zone_name).len();
    let stripped = if is_within_zone(&host.to_ascii_lowercase(), &normalize(zone_name)) {
        &host[..host.len() - zone_len]
    } else {
        host
    };
    stripped.trim_matches(|c| c == '.' || c == ' ').to_string()
}
