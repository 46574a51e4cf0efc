//! Observed-state read path.

use anexia_dns_provider::{Record, Zone};

use crate::catalog::ZoneCatalog;
use crate::config::ProviderConfig;
use crate::endpoint::{Endpoint, Ttl};
use crate::error::SyncResult;

/// Projects backend records into planner endpoints.
pub struct RecordLister<'a> {
    catalog: ZoneCatalog<'a>,
    config: &'a ProviderConfig,
}

impl<'a> RecordLister<'a> {
    pub fn new(catalog: ZoneCatalog<'a>, config: &'a ProviderConfig) -> Self {
        Self { catalog, config }
    }

    /// One endpoint per record of a supported type, zone by zone in backend order.
    ///
    /// Records of other types (SOA, CAA, ...) are skipped silently.
    pub async fn list(&self) -> SyncResult<Vec<Endpoint>> {
        let mut endpoints = Vec::new();
        for zone_records in self.catalog.snapshot().await? {
            let zone = &zone_records.zone;
            let before = endpoints.len();
            endpoints.extend(
                zone_records
                    .records
                    .iter()
                    .filter(|r| self.config.is_supported(&r.record_type))
                    .map(|r| to_endpoint(zone, r)),
            );
            log::debug!(
                "Zone {}: {} of {} records reported",
                zone.name,
                endpoints.len() - before,
                zone_records.records.len()
            );
        }
        Ok(endpoints)
    }
}

fn to_endpoint(zone: &Zone, record: &Record) -> Endpoint {
    Endpoint::new(
        qualified_name(&record.name, &zone.name),
        record.record_type.clone(),
        record.data.clone(),
    )
    .with_ttl(Ttl::from(record.ttl))
}

/// `www` + `example.test` → `www.example.test`.
///
/// The backend's name is kept verbatim, so an apex record `@` lists as
/// `@.example.test` and resolves back to the same `@` key when applied.
fn qualified_name(record_name: &str, zone_name: &str) -> String {
    format!("{record_name}.{zone_name}")
}
