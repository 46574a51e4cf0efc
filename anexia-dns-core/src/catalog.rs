//! Zone and record snapshots fetched from the backend.

use anexia_dns_provider::{Record, Zone, ZoneApi};

use crate::error::SyncResult;

/// One zone together with every record it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecords {
    pub zone: Zone,
    pub records: Vec<Record>,
}

/// Full read of the backend at one point in time.
pub type ZoneSnapshot = Vec<ZoneRecords>;

/// Read-only view over a [`ZoneApi`].
///
/// Calls are issued one after another; the first failure is returned as-is
/// and nothing fetched so far is kept.
pub struct ZoneCatalog<'a> {
    api: &'a dyn ZoneApi,
}

impl<'a> ZoneCatalog<'a> {
    pub fn new(api: &'a dyn ZoneApi) -> Self {
        Self { api }
    }

    pub async fn list_zones(&self) -> SyncResult<Vec<Zone>> {
        Ok(self.api.list_zones().await?)
    }

    pub async fn list_records(&self, zone_name: &str) -> SyncResult<Vec<Record>> {
        Ok(self.api.list_records(zone_name).await?)
    }

    /// Fetch every zone, then the records of each zone in turn.
    pub async fn snapshot(&self) -> SyncResult<ZoneSnapshot> {
        let zones = self.list_zones().await?;
        let mut snapshot = Vec::with_capacity(zones.len());
        for zone in zones {
            let records = self.list_records(&zone.name).await?;
            log::debug!("Zone {} holds {} records", zone.name, records.len());
            snapshot.push(ZoneRecords { zone, records });
        }
        Ok(snapshot)
    }
}
