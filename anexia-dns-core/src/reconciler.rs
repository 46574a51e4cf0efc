//! Applies change set entries against the zone backend.

use anexia_dns_provider::ZoneApi;

use crate::catalog::ZoneCatalog;
use crate::changeset::{ChangeAction, ChangeSetEntry};
use crate::endpoint::{ensure_trailing_dot, is_alias_type};
use crate::error::{SyncError, SyncResult};
use crate::index::RecordIndex;
use crate::resolver::ZoneIdName;

/// Dispatches change set entries one at a time.
///
/// The first failure aborts the run and is returned; entries already applied
/// stay applied.
pub struct Reconciler<'a> {
    api: &'a dyn ZoneApi,
}

impl<'a> Reconciler<'a> {
    pub fn new(api: &'a dyn ZoneApi) -> Self {
        Self { api }
    }

    /// Snapshot the backend, index it, then apply `entries` in order.
    pub async fn apply(&self, entries: Vec<ChangeSetEntry>) -> SyncResult<()> {
        let snapshot = ZoneCatalog::new(self.api).snapshot().await?;
        let index = RecordIndex::build(&snapshot);
        let zones = index.zones();
        log::debug!(
            "Applying {} changes across {} zones",
            entries.len(),
            index.zone_count()
        );

        for entry in entries {
            self.apply_entry(&index, &zones, entry).await?;
        }
        Ok(())
    }

    async fn apply_entry(
        &self,
        index: &RecordIndex,
        zones: &ZoneIdName,
        mut entry: ChangeSetEntry,
    ) -> SyncResult<()> {
        let resolved = zones.resolve(&entry.record.name)?;
        let zone_name = resolved.zone_name.as_str();
        entry.record.name = resolved.relative_name.clone();

        if is_alias_type(&entry.record.record_type) {
            entry.record.rdata = ensure_trailing_dot(&entry.record.rdata);
        }

        match entry.action {
            ChangeAction::Create => {
                self.api.create_record(zone_name, &entry.record).await?;
                log::debug!(
                    "Record created successfully: {} {} in {zone_name}",
                    entry.record.name,
                    entry.record.record_type
                );
            }
            ChangeAction::Update => {
                let record_id = lookup_record_id(index, zone_name, &entry.record.name)?;
                self.api
                    .update_record(zone_name, record_id, &entry.record)
                    .await?;
                log::debug!("Record updated successfully: {record_id} in {zone_name}");
            }
            ChangeAction::Delete => {
                let record_id = lookup_record_id(index, zone_name, &entry.record.name)?;
                self.api.delete_record(zone_name, record_id).await?;
                log::debug!("Record deleted successfully: {record_id} in {zone_name}");
            }
        }
        Ok(())
    }
}

/// Updates and deletes must hit a record present in the snapshot.
fn lookup_record_id<'i>(
    index: &'i RecordIndex,
    zone_name: &str,
    record_name: &str,
) -> SyncResult<&'i str> {
    index
        .record_id(zone_name, record_name)
        .ok_or_else(|| SyncError::RecordNotFound {
            zone: zone_name.to_string(),
            name: record_name.to_string(),
        })
}
