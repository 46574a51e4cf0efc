//! Name → identifier lookup tables built from a zone snapshot.

use std::collections::HashMap;

use crate::catalog::ZoneSnapshot;
use crate::resolver::ZoneIdName;

/// Zone and record identifiers keyed by name.
///
/// Record names are zone-relative, exactly as the backend reports them, and
/// match without regard to ASCII case like zone names do. All record types
/// are indexed. When a zone holds several records with the
/// same name, the one listed last wins: one active record per name.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    zone_ids: HashMap<String, String>,
    record_ids: HashMap<String, HashMap<String, String>>,
}

impl RecordIndex {
    pub fn build(snapshot: &ZoneSnapshot) -> Self {
        let mut index = Self::default();
        for entry in snapshot {
            let zone_name = entry.zone.name.clone();
            index
                .zone_ids
                .insert(zone_name.clone(), entry.zone.id.clone());

            let records = index
                .record_ids
                .entry(zone_name.to_ascii_lowercase())
                .or_default();
            for record in &entry.records {
                let key = record.name.to_ascii_lowercase();
                if let Some(previous) = records.insert(key, record.id.clone()) {
                    log::debug!(
                        "Record name '{}' in zone '{}' is not unique, {} replaces {previous}",
                        record.name,
                        entry.zone.name,
                        record.id
                    );
                }
            }
        }
        index
    }

    /// Identifier of `record_name` (zone-relative) inside `zone_name`.
    pub fn record_id(&self, zone_name: &str, record_name: &str) -> Option<&str> {
        self.record_ids
            .get(&zone_name.to_ascii_lowercase())?
            .get(&record_name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Resolver over the indexed zones.
    pub fn zones(&self) -> ZoneIdName {
        let mut zones = ZoneIdName::default();
        for (name, id) in &self.zone_ids {
            zones.add(id.clone(), name.clone());
        }
        zones
    }

    pub fn zone_count(&self) -> usize {
        self.zone_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use anexia_dns_provider::Zone;

    use super::*;
    use crate::catalog::ZoneRecords;
    use crate::test_utils::record;

    fn snapshot() -> ZoneSnapshot {
        vec![
            ZoneRecords {
                zone: Zone::new("zid-1", "z"),
                records: vec![
                    record("U", "x", "A", "1.1.1.1", None),
                    record("S", "@", "SOA", "ns1.z. hostmaster.z. 1 2 3 4 5", None),
                ],
            },
            ZoneRecords {
                zone: Zone::new("zid-2", "other.test"),
                records: vec![],
            },
        ]
    }

    #[test]
    fn maps_zone_and_record_ids() {
        let index = RecordIndex::build(&snapshot());
        assert_eq!(index.zones().find_zone("x.z"), Some(("zid-1", "z")));
        assert_eq!(index.record_id("z", "x"), Some("U"));
        assert_eq!(index.zone_count(), 2);
    }

    #[test]
    fn indexes_unsupported_types_too() {
        let index = RecordIndex::build(&snapshot());
        assert_eq!(index.record_id("z", "@"), Some("S"));
    }

    #[test]
    fn misses_are_none() {
        let index = RecordIndex::build(&snapshot());
        assert_eq!(index.record_id("z", "missing"), None);
        assert_eq!(index.record_id("nope", "x"), None);
        // keys are zone-relative, never fully qualified
        assert_eq!(index.record_id("z", "x.z"), None);
    }

    #[test]
    fn lookups_ignore_case() {
        let index = RecordIndex::build(&snapshot());
        assert_eq!(index.record_id("z", "X"), Some("U"));
        assert_eq!(index.record_id("Z", "x"), Some("U"));
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let snapshot = vec![ZoneRecords {
            zone: Zone::new("z", "z"),
            records: vec![
                record("first", "txt", "TXT", "\"a\"", None),
                record("second", "txt", "TXT", "\"b\"", None),
            ],
        }];
        let index = RecordIndex::build(&snapshot);
        assert_eq!(index.record_id("z", "txt"), Some("second"));
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = RecordIndex::build(&snapshot());
        let b = RecordIndex::build(&snapshot());
        assert_eq!(a.record_ids, b.record_ids);
        assert_eq!(a.zone_ids, b.zone_ids);
    }
}
