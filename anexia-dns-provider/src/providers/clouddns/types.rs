//! CloudDNS API 类型定义

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Record, Zone};

/// `GET /zone.json` 响应
#[derive(Debug, Deserialize)]
pub struct ZoneListResponse {
    #[serde(default)]
    pub results: Vec<CloudDnsZone>,
}

/// CloudDNS zone definition (only the fields this crate reads)
#[derive(Debug, Deserialize)]
pub struct CloudDnsZone {
    pub name: String,
}

impl From<CloudDnsZone> for Zone {
    /// CloudDNS addresses zones by name, so the name doubles as identifier.
    fn from(zone: CloudDnsZone) -> Self {
        Zone::new(zone.name.clone(), zone.name)
    }
}

/// CloudDNS record (response)
#[derive(Debug, Deserialize)]
pub struct CloudDnsRecord {
    pub identifier: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub rdata: String,
    #[serde(default)]
    pub ttl: Option<u32>,
}

impl From<CloudDnsRecord> for Record {
    fn from(record: CloudDnsRecord) -> Self {
        Record {
            id: record.identifier,
            name: record.name,
            record_type: record.record_type,
            data: record.rdata,
            ttl: record.ttl,
        }
    }
}

/// Pull a human readable message and, for validation failures, the offending
/// field out of an error body.
///
/// Understands `{"error": {"message": .., "validation": {field: [..]}}}`,
/// `{"message": ..}` and `{"detail": ..}`; anything else is returned verbatim.
pub fn extract_error(body: &str) -> (Option<String>, String) {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return (None, body.trim().to_string());
    };

    let error = value.get("error").unwrap_or(&value);
    let message = ["message", "detail"]
        .iter()
        .find_map(|key| error.get(*key).and_then(Value::as_str))
        .map_or_else(|| body.trim().to_string(), str::to_string);
    let field = error
        .get("validation")
        .and_then(Value::as_object)
        .and_then(|fields| fields.keys().next().cloned());

    (field, message)
}
