use serde::{Deserialize, Serialize};

// ============ Zone Types ============

/// A DNS zone managed by the backend.
///
/// Read-only for consumers of this crate; the backend owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider-assigned zone identifier. Opaque to callers.
    pub id: String,
    /// Zone name, a DNS domain suffix such as `"example.test"`.
    pub name: String,
}

impl Zone {
    /// Create a zone from its identifier and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============ Record Types ============

/// A single resource record stored inside a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier, unique within its zone.
    pub id: String,
    /// Zone-relative name without a trailing dot (e.g. `"www"`).
    pub name: String,
    /// Record type as reported by the backend (`"A"`, `"CNAME"`, `"SOA"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data (target value).
    pub data: String,
    /// TTL in seconds. `None` means the zone default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Payload for creating or updating a record.
///
/// The same shape is used for both operations; the record identifier for
/// updates travels separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Record name. Zone-relative by the time it reaches the backend.
    pub name: String,
    /// Record type (`"A"`, `"CNAME"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record data.
    pub rdata: String,
    /// Optional region tag understood by CloudDNS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// TTL in seconds. Left out entirely when not configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_request_omits_unset_ttl() {
        let req = RecordRequest {
            name: "www".to_string(),
            record_type: "A".to_string(),
            rdata: "127.0.0.1".to_string(),
            region: None,
            ttl: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "A");
        assert!(json.get("ttl").is_none());
        assert!(json.get("region").is_none());
    }

    #[test]
    fn record_request_keeps_configured_ttl() {
        let req = RecordRequest {
            name: "www".to_string(),
            record_type: "A".to_string(),
            rdata: "127.0.0.1".to_string(),
            region: Some("default".to_string()),
            ttl: Some(300),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["ttl"], 300);
        assert_eq!(json["region"], "default");
    }
}
