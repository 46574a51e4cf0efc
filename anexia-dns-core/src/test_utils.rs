//! 测试辅助模块
//!
//! In-memory [`ZoneApi`] double with failure injection and a journal of the
//! mutations it received.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use anexia_dns_provider::{ProviderError, Record, RecordRequest, Zone, ZoneApi};
use async_trait::async_trait;
use tokio::sync::RwLock;

const PROVIDER: &str = "mock";

pub fn record(id: &str, name: &str, record_type: &str, data: &str, ttl: Option<u32>) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        record_type: record_type.to_string(),
        data: data.to_string(),
        ttl,
    }
}

/// Mutation received by [`MockZoneApi`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Create {
        zone: String,
        request: RecordRequest,
    },
    Update {
        zone: String,
        record_id: String,
        request: RecordRequest,
    },
    Delete {
        zone: String,
        record_id: String,
    },
}

#[derive(Default)]
struct Failures {
    list_zones: bool,
    list_records: HashSet<String>,
    /// Record names whose creation fails.
    create: HashSet<String>,
}

// ===== MockZoneApi =====

pub struct MockZoneApi {
    zones: RwLock<Vec<Zone>>,
    records: RwLock<HashMap<String, Vec<Record>>>,
    mutations: RwLock<Vec<ApiCall>>,
    list_records_calls: RwLock<Vec<String>>,
    failures: RwLock<Failures>,
    /// 每次调用前的人为延迟（用于测试 deadline）
    delay: RwLock<Option<Duration>>,
}

impl MockZoneApi {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            records: RwLock::new(HashMap::new()),
            mutations: RwLock::new(Vec::new()),
            list_records_calls: RwLock::new(Vec::new()),
            failures: RwLock::new(Failures::default()),
            delay: RwLock::new(None),
        }
    }

    pub async fn add_zone(&self, name: &str) {
        self.zones.write().await.push(Zone::new(name, name));
        self.records
            .write()
            .await
            .entry(name.to_string())
            .or_default();
    }

    pub async fn add_record(&self, zone: &str, record: Record) {
        self.records
            .write()
            .await
            .entry(zone.to_string())
            .or_default()
            .push(record);
    }

    pub async fn fail_list_zones(&self) {
        self.failures.write().await.list_zones = true;
    }

    pub async fn fail_list_records(&self, zone: &str) {
        self.failures
            .write()
            .await
            .list_records
            .insert(zone.to_string());
    }

    pub async fn fail_create(&self, record_name: &str) {
        self.failures
            .write()
            .await
            .create
            .insert(record_name.to_string());
    }

    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub async fn mutations(&self) -> Vec<ApiCall> {
        self.mutations.read().await.clone()
    }

    pub async fn list_records_calls(&self) -> Vec<String> {
        self.list_records_calls.read().await.clone()
    }

    pub async fn has_record(&self, zone: &str, name: &str) -> bool {
        self.records
            .read()
            .await
            .get(zone)
            .is_some_and(|records| records.iter().any(|r| r.name == name))
    }

    pub async fn find_record(&self, zone: &str, name: &str) -> Option<Record> {
        self.records
            .read()
            .await
            .get(zone)?
            .iter()
            .find(|r| r.name == name)
            .cloned()
    }

    async fn pause(&self) {
        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn network_error(detail: &str) -> ProviderError {
        ProviderError::NetworkError {
            provider: PROVIDER.to_string(),
            detail: detail.to_string(),
        }
    }

    fn record_not_found(zone: &str, record_id: &str) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: PROVIDER.to_string(),
            zone: zone.to_string(),
            record_id: record_id.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl ZoneApi for MockZoneApi {
    async fn list_zones(&self) -> anexia_dns_provider::Result<Vec<Zone>> {
        self.pause().await;
        if self.failures.read().await.list_zones {
            return Err(Self::network_error("list zones failed"));
        }
        Ok(self.zones.read().await.clone())
    }

    async fn list_records(&self, zone_name: &str) -> anexia_dns_provider::Result<Vec<Record>> {
        self.pause().await;
        self.list_records_calls
            .write()
            .await
            .push(zone_name.to_string());
        if self.failures.read().await.list_records.contains(zone_name) {
            return Err(Self::network_error("list records failed"));
        }
        self.records
            .read()
            .await
            .get(zone_name)
            .cloned()
            .ok_or_else(|| ProviderError::ZoneNotFound {
                provider: PROVIDER.to_string(),
                zone: zone_name.to_string(),
                raw_message: None,
            })
    }

    async fn create_record(
        &self,
        zone_name: &str,
        request: &RecordRequest,
    ) -> anexia_dns_provider::Result<()> {
        self.pause().await;
        self.mutations.write().await.push(ApiCall::Create {
            zone: zone_name.to_string(),
            request: request.clone(),
        });
        if self.failures.read().await.create.contains(&request.name) {
            return Err(Self::network_error("create failed"));
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.add_record(
            zone_name,
            record(&id, &request.name, &request.record_type, &request.rdata, request.ttl),
        )
        .await;
        Ok(())
    }

    async fn update_record(
        &self,
        zone_name: &str,
        record_id: &str,
        request: &RecordRequest,
    ) -> anexia_dns_provider::Result<()> {
        self.pause().await;
        self.mutations.write().await.push(ApiCall::Update {
            zone: zone_name.to_string(),
            record_id: record_id.to_string(),
            request: request.clone(),
        });
        let mut records = self.records.write().await;
        let existing = records
            .get_mut(zone_name)
            .and_then(|records| records.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| Self::record_not_found(zone_name, record_id))?;
        *existing = record(
            record_id,
            &request.name,
            &request.record_type,
            &request.rdata,
            request.ttl,
        );
        Ok(())
    }

    async fn delete_record(&self, zone_name: &str, record_id: &str) -> anexia_dns_provider::Result<()> {
        self.pause().await;
        self.mutations.write().await.push(ApiCall::Delete {
            zone: zone_name.to_string(),
            record_id: record_id.to_string(),
        });
        let mut records = self.records.write().await;
        let zone_records = records
            .get_mut(zone_name)
            .ok_or_else(|| Self::record_not_found(zone_name, record_id))?;
        let before = zone_records.len();
        zone_records.retain(|r| r.id != record_id);
        if zone_records.len() == before {
            return Err(Self::record_not_found(zone_name, record_id));
        }
        Ok(())
    }
}
