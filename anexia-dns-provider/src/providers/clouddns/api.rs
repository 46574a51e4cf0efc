//! CloudDNS ZoneApi trait 实现

use async_trait::async_trait;
use urlencoding::encode;

use crate::error::Result;
use crate::traits::{ErrorContext, ZoneApi};
use crate::types::{Record, RecordRequest, Zone};

use super::{CloudDnsClient, CloudDnsRecord, ZoneListResponse};

fn records_path(zone_name: &str) -> String {
    format!("/zone.json/{}/records", encode(zone_name))
}

fn record_path(zone_name: &str, record_id: &str) -> String {
    format!(
        "/zone.json/{}/records/{}",
        encode(zone_name),
        encode(record_id)
    )
}

#[async_trait]
impl ZoneApi for CloudDnsClient {
    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let response: ZoneListResponse = self.get("/zone.json", ErrorContext::default()).await?;
        Ok(response.results.into_iter().map(Zone::from).collect())
    }

    async fn list_records(&self, zone_name: &str) -> Result<Vec<Record>> {
        let records: Vec<CloudDnsRecord> = self
            .get(&records_path(zone_name), ErrorContext::zone(zone_name))
            .await?;
        Ok(records.into_iter().map(Record::from).collect())
    }

    async fn create_record(&self, zone_name: &str, request: &RecordRequest) -> Result<()> {
        self.post(
            &records_path(zone_name),
            request,
            ErrorContext::zone(zone_name),
        )
        .await
    }

    async fn update_record(
        &self,
        zone_name: &str,
        record_id: &str,
        request: &RecordRequest,
    ) -> Result<()> {
        self.put(
            &record_path(zone_name, record_id),
            request,
            ErrorContext::record(zone_name, record_id),
        )
        .await
    }

    async fn delete_record(&self, zone_name: &str, record_id: &str) -> Result<()> {
        self.delete(
            &record_path(zone_name, record_id),
            ErrorContext::record(zone_name, record_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_percent_encoded() {
        assert_eq!(records_path("anexia.test"), "/zone.json/anexia.test/records");
        assert_eq!(
            record_path("a b.test", "x/y"),
            "/zone.json/a%20b.test/records/x%2Fy"
        );
    }
}
