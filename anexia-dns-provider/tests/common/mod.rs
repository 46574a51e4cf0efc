//! 共享测试工具和辅助函数

#![allow(dead_code)]

use anexia_dns_provider::{ClientConfig, CloudDnsClient};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const ZONE_LIST_PATH: &str = "/api/clouddns/v1/zone.json";
pub const TEST_TOKEN: &str = "myTestToken";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

pub fn records_path(zone: &str) -> String {
    format!("/api/clouddns/v1/zone.json/{zone}/records")
}

pub fn record_path(zone: &str, id: &str) -> String {
    format!("/api/clouddns/v1/zone.json/{zone}/records/{id}")
}

/// Client pointed at the mock server, with `max_retries` read retries.
pub fn client_for(server: &MockServer, max_retries: u32) -> CloudDnsClient {
    let config = ClientConfig::new(TEST_TOKEN)
        .with_base_url(server.uri())
        .with_max_retries(max_retries);
    CloudDnsClient::new(config).expect("client should build")
}

pub fn zone_list(names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "is_master": true }))
        .collect();
    json!({ "results": results })
}

/// `test1` (TTL 300) and `test2` (no TTL), both A records on 127.0.0.1.
pub fn sample_records(test1_id: &str, test2_id: &str) -> Value {
    json!([
        {
            "identifier": test1_id,
            "immutable": false,
            "name": "test1",
            "rdata": "127.0.0.1",
            "region": "default",
            "ttl": 300,
            "type": "A"
        },
        {
            "identifier": test2_id,
            "immutable": false,
            "name": "test2",
            "rdata": "127.0.0.1",
            "region": "default",
            "ttl": null,
            "type": "A"
        }
    ])
}
