use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Record, RecordRequest, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码（字符串形式）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone name the request addressed.
    pub zone: Option<String>,
    /// Record identifier, set for update/delete requests.
    pub record_id: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            record_id: None,
        }
    }

    pub fn record(zone: &str, record_id: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            record_id: Some(record_id.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone backend capability.
///
/// The reconciler only ever talks to the backend through this trait, so a
/// test double holding zones in memory can stand in for the HTTP client.
/// Every call is a plain future: dropping it abandons the request.
#[async_trait]
pub trait ZoneApi: Send + Sync {
    /// List every zone visible to the credentials.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// List every record of a zone, addressed by zone name.
    async fn list_records(&self, zone_name: &str) -> Result<Vec<Record>>;

    /// Create a record in the zone.
    async fn create_record(&self, zone_name: &str, request: &RecordRequest) -> Result<()>;

    /// Replace the record identified by `record_id`.
    async fn update_record(
        &self,
        zone_name: &str,
        record_id: &str,
        request: &RecordRequest,
    ) -> Result<()>;

    /// Delete the record identified by `record_id`.
    async fn delete_record(&self, zone_name: &str, record_id: &str) -> Result<()>;
}
