//! CloudDNS error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudDnsClient;

/// CloudDNS reports failures through HTTP status codes; the body only adds a
/// message and, for validation errors, the offending field.
impl ProviderErrorMapper for CloudDnsClient {
    fn provider_name(&self) -> &'static str {
        crate::PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match raw.code.as_deref() {
            Some("401") => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },

            Some("403") => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },

            // 404 on a record URL means the record is gone, otherwise the zone
            Some("404") => match context.record_id {
                Some(record_id) => ProviderError::RecordNotFound {
                    provider,
                    zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                    record_id,
                    raw_message: Some(raw.message),
                },
                None => ProviderError::ZoneNotFound {
                    provider,
                    zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                },
            },

            Some("400" | "422") => {
                let (field, message) = super::types::extract_error(&raw.message);
                ProviderError::InvalidParameter {
                    provider,
                    param: field.unwrap_or_else(|| "general".to_string()),
                    detail: message,
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}
