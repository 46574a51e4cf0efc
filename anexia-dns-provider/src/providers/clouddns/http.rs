//! CloudDNS HTTP 请求方法

use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{API_PREFIX, CloudDnsClient};

impl CloudDnsClient {
    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.config.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(AUTHORIZATION, format!("Token {}", self.config.token))
    }

    /// 非 2xx 响应映射为统一错误
    fn check_status(&self, response: HttpResponse, context: ErrorContext) -> Result<HttpResponse> {
        if response.is_success() {
            return Ok(response);
        }
        let error = self.map_error(
            RawApiError::with_code(response.status.to_string(), response.body),
            context,
        );
        if error.is_expected() {
            log::warn!("API 错误: {error}");
        } else {
            log::error!("API 错误: {error}");
        }
        Err(error)
    }

    /// 执行 GET 请求（幂等，允许重试）
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.authorized(self.client.get(&url));
        let response = HttpUtils::send_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            self.config.max_retries,
        )
        .await?;
        let response = self.check_status(response, context)?;
        HttpUtils::parse_json(&response.body, self.provider_name())
    }

    /// 执行 POST 请求（不重试）
    pub(crate) async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let url = self.url(path);
        let request = self.client.post(&url);
        self.send_json(request, "POST", &url, body, context).await
    }

    /// 执行 PUT 请求（不重试）
    pub(crate) async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let url = self.url(path);
        let request = self.client.put(&url);
        self.send_json(request, "PUT", &url, body, context).await
    }

    /// 执行 DELETE 请求（不重试）
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = self.url(path);
        let request = self.authorized(self.client.delete(&url));
        let response = HttpUtils::send(request, self.provider_name(), "DELETE", &url).await?;
        self.check_status(response, context).map(|_| ())
    }

    async fn send_json<B: Serialize>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let body_json =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;
        log::debug!("Request Body: {body_json}");

        let request = self
            .authorized(request)
            .header(CONTENT_TYPE, "application/json")
            .body(body_json);
        let response = HttpUtils::send(request, self.provider_name(), method, url).await?;
        self.check_status(response, context).map(|_| ())
    }
}
