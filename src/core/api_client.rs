use crate::config::API_URL_ENV;
use crate::domain::model::{Institution, ProgramDto};
use crate::domain::ports::{ConfigProvider, ProgramCatalog};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HashMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// JSON client for the programs API. Every call goes to the network.
pub struct ApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn base_url(&self) -> Result<&str> {
        let url = self.config.api_url().ok_or_else(|| {
            ServiceError::config(format!("{} is not set; no API base URL configured", API_URL_ENV))
        })?;
        validate_url("api.base_url", url)?;
        Ok(url.trim_end_matches('/'))
    }

    fn build_headers(&self, extra: &HashMap<String, String>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // caller-supplied headers win over configured defaults
        for (name, value) in self.config.default_headers().iter().chain(extra.iter()) {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ServiceError::InvalidConfigValue {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ServiceError::InvalidConfigValue {
                    field: format!("headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        Ok(headers)
    }

    /// Requests `endpoint` relative to the configured base URL and decodes the
    /// JSON body as `T`. The shape is trusted; serde is the only check.
    pub async fn fetch_resource<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: Option<RequestOptions>,
    ) -> Result<T> {
        let base_url = self.base_url()?;
        let options = options.unwrap_or_default();
        let headers = self.build_headers(&options.headers)?;
        let url = format!("{}{}", base_url, endpoint);

        tracing::debug!("Making API request: {} {}", options.method, url);
        let mut request = self.client.request(options.method, &url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ServiceError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl<C: ConfigProvider> ProgramCatalog for ApiClient<C> {
    async fn fetch_programs(&self) -> Result<Vec<ProgramDto>> {
        self.fetch_resource("/programas", None).await
    }

    async fn fetch_program(&self, id: &str) -> Result<ProgramDto> {
        let endpoint = format!("/programas/{}", urlencoding::encode(id));
        self.fetch_resource(&endpoint, None).await
    }

    async fn fetch_institutions(&self) -> Result<Vec<Institution>> {
        self.fetch_resource("/instituicoes", None).await
    }

    async fn fetch_institution(&self, id: &str) -> Result<Institution> {
        let endpoint = format!("/instituicoes/{}", urlencoding::encode(id));
        self.fetch_resource(&endpoint, None).await
    }
}
