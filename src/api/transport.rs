//! HTTP transport behind the API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
};

/// Fixed base path of every endpoint
pub const API_BASE_PATH: &str = "/api/v1";

/// Request as built by the client, independent of the HTTP library
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path segments below the base path, unencoded (`["distributions", "DST/01"]`)
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Path for logs, e.g. `/items/42`
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Status and raw body of a response that did arrive
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes requests. A transport only fails with [`AppError::Network`];
/// every response that arrives, whatever its status, is returned as a [`RawResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> AppResult<RawResponse>;
}

/// `reqwest` implementation
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let base = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            API_BASE_PATH
        );
        let base_url = Url::parse(&base)
            .map_err(|e| AppError::Validation(format!("Invalid API base URL {}: {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!("Invalid API base URL {}", base)));
        }

        Ok(Self { client, base_url })
    }

    /// Join the encoded path segments onto the base URL
    pub fn url_for(&self, request: &ApiRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(request.segments.iter());
        }
        url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> AppResult<RawResponse> {
        let url = self.url_for(&request);

        let mut builder = self.client.request(request.method.clone(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();

        // The status line has arrived; a broken body must not hide it
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if (200..300).contains(&status) => {
                return Err(AppError::Decode(format!("failed to read response body: {}", e)));
            }
            Err(e) => {
                tracing::debug!("Failed to read body of HTTP {} response: {}", status, e);
                return Err(AppError::from_http(status, &[]));
            }
        };

        Ok(RawResponse { status, body })
    }
}
