//! Typed client for the Inventaris REST backend
//!
//! Every domain operation maps to exactly one HTTP call. Responses are normalized here:
//! `204 No Content` becomes an empty success without touching the body, any other 2xx is
//! decoded as JSON, and non-2xx statuses become [`AppError::Http`] carrying the status and
//! the server's `{"error": ...}` message when there is one.

pub mod dashboard;
pub mod distributions;
pub mod items;
pub mod master;
pub mod opds;
pub mod query;
pub mod transport;

use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
};

pub use query::{QueryParams, QueryValue};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport, API_BASE_PATH};

/// Gateway for all backend calls
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Client over HTTP, targeting `<base_url>/api/v1`
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request and decode the response; `Ok(None)` means the server sent no content
    pub async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<Option<R>> {
        let method = request.method.clone();
        let path = request.path();
        tracing::debug!("{} {}", method, path);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("{} {} failed: {}", method, path, e);
                return Err(e);
            }
        };

        let decoded = decode_response(response);
        if let Err(ref e) = decoded {
            tracing::warn!("{} {} -> {}", method, path, e);
        }
        decoded
    }

    /// Like [`execute`](Self::execute) but a body is required
    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> AppResult<R> {
        let path = request.path();
        self.execute(request)
            .await?
            .ok_or_else(|| AppError::Decode(format!("empty response from {}", path)))
    }

    async fn get<R: DeserializeOwned>(&self, segments: &[&str], query: Option<&QueryParams>) -> AppResult<R> {
        let mut request = ApiRequest::new(Method::GET, segments);
        if let Some(query) = query {
            request.query = query.to_pairs();
        }
        self.fetch(request).await
    }

    /// POST/PUT with a validated JSON body; returns the server's representation
    async fn send_json<B, R>(&self, method: Method, segments: &[&str], body: &B) -> AppResult<R>
    where
        B: Serialize + Validate,
        R: DeserializeOwned,
    {
        body.validate()?;
        let mut request = ApiRequest::new(method, segments);
        request.body = Some(
            serde_json::to_value(body).map_err(|e| AppError::Validation(e.to_string()))?,
        );
        self.fetch(request).await
    }

    async fn delete(&self, segments: &[&str]) -> AppResult<()> {
        self.execute::<serde_json::Value>(ApiRequest::new(Method::DELETE, segments))
            .await?;
        Ok(())
    }
}

/// Turn a raw response into the client's result contract
pub fn decode_response<R: DeserializeOwned>(response: RawResponse) -> AppResult<Option<R>> {
    if response.status == 204 {
        return Ok(None);
    }

    if !(200..300).contains(&response.status) {
        return Err(AppError::from_http(response.status, &response.body));
    }

    if response.body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }

    serde_json::from_slice(&response.body)
        .map(Some)
        .map_err(|e| AppError::Decode(e.to_string()))
}
