//! Client for the prediction service the host forwards to.

use std::time::Duration;

use axum::{
    body::Bytes,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::schemas::ErrorResponse;

/// Error types for forwarding requests upstream
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// No answer from the prediction service
    #[error("Prediction service unreachable: {0}")]
    Unreachable(String),

    /// The prediction service did not answer in time
    #[error("Prediction service timed out")]
    Timeout,
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ProxyError::Client(_) => "CLIENT_ERROR",
            ProxyError::Unreachable(_) => "UPSTREAM_UNREACHABLE",
            ProxyError::Timeout => "UPSTREAM_TIMEOUT",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            warn!(?error, "Upstream request timed out");
            ProxyError::Timeout
        } else {
            error!(?error, "Upstream request failed");
            ProxyError::Unreachable(error.to_string())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Upstream answer, relayed to the browser as-is.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let mut response = (status, self.body).into_response();

        if let Some(value) = self
            .content_type
            .as_deref()
            .and_then(|ct| HeaderValue::from_str(ct).ok())
        {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }

        response
    }
}

#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to `path`.
    pub async fn post_json(&self, path: &str, body: Bytes) -> Result<UpstreamResponse, ProxyError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST upstream: {}", url);

        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.execute(request).await
    }

    /// GET `path`, keeping the original query string untouched.
    pub async fn get(&self, path: &str, query: Option<&str>) -> Result<UpstreamResponse, ProxyError> {
        let url = match query {
            Some(query) if !query.is_empty() => format!("{}{}?{}", self.base_url, path, query),
            _ => format!("{}{}", self.base_url, path),
        };
        debug!("GET upstream: {}", url);

        self.execute(self.client.get(&url)).await
    }

    /// Whether the service answers at all, whatever the status.
    pub async fn is_reachable(&self) -> bool {
        self.client.get(&self.base_url).send().await.is_ok()
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<UpstreamResponse, ProxyError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "Upstream responded");
        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
