//! HTTP transport used to reach the API.
//!
//! The client only needs "POST these bytes with these headers, give me back
//! the status and the body". [`HttpTransport`] is that seam; [`ReqwestTransport`]
//! is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::ClientError;

/// Configuration for the underlying HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for a single request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("deepseek/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// A response that made it back from the server, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 4xx or 5xx
    pub fn is_error_status(&self) -> bool {
        (400..600).contains(&self.status)
    }
}

/// A failure below the HTTP response level: DNS, connect, TLS, timeout, or a
/// body that could not be read.
#[derive(Debug)]
pub struct TransportError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Request {
            message: format!("Request failed: {err}"),
            source: err.source,
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a POST request and return the raw response.
    ///
    /// Error statuses are returned as `Ok`; only failures that prevent a
    /// response from being received are `Err`.
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post(url, headers, body).await
    }
}

/// [`HttpTransport`] backed by `reqwest`. No retries.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ClientError::Configuration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[tracing::instrument(name = "http_post", skip(self, headers, body), fields(url = %url), err)]
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<HttpResponse, TransportError> {
        let mut req_builder = self.client.post(url).body(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(TransportError::new)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(TransportError::new)?;

        debug!(status, bytes = body.len(), "HTTP response received");
        Ok(HttpResponse { status, body })
    }
}
