use crate::core::constants::{HTTP_TIMEOUT, USER_AGENT};
use crate::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;

/// Shared async HTTP client with a custom User-Agent so that public Overpass
/// instances don't reject the request. Building the client once avoids the
/// cost of TLS and connection pool setup for every query.
pub(crate) static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .build()
        .expect("failed to build reqwest async client")
});

/// Raw answer from the geospatial provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One-shot HTTP GET used by dynamic sources.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url`. Non-success statuses are returned, not raised; only
    /// connection-level failures are errors.
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// Production transport backed by the shared reqwest client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let resp = HTTP_CLIENT.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse { status, body })
    }
}
