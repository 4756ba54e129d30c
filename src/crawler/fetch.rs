use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while fetching a single URL
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS, DNS)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("http status {0}")]
    Status(u16),
}

/// Source of raw page bodies.
///
/// The crawler is generic over this seam so tests can feed it canned pages
/// without a network.
pub trait Fetcher {
    /// Fetch the body of a URL
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetcher backed by a pooled reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with a per-request timeout
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("docdex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
