//! HTTP client for listing page requests.

use crate::config::Config;
use crate::meli::query;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};
use wreq::Client;

/// Desktop browser User-Agent sent with every request to reduce the chance
/// of bot-blocking.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/120.0";

/// Failure modes of a listing fetch.
///
/// `Status` is recoverable: the caller reports the fixed access-error line
/// and stops the run cleanly. `Transport` covers DNS, connection, and body
/// read failures and propagates as an abnormal termination.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("listing request returned status {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] wreq::Error),
}

/// Trait for listing page fetching - enables mocking for tests.
#[async_trait]
pub trait ListingFetch: Send + Sync {
    /// Fetches the listing page for a search slug and returns the raw HTML.
    async fn listing(&self, slug: &str) -> Result<String, FetchError>;
}

/// Mercado Libre HTTP client with browser-like headers.
pub struct MeliClient {
    client: Client,
    base_url: String,
}

impl MeliClient {
    /// Creates a new client from the configuration.
    ///
    /// No request timeout is configured: an unresponsive server stalls the
    /// run until externally terminated.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder().cookie_store(true).gzip(true).brotli(true).build()?;

        Ok(Self { client, base_url: config.base_url.clone() })
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", BROWSER_USER_AGENT)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "es-MX,es;q=0.9,en;q=0.8")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        // Any non-200 final status ends the run; 4xx, 5xx, and error pages
        // served with a success body are not told apart.
        if status != 200 {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl ListingFetch for MeliClient {
    async fn listing(&self, slug: &str) -> Result<String, FetchError> {
        let url = query::search_url(&self.base_url, slug);

        info!("Fetching listing: {}", url);
        self.get(&url).await
    }
}
