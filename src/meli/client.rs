//! HTTP client for the Mercado Libre API using wreq for TLS fingerprint emulation.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::RngExt;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

const DEFAULT_BASE_URL: &str = "https://api.mercadolibre.com";

/// Trait for listing search and category fetching - enables mocking for tests.
#[async_trait]
pub trait ListingSearch: Send + Sync {
    /// Probes a category+region search to learn the total match count.
    ///
    /// Carries no pagination parameters; only the paging metadata of the
    /// response is of interest to callers.
    async fn probe(&self, category_id: &str, region_id: &str) -> Result<String>;

    /// Fetches one page of search results at the given offset.
    async fn search_page(
        &self,
        category_id: &str,
        region_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<String>;

    /// Fetches the category tree for the configured site.
    async fn categories(&self) -> Result<String>;
}

/// Mercado Libre HTTP client with browser impersonation and polite pacing.
pub struct MeliClient {
    client: Client,
    site: String,
    access_token: Option<String>,
    delay_ms: u64,
    delay_jitter_ms: u64,
    base_url: Option<String>,
}

impl MeliClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            site: config.site.clone(),
            access_token: config.access_token.clone(),
            delay_ms: config.delay_ms,
            delay_jitter_ms: config.delay_jitter_ms,
            base_url,
        })
    }

    /// Returns the base URL (custom for testing, or the public API host).
    fn base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Appends the access token when one is configured.
    fn with_token(&self, url: String) -> String {
        match &self.access_token {
            Some(token) => format!("{}&access_token={}", url, urlencoding::encode(token)),
            None => url,
        }
    }

    /// Performs a GET request with pacing and emulation.
    async fn get(&self, url: &str) -> Result<String> {
        // Add human-like delay with jitter
        self.delay().await;

        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "application/json")
            .header("Accept-Language", "es-AR,es;q=0.9,en;q=0.8")
            .header("Accept-Encoding", "gzip, deflate, br")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 429 {
            warn!("Rate limited (429). Consider increasing delay or supplying an access token.");
            anyhow::bail!("Rate limited by Mercado Libre. Try increasing --delay.");
        }

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    /// Adds a random delay to pace requests.
    async fn delay(&self) {
        if self.delay_ms == 0 {
            return;
        }

        let jitter = if self.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.delay_jitter_ms)
        } else {
            0
        };

        let total_delay = self.delay_ms + jitter;
        debug!("Delaying {}ms", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl ListingSearch for MeliClient {
    async fn probe(&self, category_id: &str, region_id: &str) -> Result<String> {
        let url = self.with_token(format!(
            "{}/sites/{}/search?category={}&state={}",
            self.base_url(),
            self.site,
            urlencoding::encode(category_id),
            urlencoding::encode(region_id),
        ));

        info!("Probing category {} in region {}", category_id, region_id);
        self.get(&url).await
    }

    async fn search_page(
        &self,
        category_id: &str,
        region_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<String> {
        let url = self.with_token(format!(
            "{}/sites/{}/search?category={}&state={}&limit={}&offset={}",
            self.base_url(),
            self.site,
            urlencoding::encode(category_id),
            urlencoding::encode(region_id),
            limit,
            offset,
        ));

        info!("Fetching category {} in region {} at offset {}", category_id, region_id, offset);
        self.get(&url).await
    }

    async fn categories(&self) -> Result<String> {
        let url = format!("{}/sites/{}/categories", self.base_url(), self.site);

        info!("Fetching category tree for site {}", self.site);
        self.get(&url).await
    }
}
