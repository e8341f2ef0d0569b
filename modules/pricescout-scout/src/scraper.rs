use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use ai_client::util::truncate_to_char_boundary;
use tavily_client::{SearchDepth, TavilyClient};

/// Max plain text kept per scraped page, to bound model input size.
const MAX_PAGE_TEXT_BYTES: usize = 5000;

/// Product pages that stall longer than this are treated as failed fetches.
const PAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// --- PageScraper trait ---

#[async_trait]
pub trait PageScraper: Send + Sync {
    /// Fetch a product page and return its visible text, truncated.
    async fn scrape(&self, url: &str) -> Result<String>;
}

// --- Plain HTTP scraper ---

pub struct HttpScraper {
    client: reqwest::Client,
}

impl HttpScraper {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(PAGE_FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for HttpScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageScraper for HttpScraper {
    async fn scrape(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Page request failed")?
            .error_for_status()
            .context("Page returned error status")?;

        let html = resp.text().await.context("Failed to read page body")?;
        let text = html2text::from_read(html.as_bytes(), 80).unwrap_or_default();
        Ok(truncate_to_char_boundary(&text, MAX_PAGE_TEXT_BYTES).to_string())
    }
}

// --- WebSearcher trait ---

/// One raw search hit: the provider's content snippet plus its source URL.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub content: String,
    pub url: String,
}

#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(
        &self,
        query: &str,
        depth: SearchDepth,
        exclude_domains: &[String],
    ) -> Result<Vec<SearchResult>>;
}

// --- Tavily searcher ---

pub struct TavilySearcher {
    client: TavilyClient,
}

impl TavilySearcher {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: TavilyClient::new(api_key),
        }
    }
}

#[async_trait]
impl WebSearcher for TavilySearcher {
    async fn search(
        &self,
        query: &str,
        depth: SearchDepth,
        exclude_domains: &[String],
    ) -> Result<Vec<SearchResult>> {
        info!(query, "Tavily search");

        let results = self.client.search(query, depth, exclude_domains).await?;

        info!(query, count = results.len(), "Tavily search complete");
        Ok(results
            .into_iter()
            .map(|r| SearchResult {
                content: r.content,
                url: r.url,
            })
            .collect())
    }
}
