pub mod error;
pub mod types;

pub use error::{Result, TavilyError};
pub use types::{SearchDepth, TavilySearchResult};

use types::{SearchRequest, SearchResponse};

const BASE_URL: &str = "https://api.tavily.com";

pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TavilyClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Run a search query. Zero results is a valid response, not an error.
    pub async fn search(
        &self,
        query: &str,
        depth: SearchDepth,
        exclude_domains: &[String],
    ) -> Result<Vec<TavilySearchResult>> {
        let request = SearchRequest {
            api_key: &self.api_key,
            query,
            search_depth: depth,
            exclude_domains,
        };

        let url = format!("{}/search", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: SearchResponse = resp.json().await?;
        tracing::debug!(query, count = data.results.len(), "Tavily search complete");
        Ok(data.results)
    }
}
