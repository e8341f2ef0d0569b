use serde::{Deserialize, Serialize};

/// How much work Tavily puts into a query. Advanced costs more credits
/// but returns fuller content snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub api_key: &'a str,
    pub query: &'a str,
    pub search_depth: SearchDepth,
    pub exclude_domains: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Vec<TavilySearchResult>,
}

/// One organic result. Tavily may omit any field, so everything defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TavilySearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
}
