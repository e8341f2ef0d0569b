//! Fixture implementations for integration testing.
//!
//! Each collaborator trait gets a deterministic stand-in: canned search
//! results, scripted model output, and canned pages keyed by URL. No
//! network, no API keys.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use tavily_client::SearchDepth;

use crate::scraper::{PageScraper, SearchResult, WebSearcher};
use crate::traits::Completer;

// --- FixtureSearcher ---

pub struct FixtureSearcher {
    pub results: Vec<SearchResult>,
}

impl FixtureSearcher {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }
}

#[async_trait]
impl WebSearcher for FixtureSearcher {
    async fn search(
        &self,
        _query: &str,
        _depth: SearchDepth,
        _exclude_domains: &[String],
    ) -> Result<Vec<SearchResult>> {
        Ok(self.results.clone())
    }
}

// --- ScriptedCompleter ---

/// Hands out canned responses in order, one per `complete` call. Running
/// past the script is a test bug and fails loudly.
pub struct ScriptedCompleter {
    responses: Mutex<VecDeque<Result<String>>>,
}

impl ScriptedCompleter {
    pub fn new(responses: Vec<Result<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl Completer for ScriptedCompleter {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.responses
            .lock()
            .expect("scripted responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted response left")))
    }
}

// --- FixtureScraper ---

/// Serves canned page text by URL; unknown URLs fail like a dead fetch.
#[derive(Default)]
pub struct FixtureScraper {
    pages: HashMap<String, String>,
}

impl FixtureScraper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, text: &str) -> Self {
        self.pages.insert(url.to_string(), text.to_string());
        self
    }
}

#[async_trait]
impl PageScraper for FixtureScraper {
    async fn scrape(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("no fixture page for {url}"))
    }
}
