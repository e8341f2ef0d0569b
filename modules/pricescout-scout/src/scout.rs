use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use ai_client::Groq;
use pricescout_common::Config;
use tavily_client::SearchDepth;

use crate::enrichment::SpecEnricher;
use crate::extractor::PriceExtractor;
use crate::rank::rank;
use crate::report::ScoutReport;
use crate::scraper::{HttpScraper, PageScraper, TavilySearcher, WebSearcher};
use crate::sources::{self, extract_domain};
use crate::traits::Completer;

/// Runs the pipeline: search, extract prices, rank, enrich the cheapest
/// offers with specifications. State flows forward by value through the
/// stages; nothing is shared between items in a batch.
pub struct Scout {
    searcher: Arc<dyn WebSearcher>,
    scraper: Arc<dyn PageScraper>,
    completer: Arc<dyn Completer>,
    locale: String,
    exclude_domains: Vec<String>,
}

impl Scout {
    /// Wire up the production collaborators from config.
    pub fn new(config: &Config) -> Self {
        Self::with_collaborators(
            Arc::new(TavilySearcher::new(&config.tavily_api_key)),
            Arc::new(HttpScraper::new()),
            Arc::new(Groq::new(&config.groq_api_key, &config.groq_model)),
            &config.search_locale,
        )
    }

    /// Inject collaborators directly. Tests drive this with fixtures.
    pub fn with_collaborators(
        searcher: Arc<dyn WebSearcher>,
        scraper: Arc<dyn PageScraper>,
        completer: Arc<dyn Completer>,
        locale: &str,
    ) -> Self {
        Self {
            searcher,
            scraper,
            completer,
            locale: locale.to_string(),
            exclude_domains: sources::default_excluded_domains(),
        }
    }

    pub fn with_exclude_domains(mut self, domains: Vec<String>) -> Self {
        self.exclude_domains = domains;
        self
    }

    /// Run the full pipeline for one product. `top_n` caps how many ranked
    /// offers get enriched with specifications.
    pub async fn run(&self, product_name: &str, top_n: usize) -> Result<ScoutReport> {
        let query = format!("{product_name} buy {} best price", self.locale);
        info!(query = query.as_str(), "Searching for offers");

        let results = self
            .searcher
            .search(&query, SearchDepth::Advanced, &self.exclude_domains)
            .await?;

        let searched_sites: BTreeSet<String> = results
            .iter()
            .filter_map(|r| extract_domain(&r.url))
            .collect();

        let extractor = PriceExtractor::new(self.completer.clone());
        let priced = extractor.extract(&results).await;

        let ranked = rank(priced);
        info!(offers = ranked.len(), "Ranked priced offers");

        let enricher = SpecEnricher::new(self.scraper.clone(), self.completer.clone());
        let records = enricher.enrich(&ranked, top_n).await;

        Ok(ScoutReport {
            records,
            searched_sites,
        })
    }
}
