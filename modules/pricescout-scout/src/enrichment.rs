use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{info, warn};

use pricescout_common::{RankedItem, SpecRecord};

use crate::recovery::recover_json_object;
use crate::scraper::PageScraper;
use crate::sources::extract_domain;
use crate::traits::Completer;

const SPEC_EXTRACTION_PROMPT: &str = "From the following page content, extract \
the key specifications of the product like ram, storage, camera, battery, \
processor and prices with different specs. Structure any information about \
different storage and RAM configurations with their corresponding prices as a \
list of JSON objects under the key 'prices'. Each object in the list should \
have keys like 'Storage', 'RAM', and 'Price'. For other specifications, use \
key-value pairs. If a specification value contains a nested structure or \
multiple key-value pairs, format it as a valid JSON string within the main \
JSON value. If no specific product details are found, return an empty JSON \
object.";

pub struct SpecEnricher {
    scraper: Arc<dyn PageScraper>,
    completer: Arc<dyn Completer>,
}

impl SpecEnricher {
    pub fn new(scraper: Arc<dyn PageScraper>, completer: Arc<dyn Completer>) -> Self {
        Self { scraper, completer }
    }

    /// Enrich the first `min(top_n, len)` ranked items with specifications
    /// scraped from their product pages, one page at a time, in rank order.
    /// Every processed item yields a record; fetch and extraction failures
    /// degrade to an empty specification map.
    pub async fn enrich(&self, ranked: &[RankedItem], top_n: usize) -> Vec<SpecRecord> {
        let mut records = Vec::new();

        for item in ranked.iter().take(top_n) {
            let host = extract_domain(&item.url).unwrap_or_else(|| item.url.clone());
            info!(
                host = host.as_str(),
                name = item.name.as_deref().unwrap_or(""),
                "Fetching specifications"
            );

            let specifications = self.specifications_for(&item.url, &host).await;

            records.push(SpecRecord {
                name: item.name.clone(),
                url: item.url.clone(),
                price: item.price,
                specifications,
            });
        }

        records
    }

    async fn specifications_for(&self, url: &str, host: &str) -> Map<String, Value> {
        let content = match self.scraper.scrape(url).await {
            Ok(content) => content,
            Err(e) => {
                warn!(url, error = %e, "Could not retrieve page content for specifications");
                return Map::new();
            }
        };

        let prompt = format!("{SPEC_EXTRACTION_PROMPT}\n\nPage Content: '{content}'");
        match self.completer.complete(&prompt).await {
            Ok(raw) => recover_json_object(&raw).unwrap_or_default(),
            Err(e) => {
                warn!(host, error = %e, "Could not process specifications");
                Map::new()
            }
        }
    }
}
