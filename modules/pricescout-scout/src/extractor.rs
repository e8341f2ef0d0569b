use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

use ai_client::util::strip_code_blocks;
use pricescout_common::PricedItem;

use crate::scraper::SearchResult;
use crate::traits::Completer;

const PRICE_EXTRACTION_PROMPT: &str = "From the following text and source URL, \
identify a product name, its numerical price, and the website URL where it is \
listed. Return ONLY a valid JSON object with the keys: 'name' (string), 'price' \
(number or null), and 'url' (string). The 'url' should be the specific link to \
buy or view the product. If the direct product URL isn't found in the text, use \
the provided source URL if it seems relevant. If no price is found, set 'price' \
to null. Do not include any extra text or comments.";

pub struct PriceExtractor {
    completer: Arc<dyn Completer>,
}

impl PriceExtractor {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }

    /// Extract one priced item per search result, preserving input order.
    /// A failed model call or unparseable output skips that result only;
    /// the rest of the batch continues.
    pub async fn extract(&self, results: &[SearchResult]) -> Vec<PricedItem> {
        let mut extracted = Vec::new();

        for result in results {
            let prompt = format!(
                "{PRICE_EXTRACTION_PROMPT}\n\nText: '{}'\n\nSource URL: '{}'",
                result.content, result.url
            );

            let raw = match self.completer.complete(&prompt).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(url = result.url.as_str(), error = %e, "Price extraction call failed, skipping result");
                    continue;
                }
            };

            match parse_priced_item(&raw) {
                Ok(item) => extracted.push(item),
                Err(e) => {
                    warn!(url = result.url.as_str(), error = %e, "Unparseable price extraction output, skipping result");
                }
            }
        }

        extracted
    }
}

/// Parse model output as a single JSON object. A JSON array means the model
/// wrapped its answer: take the first element, or an empty record when the
/// array is empty.
fn parse_priced_item(raw: &str) -> Result<PricedItem> {
    let value: Value =
        serde_json::from_str(strip_code_blocks(raw)).context("model output is not JSON")?;

    let value = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        other => other,
    };

    serde_json::from_value(value).context("model output is not a price record")
}
