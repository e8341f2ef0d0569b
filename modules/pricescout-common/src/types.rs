use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the LLM returns for one search result. Every field is optional:
/// the model is allowed to come back with any subset, and an item with no
/// price still survives extraction (ranking drops it later).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A priced item that passed ranking. The filter invariant lives in the
/// type: `price` is a finite number and `url` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub name: Option<String>,
    pub price: f64,
    pub url: String,
}

/// Final pipeline output: one top-ranked offer plus whatever structured
/// specifications could be recovered from its product page. Created once
/// by enrichment and never mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct SpecRecord {
    pub name: Option<String>,
    pub url: String,
    pub price: f64,
    /// Attribute name → scalar, nested map, or (under the reserved key
    /// "prices") a list of flat configuration-variant maps.
    pub specifications: Map<String, Value>,
}
