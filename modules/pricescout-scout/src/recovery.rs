//! Tolerant JSON recovery from free-form model output.
//!
//! Models asked for "only a JSON object" still wrap it in prose, single-quote
//! nested values, or stuff structured data into string fields. Recovery pulls
//! out whatever object is there and normalizes it, degrading field by field
//! instead of failing whole.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// A digit followed by digits, commas, or periods: the first price-like
/// token in e.g. "Rs 45,000". Commas are thousands separators, periods
/// decimal points; tokens are kept verbatim minus trailing separators.
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d[\d,.]+").unwrap());

/// Recover a JSON object from raw model text.
///
/// Takes the span from the first `{` to the last `}` and parses it as an
/// object; if that fails there is nothing recoverable and the caller gets
/// `None`. On success, two best-effort normalization passes run over the
/// top level:
///
/// - string values that look like embedded JSON (`{..}` or `[..]`) are
///   reparsed, retrying with single quotes swapped for double quotes;
/// - the "prices" key (case-insensitive) gets its per-configuration
///   `Price` fields normalized via [`normalize_price`].
///
/// Neither pass can fail the recovery; fields that resist normalization
/// stay as they were.
pub fn recover_json_object(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    let mut object: Map<String, Value> = serde_json::from_str(&text[start..=end]).ok()?;

    for (key, value) in object.iter_mut() {
        match value {
            Value::String(s) => {
                if let Some(reparsed) = reparse_embedded(s) {
                    *value = reparsed;
                }
            }
            Value::Array(entries) if key.eq_ignore_ascii_case("prices") => {
                for entry in entries {
                    normalize_price(entry);
                }
            }
            _ => {}
        }
    }

    Some(object)
}

/// Reparse a string that looks like it holds nested JSON. Returns `None`
/// when it doesn't look nested or refuses to parse even after quote
/// normalization; the caller keeps the original string.
fn reparse_embedded(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    let looks_nested = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !looks_nested {
        return None;
    }

    serde_json::from_str(trimmed)
        .or_else(|_| serde_json::from_str(&trimmed.replace('\'', "\"")))
        .ok()
}

/// Normalize the `Price` field of one configuration-variant map:
///
/// - "Not specified" anywhere in the text → null;
/// - alternatives joined by " or " → first numeric token found across the
///   alternatives, left to right;
/// - otherwise → first numeric token in the text;
/// - no numeric token → left unchanged.
fn normalize_price(entry: &mut Value) {
    let Some(map) = entry.as_object_mut() else {
        return;
    };
    let Some(price) = map.get_mut("Price") else {
        return;
    };
    let Some(text) = price.as_str() else {
        return;
    };

    if text.contains("Not specified") {
        *price = Value::Null;
    } else if text.contains(" or ") {
        if let Some(token) = text.split(" or ").find_map(first_numeric_token) {
            *price = Value::String(token);
        }
    } else if let Some(token) = first_numeric_token(text) {
        *price = Value::String(token);
    }
}

fn first_numeric_token(text: &str) -> Option<String> {
    let token = NUMERIC_TOKEN.find(text)?.as_str();
    Some(token.trim_end_matches([',', '.']).to_string())
}
