//! End-to-end pipeline tests over fixture collaborators.
//!
//! Fixture search results → scripted model output → `Scout::run()` → assert
//! on the final report. No network, no API keys.

use std::sync::Arc;

use anyhow::anyhow;
use serde_json::{json, Value};

use pricescout_scout::fixtures::{FixtureScraper, FixtureSearcher, ScriptedCompleter};
use pricescout_scout::report;
use pricescout_scout::scout::Scout;
use pricescout_scout::scraper::SearchResult;

fn result(content: &str, url: &str) -> SearchResult {
    SearchResult {
        content: content.to_string(),
        url: url.to_string(),
    }
}

fn scout(
    results: Vec<SearchResult>,
    scraper: FixtureScraper,
    responses: Vec<anyhow::Result<String>>,
) -> Scout {
    Scout::with_collaborators(
        Arc::new(FixtureSearcher::new(results)),
        Arc::new(scraper),
        Arc::new(ScriptedCompleter::new(responses)),
        "pakistan",
    )
}

// ---------------------------------------------------------------------------
// Ranking and failure isolation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ranks_by_price_and_isolates_per_item_failures() {
    let results = vec![
        result("Phone X 256GB best price", "https://shopone.pk/listings/1"),
        result("Phone X deals", "https://shoptwo.pk/listings/2"),
        result("Phone X 128GB offer", "https://shopthree.pk/listings/3"),
        result("Phone X review roundup", "https://shopfour.pk/listings/4"),
    ];

    let scraper = FixtureScraper::new()
        .with_page("https://shopthree.pk/phone-x-128", "128GB / 8GB spec sheet")
        .with_page("https://shopone.pk/phone-x-256", "256GB / 12GB spec sheet");

    let responses = vec![
        // Price extraction, one response per search result, in order.
        Ok(r#"{"name": "Phone X 256GB", "price": 50000, "url": "https://shopone.pk/phone-x-256"}"#
            .to_string()),
        Ok(r#"{"name": "Phone X", "price": null, "url": "https://shoptwo.pk/phone-x"}"#.to_string()),
        Ok(r#"{"name": "Phone X 128GB", "price": 30000, "url": "https://shopthree.pk/phone-x-128"}"#
            .to_string()),
        Ok("Sorry, I could not find a price in this text.".to_string()),
        // Spec enrichment, in rank order: cheapest first.
        Ok(concat!(
            "Here is the JSON: {\"RAM\": \"8GB\", ",
            "\"prices\": [{\"Storage\": \"128GB\", \"Price\": \"Not specified\"}]}",
        )
        .to_string()),
        Ok(r#"{"RAM": "12GB", "Battery": "5000mAh"}"#.to_string()),
    ];

    let report = scout(results, scraper, responses)
        .run("phone x", 10)
        .await
        .unwrap();

    // Null-price and unparseable items are gone; cheapest offer leads.
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].price, 30000.0);
    assert_eq!(report.records[0].url, "https://shopthree.pk/phone-x-128");
    assert_eq!(report.records[1].price, 50000.0);

    assert_eq!(report.records[0].specifications["RAM"], json!("8GB"));
    assert_eq!(
        report.records[0].specifications["prices"][0]["Price"],
        Value::Null
    );
    assert_eq!(report.records[1].specifications["Battery"], json!("5000mAh"));

    // Hostnames come from the raw search results, not the extracted offers.
    let sites: Vec<&str> = report.searched_sites.iter().map(String::as_str).collect();
    assert_eq!(
        sites,
        vec!["shopfour.pk", "shopone.pk", "shopthree.pk", "shoptwo.pk"]
    );
}

#[tokio::test]
async fn model_call_failure_skips_only_that_result() {
    let results = vec![
        result("offer a", "https://a.pk/1"),
        result("offer b", "https://b.pk/2"),
    ];

    let scraper = FixtureScraper::new().with_page("https://b.pk/item", "spec sheet");

    let responses = vec![
        Err(anyhow!("model unavailable")),
        Ok(r#"{"name": "B", "price": 999, "url": "https://b.pk/item"}"#.to_string()),
        Ok("{}".to_string()),
    ];

    let report = scout(results, scraper, responses)
        .run("phone x", 10)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].price, 999.0);
}

// ---------------------------------------------------------------------------
// Enrichment degradation and bounds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_failure_still_yields_a_record_with_empty_specs() {
    let results = vec![result("offer", "https://deadshop.pk/listing")];

    let responses = vec![Ok(
        r#"{"name": "Phone X", "price": 42000, "url": "https://deadshop.pk/phone-x"}"#.to_string(),
    )];

    // No fixture pages: every scrape fails like a dead link.
    let report = scout(results, FixtureScraper::new(), responses)
        .run("phone x", 10)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].price, 42000.0);
    assert!(report.records[0].specifications.is_empty());
}

#[tokio::test]
async fn enrichment_is_capped_at_top_n_in_rank_order() {
    let results = vec![
        result("offer a", "https://a.pk/1"),
        result("offer b", "https://b.pk/2"),
        result("offer c", "https://c.pk/3"),
    ];

    let scraper = FixtureScraper::new()
        .with_page("https://a.pk/item", "spec sheet")
        .with_page("https://b.pk/item", "spec sheet");

    let responses = vec![
        Ok(r#"{"name": "A", "price": 2000, "url": "https://a.pk/item"}"#.to_string()),
        Ok(r#"{"name": "B", "price": 1000, "url": "https://b.pk/item"}"#.to_string()),
        Ok(r#"{"name": "C", "price": 3000, "url": "https://c.pk/item"}"#.to_string()),
        // Only two enrichment calls happen for top_n = 2.
        Ok("{}".to_string()),
        Ok("{}".to_string()),
    ];

    let report = scout(results, scraper, responses)
        .run("phone x", 2)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].price, 1000.0);
    assert_eq!(report.records[1].price, 2000.0);
}

#[tokio::test]
async fn top_n_larger_than_ranked_set_enriches_everything_once() {
    let results = vec![result("offer a", "https://a.pk/1")];

    let scraper = FixtureScraper::new().with_page("https://a.pk/item", "spec sheet");

    let responses = vec![
        Ok(r#"{"name": "A", "price": 2000, "url": "https://a.pk/item"}"#.to_string()),
        Ok("{}".to_string()),
    ];

    let report = scout(results, scraper, responses)
        .run("phone x", 50)
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
}

// ---------------------------------------------------------------------------
// Empty search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_search_propagates_to_an_empty_report() {
    let report = scout(Vec::new(), FixtureScraper::new(), Vec::new())
        .run("phone that does not exist", 10)
        .await
        .unwrap();

    assert!(report.records.is_empty());
    assert!(report.searched_sites.is_empty());

    let mut rendered = Vec::new();
    report::render(&report, &mut rendered).unwrap();
    let rendered = String::from_utf8(rendered).unwrap();
    assert!(rendered.contains("Could not find relevant price and specification information."));
}
