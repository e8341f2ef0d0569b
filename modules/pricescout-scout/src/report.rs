use std::collections::BTreeSet;
use std::io::{self, Write};

use serde_json::Value;

use pricescout_common::SpecRecord;

/// Everything the pipeline hands to the presentation boundary.
pub struct ScoutReport {
    /// Enriched records, cheapest first.
    pub records: Vec<SpecRecord>,
    /// Distinct hostnames the search stage saw.
    pub searched_sites: BTreeSet<String>,
}

/// Render the final report. An empty record set is "no information found",
/// never an error.
pub fn render(report: &ScoutReport, out: &mut impl Write) -> io::Result<()> {
    if report.records.is_empty() {
        writeln!(
            out,
            "Could not find relevant price and specification information."
        )?;
    } else {
        writeln!(
            out,
            "Top {} products with prices and specifications:",
            report.records.len()
        )?;
        for record in &report.records {
            writeln!(out)?;
            writeln!(
                out,
                "Product: {}",
                record.name.as_deref().unwrap_or("(unnamed)")
            )?;
            writeln!(out, "Website: {}", record.url)?;
            writeln!(out, "Price: Rs. {:.2}", record.price)?;
            writeln!(out, "Specifications:")?;
            if record.specifications.is_empty() {
                writeln!(out, "  No specific details found.")?;
            } else {
                for (key, value) in &record.specifications {
                    render_spec(key, value, 1, out)?;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Websites searched:")?;
    if report.searched_sites.is_empty() {
        writeln!(out, "  (none)")?;
    } else {
        for site in &report.searched_sites {
            writeln!(out, "  - {site}")?;
        }
    }

    Ok(())
}

fn render_spec(key: &str, value: &Value, level: usize, out: &mut impl Write) -> io::Result<()> {
    let indent = "  ".repeat(level);

    if key.eq_ignore_ascii_case("prices") {
        if let Value::Array(configs) = value {
            writeln!(out, "{indent}Prices:")?;
            for config in configs {
                match config {
                    Value::Object(fields) => {
                        let line = fields
                            .iter()
                            .map(|(k, v)| format!("{k}: {}", price_field(k, v)))
                            .collect::<Vec<_>>()
                            .join(", ");
                        writeln!(out, "{indent}  - {line}")?;
                    }
                    other => writeln!(out, "{indent}  - {}", scalar(other))?,
                }
            }
            return Ok(());
        }
    }

    match value {
        Value::Object(nested) => {
            writeln!(out, "{indent}{key}:")?;
            for (k, v) in nested {
                render_spec(k, v, level + 1, out)?;
            }
        }
        Value::Array(items) => {
            writeln!(out, "{indent}{key}:")?;
            for item in items {
                writeln!(out, "{indent}  - {}", scalar(item))?;
            }
        }
        other => writeln!(out, "{indent}{key}: {}", scalar(other))?,
    }

    Ok(())
}

fn price_field(key: &str, value: &Value) -> String {
    if key.eq_ignore_ascii_case("price") && value.is_null() {
        return "Not specified".to_string();
    }
    scalar(value)
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "Not specified".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_to_string(report: &ScoutReport) -> String {
        let mut buf = Vec::new();
        render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn record(price: f64, specifications: serde_json::Map<String, Value>) -> SpecRecord {
        SpecRecord {
            name: Some("Phone X".to_string()),
            url: "https://shop.pk/phone-x".to_string(),
            price,
            specifications,
        }
    }

    #[test]
    fn empty_report_says_nothing_found() {
        let report = ScoutReport {
            records: Vec::new(),
            searched_sites: BTreeSet::new(),
        };
        let text = render_to_string(&report);
        assert!(text.contains("Could not find relevant price and specification information."));
    }

    #[test]
    fn price_renders_with_two_decimals() {
        let report = ScoutReport {
            records: vec![record(45000.0, serde_json::Map::new())],
            searched_sites: BTreeSet::new(),
        };
        let text = render_to_string(&report);
        assert!(text.contains("Price: Rs. 45000.00"));
        assert!(text.contains("No specific details found."));
    }

    #[test]
    fn null_config_price_renders_as_not_specified() {
        let specs = json!({
            "RAM": "8GB",
            "prices": [{"Storage": "128GB", "Price": null}]
        });
        let Value::Object(specs) = specs else {
            unreachable!()
        };
        let report = ScoutReport {
            records: vec![record(45000.0, specs)],
            searched_sites: BTreeSet::new(),
        };
        let text = render_to_string(&report);
        assert!(text.contains("RAM: 8GB"));
        assert!(text.contains("Price: Not specified"));
    }

    #[test]
    fn searched_sites_are_listed() {
        let report = ScoutReport {
            records: Vec::new(),
            searched_sites: ["a.pk".to_string(), "b.pk".to_string()].into(),
        };
        let text = render_to_string(&report);
        assert!(text.contains("- a.pk"));
        assert!(text.contains("- b.pk"));
    }
}
