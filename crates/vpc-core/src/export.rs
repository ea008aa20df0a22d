//! Canvas export formatting.
//!
//! Two formats: a JSON object carrying the canvas record, and a markdown
//! document organized under the two halves of the canvas (customer segment
//! and value proposition) with each field as a subsection.

use crate::canvas::Canvas;
use serde_json::json;

/// Export a canvas as a pretty-printed JSON object.
///
/// The object carries the name, the six fields, and both timestamps, so a
/// parse of the output recovers the record exactly.
pub fn to_json(canvas: &Canvas) -> String {
    let value = json!({
        "name": canvas.name,
        "customer_jobs": canvas.customer_jobs,
        "pains": canvas.pains,
        "gains": canvas.gains,
        "products_services": canvas.products_services,
        "gain_creators": canvas.gain_creators,
        "pain_relievers": canvas.pain_relievers,
        "created_at": canvas.created_at.to_rfc3339(),
        "updated_at": canvas.updated_at.to_rfc3339(),
    });
    // json! output of a map of strings cannot fail to serialize
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Export a canvas as a markdown document.
///
/// Layout: title line with the canvas name, created/updated lines, then the
/// `Customer Segment` and `Value Proposition` sections with each field as a
/// `##` subsection. Empty fields render as `-`.
pub fn to_markdown(canvas: &Canvas) -> String {
    fn section(title: &str, value: &str) -> String {
        let value = value.trim();
        let body = if value.is_empty() { "-" } else { value };
        format!("## {}\n\n{}\n", title, body)
    }

    let parts = [
        format!("# Value Proposition Canvas — {}", canvas.name),
        String::new(),
        format!("Created: {}", canvas.created_at.to_rfc3339()),
        format!("Last Updated: {}", canvas.updated_at.to_rfc3339()),
        String::new(),
        "# Customer Segment".to_string(),
        section("Customer Jobs", &canvas.customer_jobs),
        section("Pains", &canvas.pains),
        section("Gains", &canvas.gains),
        "# Value Proposition".to_string(),
        section("Products & Services", &canvas.products_services),
        section("Gain Creators", &canvas.gain_creators),
        section("Pain Relievers", &canvas.pain_relievers),
    ];
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Canvas {
        let mut canvas = Canvas::new("Acme SaaS");
        canvas.customer_jobs = "ship software".to_string();
        canvas.pains = "slow deploys".to_string();
        canvas.gains = "faster releases".to_string();
        canvas.products_services = "CI platform".to_string();
        canvas.gain_creators = "one-click deploys".to_string();
        canvas.pain_relievers = "build caching".to_string();
        canvas
    }

    #[test]
    fn test_json_export_roundtrips_fields() {
        let canvas = sample();
        let parsed: serde_json::Value = serde_json::from_str(&to_json(&canvas)).unwrap();

        for (key, value) in canvas.fields() {
            assert_eq!(parsed[key].as_str(), Some(value), "field {}", key);
        }
        assert_eq!(parsed["name"].as_str(), Some("Acme SaaS"));
    }

    #[test]
    fn test_markdown_has_both_sections() {
        let md = to_markdown(&sample());
        assert!(md.contains("# Customer Segment"));
        assert!(md.contains("# Value Proposition"));
        assert!(md.contains("## Customer Jobs\n\nship software"));
        assert!(md.contains("## Pain Relievers\n\nbuild caching"));
    }

    #[test]
    fn test_markdown_renders_empty_fields_as_dash() {
        let canvas = Canvas::new("Blank");
        let md = to_markdown(&canvas);
        assert!(md.contains("## Customer Jobs\n\n-"));
        assert!(md.contains("## Gain Creators\n\n-"));
    }
}
