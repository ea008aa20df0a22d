use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Value Proposition Canvas: a uniquely-named record with six text fields
/// describing a customer segment and a value proposition.
///
/// The name is the identity: saving under an existing name overwrites the
/// fields in place. Timestamps are maintained by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub name: String,
    pub customer_jobs: String,
    pub pains: String,
    pub gains: String,
    pub products_services: String,
    pub gain_creators: String,
    pub pain_relievers: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Canvas {
    /// Create a new canvas with empty fields
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            customer_jobs: String::new(),
            pains: String::new(),
            gains: String::new(),
            products_services: String::new(),
            gain_creators: String::new(),
            pain_relievers: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The six content fields as (label, value) pairs, in canvas order
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("customer_jobs", self.customer_jobs.as_str()),
            ("pains", self.pains.as_str()),
            ("gains", self.gains.as_str()),
            ("products_services", self.products_services.as_str()),
            ("gain_creators", self.gain_creators.as_str()),
            ("pain_relievers", self.pain_relievers.as_str()),
        ]
    }

    /// True when all six fields are empty
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.trim().is_empty())
    }
}

/// Listing entry: name plus last-modified time, without the field bodies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSummary {
    pub name: String,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new("Test");
        assert_eq!(canvas.name, "Test");
        assert!(canvas.is_blank());
        assert_eq!(canvas.created_at, canvas.updated_at);
    }

    #[test]
    fn test_fields_order() {
        let mut canvas = Canvas::new("Test");
        canvas.customer_jobs = "jobs".to_string();
        canvas.pain_relievers = "relievers".to_string();

        let fields = canvas.fields();
        assert_eq!(fields[0], ("customer_jobs", "jobs"));
        assert_eq!(fields[5], ("pain_relievers", "relievers"));
        assert!(!canvas.is_blank());
    }

    #[test]
    fn test_canvas_serialization_roundtrip() {
        let mut canvas = Canvas::new("Acme SaaS");
        canvas.gains = "saves time".to_string();

        let json = serde_json::to_string(&canvas).unwrap();
        let back: Canvas = serde_json::from_str(&json).unwrap();
        assert_eq!(back, canvas);
    }
}
