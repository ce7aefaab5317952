//! Event, category and tag records as returned by the events API.

use serde::{Deserialize, Serialize};

use crate::paged_list::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// ISO 8601 start, as sent by the API.
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub category: Option<CategorySummary>,
    #[serde(default)]
    pub tags: Vec<TagSummary>,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl EventSummary {
    pub fn price_label(&self) -> String {
        match (self.price_min, self.price_max) {
            (None, None) => "Price TBC".to_string(),
            (Some(min), _) if min == 0.0 && self.price_max.unwrap_or(0.0) == 0.0 => "Free".to_string(),
            (Some(min), Some(max)) if (max - min).abs() > f64::EPSILON => format!("£{min:.2} – £{max:.2}"),
            (Some(p), _) | (None, Some(p)) => format!("£{p:.2}"),
        }
    }
}

impl Identified for EventSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub usage_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(price_min: Option<f64>, price_max: Option<f64>) -> EventSummary {
        EventSummary {
            id: "e1".to_string(),
            title: "Ceilidh".to_string(),
            slug: None,
            start_date: "2025-06-01T19:00:00Z".to_string(),
            end_date: None,
            venue_name: None,
            category: None,
            tags: vec![],
            price_min,
            price_max,
            image_url: None,
            featured: false,
        }
    }

    #[test]
    fn price_labels() {
        assert_eq!(event(None, None).price_label(), "Price TBC");
        assert_eq!(event(Some(0.0), None).price_label(), "Free");
        assert_eq!(event(Some(5.0), Some(12.5)).price_label(), "£5.00 – £12.50");
        assert_eq!(event(Some(8.0), Some(8.0)).price_label(), "£8.00");
        assert_eq!(event(None, Some(15.0)).price_label(), "£15.00");
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let parsed: EventSummary = serde_json::from_str(
            r#"{"id":"e9","title":"Folk night","start_date":"2025-07-01"}"#,
        )
        .unwrap();
        assert!(parsed.tags.is_empty());
        assert!(!parsed.featured);
        assert_eq!(parsed.venue_name, None);
    }
}
