//! The normalized event filter and its query-string form.

use serde::{Deserialize, Serialize};


/// Resolved location plus search radius. The API only understands the three
/// numbers together, so they travel as one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFacet {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: u32,
    /// Label shown back to the user ("Inverness, UK").
    pub location: String,
}

/// Flat query object sent to `GET /events`.
///
/// Produced by [`crate::facet_selection::FacetSelections::aggregate`]; unset
/// facets are `None` / empty and never show up in the query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterSet {
    pub q: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<String>,
    pub category_ids: Vec<String>,
    pub tag: Option<String>,
    pub tag_names: Vec<String>,
    pub price_max: Option<f64>,
    pub featured_only: bool,
    pub geo: Option<GeoFacet>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Facets in canonical order, values not yet percent-encoded.
    /// List facets are returned element-wise joined by the caller.
    pub fn pairs(&self) -> Vec<(&'static str, QueryValue)> {
        let mut out = Vec::new();
        if let Some(q) = &self.q {
            out.push(("q", QueryValue::One(q.clone())));
        }
        if let Some(category) = &self.category {
            out.push(("category", QueryValue::One(category.clone())));
        }
        if let Some(category_id) = &self.category_id {
            out.push(("category_id", QueryValue::One(category_id.clone())));
        }
        if !self.category_ids.is_empty() {
            out.push(("category_ids", QueryValue::Many(self.category_ids.clone())));
        }
        if let Some(tag) = &self.tag {
            out.push(("tag", QueryValue::One(tag.clone())));
        }
        if !self.tag_names.is_empty() {
            out.push(("tag_names", QueryValue::Many(self.tag_names.clone())));
        }
        if let Some(price_max) = self.price_max {
            out.push(("price_max", QueryValue::One(price_max.to_string())));
        }
        if self.featured_only {
            out.push(("featured_only", QueryValue::One("true".to_string())));
        }
        if let Some(geo) = &self.geo {
            out.push(("latitude", QueryValue::One(geo.latitude.to_string())));
            out.push(("longitude", QueryValue::One(geo.longitude.to_string())));
            out.push(("radius_km", QueryValue::One(geo.radius_km.to_string())));
            out.push(("location", QueryValue::One(geo.location.clone())));
        }
        if let Some(date_from) = &self.date_from {
            out.push(("date_from", QueryValue::One(date_from.clone())));
        }
        if let Some(date_to) = &self.date_to {
            out.push(("date_to", QueryValue::One(date_to.clone())));
        }
        out
    }

    /// `key=value&...` with list facets comma-joined. Each list element is
    /// encoded on its own, so a comma inside a value survives as `%2C`.
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", value.encoded()))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Inverse of [`FilterSet::to_query_string`]. Unknown keys and values that
    /// do not parse are dropped; a partial geo triple is dropped as a whole.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut filters = FilterSet::default();
        let mut latitude = None;
        let mut longitude = None;
        let mut radius_km = None;
        let mut location = None;

        for part in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = part.split_once('=').unwrap_or((part, ""));
            match key {
                "q" => filters.q = decode(raw),
                "category" => filters.category = decode(raw),
                "category_id" => filters.category_id = decode(raw),
                "category_ids" => filters.category_ids = decode_list(raw),
                "tag" => filters.tag = decode(raw),
                "tag_names" => filters.tag_names = decode_list(raw),
                "price_max" => filters.price_max = decode(raw).and_then(|v| v.parse::<f64>().ok()).filter(|p| p.is_finite() && *p >= 0.0),
                "featured_only" => filters.featured_only = matches!(raw, "true" | "1"),
                "latitude" => latitude = decode(raw).and_then(|v| v.parse::<f64>().ok()),
                "longitude" => longitude = decode(raw).and_then(|v| v.parse::<f64>().ok()),
                "radius_km" => radius_km = decode(raw).and_then(|v| v.parse::<u32>().ok()),
                "location" => location = decode(raw),
                "date_from" => filters.date_from = decode(raw),
                "date_to" => filters.date_to = decode(raw),
                _ => {}
            }
        }

        if let (Some(latitude), Some(longitude), Some(radius_km)) = (latitude, longitude, radius_km) {
            filters.geo = Some(GeoFacet { latitude, longitude, radius_km, location: location.unwrap_or_default() });
        }
        filters
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    pub fn encoded(&self) -> String {
        match self {
            QueryValue::One(v) => urlencoding::encode(v).into_owned(),
            QueryValue::Many(vs) => vs.iter().map(|v| urlencoding::encode(v).into_owned()).collect::<Vec<_>>().join(","),
        }
    }

    /// Plain value as a form field would carry it (lists comma-joined).
    pub fn joined(&self) -> String {
        match self {
            QueryValue::One(v) => v.clone(),
            QueryValue::Many(vs) => vs.join(","),
        }
    }
}

fn decode(raw: &str) -> Option<String> {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw).ok().map(|v| v.into_owned())
}

fn decode_list(raw: &str) -> Vec<String> {
    raw.split(',').filter(|v| !v.is_empty()).filter_map(decode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_query_string() {
        let filters = FilterSet {
            category_ids: vec!["music".to_string(), "food".to_string()],
            price_max: Some(20.0),
            date_from: Some("2025-06-01".to_string()),
            ..Default::default()
        };
        let qs = filters.to_query_string();
        assert_eq!(qs, "category_ids=music,food&price_max=20&date_from=2025-06-01");
        assert_eq!(FilterSet::from_query_string(&qs), filters);
    }

    #[test]
    fn round_trip_with_awkward_values() {
        let filters = FilterSet {
            q: Some("fish & chips, 50% off".to_string()),
            tag_names: vec!["live music".to_string(), "a,b".to_string()],
            featured_only: true,
            geo: Some(GeoFacet { latitude: 57.4778, longitude: -4.2247, radius_km: 20, location: "Inverness, UK".to_string() }),
            date_to: Some("2025-06-30".to_string()),
            ..Default::default()
        };
        let qs = filters.to_query_string();
        assert!(qs.contains("tag_names=live%20music,a%2Cb"));
        assert_eq!(FilterSet::from_query_string(&qs), filters);
        assert_eq!(FilterSet::from_query_string(&qs).to_query_string(), qs);
    }

    #[test]
    fn empty_filter_has_no_keys() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert_eq!(filters.to_query_string(), "");
    }

    #[test]
    fn partial_geo_triple_is_dropped() {
        let filters = FilterSet::from_query_string("latitude=57.4&longitude=-4.2&location=Inverness");
        assert_eq!(filters.geo, None);
        assert!(filters.is_empty());
    }

    #[test]
    fn garbage_is_ignored() {
        let filters = FilterSet::from_query_string("?price_max=cheap&unknown=1&q=ceilidh+dance&&radius_km=-5");
        assert_eq!(filters.price_max, None);
        assert_eq!(filters.q.as_deref(), Some("ceilidh dance"));
    }
}
