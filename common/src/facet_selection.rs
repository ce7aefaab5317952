//! Facet control state and its collapse into a [`FilterSet`].

use serde::{Deserialize, Serialize};

use crate::{
    event_models::CategorySummary,
    filter_set::{FilterSet, GeoFacet},
    search_const::{DEFAULT_RADIUS_KM, RADIUS_CHOICES_KM},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw state of the independent filter controls on the event search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetSelections {
    pub text: String,
    /// Category ids in the order the user ticked them.
    pub category_ids: Vec<String>,
    /// Tag names in the order the user picked them.
    pub tags: Vec<String>,
    pub price_max: Option<f64>,
    pub featured_only: bool,
    pub location: Option<ResolvedLocation>,
    pub radius_km: u32,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl Default for FacetSelections {
    fn default() -> Self {
        Self {
            text: String::new(),
            category_ids: vec![],
            tags: vec![],
            price_max: None,
            featured_only: false,
            location: None,
            radius_km: DEFAULT_RADIUS_KM,
            date_from: None,
            date_to: None,
        }
    }
}

/// Why a filter set is being sent. A reset is a real query with no facets and
/// must not be confused with the page's first load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SearchOrigin {
    #[default]
    Initial,
    Submitted,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub filters: FilterSet,
    pub origin: SearchOrigin,
}

impl FilterRequest {
    pub fn initial(filters: FilterSet) -> Self {
        Self { filters, origin: SearchOrigin::Initial }
    }
}

/// Origin of the filter set currently shown on the page.
///
/// A submit that changes the URL only takes effect once the new filters
/// arrive; any other filter change (back/forward, a pasted link) resets the
/// origin to [`SearchOrigin::Initial`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OriginTracker {
    current: SearchOrigin,
    pending: Option<SearchOrigin>,
}

impl OriginTracker {
    pub fn current(&self) -> SearchOrigin {
        self.current
    }

    /// Record a submit made while `shown` is on screen.
    pub fn submitted(&mut self, request: &FilterRequest, shown: &FilterSet) {
        self.current = request.origin;
        // same filters: the URL does not change, so nothing will arrive
        self.pending = (request.filters != *shown).then_some(request.origin);
    }

    /// The page received a new filter set.
    pub fn filters_changed(&mut self) {
        self.current = self.pending.take().unwrap_or_default();
    }
}

impl FacetSelections {
    pub fn toggle_category(&mut self, category_id: &str) {
        toggle(&mut self.category_ids, category_id);
    }

    pub fn toggle_tag(&mut self, tag_name: &str) {
        toggle(&mut self.tags, tag_name);
    }

    pub fn set_price_max(&mut self, price_max: Option<f64>) {
        self.price_max = price_max.filter(|p| p.is_finite() && *p >= 0.0);
    }

    pub fn set_location(&mut self, location: ResolvedLocation) {
        self.location = Some(location);
    }

    pub fn clear_location(&mut self) {
        self.location = None;
    }

    /// Only the enumerated radii are accepted; anything else is ignored.
    pub fn set_radius(&mut self, radius_km: u32) {
        if RADIUS_CHOICES_KM.contains(&radius_km) {
            self.radius_km = radius_km;
        }
    }

    /// Collapse the controls into one flat filter. Never fails; empty
    /// controls are simply left out.
    pub fn aggregate(&self, categories: &[CategorySummary]) -> FilterSet {
        let mut filters = FilterSet::default();

        let text = self.text.trim();
        if !text.is_empty() {
            filters.q = Some(text.to_string());
        }

        match self.category_ids.as_slice() {
            [] => {}
            [only] => match categories.iter().find(|c| &c.id == only) {
                Some(category) if !category.slug.is_empty() => filters.category = Some(category.slug.clone()),
                _ => filters.category_id = Some(only.clone()),
            },
            many => filters.category_ids = many.to_vec(),
        }

        match self.tags.as_slice() {
            [] => {}
            [only] => filters.tag = Some(only.clone()),
            many => filters.tag_names = many.to_vec(),
        }

        filters.price_max = self.price_max.filter(|p| p.is_finite() && *p >= 0.0);
        filters.featured_only = self.featured_only;

        if let Some(location) = &self.location {
            filters.geo = Some(GeoFacet {
                latitude: location.latitude,
                longitude: location.longitude,
                radius_km: self.radius_km,
                location: location.label.clone(),
            });
        }

        filters.date_from = self.date_from.clone().filter(|d| !d.trim().is_empty());
        filters.date_to = self.date_to.clone().filter(|d| !d.trim().is_empty());
        filters
    }

    pub fn submit(&self, categories: &[CategorySummary]) -> FilterRequest {
        FilterRequest { filters: self.aggregate(categories), origin: SearchOrigin::Submitted }
    }

    /// Reset every control and produce the "no filters" request.
    pub fn clear(&mut self) -> FilterRequest {
        *self = FacetSelections::default();
        FilterRequest { filters: FilterSet::default(), origin: SearchOrigin::Cleared }
    }

    /// Rebuild control state from a filter carried in the URL.
    pub fn from_filters(filters: &FilterSet, categories: &[CategorySummary]) -> Self {
        let mut selections = FacetSelections {
            text: filters.q.clone().unwrap_or_default(),
            price_max: filters.price_max,
            featured_only: filters.featured_only,
            date_from: filters.date_from.clone(),
            date_to: filters.date_to.clone(),
            ..Default::default()
        };

        if let Some(slug) = &filters.category {
            if let Some(category) = categories.iter().find(|c| &c.slug == slug) {
                selections.category_ids.push(category.id.clone());
            }
        }
        if let Some(id) = &filters.category_id {
            selections.category_ids.push(id.clone());
        }
        selections.category_ids.extend(filters.category_ids.iter().cloned());

        if let Some(tag) = &filters.tag {
            selections.tags.push(tag.clone());
        }
        selections.tags.extend(filters.tag_names.iter().cloned());

        if let Some(geo) = &filters.geo {
            selections.location = Some(ResolvedLocation {
                label: geo.location.clone(),
                latitude: geo.latitude,
                longitude: geo.longitude,
            });
            selections.radius_km = geo.radius_km;
        }
        selections
    }

    /// Apply a category catalogue that arrived after the controls were built.
    ///
    /// A URL `category` slug can only be mapped to an id once the catalogue is
    /// known. The rebuild happens only while the controls still match what
    /// the URL alone produced, so edits made in the meantime are kept.
    pub fn catalogue_loaded(&mut self, filters: &FilterSet, categories: &[CategorySummary]) -> bool {
        if *self != FacetSelections::from_filters(filters, &[]) {
            return false;
        }
        *self = FacetSelections::from_filters(filters, categories);
        true
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}
