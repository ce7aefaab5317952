//! `GET /events`.

use common::{error::ApiError, event_models::EventSummary, filter_set::FilterSet, search_result::{EventPage, SearchPage}};
use serde::Deserialize;

use crate::http_utils::{highland_client::{HighlandClient, get_highland_client}, json_http::get_json};

#[derive(Debug, Deserialize)]
struct EventListResponse {
    events: Vec<EventSummary>,
    total: u64,
    skip: Option<u64>,
    limit: Option<u64>,
}

impl HighlandClient {
    pub async fn list_events(&self, filters: &FilterSet, skip: u64, limit: u64) -> Result<EventPage, ApiError> {
        let url = self.url(&format!("/events?{}", events_query(filters, skip, limit)));
        let response: EventListResponse = get_json(&self.http, &url, self.timeout_secs).await?;
        tracing::info!("events: {} of {} (skip {})", response.events.len(), response.total, skip);
        Ok(SearchPage {
            items: response.events,
            total: response.total,
            skip: response.skip.unwrap_or(skip),
            limit: response.limit.unwrap_or(limit),
        })
    }
}

/// Filter query string with the paging window appended.
pub fn events_query(filters: &FilterSet, skip: u64, limit: u64) -> String {
    let filters = filters.to_query_string();
    if filters.is_empty() {
        format!("skip={skip}&limit={limit}")
    } else {
        format!("{filters}&skip={skip}&limit={limit}")
    }
}

pub async fn list_events(filters: FilterSet, skip: u64, limit: u64) -> anyhow::Result<EventPage> {
    let client = get_highland_client()?;
    Ok(client.list_events(&filters, skip, limit).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_is_appended_to_filters() {
        let filters = FilterSet { featured_only: true, ..Default::default() };
        assert_eq!(events_query(&filters, 24, 12), "featured_only=true&skip=24&limit=12");
        assert_eq!(events_query(&FilterSet::default(), 0, 12), "skip=0&limit=12");
    }
}
