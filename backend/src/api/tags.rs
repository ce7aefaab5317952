//! `GET /tags?q=&limit=` for the tag typeahead.

use common::{error::ApiError, event_models::TagSummary};
use serde::Deserialize;

use crate::http_utils::{highland_client::{HighlandClient, get_highland_client}, json_http::get_json};

#[derive(Debug, Deserialize)]
struct TagListResponse {
    tags: Vec<TagSummary>,
}

impl HighlandClient {
    pub async fn search_tags(&self, query: &str, limit: u64) -> Result<Vec<TagSummary>, ApiError> {
        let url = self.url(&format!("/tags?q={}&limit={limit}", urlencoding::encode(query)));
        let response: TagListResponse = get_json(&self.http, &url, self.timeout_secs).await?;
        Ok(response.tags)
    }
}

pub async fn search_tags(query: String, limit: u64) -> anyhow::Result<Vec<TagSummary>> {
    let client = get_highland_client()?;
    Ok(client.search_tags(&query, limit).await?)
}
