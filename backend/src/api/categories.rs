//! `GET /categories`, the catalogue behind the category slug lookup.

use common::{error::ApiError, event_models::CategorySummary};
use serde::Deserialize;

use crate::http_utils::{highland_client::{HighlandClient, get_highland_client}, json_http::get_json};

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    categories: Vec<CategorySummary>,
}

impl HighlandClient {
    pub async fn list_categories(&self) -> Result<Vec<CategorySummary>, ApiError> {
        let response: CategoryListResponse = get_json(&self.http, &self.url("/categories"), self.timeout_secs).await?;
        Ok(response.categories)
    }
}

pub async fn list_categories() -> anyhow::Result<Vec<CategorySummary>> {
    let client = get_highland_client()?;
    Ok(client.list_categories().await?)
}
