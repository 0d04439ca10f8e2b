use sonic_rs::json;

use crate::config::{CONTENT_BY_SERIES_ID_PATH, SERIES_WITH_YEAR_MONTH_PATH, join_url};
use crate::error::RestResult;
use crate::payload::SeriesIdList;
use crate::transport::{Client, RestResponse};

/// Calls against the series content service. Responses are returned as-is;
/// classifying the status is left to the caller.
#[derive(Clone)]
pub struct SeriesApi {
    client: Client,
    base_url: String,
}

impl SeriesApi {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn get_content_by_series_id(
        &self,
        ids: &SeriesIdList,
    ) -> RestResult<RestResponse> {
        let url = join_url(&self.base_url, CONTENT_BY_SERIES_ID_PATH);
        self.client.post_json(url, ids).await
    }

    pub async fn series_with_year_month(&self) -> RestResult<RestResponse> {
        let url = join_url(&self.base_url, SERIES_WITH_YEAR_MONTH_PATH);
        self.client.post_json(url, &json!({})).await
    }
}
