use crate::payload::SeriesIdList;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const CONTENT_BY_SERIES_ID_PATH: &str = "/get_content_by_series_id";
pub const SERIES_WITH_YEAR_MONTH_PATH: &str = "/series_with_year_month";

/// What the runner asks for and where. Defaults to series 13 on the local server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    pub base_url: String,
    pub id_list: SeriesIdList,
}

impl RunnerConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_id_list(mut self, id_list: impl Into<SeriesIdList>) -> Self {
        self.id_list = id_list.into();
        self
    }

    pub fn endpoint_url(&self) -> String {
        join_url(&self.base_url, CONTENT_BY_SERIES_ID_PATH)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            id_list: SeriesIdList::default(),
        }
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
