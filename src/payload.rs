use serde::{Deserialize, Serialize};

use crate::error::RestResult;

/// Body of a `get_content_by_series_id` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesIdList {
    pub id_list: Vec<i64>,
}

impl SeriesIdList {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            id_list: ids.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id_list.is_empty()
    }

    pub fn to_json(&self) -> RestResult<Vec<u8>> {
        Ok(sonic_rs::to_vec(self)?)
    }
}

impl Default for SeriesIdList {
    fn default() -> Self {
        Self::new([13])
    }
}

impl From<Vec<i64>> for SeriesIdList {
    fn from(id_list: Vec<i64>) -> Self {
        Self { id_list }
    }
}
