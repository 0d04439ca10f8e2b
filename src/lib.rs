//! Client for the series content service: posts a list of series ids to
//! `/get_content_by_series_id` and prints the JSON reply, with an in-memory
//! mock transport for deterministic tests.

pub mod api;
pub mod config;
pub mod error;
pub mod mock;
pub mod payload;
pub mod report;
pub mod runner;
pub mod transport;

pub use reqwest::Method;

pub use api::SeriesApi;
pub use config::{DEFAULT_BASE_URL, RunnerConfig};
pub use error::{RestError, RestErrorKind, RestResult};
pub use mock::{MockFault, MockReply, MockTransport};
pub use payload::SeriesIdList;
pub use report::{Outcome, pretty_json, render};
pub use runner::Runner;
pub use transport::{
    Client, ReqwestTransport, RestBytes, RestFuture, RestRequest, RestResponse, RestTransport,
};
