use std::io::Write;

use crate::api::SeriesApi;
use crate::config::RunnerConfig;
use crate::error::RestResult;
use crate::report::{self, Outcome};
use crate::transport::Client;

/// One request, one report: build, send, classify, print.
pub struct Runner {
    api: SeriesApi,
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: RunnerConfig) -> Self {
        Self {
            api: SeriesApi::new(client, config.base_url.clone()),
            config,
        }
    }

    /// Transport and parse faults are returned before anything is written.
    pub async fn fetch(&self) -> RestResult<Outcome> {
        let response = self
            .api
            .get_content_by_series_id(&self.config.id_list)
            .await?;
        log::info!(
            "{} answered {} in {:?}",
            self.config.endpoint_url(),
            response.status(),
            response.elapsed
        );

        let outcome = Outcome::from_response(response)?;
        if let Outcome::HttpError { status, .. } = &outcome {
            log::warn!("series content request failed with status {status}");
        }
        Ok(outcome)
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> RestResult<Outcome> {
        let outcome = self.fetch().await?;
        report::render(&outcome, out)?;
        Ok(outcome)
    }
}
