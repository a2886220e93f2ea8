use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SeriesError, SeriesResult};
use crate::series::{RawSeriesPayload, payload_from_json_str};

use super::SeriesSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSourceConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpSourceConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn default_timeout_secs() -> u64 {
    12
}

/// Fetches `GET <base-url>/<region name>` with a blocking reqwest client.
#[derive(Debug, Clone)]
pub struct HttpSeriesSource {
    client: Client,
    base_url: Url,
}

impl HttpSeriesSource {
    pub fn new(config: HttpSourceConfig) -> SeriesResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SeriesError::Source(format!("invalid base url `{}`: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SeriesError::Source(format!(
                "base url `{base_url}` cannot carry path segments"
            )));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SeriesError::Source(format!("reqwest client error: {e}")))?;
        Ok(Self { client, base_url })
    }

    /// Appends the region name as a single percent-encoded path segment.
    pub fn region_url(&self, region_name: &str) -> SeriesResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                SeriesError::Source(format!(
                    "base url `{}` cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(region_name);
        Ok(url)
    }
}

impl SeriesSource for HttpSeriesSource {
    fn fetch(&self, region_name: &str) -> SeriesResult<RawSeriesPayload> {
        let url = self.region_url(region_name)?;
        debug!(%url, region = region_name, "fetch region series");
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| SeriesError::Source(format!("request for `{region_name}` failed: {e}")))?;
        payload_from_json_str(&body)
    }
}
