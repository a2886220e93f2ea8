//! Map interaction → province name → remote payload → chart series.
//!
//! `RegionDrilldown` wires the resolver and the reshaper around a
//! `SeriesSource`. Transport lives behind the trait; the reqwest-backed
//! source is only compiled with the `http-source` feature.

#[cfg(feature = "http-source")]
pub mod http;
pub mod source;

#[cfg(feature = "http-source")]
pub use http::{HttpSeriesSource, HttpSourceConfig};
pub use source::{SeriesSource, StaticSeriesSource};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SeriesResult;
use crate::region::{AdcodeInput, ResolveOptions, lookup, resolve_name};
use crate::series::{ChartSeries, ReshapeReport, reshape_with_report};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrilldownConfig {
    #[serde(default)]
    pub resolve: ResolveOptions,
    /// When set, codes that do not resolve never reach the source.
    #[serde(default = "default_skip_unresolved")]
    pub skip_unresolved: bool,
}

impl Default for DrilldownConfig {
    fn default() -> Self {
        Self {
            resolve: ResolveOptions::default(),
            skip_unresolved: default_skip_unresolved(),
        }
    }
}

impl DrilldownConfig {
    #[must_use]
    pub fn with_resolve_options(mut self, resolve: ResolveOptions) -> Self {
        self.resolve = resolve;
        self
    }

    #[must_use]
    pub fn with_skip_unresolved(mut self, skip_unresolved: bool) -> Self {
        self.skip_unresolved = skip_unresolved;
        self
    }
}

fn default_skip_unresolved() -> bool {
    true
}

/// Chart-ready result for one activated region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSeries {
    pub code: String,
    pub name: String,
    pub series: Vec<ChartSeries>,
    pub report: ReshapeReport,
}

pub struct RegionDrilldown<S: SeriesSource> {
    source: S,
    config: DrilldownConfig,
}

impl<S: SeriesSource> RegionDrilldown<S> {
    #[must_use]
    pub fn new(source: S, config: DrilldownConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn config(&self) -> &DrilldownConfig {
        &self.config
    }

    /// Handles a region activation (double-click) for `code`.
    ///
    /// Returns `Ok(None)` for unresolvable codes when `skip_unresolved` is set.
    /// Otherwise the source is queried with the resolved name, or with the
    /// fallback produced by `resolve_name`.
    pub fn drill(&self, code: impl AdcodeInput) -> SeriesResult<Option<RegionSeries>> {
        let code = code.normalized_code();
        let name = match lookup(&*code, self.config.resolve.include_special_regions) {
            Some(name) => name.to_owned(),
            None if self.config.skip_unresolved => {
                debug!(code = %code, "skipping drilldown for unresolved region code");
                return Ok(None);
            }
            None => resolve_name(&*code, &self.config.resolve),
        };

        let payload = self.source.fetch(&name).inspect_err(|err| {
            warn!(code = %code, region = %name, error = %err, "series source failed");
        })?;
        let (series, report) = reshape_with_report(&payload);
        debug!(
            code = %code,
            region = %name,
            series_count = series.len(),
            "drilldown complete"
        );

        Ok(Some(RegionSeries {
            code: code.into_owned(),
            name,
            series,
            report,
        }))
    }
}
