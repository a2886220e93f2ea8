//! adcode-series: province adcode resolution and chart-ready series reshaping.
//!
//! `region` maps six-digit administrative-division codes to province names
//! and back, `series` flattens `name → [[time, value], ...]` payloads into
//! parallel time/value vectors, and `drilldown` chains both around a
//! pluggable data source.

pub mod drilldown;
pub mod error;
pub mod region;
pub mod series;
pub mod telemetry;

pub use drilldown::{DrilldownConfig, RegionDrilldown, RegionSeries, SeriesSource};
pub use error::{SeriesError, SeriesResult};
pub use region::{ResolveOptions, resolve_code, resolve_name};
pub use series::{ChartSeries, RawSeriesPayload, RawSeriesPoint, reshape};
