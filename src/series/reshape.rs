use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::raw::{RawSeriesPayload, coerce_time_label, parse_observation};

/// Chart-ready series: `time[i]` and `value[i]` describe the same observation.
///
/// Unparseable observations are `f64::NAN`, which `serde_json` writes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub time: Vec<String>,
    pub value: Vec<f64>,
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates `(time, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.time
            .iter()
            .map(String::as_str)
            .zip(self.value.iter().copied())
    }
}

/// A value component that could not be parsed and became `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnparseableValue {
    pub series: String,
    pub index: usize,
    pub raw: Value,
}

/// Diagnostics collected while reshaping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReshapeReport {
    pub unparseable: Vec<UnparseableValue>,
}

impl ReshapeReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unparseable.is_empty()
    }
}

/// Converts a raw payload into one `ChartSeries` per key, in payload order.
#[must_use]
pub fn reshape(payload: &RawSeriesPayload) -> Vec<ChartSeries> {
    reshape_with_report(payload).0
}

/// Same as `reshape`, also returning every observation that became `NaN`.
///
/// A bad observation never drops its point, so lengths always match the input.
#[must_use]
pub fn reshape_with_report(payload: &RawSeriesPayload) -> (Vec<ChartSeries>, ReshapeReport) {
    let mut report = ReshapeReport::default();
    let mut series = Vec::with_capacity(payload.len());
    let mut point_count = 0usize;

    for (name, points) in payload {
        point_count += points.len();
        let mut time = Vec::with_capacity(points.len());
        let mut value = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            time.push(coerce_time_label(&point.time));
            let parsed = parse_observation(&point.value).unwrap_or_else(|| {
                warn!(
                    series = %name,
                    index,
                    raw = %point.value,
                    "unparseable observation, substituting NaN"
                );
                report.unparseable.push(UnparseableValue {
                    series: name.clone(),
                    index,
                    raw: point.value.clone(),
                });
                f64::NAN
            });
            value.push(parsed);
        }
        series.push(ChartSeries {
            name: name.clone(),
            time,
            value,
        });
    }

    debug!(
        series_count = series.len(),
        point_count,
        unparseable_count = report.unparseable.len(),
        "reshape payload"
    );
    (series, report)
}
