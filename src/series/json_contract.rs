use crate::error::{SeriesError, SeriesResult};

use super::{ChartSeries, RawSeriesPayload};

/// Decodes a data-source response body.
pub fn payload_from_json_str(input: &str) -> SeriesResult<RawSeriesPayload> {
    serde_json::from_str(input)
        .map_err(|e| SeriesError::InvalidPayload(format!("failed to parse series payload: {e}")))
}

/// Decodes a payload that was already parsed into a `serde_json::Value`.
pub fn payload_from_json_value(value: serde_json::Value) -> SeriesResult<RawSeriesPayload> {
    serde_json::from_value(value)
        .map_err(|e| SeriesError::InvalidPayload(format!("failed to parse series payload: {e}")))
}

pub fn chart_series_to_json_pretty(series: &[ChartSeries]) -> SeriesResult<String> {
    serde_json::to_string_pretty(series).map_err(|e| {
        SeriesError::InvalidPayload(format!("failed to serialize chart series: {e}"))
    })
}
