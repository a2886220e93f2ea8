pub mod json_contract;
pub mod raw;
pub mod reshape;

pub use json_contract::{
    chart_series_to_json_pretty, payload_from_json_str, payload_from_json_value,
};
pub use raw::{RawSeriesPayload, RawSeriesPoint, coerce_time_label, parse_observation};
pub use reshape::{ChartSeries, ReshapeReport, UnparseableValue, reshape, reshape_with_report};
