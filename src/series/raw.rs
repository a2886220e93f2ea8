use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Series name → chronologically ordered observations.
///
/// Key order follows the source document, which keeps `reshape` output
/// deterministic.
pub type RawSeriesPayload = IndexMap<String, Vec<RawSeriesPoint>>;

/// One `[timeLabel, value]` observation as received from the data source.
///
/// Both components are kept as raw JSON scalars; coercion happens in
/// `reshape`. Short arrays fill missing components with `null` and extra
/// elements are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct RawSeriesPoint {
    pub time: Value,
    pub value: Value,
}

impl RawSeriesPoint {
    #[must_use]
    pub fn new(time: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            time: time.into(),
            value: value.into(),
        }
    }
}

impl From<Vec<Value>> for RawSeriesPoint {
    fn from(components: Vec<Value>) -> Self {
        let mut components = components.into_iter();
        let time = components.next().unwrap_or(Value::Null);
        let value = components.next().unwrap_or(Value::Null);
        Self { time, value }
    }
}

impl From<RawSeriesPoint> for Vec<Value> {
    fn from(point: RawSeriesPoint) -> Self {
        vec![point.time, point.value]
    }
}

/// Renders a time component the way it is shown on a chart axis.
///
/// Strings pass through; numbers drop a trailing `.0`; everything else uses
/// its JSON text (`null`, `true`, ...).
#[must_use]
pub fn coerce_time_label(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        Value::Number(number) if number.is_f64() => number
            .as_f64()
            .map_or_else(|| number.to_string(), |value| value.to_string()),
        other => other.to_string(),
    }
}

/// Parses a value component as `f64`.
///
/// Strings are trimmed and parsed with Rust float syntax; text spelling out
/// `NaN` counts as unparseable. Returns `None` for anything else that is not
/// a JSON number.
#[must_use]
pub fn parse_observation(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan()),
        _ => None,
    }
}
