use adcode_series::series::{
    RawSeriesPayload, RawSeriesPoint, UnparseableValue, payload_from_json_str, reshape,
    reshape_with_report,
};
use approx::assert_relative_eq;
use serde_json::{Value, json};

fn payload(entries: Vec<(&str, Vec<RawSeriesPoint>)>) -> RawSeriesPayload {
    entries
        .into_iter()
        .map(|(name, points)| (name.to_owned(), points))
        .collect()
}

#[test]
fn empty_payload_yields_no_series() {
    assert!(reshape(&RawSeriesPayload::new()).is_empty());
}

#[test]
fn string_values_are_parsed_in_order() {
    let input = payload(vec![(
        "GDP",
        vec![
            RawSeriesPoint::new("2020", "100.5"),
            RawSeriesPoint::new("2021", "110.2"),
        ],
    )]);

    let series = reshape(&input);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].name, "GDP");
    assert_eq!(series[0].time, vec!["2020", "2021"]);
    assert_eq!(series[0].value, vec![100.5, 110.2]);
}

#[test]
fn numeric_components_are_coerced() {
    let input = payload(vec![(
        "人口",
        vec![
            RawSeriesPoint::new(2019, 12_601),
            RawSeriesPoint::new(2020, 12_624.5),
        ],
    )]);

    let series = reshape(&input);
    assert_eq!(series[0].time, vec!["2019", "2020"]);
    assert_relative_eq!(series[0].value[0], 12_601.0);
    assert_relative_eq!(series[0].value[1], 12_624.5);
}

#[test]
fn series_follow_payload_key_order() {
    let input = payload_from_json_str(
        r#"{"z_last": [["2020", "1"]], "a_first": [["2020", "2"]], "m_mid": []}"#,
    )
    .expect("payload");

    let names: Vec<String> = reshape(&input).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["z_last", "a_first", "m_mid"]);
}

#[test]
fn unparseable_values_become_nan_without_dropping_points() {
    let input = payload(vec![(
        "GDP",
        vec![
            RawSeriesPoint::new("2019", "n/a"),
            RawSeriesPoint::new("2020", "100.5"),
            RawSeriesPoint::new("2021", Value::Null),
            RawSeriesPoint::new("2022", ""),
        ],
    )]);

    let (series, report) = reshape_with_report(&input);
    let gdp = &series[0];
    assert_eq!(gdp.len(), 4);
    assert_eq!(gdp.time.len(), gdp.value.len());
    assert!(gdp.value[0].is_nan());
    assert_relative_eq!(gdp.value[1], 100.5);
    assert!(gdp.value[2].is_nan());
    assert!(gdp.value[3].is_nan());

    assert!(!report.is_clean());
    let indices: Vec<usize> = report.unparseable.iter().map(|v| v.index).collect();
    assert_eq!(indices, vec![0, 2, 3]);
    assert_eq!(
        report.unparseable[0],
        UnparseableValue {
            series: "GDP".to_owned(),
            index: 0,
            raw: json!("n/a"),
        }
    );
}

#[test]
fn clean_payload_reports_nothing() {
    let input = payload(vec![("GDP", vec![RawSeriesPoint::new("2020", 1)])]);
    let (_, report) = reshape_with_report(&input);
    assert!(report.is_clean());
}

#[test]
fn points_iterate_as_pairs() {
    let input = payload(vec![(
        "GDP",
        vec![
            RawSeriesPoint::new("2020", "1.5"),
            RawSeriesPoint::new("2021", "2.5"),
        ],
    )]);
    let series = reshape(&input);
    let pairs: Vec<(&str, f64)> = series[0].points().collect();
    assert_eq!(pairs, vec![("2020", 1.5), ("2021", 2.5)]);
}
