use std::cell::RefCell;

use adcode_series::drilldown::{
    DrilldownConfig, RegionDrilldown, SeriesSource, StaticSeriesSource,
};
use adcode_series::region::ResolveOptions;
use adcode_series::series::{RawSeriesPayload, RawSeriesPoint};
use adcode_series::{SeriesError, SeriesResult};

fn gdp_payload() -> RawSeriesPayload {
    let mut payload = RawSeriesPayload::new();
    payload.insert(
        "GDP".to_owned(),
        vec![
            RawSeriesPoint::new("2020", "100.5"),
            RawSeriesPoint::new("2021", "110.2"),
        ],
    );
    payload
}

#[derive(Default)]
struct RecordingSource {
    requested: RefCell<Vec<String>>,
}

impl SeriesSource for RecordingSource {
    fn fetch(&self, region_name: &str) -> SeriesResult<RawSeriesPayload> {
        self.requested.borrow_mut().push(region_name.to_owned());
        Ok(gdp_payload())
    }
}

#[test]
fn drill_resolves_fetches_and_reshapes() {
    let source = StaticSeriesSource::new().with_payload("广东省", gdp_payload());
    let drilldown = RegionDrilldown::new(source, DrilldownConfig::default());

    let region = drilldown
        .drill("440000")
        .expect("drill should succeed")
        .expect("known code");
    assert_eq!(region.code, "440000");
    assert_eq!(region.name, "广东省");
    assert_eq!(region.series.len(), 1);
    assert_eq!(region.series[0].time, vec!["2020", "2021"]);
    assert_eq!(region.series[0].value, vec![100.5, 110.2]);
    assert!(region.report.is_clean());
}

#[test]
fn drill_accepts_integer_codes() {
    let source = RecordingSource::default();
    let drilldown = RegionDrilldown::new(&source, DrilldownConfig::default());

    drilldown.drill(110000u32).expect("drill").expect("known code");
    assert_eq!(*source.requested.borrow(), vec!["北京市".to_owned()]);
}

#[test]
fn unresolved_codes_skip_the_source_by_default() {
    let source = RecordingSource::default();
    let drilldown = RegionDrilldown::new(&source, DrilldownConfig::default());

    assert!(drilldown.drill("999999").expect("drill").is_none());
    assert!(drilldown.drill("abc").expect("drill").is_none());
    assert!(source.requested.borrow().is_empty());
}

#[test]
fn excluded_special_region_is_skipped() {
    let source = RecordingSource::default();
    let config = DrilldownConfig::default()
        .with_resolve_options(ResolveOptions::default().with_special_regions(false));
    let drilldown = RegionDrilldown::new(&source, config);

    assert!(drilldown.drill("710000").expect("drill").is_none());
    assert!(drilldown.drill("440000").expect("drill").is_some());
    assert_eq!(*source.requested.borrow(), vec!["广东省".to_owned()]);
}

#[test]
fn unresolved_codes_use_fallback_when_not_skipping() {
    let source = RecordingSource::default();
    let config = DrilldownConfig::default()
        .with_skip_unresolved(false)
        .with_resolve_options(ResolveOptions::default().with_fallback("全国"));
    let drilldown = RegionDrilldown::new(&source, config);

    let region = drilldown.drill("999999").expect("drill").expect("fetched");
    assert_eq!(region.code, "999999");
    assert_eq!(region.name, "全国");
    assert_eq!(*source.requested.borrow(), vec!["全国".to_owned()]);
}

#[test]
fn source_failures_propagate() {
    let drilldown = RegionDrilldown::new(StaticSeriesSource::new(), DrilldownConfig::default());

    match drilldown.drill("440000") {
        Err(SeriesError::Source(message)) => assert!(message.contains("广东省")),
        other => panic!("unexpected drill result: {other:?}"),
    }
}

#[test]
fn boxed_sources_are_usable() {
    let source: Box<dyn SeriesSource> =
        Box::new(StaticSeriesSource::new().with_payload("上海市", gdp_payload()));
    let drilldown = RegionDrilldown::new(source, DrilldownConfig::default());
    assert!(drilldown.drill("310000").expect("drill").is_some());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: DrilldownConfig = serde_json::from_str("{}").expect("config");
    assert_eq!(config, DrilldownConfig::default());
    assert!(config.skip_unresolved);
    assert!(config.resolve.include_special_regions);
}
