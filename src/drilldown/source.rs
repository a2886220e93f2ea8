use indexmap::IndexMap;

use crate::error::{SeriesError, SeriesResult};
use crate::series::RawSeriesPayload;

/// Data source keyed by province name.
pub trait SeriesSource {
    fn fetch(&self, region_name: &str) -> SeriesResult<RawSeriesPayload>;
}

impl<S: SeriesSource + ?Sized> SeriesSource for &S {
    fn fetch(&self, region_name: &str) -> SeriesResult<RawSeriesPayload> {
        (**self).fetch(region_name)
    }
}

impl<S: SeriesSource + ?Sized> SeriesSource for Box<S> {
    fn fetch(&self, region_name: &str) -> SeriesResult<RawSeriesPayload> {
        (**self).fetch(region_name)
    }
}

/// In-memory source, useful for fixtures and offline replays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSeriesSource {
    payloads: IndexMap<String, RawSeriesPayload>,
}

impl StaticSeriesSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_payload(mut self, region_name: impl Into<String>, payload: RawSeriesPayload) -> Self {
        self.insert(region_name, payload);
        self
    }

    pub fn insert(&mut self, region_name: impl Into<String>, payload: RawSeriesPayload) {
        self.payloads.insert(region_name.into(), payload);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl SeriesSource for StaticSeriesSource {
    fn fetch(&self, region_name: &str) -> SeriesResult<RawSeriesPayload> {
        self.payloads
            .get(region_name)
            .cloned()
            .ok_or_else(|| SeriesError::Source(format!("no payload for region `{region_name}`")))
    }
}
