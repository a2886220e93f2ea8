//! Telemetry helpers for applications embedding `adcode-series`.
//!
//! Resolution and reshaping only emit `tracing` events; installing a
//! subscriber is left to the host unless it opts into the `telemetry` feature.

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_TRACING_FILTER: &str = "adcode_series=info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
