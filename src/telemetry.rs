//! Opt-in tracing bootstrap for hosts embedding the navigator.
//!
//! The controllers emit structured `tracing` events (tool-mode changes,
//! zoom commits, dropped pointer events). Hosts that already run their own
//! subscriber need nothing from here; the rest can enable the `telemetry`
//! feature and call [`init_default_tracing`] once at startup.

/// Installs a compact stderr subscriber filtered to this crate's events at
/// `info`, unless `RUST_LOG` overrides the filter.
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the `telemetry` feature is disabled or a global subscriber is already
/// set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_nav=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
