//! Telemetry helpers for hosts embedding `spell-charts`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call
//! `init_default_tracing` or wire their own `tracing` subscriber; transition
//! diffs and resizes log at `debug`, per-frame ticks at `trace`.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `info` for this crate's targets.
///
/// Yields `false` without the `telemetry` feature, or when the embedding
/// article host already registered its own global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("spell_charts=info"));
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
