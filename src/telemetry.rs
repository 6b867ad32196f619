//! Opt-in tracing bootstrap for hosts embedding a rating control.
//!
//! The control only emits `tracing` events (`star_rating` target). Hosts that
//! already own a subscriber should ignore this module.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "star_rating=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
