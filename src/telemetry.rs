//! Tracing setup for hosts embedding the viewport engine.
//!
//! The engine emits `debug!`/`trace!` events for scene construction, zoom
//! ticks, LOD transitions, and channel visibility flips; none of it is
//! visible until a subscriber is installed. Hosts that already run their
//! own `tracing` stack should skip this module and filter the
//! `oscillo_rs` target themselves.

/// Installs an env-filtered fmt subscriber for engine events.
///
/// Returns `true` when this call installed the global subscriber.
/// Returns `false` when the `telemetry` feature is disabled or the host
/// application already set a subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
