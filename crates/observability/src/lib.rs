//! Tracing/logging setup shared by processes embedding the domain crates.

/// Initialize process-wide tracing from the environment.
///
/// An invalid configuration falls back to the defaults and is logged once the
/// subscriber is up; use [`config::ObservabilityConfig::from_env`] with
/// [`try_init`] to fail instead.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match config::ObservabilityConfig::from_env() {
        Ok(config) => self::tracing::init(&config),
        Err(e) => {
            self::tracing::init(&config::ObservabilityConfig::default());
            ::tracing::warn!(error = %format!("{e:#}"), "invalid observability config; using defaults");
        }
    }
}

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
pub use self::tracing::try_init;
