//! Configuration read from environment variables.
//!
//! - `DEPOT_LOG`: filter directives; falls back to `RUST_LOG`, then `info`.
//! - `DEPOT_LOG_FORMAT`: `json` (default), `pretty` or `compact`.

use core::str::FromStr;

use anyhow::Context;

pub const LOG_ENV: &str = "DEPOT_LOG";
pub const LOG_FORMAT_ENV: &str = "DEPOT_LOG_FORMAT";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => anyhow::bail!("unknown log format `{other}` (expected json, pretty or compact)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset variables take their defaults; a set
    /// but unparsable `DEPOT_LOG_FORMAT` is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let filter = lookup(LOG_ENV)
            .or_else(|| lookup(FALLBACK_LOG_ENV))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let format = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .with_context(|| format!("invalid {LOG_FORMAT_ENV}"))?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}
