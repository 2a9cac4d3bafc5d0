//! Environment-derived logger configuration

use std::time::Duration;

/// Timeout used when none (or a zero one) is supplied
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// "Do not track" convention variable
pub const ENV_DO_NOT_TRACK: &str = "DO_NOT_TRACK";
/// Product-specific opt-out variable
pub const ENV_NO_ANALYTICS: &str = "SCARF_NO_ANALYTICS";
/// Product-specific verbosity variable
pub const ENV_VERBOSE: &str = "SCARF_VERBOSE";

/// Immutable logger configuration, resolved once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Endpoint URL; only validated when an event is sent
    pub endpoint: String,
    /// Timeout applied to calls that don't override it
    pub default_timeout: Duration,
    /// Analytics opted out via environment
    pub disabled: bool,
    /// Write diagnostic lines to the sink
    pub verbose: bool,
}

impl LoggerConfig {
    /// Build a config from the process environment
    pub fn from_env(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self::from_lookup(endpoint, timeout, |key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary environment lookup
    pub fn from_lookup<F>(endpoint: impl Into<String>, timeout: Option<Duration>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).as_deref().is_some_and(is_truthy);

        Self {
            endpoint: endpoint.into(),
            default_timeout: resolve_timeout(timeout, DEFAULT_TIMEOUT),
            disabled: flag(ENV_DO_NOT_TRACK) || flag(ENV_NO_ANALYTICS),
            verbose: flag(ENV_VERBOSE),
        }
    }
}

/// Use `timeout` when it is strictly positive, otherwise `fallback`
pub fn resolve_timeout(timeout: Option<Duration>, fallback: Duration) -> Duration {
    timeout.filter(|t| !t.is_zero()).unwrap_or(fallback)
}

/// Case-insensitive match against `1`, `true`, `yes`, `on`
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
