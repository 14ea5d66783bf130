//! Login configuration — base URL, request timeout, backend selection.

use std::time::Duration;

/// API origin baked into the mobile build.
pub const DEFAULT_BASE_URL: &str = "http://47.100.208.47:8081";

/// Fixed request timeout (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Which login backend to wire up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Real HTTP backend against the remote auth endpoint.
    Http,
    /// Local mock with a simulated network delay.
    Mock,
}

/// Login model configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub mode: AuthMode,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.into(), timeout: DEFAULT_TIMEOUT, mode: AuthMode::Http }
    }
}

impl AuthConfig {
    /// Load from `LOGIN_BASE_URL`, `LOGIN_TIMEOUT_MS`, `LOGIN_MODE`.
    /// Every variable is optional; a missing or unparseable value falls
    /// back to the built-in default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("LOGIN_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout = std::env::var("LOGIN_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map_or(defaults.timeout, Duration::from_millis);
        let mode = match std::env::var("LOGIN_MODE").as_deref() {
            Ok("mock") => AuthMode::Mock,
            _ => AuthMode::Http,
        };
        Self { base_url, timeout, mode }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
