use super::*;

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

// =============================================================================
// AuthConfig::from_env — env manipulation requires unsafe in edition 2024.
// A static lock serializes these tests so they pass under the default
// parallel test runner.
// =============================================================================

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

unsafe fn clear_login_env() {
    unsafe {
        std::env::remove_var("LOGIN_BASE_URL");
        std::env::remove_var("LOGIN_TIMEOUT_MS");
        std::env::remove_var("LOGIN_MODE");
    }
}

#[test]
fn from_env_all_missing_uses_defaults() {
    let _guard = lock_env();
    unsafe { clear_login_env() };
    let config = AuthConfig::from_env();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.mode, AuthMode::Http);
}

#[test]
fn from_env_overrides_base_url_and_timeout() {
    let _guard = lock_env();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_BASE_URL", "http://localhost:9999");
        std::env::set_var("LOGIN_TIMEOUT_MS", "2500");
    }
    let config = AuthConfig::from_env();
    assert_eq!(config.base_url, "http://localhost:9999");
    assert_eq!(config.timeout, Duration::from_millis(2500));
    unsafe { clear_login_env() };
}

#[test]
fn from_env_mock_mode() {
    let _guard = lock_env();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_MODE", "mock");
    }
    assert_eq!(AuthConfig::from_env().mode, AuthMode::Mock);
    unsafe { clear_login_env() };
}

#[test]
fn from_env_unknown_mode_stays_http() {
    let _guard = lock_env();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_MODE", "staging");
    }
    assert_eq!(AuthConfig::from_env().mode, AuthMode::Http);
    unsafe { clear_login_env() };
}

#[test]
fn from_env_unparseable_timeout_falls_back() {
    let _guard = lock_env();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_TIMEOUT_MS", "soon");
    }
    assert_eq!(AuthConfig::from_env().timeout, DEFAULT_TIMEOUT);
    unsafe { clear_login_env() };
}

#[test]
fn from_env_empty_base_url_falls_back() {
    let _guard = lock_env();
    unsafe {
        clear_login_env();
        std::env::set_var("LOGIN_BASE_URL", "");
    }
    assert_eq!(AuthConfig::from_env().base_url, DEFAULT_BASE_URL);
    unsafe { clear_login_env() };
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn default_matches_fixed_constants() {
    let config = AuthConfig::default();
    assert_eq!(config.base_url, "http://47.100.208.47:8081");
    assert_eq!(config.timeout, Duration::from_millis(60_000));
    assert_eq!(config.mode, AuthMode::Http);
}
