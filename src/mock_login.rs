//! Local mock backend — simulated delay, trivial credential rule.
//!
//! Accepts any non-empty identifier with a password of at least six
//! characters, after a fixed 1500 ms wait standing in for the network
//! round-trip. No code path here can fail.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use time::OffsetDateTime;

use crate::model::Authenticator;
use crate::models::{LoginParams, LoginResult, MSG_BAD_CREDENTIALS, MSG_LOGIN_SUCCESS};

/// Simulated network round-trip.
const MOCK_DELAY: Duration = Duration::from_millis(1500);
/// Minimum accepted password length, in characters.
const MIN_PASSWORD_LEN: usize = 6;

/// Login model that never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLoginModel;

impl MockLoginModel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Authenticator for MockLoginModel {
    async fn login(&self, params: &LoginParams) -> LoginResult {
        tokio::time::sleep(MOCK_DELAY).await;

        if params.identifier.is_empty() || params.password.chars().count() < MIN_PASSWORD_LEN {
            return LoginResult::failure(MSG_BAD_CREDENTIALS);
        }

        let user_id = format!("user_{}", rand::rng().random_range(1000..10_000));
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let token = format!("token_{millis}");

        LoginResult {
            success: true,
            message: MSG_LOGIN_SUCCESS.into(),
            user_id: Some(user_id),
            token: Some(token),
        }
    }
}

#[cfg(test)]
#[path = "mock_login_test.rs"]
mod tests;
