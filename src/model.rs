//! The login model facade and its backend seam.
//!
//! DESIGN
//! ======
//! The two backends used to be near-duplicate model definitions. They are
//! unified behind one `Authenticator` trait; `AuthConfig::mode` picks the
//! implementation at wiring time, and the session store is handed in by
//! whoever owns UI state.

use async_trait::async_trait;

use crate::config::{AuthConfig, AuthMode};
use crate::http_login::HttpLoginModel;
use crate::mock_login::MockLoginModel;
use crate::models::{LoginParams, LoginResult};
use crate::session::{LoginInfo, SessionStore};

/// A login backend. Implementations must never propagate an error from
/// `login`; every outcome is a normal [`LoginResult`].
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, params: &LoginParams) -> LoginResult;
}

/// Single entry point for authentication: one backend plus the injected
/// session store.
pub struct LoginModel {
    auth: Box<dyn Authenticator>,
    store: SessionStore,
}

impl LoginModel {
    /// Wire a model from an explicit backend and an injected store.
    #[must_use]
    pub fn new(auth: Box<dyn Authenticator>, store: SessionStore) -> Self {
        Self { auth, store }
    }

    /// Select the backend from configuration.
    #[must_use]
    pub fn from_config(config: &AuthConfig, store: SessionStore) -> Self {
        let auth: Box<dyn Authenticator> = match config.mode {
            AuthMode::Http => Box::new(HttpLoginModel::new(config)),
            AuthMode::Mock => Box::new(MockLoginModel::new()),
        };
        Self::new(auth, store)
    }

    /// Attempt a login. Suspends until the backend resolves; always returns
    /// a result, never an error. Does not touch the session store — the
    /// caller decides whether and when to persist.
    pub async fn login(&self, params: &LoginParams) -> LoginResult {
        self.auth.login(params).await
    }

    /// Persist the login flags. See [`SessionStore::save_login_info`].
    pub fn save_login_info(&mut self, username: &str, remember_me: bool) {
        self.store.save_login_info(username, remember_me);
    }

    /// Read the persisted login flags.
    #[must_use]
    pub fn get_login_info(&self) -> LoginInfo {
        self.store.get_login_info()
    }

    /// Reset the login flags. See [`SessionStore::clear_login_info`].
    pub fn clear_login_info(&mut self) {
        self.store.clear_login_info();
    }

    /// The injected session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.store
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
