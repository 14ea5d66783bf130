//! Real login backend — POST to the remote auth endpoint.
//!
//! ERROR FUNNEL
//! ============
//! Every failure mode collapses into a failure `LoginResult`: a non-200
//! status embeds the code in the message, transport and parse errors are
//! logged with their cause and replaced by one fixed generic message. The
//! caller always gets a normal return.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::AuthConfig;
use crate::model::Authenticator;
use crate::models::{LoginParams, LoginResult, MSG_LOGIN_SUCCESS, MSG_NETWORK_FAILED};

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat success body: `message`, `userId`, `token`, all optional.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    message: Option<String>,
    user_id: Option<String>,
    token: Option<String>,
}

/// Login model backed by the remote HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpLoginModel {
    http: reqwest::Client,
    base_url: String,
    timeout: std::time::Duration,
}

impl HttpLoginModel {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        }
    }

    /// Issue the login POST and map the response. Errors bubble up to
    /// [`Authenticator::login`], which converts and logs them.
    async fn attempt(&self, params: &LoginParams) -> Result<LoginResult, LoginError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .timeout(self.timeout)
            .json(params)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            let status = resp.status().as_u16();
            return Ok(LoginResult::failure(format!("request failed with status {status}")));
        }

        let body = resp.text().await?;
        let parsed: LoginResponse = serde_json::from_str(&body)?;
        Ok(LoginResult {
            success: true,
            message: parsed.message.unwrap_or_else(|| MSG_LOGIN_SUCCESS.into()),
            user_id: parsed.user_id,
            token: parsed.token,
        })
    }
}

#[async_trait]
impl Authenticator for HttpLoginModel {
    async fn login(&self, params: &LoginParams) -> LoginResult {
        match self.attempt(params).await {
            Ok(result) => {
                tracing::debug!(success = result.success, "login request completed");
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "login request failed");
                LoginResult::failure(MSG_NETWORK_FAILED)
            }
        }
    }
}

#[cfg(test)]
#[path = "http_login_test.rs"]
mod tests;
