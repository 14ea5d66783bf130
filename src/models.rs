//! Wire and outcome types for the login flow.

use serde::{Deserialize, Serialize};

// =============================================================================
// FIXED USER-FACING MESSAGES
// =============================================================================

/// Default message for a successful login whose response carries none.
pub const MSG_LOGIN_SUCCESS: &str = "login successful";
/// Fixed message for a rejected credential pair (mock backend).
pub const MSG_BAD_CREDENTIALS: &str = "invalid username or password";
/// Fixed generic message covering transport and parse failures.
pub const MSG_NETWORK_FAILED: &str = "network request failed";

// =============================================================================
// REQUEST / OUTCOME
// =============================================================================

/// Credential pair sent as the login request body. Transient: constructed
/// by the caller per call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginParams {
    pub identifier: String,
    pub password: String,
}

/// Uniform outcome of every login attempt, whatever the failure cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl LoginResult {
    /// Failure outcome carrying only a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into(), user_id: None, token: None }
    }
}

// =============================================================================
// SERVER RECORDS
// =============================================================================

/// Server-side profile record. Received from the backend on login, not
/// otherwise used by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub user_phone: String,
    pub password: String,
    pub employee_id: String,
    pub user_name: String,
    pub user_role: String,
    pub user_login_city: Option<String>,
    pub user_bind_imei: Option<String>,
    pub token: Option<String>,
}

/// Generic envelope the backend wraps most payloads in. The login path
/// itself reads a flat body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
