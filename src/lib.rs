//! Client-side authentication model: one login surface, two backends.
//!
//! ARCHITECTURE
//! ============
//! `LoginModel` is the single entry point. It owns an [`Authenticator`]
//! backend — either the real HTTP endpoint or a local mock with a simulated
//! delay, chosen by [`AuthConfig`] — plus an injected [`SessionStore`]
//! holding the persisted login flags. Every login attempt resolves to a
//! plain [`LoginResult`]; no path propagates an error to the caller.

pub mod config;
pub mod http_login;
pub mod mock_login;
pub mod model;
pub mod models;
pub mod session;

pub use config::{AuthConfig, AuthMode};
pub use http_login::{HttpLoginModel, LoginError};
pub use mock_login::MockLoginModel;
pub use model::{Authenticator, LoginModel};
pub use models::{ApiResponse, LoginParams, LoginResult, User};
pub use session::{Entry, LoginInfo, SessionStore};
