//! Persisted login flags — the session key-value store.
//!
//! DESIGN
//! ======
//! Four independent entries: `username`, `isLoggedIn`, `rememberMe`,
//! `loginTime`. The store is an explicit value injected into `LoginModel`
//! rather than process-wide storage; mutation takes `&mut self`, so a
//! concurrent writer is a compile error instead of an unspecified race.
//!
//! TRADE-OFFS
//! ==========
//! `clear_login_info` deliberately leaves `loginTime` behind. The original
//! model cleared only the other three entries, and callers may rely on the
//! last stamp surviving a logout.

use std::collections::HashMap;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub(crate) const KEY_USERNAME: &str = "username";
pub(crate) const KEY_IS_LOGGED_IN: &str = "isLoggedIn";
pub(crate) const KEY_REMEMBER_ME: &str = "rememberMe";
pub(crate) const KEY_LOGIN_TIME: &str = "loginTime";

/// A stored entry. The store only ever holds strings and booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Str(String),
    Bool(bool),
}

/// Snapshot returned by [`SessionStore::get_login_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInfo {
    pub username: String,
    pub is_logged_in: bool,
    pub remember_me: bool,
}

/// Key-value store for the persisted login flags, with set-or-create
/// semantics per entry.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<String, Entry>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-or-create a single entry.
    pub fn set(&mut self, key: &str, value: Entry) {
        self.entries.insert(key.to_owned(), value);
    }

    /// Read an entry, `None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    fn get_string(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(Entry::Str(s)) => s.clone(),
            _ => String::new(),
        }
    }

    fn get_bool(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Entry::Bool(true)))
    }

    /// Overwrite all four entries, stamping `loginTime` with the current
    /// instant. Pure setter: nothing checks that a login actually succeeded.
    pub fn save_login_info(&mut self, username: &str, remember_me: bool) {
        self.set(KEY_USERNAME, Entry::Str(username.to_owned()));
        self.set(KEY_IS_LOGGED_IN, Entry::Bool(true));
        self.set(KEY_REMEMBER_ME, Entry::Bool(remember_me));
        self.set(KEY_LOGIN_TIME, Entry::Str(now_rfc3339()));
    }

    /// Read the three login flags, substituting `""` / false for absent
    /// entries. No side effects.
    #[must_use]
    pub fn get_login_info(&self) -> LoginInfo {
        LoginInfo {
            username: self.get_string(KEY_USERNAME),
            is_logged_in: self.get_bool(KEY_IS_LOGGED_IN),
            remember_me: self.get_bool(KEY_REMEMBER_ME),
        }
    }

    /// Reset username and the two flags. `loginTime` is not touched (see
    /// module docs).
    pub fn clear_login_info(&mut self) {
        self.set(KEY_USERNAME, Entry::Str(String::new()));
        self.set(KEY_IS_LOGGED_IN, Entry::Bool(false));
        self.set(KEY_REMEMBER_ME, Entry::Bool(false));
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
