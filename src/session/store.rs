//! Module `store`
//!
//! A string key-value store that lives as long as the running session and is
//! cleared as a whole on logout.

use std::collections::HashMap;

/// Key holding the accepted email.
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Key holding `"true"` while logged in; absent otherwise.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
/// Key holding the RFC 3339 login timestamp.
pub const LOGIN_TIME_KEY: &str = "loginTime";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStore {
    entries: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_value() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(USER_EMAIL_KEY), None);

        store.set(USER_EMAIL_KEY, "user@example.com");
        store.set(USER_EMAIL_KEY, "other@example.com");
        assert_eq!(store.get(USER_EMAIL_KEY), Some("other@example.com"));
    }

    #[test]
    fn test_clear_drops_unrelated_keys() {
        let mut store = SessionStore::new();
        store.set(IS_LOGGED_IN_KEY, "true");
        store.set("theme", "dark");
        store.clear();
        assert!(store.is_empty());
    }
}
