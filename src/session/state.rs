//! Module `state`
//!
//! Typed view of the login state kept in a [`SessionStore`].
//!
//! The credential validator never touches this; the front-end writes it after
//! an accepted submission and clears it on logout.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};

use super::store::{IS_LOGGED_IN_KEY, LOGIN_TIME_KEY, SessionStore, USER_EMAIL_KEY};

/// Login state backed by a session store.
#[derive(Debug, Default, Clone)]
pub struct Session {
    store: SessionStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store, e.g. one left over from an earlier screen.
    pub fn from_store(store: SessionStore) -> Self {
        Self { store }
    }

    /// Records an accepted login.
    pub fn login(&mut self, email: &str, at: DateTime<Utc>) {
        self.store.set(USER_EMAIL_KEY, email);
        self.store.set(IS_LOGGED_IN_KEY, "true");
        self.store
            .set(LOGIN_TIME_KEY, at.to_rfc3339_opts(SecondsFormat::Millis, true));
        info!("Session started for {}", email);
    }

    /// Clears the whole store, not only the login keys.
    pub fn logout(&mut self) {
        self.store.clear();
        info!("Session cleared");
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns whether the store marks the user as logged in.
    ///
    /// Only the exact value `"true"` counts.
    pub fn is_logged_in(&self) -> bool {
        self.store.get(IS_LOGGED_IN_KEY) == Some("true")
    }

    /// Returns the stored email, if any.
    pub fn user_email(&self) -> Option<&str> {
        self.store.get(USER_EMAIL_KEY)
    }

    /// Returns the stored email or `fallback` when none is set.
    pub fn display_email<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.user_email().unwrap_or(fallback)
    }

    /// Returns the parsed login time. A value that does not parse is logged and ignored.
    pub fn login_time(&self) -> Option<DateTime<Utc>> {
        let raw = self.store.get(LOGIN_TIME_KEY)?;
        match DateTime::parse_from_rfc3339(raw) {
            Ok(time) => Some(time.with_timezone(&Utc)),
            Err(e) => {
                warn!("Ignoring malformed {} value {:?}: {}", LOGIN_TIME_KEY, raw, e);
                None
            }
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
