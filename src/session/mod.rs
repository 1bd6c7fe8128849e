//! Session state
//!
//! Ephemeral per-process key-value storage and the typed login state kept in it.

pub mod state;
pub mod store;

pub use state::Session;
pub use store::{IS_LOGGED_IN_KEY, LOGIN_TIME_KEY, SessionStore, USER_EMAIL_KEY};
