//! Session state for the authenticated catalog user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the app-level state bundle and read by both the auth flow and
//! the book repository; catalog calls take their bearer token from here.
//! Durable persistence of the token/user pair lives in `util::persistence`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Session;

/// Session lifecycle state: authenticated with a token, or signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Current session, absent when signed out.
    pub session: Option<Session>,
}

impl SessionState {
    /// State for a freshly granted or restored session.
    pub fn authenticated(session: Session) -> Self {
        Self { session: Some(session) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Bearer token for catalog requests, when authenticated.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}
