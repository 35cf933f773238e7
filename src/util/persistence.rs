//! Browser localStorage persistence for the session token and identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page reload must resume the session without re-contacting the service.
//! The token is stored raw and the user as JSON under fixed keys; absent or
//! corrupt values read back as "no session".

use crate::net::types::Session;

/// localStorage key holding the raw bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";
/// localStorage key holding the JSON-encoded user record.
pub const USER_STORAGE_KEY: &str = "user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted session, if a complete and well-formed one exists.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        let raw_user = storage.get_item(USER_STORAGE_KEY).ok().flatten()?;
        let user = serde_json::from_str(&raw_user).ok()?;
        Some(Session { token, user })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session under both keys. Callers write storage before
/// publishing the in-memory session state.
pub fn save_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw_user) = serde_json::to_string(&session.user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_STORAGE_KEY, &session.token);
        let _ = storage.set_item(USER_STORAGE_KEY, &raw_user);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove any persisted session.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        let _ = storage.remove_item(USER_STORAGE_KEY);
    }
}
