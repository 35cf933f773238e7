//! Error types for catalog service calls.
//!
//! ERROR HANDLING
//! ==============
//! None of these are fatal. Auth failures surface on the auth form, catalog
//! failures on the collection state, and the user retries by resubmitting.
//! The one special case is `AuthenticationExpired`: the service rejected the
//! bearer token, so the stored session is dead and the client transitions
//! back to the signed-out state instead of showing a generic failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure from the login or register endpoints.
///
/// Carries the human-readable message from the service response body, or a
/// generic fallback when the body had none.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Failure from an authenticated catalog operation (list or create).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The service rejected the bearer token; the local session is stale.
    #[error("Your session has expired. Please log in again.")]
    AuthenticationExpired,
    /// Transport failure or any other non-auth service error.
    #[error("{0}")]
    Service(String),
}
