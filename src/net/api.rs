//! REST API helpers for communicating with the catalog service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side: stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result` outputs instead of panics so auth and catalog
//! failures degrade into form/collection error messages without crashing
//! hydration. A 401/403 on an authenticated call is reported as
//! `RepositoryError::AuthenticationExpired` so the session layer can drop
//! the stale token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::{AuthError, RepositoryError};
use super::types::{Book, BookDraft, Session};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

const LOGIN_ENDPOINT: &str = "/api/users/login";
const REGISTER_ENDPOINT: &str = "/api/users/register";
#[cfg(any(test, feature = "hydrate"))]
const LIST_BOOKS_ENDPOINT: &str = "/api/books";
#[cfg(any(test, feature = "hydrate"))]
const ADD_BOOK_ENDPOINT: &str = "/api/add/books";

#[cfg(any(test, feature = "hydrate"))]
const AUTH_FALLBACK_MESSAGE: &str = "Authentication failed";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("Failed to fetch books: status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn create_failed_message(status: u16) -> String {
    format!("Failed to add book: status {status}")
}

/// Whether an authenticated call's status means the token was rejected
/// rather than the operation failing for other reasons.
#[cfg(any(test, feature = "hydrate"))]
fn is_session_rejection(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_error_from_body(body_message: Option<String>) -> AuthError {
    AuthError {
        message: body_message.unwrap_or_else(|| AUTH_FALLBACK_MESSAGE.to_owned()),
    }
}

/// Error body shape used by the auth endpoints on non-2xx responses.
#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Exchange credentials for a session via `POST /api/users/login`.
///
/// # Errors
///
/// Returns an `AuthError` carrying the service's message (or a generic
/// fallback) when the request fails or the service responds non-2xx.
pub async fn login(email: &str, password: &str) -> Result<Session, AuthError> {
    submit_credentials(LOGIN_ENDPOINT, "", email, password).await
}

/// Create an account and session via `POST /api/users/register`.
///
/// # Errors
///
/// Same contract as [`login`]; registration conflicts surface as the
/// service's message.
pub async fn register(name: &str, email: &str, password: &str) -> Result<Session, AuthError> {
    submit_credentials(REGISTER_ENDPOINT, name, email, password).await
}

/// Both auth endpoints accept the same payload; the login endpoint ignores
/// `name`.
async fn submit_credentials(
    endpoint: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(|e| AuthError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::new(e.to_string()))?;
        if !resp.ok() {
            let body_message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
            return Err(auth_error_from_body(body_message));
        }
        resp.json::<Session>().await.map_err(|e| AuthError::new(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, name, email, password);
        Err(AuthError::new("not available on server"))
    }
}

/// Fetch the full book list via `GET /api/books`.
///
/// # Errors
///
/// Returns `AuthenticationExpired` when the service rejects the token, or a
/// `Service` error for any other transport/status failure.
pub async fn fetch_books(token: &str) -> Result<Vec<Book>, RepositoryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(LIST_BOOKS_ENDPOINT)
            .header("Authorization", &bearer_header_value(token))
            .send()
            .await
            .map_err(|e| RepositoryError::Service(e.to_string()))?;
        if is_session_rejection(resp.status()) {
            return Err(RepositoryError::AuthenticationExpired);
        }
        if !resp.ok() {
            return Err(RepositoryError::Service(list_failed_message(resp.status())));
        }
        resp.json::<Vec<Book>>()
            .await
            .map_err(|e| RepositoryError::Service(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(RepositoryError::Service("not available on server".to_owned()))
    }
}

/// Create a book via `POST /api/add/books`.
///
/// The service returns the created record, but callers only need the
/// success signal; the collection is refreshed by a full list fetch.
///
/// # Errors
///
/// Same contract as [`fetch_books`].
pub async fn add_book(token: &str, draft: &BookDraft) -> Result<(), RepositoryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(ADD_BOOK_ENDPOINT)
            .header("Authorization", &bearer_header_value(token))
            .json(draft)
            .map_err(|e| RepositoryError::Service(e.to_string()))?
            .send()
            .await
            .map_err(|e| RepositoryError::Service(e.to_string()))?;
        if is_session_rejection(resp.status()) {
            return Err(RepositoryError::AuthenticationExpired);
        }
        if !resp.ok() {
            return Err(RepositoryError::Service(create_failed_message(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(RepositoryError::Service("not available on server".to_owned()))
    }
}
