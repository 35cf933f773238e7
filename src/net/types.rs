//! Shared wire DTOs for the catalog service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON payloads exactly so serde handles
//! the boundary and no hand-rolled mapping layer is needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated catalog user as returned by the login/register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier assigned by the service.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email; some service versions omit it from the auth payload.
    #[serde(default)]
    pub email: String,
}

/// The bearer token and identity granted by a successful login/register.
///
/// Exists only while authenticated. Persisted to localStorage so a restart
/// resumes the session without contacting the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token sent with every authenticated request.
    pub token: String,
    /// Identity of the signed-in user.
    pub user: User,
}

/// A catalog book record. Immutable once returned by the service; the
/// client only ever replaces its cached list wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier assigned by the service.
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
}

/// Payload for a new book submission. The service assigns the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub description: String,
}
