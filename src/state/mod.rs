//! Client state modules shared with the presentation layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authenticated identity, `books` the cached catalog
//! collection, and `auth_form`/`book_form` the form view-models that drive
//! them. All are plain data with pure transitions; the async flows that
//! connect them to the network live in `crate::app`.

pub mod auth_form;
pub mod book_form;
pub mod books;
pub mod session;
