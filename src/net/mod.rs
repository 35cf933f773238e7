//! Networking modules for the catalog service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the four REST calls (login, register, list, create),
//! `error` defines the failure kinds they report, and `types` holds the
//! shared wire schema.

pub mod api;
pub mod error;
pub mod types;
