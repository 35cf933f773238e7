//! # bookshelf
//!
//! Browser client for the bookshelf catalog service. Owns the authenticated
//! session (login, register, logout, resume-on-restart) and the locally
//! cached book collection with its loading/error state machine. The
//! embedding UI layer renders from the state handles in [`app::ClientState`]
//! and calls the flow functions in [`app`]; no rendering happens here.
//!
//! Browser-only I/O (HTTP via `gloo-net`, localStorage via `web-sys`) is
//! gated behind the `hydrate` feature, so all state logic compiles and
//! tests natively.

pub mod app;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger. The
/// embedding UI calls [`app::provide_client_state`] and
/// [`app::resume_session`] once its reactive root exists.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
