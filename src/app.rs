//! App-level wiring: the shared state bundle and the async flows that
//! connect the forms, the session, and the cached catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The embedding UI renders from the `ClientState` handles and calls the
//! flow functions here on user actions. Control flow runs auth form →
//! session → book re-fetch; the catalog cache is cleared whenever the
//! session ends.
//!
//! ERROR HANDLING
//! ==============
//! Flow failures land on the relevant state field (form error or collection
//! error) and the client stays usable; every retry is user-initiated. A
//! bearer-token rejection drops the session entirely instead of surfacing a
//! generic message.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net;
#[cfg(feature = "hydrate")]
use crate::net::error::RepositoryError;
#[cfg(feature = "hydrate")]
use crate::state::auth_form::AuthMode;
use crate::state::auth_form::AuthFormState;
use crate::state::book_form::BookFormState;
use crate::state::books::BooksState;
use crate::state::session::SessionState;
use crate::util::persistence;

/// Form-level retry prompt shown when a create call fails. The service's
/// own message lands on the shared collection error.
#[cfg(feature = "hydrate")]
const ADD_BOOK_FAILED_MESSAGE: &str = "Failed to add book. Please try again.";
const MISSING_BOOK_FIELDS_MESSAGE: &str = "Enter a title, author, and description first.";
const SIGN_IN_REQUIRED_MESSAGE: &str = "Please login to add books";

/// Shared client state handles.
///
/// One owned instance per process lifetime, created at startup and passed
/// (or provided via context) to every flow and component that needs it.
#[derive(Clone, Copy)]
pub struct ClientState {
    pub session: RwSignal<SessionState>,
    pub books: RwSignal<BooksState>,
    pub auth_form: RwSignal<AuthFormState>,
    pub book_form: RwSignal<BookFormState>,
}

impl ClientState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            books: RwSignal::new(BooksState::default()),
            auth_form: RwSignal::new(AuthFormState::default()),
            book_form: RwSignal::new(BookFormState::default()),
        }
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the client state bundle and provide it via context for the
/// embedding UI tree.
pub fn provide_client_state() -> ClientState {
    let state = ClientState::new();
    provide_context(state);
    state
}

/// Restore a persisted session on startup.
///
/// A stored token is trusted without server re-validation; expiry surfaces
/// on the first authenticated call instead. When a session is restored,
/// exactly one list fetch is issued. Without one, the catalog cache is
/// cleared and no network call is made.
pub fn resume_session(state: ClientState) {
    let Some(restored) = persistence::load_session() else {
        state.books.update(|books| books.clear());
        return;
    };
    state.session.set(SessionState::authenticated(restored));
    refresh_books(state);
}

/// End the session: drop persisted credentials, the in-memory session, and
/// the cached catalog. Never fails.
pub fn sign_out(state: ClientState) {
    persistence::clear_session();
    state.session.set(SessionState::default());
    state.books.update(|books| books.clear());
}

/// Issue a list fetch for the current session. No-op when signed out.
pub fn refresh_books(state: ClientState) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(load_books(state));
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

#[cfg(feature = "hydrate")]
async fn load_books(state: ClientState) {
    let Some(token) = state.session.get_untracked().token().map(str::to_owned) else {
        return;
    };
    let Some(seq) = state.books.try_update(|books| books.begin_fetch()) else {
        return;
    };
    match net::api::fetch_books(&token).await {
        Ok(items) => state.books.update(|books| books.apply_fetch_success(seq, items)),
        Err(RepositoryError::AuthenticationExpired) => {
            expire_session(state, RepositoryError::AuthenticationExpired.to_string());
        }
        Err(err) => {
            leptos::logging::warn!("book list fetch failed: {err}");
            state.books.update(|books| books.apply_fetch_failure(seq, err.to_string()));
        }
    }
}

/// The service rejected the bearer token: drop the session like a logout,
/// keeping the rejection message on the collection error field.
#[cfg(feature = "hydrate")]
fn expire_session(state: ClientState, message: String) {
    leptos::logging::warn!("bearer token rejected; dropping local session");
    persistence::clear_session();
    state.session.set(SessionState::default());
    state.books.update(|books| {
        books.clear();
        books.error = Some(message);
    });
}

/// Submit the auth form per its current mode.
///
/// Validation failures surface on the form without network contact. On a
/// successful exchange the session is persisted and published, the book
/// list is fetched, and the credential fields reset. Re-entry while a
/// submission is in flight is rejected.
pub fn submit_auth(state: ClientState) {
    let snapshot = state.auth_form.get_untracked();
    if snapshot.submitting {
        return;
    }
    if let Err(err) = snapshot.validate() {
        state.auth_form.update(|form| form.error = Some(err.to_string()));
        return;
    }
    if !state.auth_form.try_update(|form| form.begin_submit()).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let granted = match snapshot.mode {
            AuthMode::Login => net::api::login(&snapshot.email, &snapshot.password).await,
            AuthMode::Register => {
                net::api::register(&snapshot.name, &snapshot.email, &snapshot.password).await
            }
        };
        match granted {
            Ok(session) => {
                persistence::save_session(&session);
                state.session.set(SessionState::authenticated(session));
                load_books(state).await;
                state.auth_form.update(|form| form.reset_after_success());
            }
            Err(err) => state.auth_form.update(|form| form.fail_submit(err.message)),
        }
    });
}

/// Submit the add-book form.
///
/// The create call is confirmed by a full list re-fetch before the form
/// resets, so the collection observed afterwards is the server's. Failures
/// set the shared collection error and a local form-level retry prompt.
/// Re-entry while a create is pending is rejected.
pub fn submit_book(state: ClientState) {
    let snapshot = state.book_form.get_untracked();
    if snapshot.submitting {
        return;
    }
    let Some(draft) = snapshot.draft() else {
        state
            .book_form
            .update(|form| form.error = Some(MISSING_BOOK_FIELDS_MESSAGE.to_owned()));
        return;
    };
    let Some(token) = state.session.get_untracked().token().map(str::to_owned) else {
        state
            .book_form
            .update(|form| form.error = Some(SIGN_IN_REQUIRED_MESSAGE.to_owned()));
        return;
    };
    if !state.books.try_update(|books| books.begin_create()).unwrap_or(false) {
        return;
    }
    if !state.book_form.try_update(|form| form.begin_submit()).unwrap_or(false) {
        state.books.update(|books| books.finish_create());
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match net::api::add_book(&token, &draft).await {
            Ok(()) => {
                state.books.update(|books| books.finish_create());
                load_books(state).await;
                state.book_form.update(|form| form.reset_after_success());
            }
            Err(RepositoryError::AuthenticationExpired) => {
                expire_session(state, RepositoryError::AuthenticationExpired.to_string());
                state.book_form.update(|form| form.fail_submit(ADD_BOOK_FAILED_MESSAGE));
            }
            Err(err) => {
                leptos::logging::warn!("book create failed: {err}");
                state.books.update(|books| books.fail_create(err.to_string()));
                state.book_form.update(|form| form.fail_submit(ADD_BOOK_FAILED_MESSAGE));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (token, draft);
}
