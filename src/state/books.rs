//! Cached book collection state with its loading/error machine.
//!
//! DESIGN
//! ======
//! The cached list is only ever replaced wholesale by a successful list
//! fetch, never merged or patched locally. Each issued fetch is tagged with
//! a monotonically increasing sequence number; a response is applied only
//! while its tag is still the latest issued, so a slow response from an
//! older fetch (or from before a sign-out) cannot clobber newer state.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;

/// Shared catalog collection state read by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BooksState {
    /// Cached book records in server-assigned order.
    pub items: Vec<Book>,
    /// True while a list fetch is in flight.
    pub loading: bool,
    /// True while a create call is in flight.
    pub create_pending: bool,
    /// Most recent list/create failure message, cleared by the next
    /// successful fetch.
    pub error: Option<String>,
    /// Tag of the most recently issued list fetch. Bumped on every fetch
    /// and on `clear`, which is what invalidates stale responses.
    pub fetch_seq: u64,
}

impl BooksState {
    /// Start a list fetch: marks the collection loading and returns the tag
    /// the response must present to be applied.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_seq += 1;
        self.loading = true;
        self.fetch_seq
    }

    /// Apply a successful list response. Replaces `items` wholesale and
    /// clears any previous error. Discarded if `seq` is no longer the
    /// latest issued tag.
    pub fn apply_fetch_success(&mut self, seq: u64, items: Vec<Book>) {
        if seq != self.fetch_seq {
            return;
        }
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Apply a failed list response. Leaves `items` untouched. Discarded if
    /// `seq` is no longer the latest issued tag.
    pub fn apply_fetch_failure(&mut self, seq: u64, message: impl Into<String>) {
        if seq != self.fetch_seq {
            return;
        }
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Start a create call. Returns `false` when one is already pending so
    /// callers can reject re-entrant submissions.
    pub fn begin_create(&mut self) -> bool {
        if self.create_pending {
            return false;
        }
        self.create_pending = true;
        true
    }

    /// Record that the create response was observed successful. The list
    /// re-fetch that follows runs under its own tag.
    pub fn finish_create(&mut self) {
        self.create_pending = false;
    }

    /// Record a failed create with the service's message.
    pub fn fail_create(&mut self, message: impl Into<String>) {
        self.create_pending = false;
        self.error = Some(message.into());
    }

    /// Drop all cached catalog state. Bumps the fetch tag so any in-flight
    /// response is discarded instead of repopulating a signed-out cache.
    pub fn clear(&mut self) {
        self.items.clear();
        self.loading = false;
        self.create_pending = false;
        self.error = None;
        self.fetch_seq += 1;
    }
}
