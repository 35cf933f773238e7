//! Add-book form view-model.
//!
//! DESIGN
//! ======
//! The form's error is local and independent of the shared collection
//! error: a failed create shows a retry prompt here while the service
//! message lands on `BooksState.error`.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use crate::net::types::BookDraft;

/// Draft fields and submission state for the add-book form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookFormState {
    pub title: String,
    pub author: String,
    pub description: String,
    /// Form-level error, independent of the shared collection error.
    pub error: Option<String>,
    pub submitting: bool,
}

impl BookFormState {
    pub fn set_title(&mut self, value: String) {
        self.title = value;
        self.error = None;
    }

    pub fn set_author(&mut self, value: String) {
        self.author = value;
        self.error = None;
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
        self.error = None;
    }

    /// Trimmed create payload, or `None` while any field is blank. The
    /// service stays authoritative for everything beyond presence.
    pub fn draft(&self) -> Option<BookDraft> {
        let title = self.title.trim();
        let author = self.author.trim();
        let description = self.description.trim();
        if title.is_empty() || author.is_empty() || description.is_empty() {
            return None;
        }
        Some(BookDraft {
            title: title.to_owned(),
            author: author.to_owned(),
            description: description.to_owned(),
        })
    }

    /// Enter the submitting state. Returns `false` when a submission is
    /// already in flight so callers can reject re-entry.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Leave the submitting state with a form-level failure message.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Leave the submitting state after a confirmed create, dropping the
    /// draft fields.
    pub fn reset_after_success(&mut self) {
        self.title.clear();
        self.author.clear();
        self.description.clear();
        self.error = None;
        self.submitting = false;
    }
}
