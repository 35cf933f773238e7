//! Auth form view-model: mode, entered credentials, and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the session layer from user-entered credentials. Registration
//! input is validated here before anything touches the network; login mode
//! defers entirely to the service. Rendering of the form is out of scope.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use thiserror::Error;

/// Minimum accepted password length for registration, in characters.
const MIN_PASSWORD_CHARS: usize = 6;

/// Client-side registration check failures. Checked in order; the first
/// failure wins and nothing is sent to the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Name is required")]
    NameRequired,
}

/// Which auth exchange a submission performs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Entered credentials plus the submission state machine:
/// idle, submitting, or idle-with-error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Single active error message: validation or service failure.
    pub error: Option<String>,
    pub submitting: bool,
}

impl AuthFormState {
    /// Switch between login and register. Clears any displayed error.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error = None;
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.error = None;
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.error = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.error = None;
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
        self.error = None;
    }

    /// Pre-submission checks. Only register mode has rules; login mode
    /// always validates and lets the service judge the credentials.
    ///
    /// # Errors
    ///
    /// First failing rule, in order: password/confirmation mismatch,
    /// password too short, name missing.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mode == AuthMode::Login {
            return Ok(());
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
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

    /// Leave the submitting state with a service failure message.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Leave the submitting state after a successful exchange, dropping the
    /// entered credentials.
    pub fn reset_after_success(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.error = None;
        self.submitting = false;
    }
}
