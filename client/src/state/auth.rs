//! Form state for the login and signup screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both auth pages share one model: field values, the inline error, and a
//! busy flag that ignores repeat submits while a request is in flight.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tasks::{ApiError, AuthRequest};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub busy: bool,
}

impl AuthForm {
    pub fn login_request(&self) -> AuthRequest {
        AuthRequest::Login {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn signup_request(&self) -> AuthRequest {
        AuthRequest::Signup {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Start a submit: clears the previous error. Returns `false` if a
    /// request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.error = None;
        self.busy = true;
        true
    }

    /// Record a failed submit with the server's reason or `fallback`.
    pub fn fail(&mut self, err: &ApiError, fallback: &str) {
        self.busy = false;
        self.error = Some(err.message_or(fallback));
    }

    /// Record a successful submit; the password is not kept around.
    pub fn succeed(&mut self) {
        self.busy = false;
        self.error = None;
        self.password.clear();
    }
}
