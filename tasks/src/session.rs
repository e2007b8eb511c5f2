//! Session store and provider for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionStore`] holds the token and the user profile and writes every
//! change through to durable storage. [`SessionProvider`] pairs the store with
//! the [`ApiClient`] so that each token change updates the outgoing
//! credential in the same call; views receive the provider explicitly and
//! never reach for a global client.
//!
//! The token and the user are persisted independently, so a reader may see
//! one without the other (e.g. a crash between the two writes). Authentication
//! is decided by the token alone.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::{ApiClient, Transport};
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};
use crate::types::{AuthResponse, User};

/// Token + user, mirrored to durable storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    token: Option<String>,
    user: Option<User>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Rehydrate from `storage`. Unreadable entries are treated as absent.
    pub fn restore(storage: S) -> Self {
        let token = storage.read(TOKEN_KEY).filter(|token| !token.is_empty());
        let user = storage.read(USER_KEY).and_then(|raw| decode_user(&raw));
        log::debug!(
            "session restored (token: {}, user: {})",
            token.is_some(),
            user.is_some()
        );
        Self { storage, token, user }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the token and write it through (or delete the stored key).
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|token| !token.is_empty());
        let result = match &self.token {
            Some(token) => self.storage.write(TOKEN_KEY, token),
            None => self.storage.remove(TOKEN_KEY),
        };
        if let Err(e) = result {
            log::warn!("{e}");
        }
    }

    /// Replace the user and write it through (or delete the stored key).
    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
        let result = match &self.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.storage.write(USER_KEY, &raw),
                Err(e) => {
                    log::warn!("failed to serialize user: {e}");
                    return;
                }
            },
            None => self.storage.remove(USER_KEY),
        };
        if let Err(e) = result {
            log::warn!("{e}");
        }
    }
}

fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<Option<User>>(raw) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("ignoring malformed stored user: {e}");
            None
        }
    }
}

/// The session object handed to every view.
#[derive(Clone, Debug)]
pub struct SessionProvider<S, T> {
    store: SessionStore<S>,
    api: ApiClient<T>,
}

impl<S: SessionStorage, T: Transport> SessionProvider<S, T> {
    /// Wire a rehydrated store to `api`, seeding the credential from the
    /// stored token.
    pub fn new(store: SessionStore<S>, mut api: ApiClient<T>) -> Self {
        api.set_credential(store.token());
        Self { store, api }
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.store.token()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.store.user()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Set token and user from a successful login.
    pub fn login(&mut self, auth: AuthResponse) {
        self.set_token(Some(auth.token));
        self.set_user(Some(auth.user));
        log::info!("signed in");
    }

    /// Set token and user from a successful signup.
    pub fn signup(&mut self, auth: AuthResponse) {
        self.set_token(Some(auth.token));
        self.set_user(Some(auth.user));
        log::info!("signed up");
    }

    /// Clear token and user, and stop sending the credential.
    pub fn logout(&mut self) {
        self.set_token(None);
        self.set_user(None);
        log::info!("signed out");
    }

    /// Replace the user profile, leaving the token untouched.
    pub fn update_user(&mut self, user: User) {
        self.set_user(Some(user));
    }

    /// Apply a profile fetched with `requested_with`, unless the session has
    /// since signed out or switched accounts. Returns whether it was applied.
    pub fn update_user_if_current(&mut self, requested_with: Option<&str>, user: User) -> bool {
        if requested_with.is_none() || self.token() != requested_with {
            log::debug!("dropping profile fetched for a previous session");
            return false;
        }
        self.update_user(user);
        true
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.store.set_token(token);
        self.api.set_credential(self.store.token());
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.store.set_user(user);
    }
}
