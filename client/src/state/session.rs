//! The browser session object shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `BrowserSession` before the first render (rehydrating
//! from `localStorage`) and passes it to each route as a prop. Pages clone the
//! API client out of it for each request and apply auth outcomes back to it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tasks::{ApiClient, SessionProvider, SessionStorage, SessionStore};

use crate::net::api::{BrowserApi, BrowserTransport, api_base};
use crate::util::storage::BrowserStorage;

pub type BrowserSession = SessionProvider<BrowserStorage, BrowserTransport>;

/// Rehydrate the session from `localStorage`.
pub fn restore_session() -> BrowserSession {
    restore_session_from(BrowserStorage)
}

/// Rehydrate from any storage backend, talking to the configured API base.
pub fn restore_session_from<S: SessionStorage>(storage: S) -> SessionProvider<S, BrowserTransport> {
    SessionProvider::new(
        SessionStore::restore(storage),
        ApiClient::new(api_base(), BrowserTransport),
    )
}

/// Snapshot of the API client carrying the current credential.
pub fn api_of<S: SessionStorage>(session: &SessionProvider<S, BrowserTransport>) -> BrowserApi {
    session.api().clone()
}

/// Greeting name, tolerating a token whose user has not been stored yet.
pub fn greeting_name<S: SessionStorage>(session: &SessionProvider<S, BrowserTransport>) -> String {
    session
        .user()
        .map_or_else(|| "there".to_owned(), |user| user.display_name().to_owned())
}
