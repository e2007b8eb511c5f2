//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard must bounce signed-out visitors to `/login`, and the auth
//! pages must bounce signed-in visitors to `/`. Both follow the session token
//! reactively, so logout anywhere redirects immediately.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use tasks::{SessionProvider, SessionStorage, Transport};

use crate::state::session::BrowserSession;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const HOME_PATH: &str = "/";

/// Whether a protected route should send the visitor to `/login`.
pub fn should_redirect_unauth<S: SessionStorage, T: Transport>(session: &SessionProvider<S, T>) -> bool {
    !session.is_authenticated()
}

/// Whether an auth page should send an already signed-in visitor home.
pub fn should_redirect_authed<S: SessionStorage, T: Transport>(session: &SessionProvider<S, T>) -> bool {
    session.is_authenticated()
}

/// Redirect to `/login` whenever the session has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<BrowserSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever the session has a token.
pub fn install_authed_redirect<F>(session: RwSignal<BrowserSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_authed) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });
}
