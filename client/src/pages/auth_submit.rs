//! Submit flow shared by the login and signup pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session is updated and the authed-redirect effect installed
//! by each auth page sends the visitor to the dashboard. On failure the form
//! shows the server's reason, or the page's fallback message.

#[cfg(test)]
#[path = "auth_submit_test.rs"]
mod auth_submit_test;

use leptos::prelude::*;
use tasks::AuthRequest;
use tasks::actions::{self, validate_auth};

use crate::state::auth::AuthForm;
use crate::state::session::{BrowserSession, api_of};

/// Validate the request and mark the form busy.
///
/// Returns `None` when the form is incomplete (the error is set on `form`) or a
/// submit is already in flight.
pub(crate) fn prepare(form: &mut AuthForm, request: &AuthRequest) -> Option<AuthRequest> {
    if form.busy {
        return None;
    }
    match validate_auth(request) {
        Ok(request) => form.begin().then_some(request),
        Err(err) => {
            form.fail(&err, request.failure_fallback());
            None
        }
    }
}

pub(crate) fn submit_auth(session: RwSignal<BrowserSession>, form: RwSignal<AuthForm>, request: AuthRequest) {
    let Some(request) = form.try_update(|f| prepare(f, &request)).flatten() else {
        return;
    };
    let api = session.with_untracked(api_of);

    leptos::task::spawn_local(async move {
        match actions::authenticate(&api, &request).await {
            Ok(auth) => {
                session.update(|s| match request {
                    AuthRequest::Login { .. } => s.login(auth),
                    AuthRequest::Signup { .. } => s.signup(auth),
                });
                form.update(AuthForm::succeed);
            }
            Err(err) => form.update(|f| f.fail(&err, request.failure_fallback())),
        }
    });
}
