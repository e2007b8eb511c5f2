//! Email + password login page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::auth_submit::submit_auth;
use crate::state::auth::AuthForm;
use crate::state::session::BrowserSession;
use crate::util::auth::{SIGNUP_PATH, install_authed_redirect};

#[component]
pub fn LoginPage(session: RwSignal<BrowserSession>) -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());
    install_authed_redirect(session, use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.with_untracked(AuthForm::login_request);
        submit_auth(session, form, request);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || if form.with(|f| f.busy) { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <A href=SIGNUP_PATH>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
