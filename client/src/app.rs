//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::session::restore_session;

/// Root application component.
///
/// Restores the session from durable storage before the first render and hands
/// the same session signal to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(restore_session());

    view! {
        <Title text="Taskpad"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage session=session/> }/>
                <Route path=StaticSegment("signup") view=move || view! { <SignupPage session=session/> }/>
                <Route path=StaticSegment("") view=move || view! { <DashboardPage session=session/> }/>
            </Routes>
        </Router>
    }
}
