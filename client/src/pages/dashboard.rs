//! Dashboard page: create, search, toggle, edit and delete tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it refreshes the profile
//! and loads the task list. Every user action clones the API client out of the
//! session, awaits one request, and folds the resulting `TaskChange` into the
//! local list. Responses apply in arrival order.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use tasks::{Task, TaskList};
use tasks::actions::{self, DELETE_FAILED, LOAD_FAILED, PROFILE_FAILED, UPDATE_FAILED};

use crate::components::task_card::TaskCard;
use crate::state::session::{BrowserSession, api_of, greeting_name};
use crate::state::task_board::TasksState;
use crate::util::auth::install_unauth_redirect;
use crate::util::dialogs::BrowserDialogs;
use crate::util::format::tasks_heading;

pub(crate) fn welcome_text(name: &str) -> String {
    format!("Welcome back, {name}")
}

/// "Showing N tasks" under the heading; the empty state stands alone.
pub(crate) fn count_line(list: &TaskList) -> Option<String> {
    (!list.is_empty()).then(|| list.count_label())
}

/// Re-read the profile; a failure is shown in the banner.
fn spawn_profile_refresh(session: RwSignal<BrowserSession>, tasks: RwSignal<TasksState>) {
    let api = session.with_untracked(api_of);
    let requested_with = api.credential().map(str::to_owned);
    leptos::task::spawn_local(async move {
        match actions::refresh_profile(&api).await {
            Ok(user) => session.update(|s| {
                s.update_user_if_current(requested_with.as_deref(), user);
            }),
            Err(err) => tasks.update(|t| t.report(&err, PROFILE_FAILED)),
        }
    });
}

/// Fetch the list for the current search query.
fn spawn_load(session: RwSignal<BrowserSession>, tasks: RwSignal<TasksState>) {
    let query = tasks
        .try_update(|t| {
            t.begin_load();
            t.query.clone()
        })
        .unwrap_or_default();
    let api = session.with_untracked(api_of);
    leptos::task::spawn_local(async move {
        let result = actions::load_tasks(&api, &query).await;
        tasks.update(|t| t.loaded(result, LOAD_FAILED));
    });
}

#[component]
pub fn DashboardPage(session: RwSignal<BrowserSession>) -> impl IntoView {
    let tasks = RwSignal::new(TasksState::default());
    install_unauth_redirect(session, use_navigate());

    if session.with_untracked(BrowserSession::is_authenticated) {
        spawn_profile_refresh(session, tasks);
        spawn_load(session, tasks);
    }

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = tasks.try_update(TasksState::begin_create).flatten() else {
            return;
        };
        let api = session.with_untracked(api_of);
        leptos::task::spawn_local(async move {
            let result = actions::create_task(&api, &draft).await;
            tasks.update(|t| match result {
                Ok(change) => t.created(change),
                Err(err) => t.create_failed(&err),
            });
        });
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        spawn_load(session, tasks);
    };

    let on_toggle = Callback::new(move |task: Task| {
        let api = session.with_untracked(api_of);
        leptos::task::spawn_local(async move {
            let result = actions::toggle_completed(&api, &task).await.map(Some);
            tasks.update(|t| t.mutated(result, UPDATE_FAILED));
        });
    });

    let on_edit = Callback::new(move |task: Task| {
        let api = session.with_untracked(api_of);
        leptos::task::spawn_local(async move {
            let result = actions::edit_title(&api, &BrowserDialogs, &task).await;
            tasks.update(|t| t.mutated(result, UPDATE_FAILED));
        });
    });

    let on_delete = Callback::new(move |task: Task| {
        let api = session.with_untracked(api_of);
        leptos::task::spawn_local(async move {
            let result = actions::delete_task(&api, &BrowserDialogs, &task).await;
            tasks.update(|t| t.mutated(result, DELETE_FAILED));
        });
    });

    let on_logout = move |_| {
        session.update(BrowserSession::logout);
        tasks.set(TasksState::default());
    };

    view! {
        <Show
            when=move || session.with(BrowserSession::is_authenticated)
            fallback=|| view! { <div class="dashboard-page"><p>"Redirecting to login..."</p></div> }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__welcome">{move || welcome_text(&session.with(greeting_name))}</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__logout" on:click=on_logout>
                        "Sign Out"
                    </button>
                </header>

                <form class="dashboard-page__create" on:submit=on_create>
                    <input
                        class="dashboard-page__input"
                        type="text"
                        placeholder="Task title"
                        prop:value=move || tasks.with(|t| t.draft.title.clone())
                        on:input=move |ev| tasks.update(|t| t.draft.title = event_target_value(&ev))
                    />
                    <textarea
                        class="dashboard-page__input"
                        placeholder="Description (optional)"
                        prop:value=move || tasks.with(|t| t.draft.description.clone())
                        on:input=move |ev| tasks.update(|t| t.draft.description = event_target_value(&ev))
                    ></textarea>
                    <button class="btn" type="submit" disabled=move || tasks.with(|t| t.create_pending)>
                        "Add Task"
                    </button>
                    <Show when=move || tasks.with(|t| t.form_error.is_some())>
                        <p class="dashboard-page__form-error">
                            {move || tasks.with(|t| t.form_error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                </form>

                <form class="dashboard-page__search" on:submit=on_search>
                    <input
                        class="dashboard-page__input"
                        type="search"
                        placeholder="Search tasks"
                        prop:value=move || tasks.with(|t| t.query.clone())
                        on:input=move |ev| tasks.update(|t| t.query = event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>

                <Show when=move || tasks.with(|t| t.error.is_some())>
                    <p class="dashboard-page__error">
                        {move || tasks.with(|t| t.error.clone().unwrap_or_default())}
                        <button class="btn btn--link" on:click=move |_| tasks.update(TasksState::dismiss_error)>
                            "Dismiss"
                        </button>
                    </p>
                </Show>

                <div class="dashboard-page__list">
                    <h2>{move || tasks.with(|t| tasks_heading(t.list.len()))}</h2>
                    {move || {
                        tasks
                            .with(|t| count_line(&t.list))
                            .map(|line| view! { <p class="dashboard-page__count">{line}</p> })
                    }}
                    <Show
                        when=move || !tasks.with(|t| t.loading && t.list.is_empty())
                        fallback=|| view! { <p>"Loading tasks..."</p> }
                    >
                        <Show
                            when=move || !tasks.with(|t| t.list.is_empty())
                            fallback=|| view! { <p class="dashboard-page__empty">"No tasks yet"</p> }
                        >
                            <div class="dashboard-page__cards">
                                {move || {
                                    tasks
                                        .get()
                                        .list
                                        .iter()
                                        .cloned()
                                        .map(|task| {
                                            view! {
                                                <TaskCard
                                                    task=task
                                                    on_toggle=on_toggle
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
