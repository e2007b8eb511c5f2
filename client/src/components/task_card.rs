//! Card component for one task on the dashboard.
//!
//! DESIGN
//! ======
//! The card is presentational: it renders the task it was given and reports
//! toggle/edit/delete intents through callbacks. The dashboard owns the
//! requests, confirmations and list reconciliation.

use leptos::prelude::*;
use tasks::Task;

use crate::util::format::{created_label, created_parts};

#[component]
pub fn TaskCard(
    task: Task,
    on_toggle: Callback<Task>,
    on_edit: Callback<Task>,
    on_delete: Callback<Task>,
) -> impl IntoView {
    let (_, time) = created_parts(&task.created_at);
    let created = created_label(&task.created_at);
    let completed = task.completed;
    let description = task.description.clone().filter(|d| !d.trim().is_empty());
    let title = task.title.clone();

    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_task = task;

    view! {
        <div class="task-card" class:task-card--done=completed>
            <div class="task-card__header">
                <h3 class="task-card__title">{title}</h3>
                <label class="task-card__done">
                    <input
                        type="checkbox"
                        prop:checked=completed
                        on:change=move |_| on_toggle.run(toggle_task.clone())
                    />
                    <span>"Done"</span>
                </label>
            </div>
            {description.map(|d| view! { <p class="task-card__description">{d}</p> })}
            <div class="task-card__meta">
                <span>{created}</span>
                <span class="task-card__time">{time}</span>
            </div>
            <div class="task-card__actions">
                <button class="btn task-card__edit" on:click=move |_| on_edit.run(edit_task.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn--danger task-card__delete"
                    on:click=move |_| on_delete.run(delete_task.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
