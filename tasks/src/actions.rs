//! User-initiated dashboard operations.
//!
//! Each action performs at most one request and returns the [`TaskChange`] to
//! fold into the caller's [`crate::TaskList`]. Actions never hold the list
//! themselves, so a view can release its state while the request is in
//! flight and apply the outcome when it lands (last response wins).
//!
//! Confirmation and prompts go through [`UiEffects`]; a declined dialog
//! returns `Ok(None)` without touching the network.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::api::{ApiClient, ApiError, Transport};
use crate::effects::UiEffects;
use crate::list::TaskChange;
use crate::types::{AuthRequest, AuthResponse, Task, TaskDraft, TaskPatch, User, validate_title};

pub const DELETE_CONFIRMATION: &str = "Delete this task?";
pub const EDIT_TITLE_PROMPT: &str = "Edit title";

/// Fallback shown when creating a task fails without a server message.
pub const CREATE_FAILED: &str = "Failed";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";
pub const LOAD_FAILED: &str = "Failed to load tasks";
pub const PROFILE_FAILED: &str = "Failed to load profile";

/// Trim credentials and reject incomplete forms before sending them.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] naming the missing fields.
pub fn validate_auth(request: &AuthRequest) -> Result<AuthRequest, ApiError> {
    match request {
        AuthRequest::Login { email, password } => {
            let email = email.trim();
            if email.is_empty() || password.is_empty() {
                return Err(ApiError::Validation("Enter email and password.".to_owned()));
            }
            Ok(AuthRequest::Login {
                email: email.to_owned(),
                password: password.clone(),
            })
        }
        AuthRequest::Signup { name, email, password } => {
            let (name, email) = (name.trim(), email.trim());
            if name.is_empty() || email.is_empty() || password.is_empty() {
                return Err(ApiError::Validation("Enter name, email and password.".to_owned()));
            }
            Ok(AuthRequest::Signup {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.clone(),
            })
        }
    }
}

/// Log in or sign up. The caller hands the response to the session provider.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for incomplete forms (nothing is sent),
/// otherwise the request failure.
pub async fn authenticate<T: Transport>(api: &ApiClient<T>, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
    let request = validate_auth(request)?;
    api.authenticate(&request)
        .await
        .inspect_err(|e| log::warn!("{} rejected: {e}", request.path()))
}

/// Re-read the signed-in user's profile.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn refresh_profile<T: Transport>(api: &ApiClient<T>) -> Result<User, ApiError> {
    api.fetch_profile().await.inspect_err(|e| log::error!("profile fetch failed: {e}"))
}

/// Fetch the task list filtered by `query` (empty = everything).
///
/// # Errors
///
/// Propagates the request failure.
pub async fn load_tasks<T: Transport>(api: &ApiClient<T>, query: &str) -> Result<TaskChange, ApiError> {
    api.list_tasks(query.trim())
        .await
        .map(TaskChange::Replaced)
        .inspect_err(|e| log::error!("task list fetch failed: {e}"))
}

/// Create a task from the form draft.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] without sending anything when the title is
/// blank, otherwise the request failure.
pub async fn create_task<T: Transport>(api: &ApiClient<T>, draft: &TaskDraft) -> Result<TaskChange, ApiError> {
    api.create_task(draft).await.map(TaskChange::Created)
}

/// Flip a task's completion flag. Sends only `completed`.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn toggle_completed<T: Transport>(api: &ApiClient<T>, task: &Task) -> Result<TaskChange, ApiError> {
    api.update_task(&task.id, &TaskPatch::completed(!task.completed))
        .await
        .map(TaskChange::Updated)
}

/// Prompt for a new title and send it.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a blank title, otherwise the request
/// failure.
pub async fn edit_title<T: Transport, U: UiEffects>(
    api: &ApiClient<T>,
    effects: &U,
    task: &Task,
) -> Result<Option<TaskChange>, ApiError> {
    let Some(input) = effects.prompt(EDIT_TITLE_PROMPT, &task.title) else {
        return Ok(None);
    };
    let title = validate_title(&input).map_err(|e| ApiError::Validation(e.to_owned()))?;
    if title == task.title {
        return Ok(None);
    }
    api.update_task(&task.id, &TaskPatch::title(title))
        .await
        .map(|task| Some(TaskChange::Updated(task)))
}

/// Ask for confirmation, then delete.
///
/// # Errors
///
/// Propagates the request failure.
pub async fn delete_task<T: Transport, U: UiEffects>(
    api: &ApiClient<T>,
    effects: &U,
    task: &Task,
) -> Result<Option<TaskChange>, ApiError> {
    if !effects.confirm(DELETE_CONFIRMATION) {
        return Ok(None);
    }
    api.delete_task(&task.id).await?;
    Ok(Some(TaskChange::Deleted(task.id.clone())))
}
