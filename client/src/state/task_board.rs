//! Dashboard task state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard keeps one `TasksState` in an `RwSignal`. Requests run outside
//! it; each response is folded back in through the transition methods here,
//! so the list, the create form and the error banner change together.

#[cfg(test)]
#[path = "task_board_test.rs"]
mod task_board_test;

use tasks::actions::CREATE_FAILED;
use tasks::{ApiError, TaskChange, TaskDraft, TaskList};

/// Dashboard task state: the local list plus form and error chrome.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TasksState {
    pub list: TaskList,
    pub query: String,
    pub draft: TaskDraft,
    /// Inline error under the create form.
    pub form_error: Option<String>,
    /// Banner for failed loads, updates and deletes.
    pub error: Option<String>,
    pub loading: bool,
    pub create_pending: bool,
}

impl TasksState {
    /// Validate the draft and mark a create as pending.
    ///
    /// Returns the draft to send, or `None` (with `form_error` set) when the
    /// draft is invalid or a create is already in flight.
    pub fn begin_create(&mut self) -> Option<TaskDraft> {
        if self.create_pending {
            return None;
        }
        match self.draft.validated() {
            Ok(draft) => {
                self.create_pending = true;
                Some(draft)
            }
            Err(message) => {
                self.form_error = Some(message.to_owned());
                None
            }
        }
    }

    /// Fold in a successful create and reset the form.
    pub fn created(&mut self, change: TaskChange) {
        self.list.apply(change);
        self.draft = TaskDraft::default();
        self.form_error = None;
        self.create_pending = false;
    }

    pub fn create_failed(&mut self, err: &ApiError) {
        self.create_pending = false;
        self.form_error = Some(err.message_or(CREATE_FAILED));
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Fold in a fetch/search result, or surface why it failed.
    pub fn loaded(&mut self, result: Result<TaskChange, ApiError>, fallback: &str) {
        self.loading = false;
        match result {
            Ok(change) => {
                self.list.apply(change);
                self.error = None;
            }
            Err(err) => self.error = Some(err.message_or(fallback)),
        }
    }

    /// Fold in an update/delete outcome. `Ok(None)` means the user cancelled.
    pub fn mutated(&mut self, result: Result<Option<TaskChange>, ApiError>, fallback: &str) {
        match result {
            Ok(Some(change)) => {
                self.list.apply(change);
                self.error = None;
            }
            Ok(None) => {}
            Err(err) => self.error = Some(err.message_or(fallback)),
        }
    }

    pub fn report(&mut self, err: &ApiError, fallback: &str) {
        self.error = Some(err.message_or(fallback));
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
