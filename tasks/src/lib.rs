//! Shared task-client core used by both the browser `client` and the `cli`.
//!
//! This crate owns the wire types for the remote task API, the HTTP client
//! adapter (over an injectable [`api::Transport`]), the session store and
//! provider, and the local task list reconciliation. Nothing here touches a
//! browser or a terminal directly; front-ends supply the transport, the
//! durable storage backend and the dialog effects.

pub mod actions;
pub mod api;
pub mod effects;
pub mod list;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiError, ApiRequest, ApiResponse, DEFAULT_API_BASE, Method, Transport, TransportError};
pub use effects::UiEffects;
pub use list::{TaskChange, TaskList};
pub use session::{SessionProvider, SessionStore};
pub use storage::{MemoryStorage, SessionStorage, StorageError};
pub use types::{AuthRequest, AuthResponse, Task, TaskDraft, TaskPatch, User};
