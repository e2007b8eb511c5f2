//! Wire DTOs for the remote task/auth API.
//!
//! DESIGN
//! ======
//! The server is document-backed and names identifiers `_id`; every id field
//! also accepts a plain `id` so fixtures and other backends decode cleanly.
//! Profile records keep unknown fields so a persisted user round-trips exactly
//! what the server sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message shown when a task is submitted without a title.
pub const TITLE_REQUIRED: &str = "Title required";

/// An authenticated user profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Login email address.
    #[serde(default)]
    pub email: String,
    /// Any additional profile fields the server returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Name to greet the user with; tolerates profiles without a name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            if self.email.is_empty() { "there" } else { &self.email }
        } else {
            &self.name
        }
    }
}

/// A task as owned by the remote API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-generated identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// ISO 8601 creation timestamp assigned by the server.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// Contents of the create-task form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Trimmed copy of the draft, or [`TITLE_REQUIRED`] when the title is blank.
    ///
    /// # Errors
    ///
    /// Returns the user-facing validation message when the title is empty.
    pub fn validated(&self) -> Result<Self, &'static str> {
        let title = validate_title(&self.title)?;
        Ok(Self {
            title,
            description: self.description.trim().to_owned(),
        })
    }
}

/// Trim a task title and reject it when nothing is left.
///
/// # Errors
///
/// Returns [`TITLE_REQUIRED`] for empty or whitespace-only titles.
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TITLE_REQUIRED);
    }
    Ok(trimmed.to_owned())
}

/// Partial task update sent with `PUT /tasks/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    #[must_use]
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Credentials for either auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    Login { email: String, password: String },
    Signup { name: String, email: String, password: String },
}

impl AuthRequest {
    /// API path relative to the base URL.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login { .. } => "/auth/login",
            Self::Signup { .. } => "/auth/signup",
        }
    }

    /// JSON request body.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::Login { email, password } => serde_json::json!({
                "email": email,
                "password": password,
            }),
            Self::Signup { name, email, password } => serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }),
        }
    }

    /// Generic message shown when the server gives no reason for a failure.
    #[must_use]
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            Self::Login { .. } => "Login failed",
            Self::Signup { .. } => "Signup failed",
        }
    }
}

/// Successful response from `/auth/login` and `/auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
