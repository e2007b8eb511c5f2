//! HTTP client adapter for the remote task API.
//!
//! `ApiClient` owns the base URL and the current bearer credential and turns
//! each endpoint call into an [`ApiRequest`] value. Executing the request is
//! delegated to a [`Transport`], so the browser (`gloo-net`), the CLI
//! (`reqwest`) and tests (a recording fake) share every line of request
//! shaping and response translation.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Rejected`] carrying the server's
//! `error` message when the body has one. Nothing is retried; every failure is
//! returned to the caller, which decides how to surface it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{AuthRequest, AuthResponse, Task, TaskDraft, TaskPatch, User};

/// Base address used when no override is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

pub const AUTHORIZATION: &str = "Authorization";

/// HTTP methods used by the task API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully shaped request, ready for a transport to send.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Value of the first header named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not be delivered or its response could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes [`ApiRequest`]s against the network.
///
/// Implementations must send the request as given: no retries, no queuing.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send one request and return the raw response, whatever its status.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Failure of a single API operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The server answered with a non-2xx status.
    #[error("{}", rejected_message(*status, message.as_deref()))]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A successful response carried a body we could not decode.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server- or validation-provided message, else `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) | Self::Rejected { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.0)
    }
}

fn rejected_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_owned(),
        None => format!("request failed: {status}"),
    }
}

/// Pull a human-readable reason out of an error response body.
///
/// Accepts `{"error": "..."}` (what the task API sends) and `{"message": "..."}`.
fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}

fn tasks_endpoint(query: &str) -> String {
    format!("/tasks?q={}", urlencoding::encode(query))
}

fn task_endpoint(id: &str) -> String {
    format!("/tasks/{}", urlencoding::encode(id))
}

/// Request sender bound to one API base and one (optional) credential.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    base_url: String,
    credential: Option<String>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            credential: None,
            transport,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Attach `Authorization: Bearer <token>` to every later request, or stop
    /// sending the header at all when `token` is `None` or empty.
    pub fn set_credential(&mut self, token: Option<&str>) {
        self.credential = token.filter(|token| !token.is_empty()).map(str::to_owned);
    }

    /// Shape a request for `path` (relative to the base URL).
    #[must_use]
    pub fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiRequest {
        let mut headers = Vec::new();
        if let Some(token) = &self.credential {
            headers.push((AUTHORIZATION, format!("Bearer {token}")));
        }
        ApiRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers,
            body,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        let message = server_message(&response.body);
        log::debug!("request rejected with status {}", response.status);
        Err(ApiError::Rejected {
            status: response.status,
            message,
        })
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn json_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /auth/login` or `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for bad credentials and the other
    /// variants for transport or decode failures.
    pub async fn authenticate(&self, auth: &AuthRequest) -> Result<AuthResponse, ApiError> {
        let request = self.request(Method::Post, auth.path(), Some(auth.body()));
        self.call(request).await
    }

    /// `GET /profile`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the profile cannot be decoded.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.call(self.request(Method::Get, "/profile", None)).await
    }

    /// `GET /tasks?q=<query>`; an empty query lists everything.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the list cannot be decoded.
    pub async fn list_tasks(&self, query: &str) -> Result<Vec<Task>, ApiError> {
        self.call(self.request(Method::Get, &tasks_endpoint(query), None)).await
    }

    /// `POST /tasks`. Drafts without a title are rejected before sending.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a blank title, otherwise any
    /// request failure.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        let draft = draft.validated().map_err(|e| ApiError::Validation(e.to_owned()))?;
        let body = Self::json_body(&draft)?;
        self.call(self.request(Method::Post, "/tasks", Some(body))).await
    }

    /// `PUT /tasks/:id` with only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the task cannot be decoded.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        let body = Self::json_body(patch)?;
        self.call(self.request(Method::Put, &task_endpoint(id), Some(body))).await
    }

    /// `DELETE /tasks/:id`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::Delete, &task_endpoint(id), None))
            .await
            .map(|_| ())
    }
}
