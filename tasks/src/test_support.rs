//! Fakes shared by the unit tests in this crate.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::api::{ApiClient, ApiRequest, ApiResponse, Transport, TransportError};
use crate::effects::UiEffects;
use crate::types::Task;

/// Transport that records every request and replays queued responses.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub sent: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl RecordingTransport {
    pub fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body.to_string())));
    }

    pub fn reply_raw(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.replies
            .borrow_mut()
            .push_back(Err(TransportError(message.to_owned())));
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn last(&self) -> ApiRequest {
        self.sent.borrow().last().cloned().expect("a request was sent")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no reply queued".to_owned())))
    }
}

pub fn client() -> ApiClient<RecordingTransport> {
    ApiClient::new("http://api.test/api", RecordingTransport::default())
}

/// Dialog effects with canned answers; counts how often each was asked.
#[derive(Debug, Default)]
pub struct ScriptedEffects {
    pub confirm_answer: bool,
    pub prompt_answer: Option<String>,
    pub confirms: Cell<usize>,
    pub prompts: Cell<usize>,
    pub last_message: RefCell<String>,
}

impl UiEffects for ScriptedEffects {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        *self.last_message.borrow_mut() = message.to_owned();
        self.confirm_answer
    }

    fn prompt(&self, message: &str, _default: &str) -> Option<String> {
        self.prompts.set(self.prompts.get() + 1);
        *self.last_message.borrow_mut() = message.to_owned();
        self.prompt_answer.clone()
    }
}

pub fn task(id: &str, title: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: title.to_owned(),
        description: None,
        completed: false,
        created_at: "2025-03-01T09:30:00.000Z".to_owned(),
    }
}

pub fn task_json(task: &Task) -> serde_json::Value {
    serde_json::to_value(task).expect("task encodes")
}
