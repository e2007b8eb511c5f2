use futures::executor::block_on;

use super::*;
use crate::test_support::{RecordingTransport, client, task, task_json};

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let api = ApiClient::new("http://localhost:5000/api/", RecordingTransport::default());
    assert_eq!(api.base_url(), "http://localhost:5000/api");
    assert_eq!(api.request(Method::Get, "/profile", None).url, "http://localhost:5000/api/profile");
}

#[test]
fn credential_adds_bearer_header() {
    let mut api = client();
    api.set_credential(Some("tok-1"));
    let request = api.request(Method::Get, "/profile", None);
    assert_eq!(request.header("authorization"), Some("Bearer tok-1"));
}

#[test]
fn clearing_credential_removes_header_entirely() {
    let mut api = client();
    api.set_credential(Some("tok-1"));
    api.set_credential(None);
    let request = api.request(Method::Get, "/profile", None);
    assert!(request.headers.is_empty());
    assert_eq!(api.credential(), None);
}

#[test]
fn empty_credential_is_treated_as_absent() {
    let mut api = client();
    api.set_credential(Some(""));
    assert!(api.request(Method::Get, "/tasks", None).header(AUTHORIZATION).is_none());
}

#[test]
fn set_credential_is_idempotent() {
    let mut api = client();
    api.set_credential(Some("tok"));
    let first = api.request(Method::Get, "/profile", None);
    api.set_credential(Some("tok"));
    assert_eq!(api.request(Method::Get, "/profile", None), first);
}

#[test]
fn list_tasks_encodes_query() {
    let api = client();
    api.transport().reply(200, serde_json::json!([]));
    let tasks = block_on(api.list_tasks("buy milk & eggs")).expect("list");
    assert!(tasks.is_empty());
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "http://api.test/api/tasks?q=buy%20milk%20%26%20eggs");
}

#[test]
fn list_tasks_with_empty_query_still_sends_parameter() {
    let api = client();
    api.transport().reply(200, serde_json::json!([task_json(&task("t1", "A"))]));
    let tasks = block_on(api.list_tasks("")).expect("list");
    assert_eq!(tasks, vec![task("t1", "A")]);
    assert_eq!(api.transport().last().url, "http://api.test/api/tasks?q=");
}

#[test]
fn create_task_with_blank_title_sends_nothing() {
    let api = client();
    let err = block_on(api.create_task(&TaskDraft::new("   ", "details"))).expect_err("rejected");
    assert_eq!(err, ApiError::Validation("Title required".to_owned()));
    assert_eq!(api.transport().sent_count(), 0);
}

#[test]
fn create_task_posts_trimmed_draft() {
    let api = client();
    api.transport().reply(201, task_json(&task("t9", "Ship it")));
    let created = block_on(api.create_task(&TaskDraft::new(" Ship it ", ""))).expect("created");
    assert_eq!(created.id, "t9");
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test/api/tasks");
    assert_eq!(sent.body, Some(serde_json::json!({ "title": "Ship it", "description": "" })));
}

#[test]
fn update_task_puts_partial_body() {
    let api = client();
    let mut updated = task("t1", "A");
    updated.completed = true;
    api.transport().reply(200, task_json(&updated));
    let result = block_on(api.update_task("t1", &TaskPatch::completed(true))).expect("updated");
    assert!(result.completed);
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://api.test/api/tasks/t1");
    assert_eq!(sent.body, Some(serde_json::json!({ "completed": true })));
}

#[test]
fn delete_task_ignores_response_body() {
    let api = client();
    api.transport().reply_raw(204, "");
    block_on(api.delete_task("t1")).expect("deleted");
    let sent = api.transport().last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.body, None);
}

#[test]
fn rejected_response_carries_server_error_message() {
    let api = client();
    api.transport().reply(401, serde_json::json!({ "error": "Invalid credentials" }));
    let request = AuthRequest::Login {
        email: "a@b.com".to_owned(),
        password: "bad".to_owned(),
    };
    let err = block_on(api.authenticate(&request)).expect_err("rejected");
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 401,
            message: Some("Invalid credentials".to_owned())
        }
    );
    assert_eq!(err.message_or("Login failed"), "Invalid credentials");
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn rejected_response_without_message_uses_fallbacks() {
    let api = client();
    api.transport().reply_raw(500, "<html>oops</html>");
    let err = block_on(api.fetch_profile()).expect_err("rejected");
    assert!(matches!(err, ApiError::Rejected { status: 500, message: None }));
    assert_eq!(err.message_or("Failed"), "Failed");
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn server_message_reads_error_or_message_field() {
    assert_eq!(server_message(r#"{"error":"nope"}"#), Some("nope".to_owned()));
    assert_eq!(server_message(r#"{"message":"also nope"}"#), Some("also nope".to_owned()));
    assert_eq!(server_message(r#"{"error":"  "}"#), None);
    assert_eq!(server_message("not json"), None);
}

#[test]
fn transport_failure_becomes_network_error() {
    let api = client();
    api.transport().fail("connection refused");
    let err = block_on(api.list_tasks("")).expect_err("network");
    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
    assert_eq!(err.message_or("Failed"), "Failed");
}

#[test]
fn undecodable_success_body_is_decode_error() {
    let api = client();
    api.transport().reply_raw(200, "not json");
    let err = block_on(api.fetch_profile()).expect_err("decode");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn signup_posts_to_signup_endpoint() {
    let api = client();
    api.transport().reply(
        201,
        serde_json::json!({ "token": "tok", "user": { "_id": "u1", "name": "Ada", "email": "a@b.com" } }),
    );
    let request = AuthRequest::Signup {
        name: "Ada".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    };
    let auth = block_on(api.authenticate(&request)).expect("signup");
    assert_eq!(auth.token, "tok");
    assert_eq!(auth.user.name, "Ada");
    assert_eq!(api.transport().last().url, "http://api.test/api/auth/signup");
}
