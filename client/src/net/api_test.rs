use super::*;

#[test]
fn resolve_api_base_defaults_when_unset_or_blank() {
    assert_eq!(resolve_api_base(None), "http://localhost:5000/api");
    assert_eq!(resolve_api_base(Some("   ")), "http://localhost:5000/api");
}

#[test]
fn resolve_api_base_uses_configured_value() {
    assert_eq!(resolve_api_base(Some(" https://tasks.example.com/api ")), "https://tasks.example.com/api");
}

#[test]
fn request_failed_message_names_method_and_url() {
    assert_eq!(
        request_failed_message("GET", "http://x/api/tasks?q=", "NetworkError"),
        "GET http://x/api/tasks?q= failed: NetworkError"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_transport_refuses_to_send() {
    let api = BrowserApi::new(api_base(), BrowserTransport);
    let err = futures::executor::block_on(api.fetch_profile()).expect_err("no browser");
    assert!(matches!(err, tasks::ApiError::Network(_)));
}
