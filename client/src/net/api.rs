//! Browser transport for the task API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every request fails with a transport error
//! since there is no browser to send it from.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures are returned as `TransportError` strings; status-code
//! translation happens in `tasks::ApiClient` so it is identical everywhere.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use tasks::{ApiClient, ApiRequest, ApiResponse, DEFAULT_API_BASE, Transport, TransportError};

/// API client as used by every page.
pub type BrowserApi = ApiClient<BrowserTransport>;

/// Base URL baked in at build time via `TASKS_API_BASE`.
pub fn api_base() -> &'static str {
    resolve_api_base(option_env!("TASKS_API_BASE"))
}

fn resolve_api_base(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(method: &str, url: &str, reason: &str) -> String {
    format!("{method} {url} failed: {reason}")
}

/// `fetch`-backed transport. Stateless; the credential lives on the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use tasks::Method;

            let method = request.method.as_str();
            let fail = |e: gloo_net::Error| TransportError(request_failed_message(method, &request.url, &e.to_string()));

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body).map_err(fail)?,
                None => builder.build().map_err(fail)?,
            };
            let response = outgoing.send().await.map_err(fail)?;
            let status = response.status();
            let body = response.text().await.map_err(fail)?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError("not available outside the browser".to_owned()))
        }
    }
}
