//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient::build_call` produces an
//! `HttpRequest` and `ApiClient::parse_call` consumes an `HttpResponse`, so
//! both halves of a call can be tested without a socket. Executing the request
//! is the job of a [`Transport`](crate::transport::Transport).

use std::time::Duration;

/// HTTP method for a request. The Tilda API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Fully built URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Upper bound on the whole exchange.
    pub timeout: Duration,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response carrying `body`, as most transports return it.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
