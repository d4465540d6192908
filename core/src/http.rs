//! HTTP exchange types and the transport capability boundary.
//!
//! # Design
//! `RequestDescriptor` and `RawResponse` describe an HTTP exchange as plain
//! data. The `Transport` trait is the only seam that touches the network;
//! everything above it is deterministic and can be exercised with a stub
//! transport. `UreqTransport` is the default implementation used by the
//! contract tests.

use serde_json::Value;

use crate::error::HarnessError;

/// HTTP method for a request. `RequestDescriptor` defaults to `Get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a serialized payload.
    /// GET and DELETE never transmit a body.
    pub fn carries_body(self) -> bool {
        !matches!(self, Method::Get | Method::Delete)
    }
}

/// An HTTP request described as plain data, consumed by `ApiClient::send`.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub payload: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// A GET request for `path`. Use the `with_*` methods for anything else.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: None,
            headers: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// An HTTP response as returned by the transport, before normalization.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The injected network capability: exactly one call per `fetch`, no
/// retries, no harness-owned timeout.
pub trait Transport {
    fn fetch(
        &self,
        url: &str,
        method: Method,
        body: Option<&str>,
        headers: &[(String, String)],
    ) -> Result<RawResponse, HarnessError>;
}

/// Default `Transport` backed by ureq.
///
/// Status-code-as-error handling is disabled so 4xx/5xx responses come back
/// as data; the harness treats them as assertable envelopes, not failures.
#[derive(Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn fetch(
        &self,
        url: &str,
        method: Method,
        body: Option<&str>,
        headers: &[(String, String)],
    ) -> Result<RawResponse, HarnessError> {
        let result = match (method, body) {
            (Method::Get, _) => apply_headers(self.agent.get(url), headers).call(),
            (Method::Delete, _) => apply_headers(self.agent.delete(url), headers).call(),
            (Method::Post, Some(body)) => {
                apply_headers(self.agent.post(url), headers).send(body.as_bytes())
            }
            (Method::Post, None) => apply_headers(self.agent.post(url), headers).send_empty(),
            (Method::Put, Some(body)) => {
                apply_headers(self.agent.put(url), headers).send(body.as_bytes())
            }
            (Method::Put, None) => apply_headers(self.agent.put(url), headers).send_empty(),
            (Method::Patch, Some(body)) => {
                apply_headers(self.agent.patch(url), headers).send(body.as_bytes())
            }
            (Method::Patch, None) => apply_headers(self.agent.patch(url), headers).send_empty(),
        };

        let mut response = result.map_err(|e| HarnessError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| HarnessError::Transport(e.to_string()))?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
