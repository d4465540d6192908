//! Response envelope builder: sends a `RequestDescriptor` and normalizes
//! the result.
//!
//! # Design
//! `ApiClient` holds only a base URL and an injected `Transport`; it carries
//! no mutable state between calls, so any number of clients with different
//! targets can coexist and calls are independent. `send` performs exactly
//! one transport round trip: no retries, no harness-owned timeout.

use serde_json::{Map, Value};

use crate::config::HarnessConfig;
use crate::envelope::Envelope;
use crate::error::HarnessError;
use crate::http::{RequestDescriptor, Transport, UreqTransport};

/// Stateless client that turns request descriptors into envelopes.
pub struct ApiClient {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Box<dyn Transport>, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Client over the default ureq transport, targeting `config.base_url`.
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(Box::new(UreqTransport::new()), &config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the normalized envelope.
    ///
    /// - GET/DELETE never transmit a payload, even if the descriptor has one.
    /// - For other methods a missing payload is normalized to `{}`.
    /// - `content-type: application/json` is forced when a body is sent,
    ///   unless the caller supplied their own content-type header.
    /// - Body decode failures degrade to text inside the envelope; only
    ///   transport failures surface as errors.
    pub fn send(&self, descriptor: &RequestDescriptor) -> Result<Envelope, HarnessError> {
        let url = join_url(&self.base_url, &descriptor.path);

        let body = if descriptor.method.carries_body() {
            let payload = descriptor
                .payload
                .clone()
                .unwrap_or_else(|| Value::Object(Map::new()));
            let serialized = serde_json::to_string(&payload)
                .map_err(|e| HarnessError::Serialization(e.to_string()))?;
            Some(serialized)
        } else {
            None
        };

        let mut headers = descriptor.headers.clone();
        if body.is_some() && !has_content_type(&headers) {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        let raw = self
            .transport
            .fetch(&url, descriptor.method, body.as_deref(), &headers)?;
        Ok(Envelope::from_raw(raw))
    }
}

/// Joins base and path with exactly one separating slash, regardless of a
/// trailing slash on the base or a leading slash on the path.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn has_content_type(headers: &[(String, String)]) -> bool {
    headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Method, RawResponse};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct Captured {
        url: String,
        method: Method,
        body: Option<String>,
        headers: Vec<(String, String)>,
    }

    /// Records every fetch and replays a canned response.
    struct StubTransport {
        calls: Rc<RefCell<Vec<Captured>>>,
        status: u16,
        body: String,
    }

    impl Transport for StubTransport {
        fn fetch(
            &self,
            url: &str,
            method: Method,
            body: Option<&str>,
            headers: &[(String, String)],
        ) -> Result<RawResponse, HarnessError> {
            self.calls.borrow_mut().push(Captured {
                url: url.to_string(),
                method,
                body: body.map(str::to_string),
                headers: headers.to_vec(),
            });
            Ok(RawResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    fn client_with_stub(base_url: &str, status: u16, body: &str) -> (ApiClient, Rc<RefCell<Vec<Captured>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let transport = StubTransport {
            calls: Rc::clone(&calls),
            status,
            body: body.to_string(),
        };
        (ApiClient::new(Box::new(transport), base_url), calls)
    }

    #[test]
    fn join_url_inserts_exactly_one_slash() {
        assert_eq!(join_url("http://host", "/x"), "http://host/x");
        assert_eq!(join_url("http://host", "x"), "http://host/x");
        assert_eq!(join_url("http://host/", "x"), "http://host/x");
        assert_eq!(join_url("http://host/", "/x"), "http://host/x");
    }

    #[test]
    fn get_strips_a_supplied_payload() {
        let (client, calls) = client_with_stub("http://host", 200, "{}");
        let descriptor = RequestDescriptor::new("/quote").with_payload(json!({"ignored": true}));
        client.send(&descriptor).unwrap();

        let call = calls.borrow()[0].clone();
        assert_eq!(call.method, Method::Get);
        assert!(call.body.is_none());
        assert!(call.headers.is_empty());
    }

    #[test]
    fn delete_strips_a_supplied_payload() {
        let (client, calls) = client_with_stub("http://host", 204, "");
        let descriptor = RequestDescriptor::new("/quote/1")
            .with_method(Method::Delete)
            .with_payload(json!({"ignored": true}));
        client.send(&descriptor).unwrap();

        assert!(calls.borrow()[0].body.is_none());
    }

    #[test]
    fn post_without_payload_sends_empty_object() {
        let (client, calls) = client_with_stub("http://host", 200, "{}");
        let descriptor = RequestDescriptor::new("/quote").with_method(Method::Post);
        client.send(&descriptor).unwrap();

        assert_eq!(calls.borrow()[0].body.as_deref(), Some("{}"));
    }

    #[test]
    fn post_serialization_is_idempotent() {
        let (client, calls) = client_with_stub("http://host", 200, "{}");
        let descriptor = RequestDescriptor::new("/quote")
            .with_method(Method::Post)
            .with_payload(json!({"revenue": 50000, "state": "CA"}));
        client.send(&descriptor).unwrap();
        client.send(&descriptor).unwrap();

        let calls = calls.borrow();
        assert_eq!(calls[0].body, calls[1].body);
    }

    #[test]
    fn post_forces_json_content_type() {
        let (client, calls) = client_with_stub("http://host", 200, "{}");
        let descriptor = RequestDescriptor::new("/quote")
            .with_method(Method::Post)
            .with_payload(json!({}));
        client.send(&descriptor).unwrap();

        assert_eq!(
            calls.borrow()[0].headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn caller_content_type_wins_case_insensitively() {
        let (client, calls) = client_with_stub("http://host", 200, "{}");
        let descriptor = RequestDescriptor::new("/quote")
            .with_method(Method::Post)
            .with_header("Content-Type", "application/vnd.custom+json");
        client.send(&descriptor).unwrap();

        let headers = calls.borrow()[0].headers.clone();
        assert_eq!(
            headers,
            vec![(
                "Content-Type".to_string(),
                "application/vnd.custom+json".to_string()
            )]
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized_at_construction() {
        let (client, calls) = client_with_stub("http://host/", 200, "{}");
        client.send(&RequestDescriptor::new("quote")).unwrap();
        assert_eq!(calls.borrow()[0].url, "http://host/quote");
        assert_eq!(client.base_url(), "http://host");
    }

    #[test]
    fn envelope_reflects_stub_status_and_body() {
        let (client, _) = client_with_stub("http://host", 404, "not json");
        let envelope = client.send(&RequestDescriptor::new("/missing")).unwrap();
        assert_eq!(envelope.status, 404);
        assert!(!envelope.ok);
        assert_eq!(envelope.body.as_text(), Some("not json"));
    }
}
