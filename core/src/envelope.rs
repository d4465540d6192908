//! Response normalization: every HTTP exchange becomes an `Envelope`.
//!
//! # Design
//! Decoding is an explicit two-step attempt rather than exception-driven
//! control flow: a JSON parse is tried first and an undecodable body
//! degrades to `Body::Text` with the raw payload. The decode outcome only
//! changes the shape of `body`, never the success of the call.

use serde_json::Value;

use crate::http::RawResponse;

/// Decoded response body: JSON when the payload parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Text(raw.to_string()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Json(_) => None,
            Body::Text(text) => Some(text),
        }
    }

    /// The body as a JSON value for reporting; text becomes a JSON string.
    pub fn to_value(&self) -> Value {
        match self {
            Body::Json(value) => value.clone(),
            Body::Text(text) => Value::String(text.clone()),
        }
    }
}

/// Uniform view of an HTTP response: status, 2xx flag, decoded body, and
/// the raw transport result for callers that need the original exchange.
///
/// Envelopes are value objects created per call and owned by the caller;
/// no state is shared between requests.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: u16,
    pub ok: bool,
    pub body: Body,
    pub raw: RawResponse,
}

impl Envelope {
    /// Wraps a raw transport response. Never fails: a body that is not
    /// valid JSON is kept as text.
    pub fn from_raw(raw: RawResponse) -> Self {
        let body = Body::decode(&raw.body);
        Self {
            status: raw.status,
            ok: (200..=299).contains(&raw.status),
            body,
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn json_body_is_decoded() {
        let envelope = Envelope::from_raw(raw(200, r#"{"premium":125.5,"quoteId":"q-1"}"#));
        assert!(envelope.ok);
        assert_eq!(
            envelope.body.as_json(),
            Some(&json!({"premium": 125.5, "quoteId": "q-1"}))
        );
    }

    #[test]
    fn non_json_body_falls_back_to_text() {
        let envelope = Envelope::from_raw(raw(200, "upstream says hello"));
        assert!(envelope.ok);
        assert_eq!(envelope.body.as_text(), Some("upstream says hello"));
    }

    #[test]
    fn empty_body_falls_back_to_text() {
        let envelope = Envelope::from_raw(raw(204, ""));
        assert_eq!(envelope.body, Body::Text(String::new()));
    }

    #[test]
    fn ok_covers_exactly_the_2xx_range() {
        assert!(!Envelope::from_raw(raw(199, "{}")).ok);
        assert!(Envelope::from_raw(raw(200, "{}")).ok);
        assert!(Envelope::from_raw(raw(299, "{}")).ok);
        assert!(!Envelope::from_raw(raw(300, "{}")).ok);
        assert!(!Envelope::from_raw(raw(404, "{}")).ok);
    }

    #[test]
    fn raw_body_is_preserved_alongside_the_decoded_view() {
        let envelope = Envelope::from_raw(raw(500, "internal error"));
        assert_eq!(envelope.raw.body, "internal error");
        assert_eq!(envelope.status, 500);
        assert!(!envelope.ok);
    }

    #[test]
    fn to_value_wraps_text_as_a_json_string() {
        let envelope = Envelope::from_raw(raw(200, "plain"));
        assert_eq!(envelope.body.to_value(), json!("plain"));
        let envelope = Envelope::from_raw(raw(200, "[1,2]"));
        assert_eq!(envelope.body.to_value(), json!([1, 2]));
    }
}
