//! Diagnostic artifacts for failed assertions.
//!
//! # Design
//! Each artifact is a named, pretty-printed JSON document attached to the
//! test-run report. The exchange helper records the original request
//! payload and a reduced response view (status, ok, body); the raw
//! transport result is deliberately left out so artifacts stay serializable
//! and reviewable. Success paths record nothing.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::{json, Value};

use crate::envelope::Envelope;

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const REQUEST_ARTIFACT: &str = "request.json";
pub const RESPONSE_ARTIFACT: &str = "response.json";

/// A single named artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Collects artifacts for one test case.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    attachments: Vec<Attachment>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one pretty-printed JSON artifact under `name`.
    pub fn record(&mut self, name: &str, value: &Value) {
        let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.attachments.push(Attachment {
            name: name.to_string(),
            content_type: CONTENT_TYPE_JSON,
            body,
        });
    }

    /// Records the full exchange: the request payload as `request.json` and
    /// the reduced response view as `response.json`.
    pub fn record_exchange(&mut self, request_payload: &Value, response: &Envelope) {
        self.record(REQUEST_ARTIFACT, request_payload);
        self.record(
            RESPONSE_ARTIFACT,
            &json!({
                "status": response.status,
                "ok": response.ok,
                "body": response.body.to_value(),
            }),
        );
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    /// Writes every artifact into `dir`, one file per attachment.
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        for attachment in &self.attachments {
            fs::write(dir.join(&attachment.name), &attachment.body)?;
        }
        Ok(())
    }
}
