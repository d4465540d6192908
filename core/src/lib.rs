//! Contract-verification harness for the quoting service.
//!
//! # Overview
//! Turns an arbitrary HTTP exchange into a uniform, inspectable `Envelope`
//! and classifies payloads against compiled JSON Schemas, with structured
//! path-qualified error reporting. The contract tests in `tests/` drive
//! the harness against the mock quoting backend.
//!
//! # Design
//! - `ApiClient` is stateless: a base URL plus an injected `Transport`.
//!   One network call per `send`, no retries, no shared mutable state.
//! - Failures the harness can assert on are data, not errors: undecodable
//!   bodies become `Body::Text`, schema violations become
//!   `ValidationOutcome::Rejected`, HTTP 4xx/5xx is an ordinary envelope.
//!   Only transport-level failures propagate as `HarnessError`.
//! - Page interaction for the coverage-selection form is abstracted behind
//!   the `PageDriver` trait; the page object owns locators and logic only.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod page;
pub mod quote;
pub mod report;
pub mod scenario;
pub mod schema;

pub use client::ApiClient;
pub use config::HarnessConfig;
pub use envelope::{Body, Envelope};
pub use error::HarnessError;
pub use http::{Method, RawResponse, RequestDescriptor, Transport, UreqTransport};
pub use page::{CoverageOption, CoverageSelectionPage, PageDriver, PageError, StateCode};
pub use quote::{QuoteApi, QuoteRequest, QuoteResponse};
pub use report::{Attachment, DiagnosticSink};
pub use scenario::Scenario;
pub use schema::ValidationOutcome;
