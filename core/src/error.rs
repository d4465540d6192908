//! Error types for the quote harness.
//!
//! # Design
//! Only two things can abort a call: the transport failing to complete the
//! round trip, and the request payload failing to serialize. Everything else
//! the harness observes — undecodable bodies, schema violations, HTTP
//! 4xx/5xx — is data that assertions inspect explicitly, so none of it
//! appears here.

use thiserror::Error;

/// Errors returned by `ApiClient::send` and the domain wrappers.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The transport could not complete the round trip (connection refused,
    /// DNS failure, or a timeout enforced by the transport itself).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialization(String),
}
