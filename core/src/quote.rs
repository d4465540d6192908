//! Typed façade for the `/quote` endpoint.
//!
//! # Design
//! `QuoteRequest` is a structurally optional record: every field can be
//! omitted so missing-field scenarios are expressible at the type level.
//! Required-ness is enforced by the backend and checked by the schema
//! validator, never hand-checked here.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::HarnessError;
use crate::http::{Method, RequestDescriptor};

/// Partial quote request. `None` fields are left out of the serialized JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<String>,
}

impl QuoteRequest {
    /// A request with all three fields present.
    pub fn full(revenue: f64, state: &str, business: &str) -> Self {
        Self {
            revenue: Some(revenue),
            state: Some(state.to_string()),
            business: Some(business.to_string()),
        }
    }
}

/// Successful quote response shape, as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub premium: f64,
    #[serde(rename = "quoteId")]
    pub quote_id: String,
}

/// Routing convenience over `ApiClient`: fixes method and path for the
/// quote endpoint and forwards whatever payload it is given.
pub struct QuoteApi {
    client: ApiClient,
}

impl QuoteApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POSTs the (possibly partial) payload to `/quote`. Performs no
    /// client-side validation and never inspects the result.
    pub fn create_quote(&self, payload: &QuoteRequest) -> Result<Envelope, HarnessError> {
        let payload =
            serde_json::to_value(payload).map_err(|e| HarnessError::Serialization(e.to_string()))?;
        self.client.send(
            &RequestDescriptor::new("/quote")
                .with_method(Method::Post)
                .with_payload(payload),
        )
    }
}
