use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

/// Request body for `POST /quote`. Every field is optional so missing ones
/// are reported with a 400 and a readable message rather than axum's
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct QuoteInput {
    pub revenue: Option<f64>,
    pub state: Option<String>,
    pub business: Option<String>,
}

/// An issued quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub premium: f64,
    #[serde(rename = "quoteId")]
    pub quote_id: String,
}

/// State codes the backend quotes in.
pub const KNOWN_STATES: [&str; 8] = ["WI", "OH", "IL", "NV", "TX", "NY", "CA", "FL"];

pub fn app() -> Router {
    Router::new()
        .route("/quote", post(create_quote))
        .route("/health", get(health))
        .route("/version", get(version))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

async fn create_quote(
    Json(input): Json<QuoteInput>,
) -> Result<Json<Quote>, (StatusCode, Json<Value>)> {
    let Some(revenue) = input.revenue else {
        return Err(bad_request("revenue is required"));
    };
    if revenue < 0.0 {
        return Err(bad_request("revenue must be non-negative"));
    }
    let Some(state) = input.state else {
        return Err(bad_request("state is required"));
    };
    if !KNOWN_STATES.contains(&state.as_str()) {
        return Err(bad_request("unknown state code"));
    }
    let Some(business) = input.business else {
        return Err(bad_request("business is required"));
    };
    if business.trim().is_empty() {
        return Err(bad_request("business must not be empty"));
    }

    // Zero revenue quotes at the flat base rate.
    Ok(Json(Quote {
        premium: premium_for(revenue, &business),
        quote_id: Uuid::new_v4().to_string(),
    }))
}

/// Flat base rate plus a revenue-scaled component per business class.
fn premium_for(revenue: f64, business: &str) -> f64 {
    let rate = match business {
        "retail" => 0.004,
        "professional" => 0.003,
        "manufacturing" => 0.006,
        "technology" => 0.002,
        _ => 0.005,
    };
    150.0 + revenue * rate
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn version() -> &'static str {
    concat!("mock-quote-server ", env!("CARGO_PKG_VERSION"))
}
