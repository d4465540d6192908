//! Harness configuration.
//!
//! # Design
//! The base address is an explicit value handed to `ApiClient::new`, not
//! ambient global state, so harness instances with different targets can
//! coexist in one process. The environment is consulted once at startup via
//! `from_env`, never from inside the core.

use std::env;

/// Environment variable overriding the target base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Default target: the local mock quoting backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub base_url: String,
}

impl HarnessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `API_BASE_URL`, falling back to the local mock server.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
