//! Blocking HTTP client and structured error types.
//!
//! The `MarketData` trait abstracts the backend so UIs can run against an
//! in-memory implementation in tests. The client never retries: a failed
//! action is terminal until the user re-triggers it.

use std::time::Duration;

use thiserror::Error;

use super::types::{ErrorBody, HistoryResponse, SymbolInfo, SymbolsResponse};
use crate::domain::SeasonalDay;

/// Errors surfaced to the user for a single failed action.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch data: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the server's `error` field when the
    /// body parses, otherwise a generic "HTTP {status}".
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("unexpected response format: {0}")]
    Decode(String),
}

/// The backend contract: history bars, seasonal aggregates, symbol list.
pub trait MarketData: Send {
    fn fetch_history(&self, symbol: &str) -> Result<HistoryResponse, ApiError>;
    fn fetch_seasonal(&self, symbol: &str) -> Result<Vec<SeasonalDay>, ApiError>;
    fn fetch_symbols(&self) -> Result<Vec<SymbolInfo>, ApiError>;
}

/// Blocking reqwest client for the stock-data API.
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000";

    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build HTTP client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn error_from(status: reqwest::StatusCode, body: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        ApiError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl MarketData for ApiClient {
    fn fetch_history(&self, symbol: &str) -> Result<HistoryResponse, ApiError> {
        let url = format!("{}/api/stock-data", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "symbol": symbol }))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Self::error_from(status, &body));
        }
        resp.json::<HistoryResponse>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn fetch_seasonal(&self, symbol: &str) -> Result<Vec<SeasonalDay>, ApiError> {
        let url = format!("{}/api/seasonal-data", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Self::error_from(status, &body));
        }
        resp.json::<Vec<SeasonalDay>>()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn fetch_symbols(&self) -> Result<Vec<SymbolInfo>, ApiError> {
        let url = format!("{}/api/available-symbols", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(Self::error_from(status, &body));
        }
        resp.json::<SymbolsResponse>()
            .map(|r| r.symbols)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
