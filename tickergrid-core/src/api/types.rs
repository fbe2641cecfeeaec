//! Wire types for the stock-data API.

use serde::Deserialize;

use crate::domain::Bar;

/// `POST /api/stock-data` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub symbol: String,
    pub data: Vec<Bar>,
}

/// Non-2xx error body: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `GET /api/available-symbols` body.
#[derive(Debug, Deserialize)]
pub struct SymbolsResponse {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
}
