//! HTTP API client for the stock-data backend.

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError, MarketData};
pub use types::{HistoryResponse, SymbolInfo, SymbolsResponse};
