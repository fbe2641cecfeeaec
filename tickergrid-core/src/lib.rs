//! TickerGrid Core — the tabular stock-history pipeline.
//!
//! This crate contains the full fetch → derive → sort → render → export
//! pipeline:
//! - Domain types (bars, derived rows, seasonal aggregates)
//! - Derivation engine (change / change% with display strings)
//! - Stable, column-typed sort engine
//! - Heatmap classifiers for the seasonal view
//! - Table renderer (pure projection, full replacement per call)
//! - CSV exporter
//! - Session controller with stale-fetch protection
//! - Blocking HTTP client for the stock-data API

pub mod api;
pub mod derive;
pub mod domain;
pub mod export;
pub mod format;
pub mod heatmap;
pub mod render;
pub mod session;
pub mod sort;
