//! Session controller — owns the single mutable dataset and its sort state.
//!
//! One session exists per UI. A fetch is a two-phase operation:
//! `begin_fetch` validates input and hands out a generation ticket;
//! `complete_fetch` applies the outcome only if no newer fetch has started
//! since. A stale completion is discarded, so the newest *request* always
//! wins regardless of response arrival order. Failures leave the prior
//! dataset and sort state untouched.

use chrono::NaiveDate;
use thiserror::Error;

use crate::derive::derive_rows;
use crate::domain::{Bar, DerivedRow};
use crate::export::{export_filename, export_history_csv};
use crate::render::{history_view, TableView};
use crate::sort::{sort_rows, SortColumn, SortState};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please enter a stock symbol")]
    EmptySymbol,

    #[error("no dataset to export — fetch a symbol first")]
    NoData,

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Identifies one fetch attempt. Created by `begin_fetch`, consumed by
/// `complete_fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub symbol: String,
    pub generation: u64,
}

/// What `complete_fetch` did with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Dataset swapped in atomically; sort reset to the default.
    Replaced { days: usize },
    /// A newer fetch superseded this one; nothing changed.
    Stale,
    /// Fetch failed; prior dataset and sort state untouched.
    Failed { message: String },
}

/// A ready-to-write CSV artifact.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// The single active (symbol, dataset, sort state) tuple.
#[derive(Debug, Default)]
pub struct Session {
    symbol: Option<String>,
    rows: Vec<DerivedRow>,
    sort: SortState,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the symbol, then start a new fetch
    /// generation. Blank input fails locally; no network call should be
    /// issued for it.
    pub fn begin_fetch(&mut self, input: &str) -> Result<FetchTicket, SessionError> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(SessionError::EmptySymbol);
        }
        self.generation += 1;
        Ok(FetchTicket {
            symbol,
            generation: self.generation,
        })
    }

    /// Apply a fetch outcome. The error side carries the user-facing
    /// message (server `error` field or transport description).
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<Vec<Bar>, String>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        match outcome {
            Ok(bars) => {
                let mut rows = derive_rows(&bars);
                let sort = SortState::default();
                sort_rows(&mut rows, sort);
                self.symbol = Some(ticket.symbol.clone());
                self.rows = rows;
                self.sort = sort;
                FetchOutcome::Replaced {
                    days: self.rows.len(),
                }
            }
            Err(message) => FetchOutcome::Failed { message },
        }
    }

    /// Apply a user sort request and re-sort in place. No-op until a
    /// dataset has been loaded; sort state persists across re-renders of
    /// the same dataset.
    pub fn request_sort(&mut self, column: SortColumn) -> SortState {
        if self.symbol.is_some() {
            self.sort = self.sort.request(column);
            sort_rows(&mut self.rows, self.sort);
        }
        self.sort
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn has_data(&self) -> bool {
        self.symbol.is_some()
    }

    /// Project the current dataset into a display-ready table.
    pub fn view(&self) -> Option<TableView> {
        self.symbol
            .as_deref()
            .map(|sym| history_view(sym, &self.rows, self.sort))
    }

    /// Export the current view order as a CSV artifact.
    pub fn export(&self, today: NaiveDate) -> Result<CsvExport, SessionError> {
        let symbol = self.symbol.as_deref().ok_or(SessionError::NoData)?;
        let content =
            export_history_csv(&self.rows).map_err(|e| SessionError::Csv(e.to_string()))?;
        Ok(CsvExport {
            filename: export_filename(symbol, today),
            content,
        })
    }
}
