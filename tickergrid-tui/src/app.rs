//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels;
//! every session mutation goes through `tickergrid_core::session::Session`
//! so stale fetch responses are discarded there, not here.

use std::sync::mpsc::{Receiver, Sender};

use tickergrid_core::api::SymbolInfo;
use tickergrid_core::domain::SeasonalDay;
use tickergrid_core::render::HISTORY_COLUMNS;
use tickergrid_core::session::{Session, SessionError};
use tickergrid_core::sort::SortColumn;

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    History,
    Seasonal,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::History => 0,
            Panel::Seasonal => 1,
            Panel::Help => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::History => "History",
            Panel::Seasonal => "Seasonal",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::History => Panel::Seasonal,
            Panel::Seasonal => Panel::Help,
            Panel::Help => Panel::History,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::History => Panel::Help,
            Panel::Seasonal => Panel::History,
            Panel::Help => Panel::Seasonal,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// History panel state around the core session.
pub struct HistoryState {
    pub session: Session,
    pub loading: bool,
    /// Cursor into `HISTORY_COLUMNS` for keyboard sort selection.
    pub sort_cursor: usize,
    pub scroll: usize,
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            loading: false,
            sort_cursor: 0,
            scroll: 0,
        }
    }

    pub fn cursor_column(&self) -> SortColumn {
        HISTORY_COLUMNS[self.sort_cursor]
    }

    pub fn cursor_right(&mut self) {
        self.sort_cursor = (self.sort_cursor + 1) % HISTORY_COLUMNS.len();
    }

    pub fn cursor_left(&mut self) {
        self.sort_cursor = (self.sort_cursor + HISTORY_COLUMNS.len() - 1) % HISTORY_COLUMNS.len();
    }
}

/// Which of the two seasonal tables is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalView {
    AvgReturns,
    WinRates,
}

impl SeasonalView {
    pub fn toggle(self) -> Self {
        match self {
            SeasonalView::AvgReturns => SeasonalView::WinRates,
            SeasonalView::WinRates => SeasonalView::AvgReturns,
        }
    }
}

/// Seasonal panel state.
pub struct SeasonalState {
    pub symbol: String,
    pub days: Vec<SeasonalDay>,
    pub loading: bool,
    pub error: Option<String>,
    pub view: SeasonalView,
    pub scroll: usize,
}

impl SeasonalState {
    pub fn new(symbol: String) -> Self {
        Self {
            symbol,
            days: Vec::new(),
            loading: false,
            error: None,
            view: SeasonalView::AvgReturns,
            scroll: 0,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    pub history: HistoryState,
    pub seasonal: SeasonalState,
    pub symbols: Vec<SymbolInfo>,

    // Symbol entry
    pub symbol_input: String,
    pub input_focused: bool,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        default_symbol: String,
    ) -> Self {
        Self {
            active_panel: Panel::History,
            running: true,
            history: HistoryState::new(),
            seasonal: SeasonalState::new(default_symbol),
            symbols: Vec::new(),
            symbol_input: String::new(),
            input_focused: true,
            worker_tx,
            worker_rx,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    /// Submit the current input box contents as a fetch. The session
    /// validates; a blank symbol never reaches the worker.
    pub fn submit_symbol(&mut self) {
        match self.history.session.begin_fetch(&self.symbol_input) {
            Ok(ticket) => {
                self.history.loading = true;
                self.history.scroll = 0;
                self.seasonal.symbol = ticket.symbol.clone();
                self.seasonal.loading = true;
                self.set_status(format!("Fetching {}...", ticket.symbol));
                let _ = self.worker_tx.send(WorkerCommand::FetchSeasonal {
                    symbol: ticket.symbol.clone(),
                });
                let _ = self.worker_tx.send(WorkerCommand::FetchHistory { ticket });
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Apply the sort column under the cursor to the session.
    pub fn apply_sort(&mut self) {
        let column = self.history.cursor_column();
        let state = self.history.session.request_sort(column);
        if self.history.session.has_data() {
            self.set_status(format!(
                "Sorted by {} {}",
                state.column.label(),
                state.direction.indicator()
            ));
        }
    }

    /// Export the current table to a CSV file in the working directory.
    pub fn export_csv(&mut self) {
        let today = chrono::Local::now().date_naive();
        match self.history.session.export(today) {
            Ok(artifact) => match std::fs::write(&artifact.filename, &artifact.content) {
                Ok(()) => self.set_status(format!("Exported {}", artifact.filename)),
                Err(e) => self.set_error(format!("Export failed: {e}")),
            },
            Err(SessionError::NoData) => self.set_error("No data to export"),
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn test_app() -> AppState {
        let (tx, _rx) = mpsc::channel();
        let (_tx2, rx2) = mpsc::channel();
        AppState::new(tx, rx2, "SPY".to_string())
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::History.next(), Panel::Seasonal);
        assert_eq!(Panel::Help.next(), Panel::History);
        assert_eq!(Panel::History.prev(), Panel::Help);
        assert_eq!(Panel::Seasonal.prev(), Panel::History);
    }

    #[test]
    fn sort_cursor_wraps_both_ways() {
        let mut state = HistoryState::new();
        assert_eq!(state.cursor_column(), SortColumn::Date);
        state.cursor_left();
        assert_eq!(state.sort_cursor, HISTORY_COLUMNS.len() - 1);
        state.cursor_right();
        assert_eq!(state.cursor_column(), SortColumn::Date);
    }

    #[test]
    fn blank_submit_sets_error_without_worker_traffic() {
        let (tx, rx) = mpsc::channel();
        let (_tx2, rx2) = mpsc::channel();
        let mut app = AppState::new(tx, rx2, "SPY".to_string());

        app.symbol_input = "   ".to_string();
        app.submit_symbol();

        assert!(matches!(
            app.status_message,
            Some((ref msg, StatusLevel::Error)) if msg == "Please enter a stock symbol"
        ));
        assert!(!app.history.loading);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_sends_history_and_seasonal_commands() {
        let (tx, rx) = mpsc::channel();
        let (_tx2, rx2) = mpsc::channel();
        let mut app = AppState::new(tx, rx2, "SPY".to_string());

        app.symbol_input = "aapl".to_string();
        app.submit_symbol();

        assert!(app.history.loading);
        assert!(app.seasonal.loading);
        assert_eq!(app.seasonal.symbol, "AAPL");
        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn export_without_data_reports_error() {
        let mut app = test_app();
        app.export_csv();
        assert!(matches!(
            app.status_message,
            Some((_, StatusLevel::Error))
        ));
    }
}
