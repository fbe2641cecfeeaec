//! TickerGrid TUI — terminal interface for OHLCV history and seasonal
//! heatmaps.
//!
//! Panels:
//! 1. History — sortable daily OHLCV table with CSV export
//! 2. Seasonal — average-return and win-rate heatmap tables
//! 3. Help — keyboard shortcuts
//!
//! The network lives on a worker thread; the main thread owns all state
//! and drains worker responses between frames.

mod app;
mod config;
mod input;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use tickergrid_core::api::ApiClient;
use tickergrid_core::session::FetchOutcome;

use crate::app::AppState;
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = config::load(&config::default_path());

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    let client = ApiClient::new(config.api_url.clone());
    let worker_handle = worker::spawn_worker(client, cmd_rx, resp_tx);

    let mut app = AppState::new(cmd_tx.clone(), resp_rx, config.default_symbol.clone());

    // Kick off the startup fetches: symbol list for the help panel, and
    // the configured default symbol's seasonal tables.
    let _ = cmd_tx.send(WorkerCommand::FetchSymbols);
    app.seasonal.loading = true;
    let _ = cmd_tx.send(WorkerCommand::FetchSeasonal {
        symbol: config.default_symbol,
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::History { ticket, result } => {
            match app.history.session.complete_fetch(&ticket, result) {
                FetchOutcome::Replaced { days } => {
                    app.history.loading = false;
                    app.history.scroll = 0;
                    app.set_status(format!("{}: {} trading days loaded", ticket.symbol, days));
                }
                // A newer fetch is still in flight; keep the spinner up.
                FetchOutcome::Stale => {}
                FetchOutcome::Failed { message } => {
                    app.history.loading = false;
                    app.set_error(message);
                }
            }
        }
        WorkerResponse::Seasonal { symbol, result } => {
            // Same newest-wins rule as the session, keyed by symbol.
            if symbol != app.seasonal.symbol {
                return;
            }
            app.seasonal.loading = false;
            app.seasonal.scroll = 0;
            match result {
                Ok(days) => {
                    app.seasonal.days = days;
                    app.seasonal.error = None;
                }
                Err(message) => {
                    app.seasonal.days.clear();
                    app.seasonal.error = Some(message);
                }
            }
        }
        WorkerResponse::Symbols { result } => match result {
            Ok(symbols) => app.symbols = symbols,
            // Symbol listing is a convenience; failure is not fatal.
            Err(message) => app.set_error(format!("Failed to list symbols: {message}")),
        },
    }
}
