//! Background worker thread — all network calls run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The
//! worker owns the HTTP client; the main thread never blocks on the
//! network. Responses carry plain strings on the error side so the UI can
//! surface them verbatim.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tickergrid_core::api::{ApiClient, MarketData, SymbolInfo};
use tickergrid_core::domain::{Bar, SeasonalDay};
use tickergrid_core::session::FetchTicket;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchHistory { ticket: FetchTicket },
    FetchSeasonal { symbol: String },
    FetchSymbols,
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    History {
        ticket: FetchTicket,
        result: Result<Vec<Bar>, String>,
    },
    Seasonal {
        symbol: String,
        result: Result<Vec<SeasonalDay>, String>,
    },
    Symbols {
        result: Result<Vec<SymbolInfo>, String>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    client: ApiClient,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("tickergrid-worker".into())
        .spawn(move || {
            worker_loop(client, rx, tx);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(client: ApiClient, rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => handle_command(&client, cmd, &tx),
        }
    }
}

fn handle_command(client: &ApiClient, cmd: WorkerCommand, tx: &Sender<WorkerResponse>) {
    match cmd {
        WorkerCommand::FetchHistory { ticket } => {
            let result = client
                .fetch_history(&ticket.symbol)
                .map(|resp| resp.data)
                .map_err(|e| e.to_string());
            let _ = tx.send(WorkerResponse::History { ticket, result });
        }
        WorkerCommand::FetchSeasonal { symbol } => {
            let result = client.fetch_seasonal(&symbol).map_err(|e| e.to_string());
            let _ = tx.send(WorkerResponse::Seasonal { symbol, result });
        }
        WorkerCommand::FetchSymbols => {
            let result = client.fetch_symbols().map_err(|e| e.to_string());
            let _ = tx.send(WorkerResponse::Symbols { result });
        }
        WorkerCommand::Shutdown => {} // handled in loop
    }
}
