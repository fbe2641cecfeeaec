//! TickerGrid CLI — one-shot table commands against the market-data API.
//!
//! Commands:
//! - `history` — fetch a symbol's daily OHLCV table and print it
//! - `export` — fetch and write the table as CSV
//! - `seasonal` — print the seasonal average-return and win-rate tables
//! - `symbols` — list symbols the API can serve

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tickergrid_core::api::{ApiClient, MarketData};
use tickergrid_core::render::{seasonal_views, TableView};
use tickergrid_core::session::Session;
use tickergrid_core::sort::{SortColumn, SortDirection};

#[derive(Parser)]
#[command(
    name = "tickergrid",
    about = "TickerGrid CLI — stock history tables and seasonal heatmaps"
)]
struct Cli {
    /// Base URL of the market-data API.
    #[arg(long, global = true, default_value = ApiClient::DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a symbol's daily history and print the table.
    History {
        /// Stock symbol (e.g., SPY).
        symbol: String,

        /// Sort column: date, open, high, low, close, change, change_pct,
        /// volume, rsi2, rsi2_ma_fast, rsi2_ma_slow.
        #[arg(long)]
        sort: Option<String>,

        /// Force descending order for the sort column.
        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Print at most this many rows.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fetch a symbol's daily history and write it as CSV.
    Export {
        /// Stock symbol (e.g., SPY).
        symbol: String,

        /// Output file. Defaults to SYMBOL_history_YYYY-MM-DD.csv.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Sort column applied before export (export preserves table order).
        #[arg(long)]
        sort: Option<String>,

        /// Force descending order for the sort column.
        #[arg(long, default_value_t = false)]
        desc: bool,
    },
    /// Print the seasonal heatmap tables for a symbol.
    Seasonal {
        /// Stock symbol.
        #[arg(default_value = "SPY")]
        symbol: String,
    },
    /// List the symbols the API can serve.
    Symbols,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url);

    match cli.command {
        Commands::History {
            symbol,
            sort,
            desc,
            limit,
        } => run_history(&client, &symbol, sort.as_deref(), desc, limit),
        Commands::Export {
            symbol,
            output,
            sort,
            desc,
        } => run_export(&client, &symbol, output, sort.as_deref(), desc),
        Commands::Seasonal { symbol } => run_seasonal(&client, &symbol),
        Commands::Symbols => run_symbols(&client),
    }
}

/// Fetch into a session so sorting and rendering behave exactly like the
/// interactive front-end.
fn load_session(client: &ApiClient, symbol: &str) -> Result<Session> {
    let mut session = Session::new();
    let ticket = session.begin_fetch(symbol)?;
    let response = client
        .fetch_history(&ticket.symbol)
        .with_context(|| format!("fetching history for {}", ticket.symbol))?;
    session.complete_fetch(&ticket, Ok(response.data));
    Ok(session)
}

fn apply_sort(session: &mut Session, sort: Option<&str>, desc: bool) -> Result<()> {
    // No --sort keeps the default date-descending order.
    let Some(name) = sort else {
        return Ok(());
    };
    let column = parse_column(name)?;
    let desired = if desc {
        SortDirection::Descending
    } else {
        column.default_direction()
    };
    let mut state = session.request_sort(column);
    if state.direction != desired {
        state = session.request_sort(column);
    }
    debug_assert_eq!(state.direction, desired);
    Ok(())
}

fn run_history(
    client: &ApiClient,
    symbol: &str,
    sort: Option<&str>,
    desc: bool,
    limit: Option<usize>,
) -> Result<()> {
    let mut session = load_session(client, symbol)?;
    apply_sort(&mut session, sort, desc)?;

    let view = session.view().context("no dataset loaded")?;
    println!("{} — {}", view.title, view.summary);
    println!();
    print_table(&view, limit);
    Ok(())
}

fn run_export(
    client: &ApiClient,
    symbol: &str,
    output: Option<PathBuf>,
    sort: Option<&str>,
    desc: bool,
) -> Result<()> {
    let mut session = load_session(client, symbol)?;
    apply_sort(&mut session, sort, desc)?;

    let today = chrono::Local::now().date_naive();
    let artifact = session.export(today)?;
    let path = output.unwrap_or_else(|| PathBuf::from(&artifact.filename));
    std::fs::write(&path, &artifact.content)
        .with_context(|| format!("writing {}", path.display()))?;
    println!(
        "Exported {} rows to {}",
        session.rows().len(),
        path.display()
    );
    Ok(())
}

fn run_seasonal(client: &ApiClient, symbol: &str) -> Result<()> {
    let days = client
        .fetch_seasonal(symbol)
        .with_context(|| format!("fetching seasonal data for {symbol}"))?;

    let today = chrono::Local::now().date_naive();
    let (avg, win) = seasonal_views(&days, today);

    println!("{} — {}", symbol.to_uppercase(), avg.summary);
    println!();
    println!("{}", avg.title);
    print_table(&avg, None);
    println!();
    println!("{}", win.title);
    print_table(&win, None);
    Ok(())
}

fn run_symbols(client: &ApiClient) -> Result<()> {
    let symbols = client.fetch_symbols().context("fetching symbol list")?;
    if symbols.is_empty() {
        println!("No symbols available.");
        return Ok(());
    }
    for info in &symbols {
        match &info.name {
            Some(name) => println!("{:<8} {name}", info.symbol),
            None => println!("{}", info.symbol),
        }
    }
    Ok(())
}

fn parse_column(name: &str) -> Result<SortColumn> {
    let column = match name.to_lowercase().as_str() {
        "date" => SortColumn::Date,
        "open" => SortColumn::Open,
        "high" => SortColumn::High,
        "low" => SortColumn::Low,
        "close" => SortColumn::Close,
        "change" => SortColumn::Change,
        "change_pct" | "changepct" => SortColumn::ChangePercent,
        "volume" => SortColumn::Volume,
        "rsi2" => SortColumn::Rsi2,
        "rsi2_ma_fast" => SortColumn::Rsi2MaFast,
        "rsi2_ma_slow" => SortColumn::Rsi2MaSlow,
        _ => bail!(
            "unknown sort column '{name}'. Valid: date, open, high, low, close, \
             change, change_pct, volume, rsi2, rsi2_ma_fast, rsi2_ma_slow"
        ),
    };
    Ok(column)
}

/// Print a rendered table with per-column alignment. Style tags are
/// dropped; the CLI is plain text.
fn print_table(view: &TableView, limit: Option<usize>) {
    let rows = match limit {
        Some(n) => &view.rows[..n.min(view.rows.len())],
        None => &view.rows[..],
    };

    let labels: Vec<String> = (0..view.header.len())
        .map(|i| view.header_label(i))
        .collect();
    let mut widths: Vec<usize> = labels.iter().map(|l| l.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    let header: Vec<String> = labels
        .iter()
        .zip(&widths)
        .map(|(label, w)| format!("{label:<w$}"))
        .collect();
    println!("{}", header.join("  "));
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

    for row in rows {
        let line: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell.text))
            .collect();
        println!("{}", line.join("  "));
    }
}
