//! Table renderer — pure projection of ordered rows into display structure.
//!
//! Every call produces a complete view; consumers replace prior content
//! wholesale rather than patching. Style information travels as string
//! tags on cells and rows so terminal and test code can interpret them
//! without this module knowing about colors.

use chrono::{Datelike, NaiveDate};

use crate::domain::{DerivedRow, SeasonalDay};
use crate::format::{format_price, format_volume, month_day_label};
use crate::heatmap::{ReturnHeat, WinRateHeat};
use crate::sort::{SortColumn, SortState};

/// One display cell: text plus zero or more style tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub tags: Vec<String>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn tagged(text: impl Into<String>, tags: Vec<String>) -> Self {
        Cell {
            text: text.into(),
            tags,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// One display row: cells plus row-level tags (e.g. "highlight-today").
#[derive(Debug, Clone)]
pub struct RenderedRow {
    pub cells: Vec<Cell>,
    pub tags: Vec<String>,
}

impl RenderedRow {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A display-ready table. `sort` is the state the view was rendered
/// under; any sort indicator a surface shows must come from it.
#[derive(Debug, Clone)]
pub struct TableView {
    pub title: String,
    pub summary: String,
    pub header: Vec<String>,
    pub rows: Vec<RenderedRow>,
    pub sort: Option<SortState>,
}

impl TableView {
    /// Header label with the sort indicator appended on the active column.
    pub fn header_label(&self, index: usize) -> String {
        let base = self.header.get(index).cloned().unwrap_or_default();
        match self.sort {
            Some(state) if HISTORY_COLUMNS.get(index) == Some(&state.column) => {
                format!("{base} {}", state.direction.indicator())
            }
            _ => base,
        }
    }
}

/// Fixed history column order; drives the header and the indicator mapping.
pub const HISTORY_COLUMNS: [SortColumn; 11] = SortColumn::ALL;

/// Project derived rows into the history table. The row order is taken
/// as-is: sorting happens before rendering, never inside it.
pub fn history_view(symbol: &str, rows: &[DerivedRow], sort: SortState) -> TableView {
    let header = HISTORY_COLUMNS
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    let summary = match rows.len() {
        0 => "0 trading days — no data".to_string(),
        n => format!("{n} trading days"),
    };
    TableView {
        title: symbol.to_string(),
        summary,
        header,
        rows: rows.iter().map(history_row).collect(),
        sort: Some(sort),
    }
}

fn history_row(row: &DerivedRow) -> RenderedRow {
    let change_tag = if row.change >= 0.0 {
        "positive"
    } else {
        "negative"
    };
    let cells = vec![
        Cell::plain(row.bar.date.format("%Y-%m-%d").to_string()),
        Cell::plain(format_price(row.bar.open)),
        Cell::plain(format_price(row.bar.high)),
        Cell::plain(format_price(row.bar.low)),
        Cell::plain(format_price(row.bar.close)),
        Cell::tagged(row.change_display.clone(), vec![change_tag.to_string()]),
        Cell::tagged(
            row.change_percent_display.clone(),
            vec![change_tag.to_string()],
        ),
        Cell::plain(format_volume(row.bar.volume)),
        Cell::plain(opt_2dp(row.bar.rsi2)),
        Cell::plain(opt_2dp(row.bar.rsi2_ma_fast)),
        Cell::plain(opt_2dp(row.bar.rsi2_ma_slow)),
    ];
    let tags = match &row.bar.highlight {
        Some(h) => vec![h.clone()],
        None => Vec::new(),
    };
    RenderedRow { cells, tags }
}

fn opt_2dp(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_default()
}

/// Project seasonal aggregates into the two heatmap tables
/// (average returns, win rates). `today` drives the "highlight-today"
/// row tag, rendered in the dataset's own year convention.
pub fn seasonal_views(days: &[SeasonalDay], today: NaiveDate) -> (TableView, TableView) {
    let horizons = days.first().map(|d| d.avg_returns.len()).unwrap_or(0);
    let year = days
        .first()
        .and_then(|d| d.label_year())
        .unwrap_or_else(|| today.year());
    let today_label = month_day_label(today, year);

    let mut header: Vec<String> = vec!["Date".into(), "Day #".into(), "Years".into()];
    header.extend((1..=horizons).map(|h| format!("+{h}d")));

    let summary = match days.first() {
        Some(d) => format!("Based on {} years of data", d.trade_count),
        None => "No seasonal data could be calculated.".to_string(),
    };

    let mut avg_rows = Vec::with_capacity(days.len());
    let mut win_rows = Vec::with_capacity(days.len());
    for day in days {
        let row_tags: Vec<String> = if day.date == today_label {
            vec!["highlight-today".to_string()]
        } else {
            Vec::new()
        };

        let prefix = [
            Cell::plain(day.date.clone()),
            Cell::plain(day.trading_day_num.to_string()),
            Cell::plain(day.trade_count.to_string()),
        ];

        let mut avg_cells: Vec<Cell> = prefix.to_vec();
        for ret in &day.avg_returns {
            let pct = ret * 100.0;
            let heat = ReturnHeat::classify(pct);
            avg_cells.push(Cell::tagged(
                seasonal_return_text(pct),
                vec!["heat-return".to_string(), heat.tag().to_string()],
            ));
        }
        avg_rows.push(RenderedRow {
            cells: avg_cells,
            tags: row_tags.clone(),
        });

        let mut win_cells: Vec<Cell> = prefix.to_vec();
        for rate in &day.win_rates {
            let pct = rate * 100.0;
            let heat = WinRateHeat::classify(pct);
            win_cells.push(Cell::tagged(
                format!("{pct:.0}%"),
                vec!["heat-cell".to_string(), heat.tag().to_string()],
            ));
        }
        win_rows.push(RenderedRow {
            cells: win_cells,
            tags: row_tags,
        });
    }

    let avg = TableView {
        title: "Average Return".to_string(),
        summary: summary.clone(),
        header: header.clone(),
        rows: avg_rows,
        sort: None,
    };
    let win = TableView {
        title: "Win Rate".to_string(),
        summary,
        header,
        rows: win_rows,
        sort: None,
    };
    (avg, win)
}

/// Seasonal cells prefix "+" only for strictly positive values; zero and
/// negative use the number's own rendering.
fn seasonal_return_text(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{pct:.2}%")
    } else {
        format!("{pct:.2}%")
    }
}
