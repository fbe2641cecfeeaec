//! CSV export of the currently displayed dataset.
//!
//! Row order in the artifact matches the caller's current (sorted) order;
//! export always reflects the view, never a canonical order. The `csv`
//! writer supplies RFC 4180 quoting.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::DerivedRow;

/// Fixed export column order, matching the on-screen table.
pub const CSV_HEADER: [&str; 11] = [
    "date",
    "open",
    "high",
    "low",
    "close",
    "change",
    "change_pct",
    "volume",
    "rsi2",
    "rsi2_ma_fast",
    "rsi2_ma_slow",
];

/// Serialize rows to CSV. Prices and change fields use 2 decimal places;
/// volume is a raw integer; absent optionals render as empty strings.
pub fn export_history_csv(rows: &[DerivedRow]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for r in rows {
        wtr.write_record([
            r.bar.date.to_string(),
            format!("{:.2}", r.bar.open),
            format!("{:.2}", r.bar.high),
            format!("{:.2}", r.bar.low),
            format!("{:.2}", r.bar.close),
            format!("{:.2}", r.change),
            format!("{:.2}", r.change_percent),
            r.bar.volume.map(|v| v.to_string()).unwrap_or_default(),
            opt_2dp(r.bar.rsi2),
            opt_2dp(r.bar.rsi2_ma_fast),
            opt_2dp(r.bar.rsi2_ma_slow),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

fn opt_2dp(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_default()
}

/// `{SYMBOL}_history_{YYYY-MM-DD}.csv`.
pub fn export_filename(symbol: &str, today: NaiveDate) -> String {
    format!("{symbol}_history_{}.csv", today.format("%Y-%m-%d"))
}
