//! Derivation engine — computes per-row change fields for a fetched dataset.

use crate::domain::{Bar, DerivedRow};
use crate::format::{format_signed_money, format_signed_percent};

/// Derive change fields and display strings for every bar.
///
/// Pure and total: output has the same length and order as the input, and
/// a zero open yields a change percent of exactly 0 rather than a
/// division artifact (no NaN or infinity ever appears in the output).
pub fn derive_rows(bars: &[Bar]) -> Vec<DerivedRow> {
    bars.iter().cloned().map(derive_row).collect()
}

/// Derive a single row. `change = close - open`; percent is against open.
pub fn derive_row(bar: Bar) -> DerivedRow {
    let change = bar.close - bar.open;
    let change_percent = if bar.open == 0.0 {
        0.0
    } else {
        change / bar.open * 100.0
    };
    DerivedRow {
        change,
        change_percent,
        change_display: format_signed_money(change),
        change_percent_display: format_signed_percent(change_percent),
        bar,
    }
}
