//! Sort engine — stable, column-typed, direction-toggling ordering.

use std::cmp::Ordering;

use crate::domain::DerivedRow;

/// A sortable column of the history table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Date,
    Open,
    High,
    Low,
    Close,
    Change,
    ChangePercent,
    Volume,
    Rsi2,
    Rsi2MaFast,
    Rsi2MaSlow,
}

impl SortColumn {
    /// All columns in the fixed header order.
    pub const ALL: [SortColumn; 11] = [
        SortColumn::Date,
        SortColumn::Open,
        SortColumn::High,
        SortColumn::Low,
        SortColumn::Close,
        SortColumn::Change,
        SortColumn::ChangePercent,
        SortColumn::Volume,
        SortColumn::Rsi2,
        SortColumn::Rsi2MaFast,
        SortColumn::Rsi2MaSlow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Date => "Date",
            SortColumn::Open => "Open",
            SortColumn::High => "High",
            SortColumn::Low => "Low",
            SortColumn::Close => "Close",
            SortColumn::Change => "Change",
            SortColumn::ChangePercent => "Change %",
            SortColumn::Volume => "Volume",
            SortColumn::Rsi2 => "RSI(2)",
            SortColumn::Rsi2MaFast => "RSI MA fast",
            SortColumn::Rsi2MaSlow => "RSI MA slow",
        }
    }

    /// Direction used when this column is newly selected: newest-first for
    /// dates, ascending for everything else.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortColumn::Date => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Glyph shown next to the active column header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// The active sort: which column, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest bars first — the state every fresh dataset starts in.
    fn default() -> Self {
        SortState {
            column: SortColumn::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Apply a user sort request: the same column toggles direction, a new
    /// column takes over with its default direction.
    pub fn request(self, column: SortColumn) -> SortState {
        if column == self.column {
            SortState {
                column,
                direction: self.direction.flip(),
            }
        } else {
            SortState {
                column,
                direction: column.default_direction(),
            }
        }
    }
}

/// Sort rows in place. The sort is stable: rows with equal keys keep
/// their relative input order, which makes repeated requests and direction
/// toggles deterministic.
pub fn sort_rows(rows: &mut [DerivedRow], state: SortState) {
    match state.column {
        SortColumn::Date => {
            rows.sort_by(|a, b| directed(a.bar.date.cmp(&b.bar.date), state.direction));
        }
        column => {
            rows.sort_by(|a, b| {
                let ka = numeric_key(a, column);
                let kb = numeric_key(b, column);
                directed(ka.partial_cmp(&kb).unwrap_or(Ordering::Equal), state.direction)
            });
        }
    }
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Numeric key for a row; missing or non-finite values sort as negative
/// infinity (first ascending, last descending).
fn numeric_key(row: &DerivedRow, column: SortColumn) -> f64 {
    let value = match column {
        SortColumn::Open => Some(row.bar.open),
        SortColumn::High => Some(row.bar.high),
        SortColumn::Low => Some(row.bar.low),
        SortColumn::Close => Some(row.bar.close),
        SortColumn::Change => Some(row.change),
        SortColumn::ChangePercent => Some(row.change_percent),
        SortColumn::Volume => row.bar.volume.map(|v| v as f64),
        SortColumn::Rsi2 => row.bar.rsi2,
        SortColumn::Rsi2MaFast => row.bar.rsi2_ma_fast,
        SortColumn::Rsi2MaSlow => row.bar.rsi2_ma_slow,
        // Date is handled by the chronological branch above.
        SortColumn::Date => None,
    };
    value
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NEG_INFINITY)
}
