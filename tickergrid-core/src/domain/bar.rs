//! Bar — one trading day of OHLCV data, as received from the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV bar for a single symbol, immutable once received.
///
/// The indicator fields are precomputed upstream and treated as opaque
/// numbers here; `volume` is optional because the upstream feed omits it
/// for some symbols. Identity: unique per date within one symbol's series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<u64>,
    #[serde(default)]
    pub rsi2: Option<f64>,
    #[serde(default)]
    pub rsi2_ma_fast: Option<f64>,
    #[serde(default)]
    pub rsi2_ma_slow: Option<f64>,
    /// Categorical highlight tag supplied by the API (e.g. an earnings marker).
    #[serde(default)]
    pub highlight: Option<String>,
}

/// A Bar augmented with computed change fields and their display strings.
///
/// Recomputed in full whenever a new dataset is fetched; never patched.
#[derive(Debug, Clone)]
pub struct DerivedRow {
    pub bar: Bar,
    /// `close - open`.
    pub change: f64,
    /// `change / open * 100`, defined as 0 when open is 0.
    pub change_percent: f64,
    /// "+$1.23" / "-$1.23".
    pub change_display: String,
    /// "+1.23%" / "-1.23%".
    pub change_percent_display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            open: 100.0,
            high: 105.0,
            low: 98.0,
            close: 103.0,
            volume: Some(50_000),
            rsi2: Some(61.5),
            rsi2_ma_fast: None,
            rsi2_ma_slow: None,
            highlight: None,
        }
    }

    #[test]
    fn bar_serialization_roundtrip() {
        let bar = sample_bar();
        let json = serde_json::to_string(&bar).unwrap();
        let deser: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar.date, deser.date);
        assert_eq!(bar.close, deser.close);
        assert_eq!(bar.volume, deser.volume);
        assert_eq!(bar.rsi2, deser.rsi2);
    }

    #[test]
    fn bar_optional_fields_default_when_absent() {
        let json = r#"{"date":"2024-01-03","open":100.0,"high":105.0,"low":98.0,"close":103.0}"#;
        let bar: Bar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.volume, None);
        assert_eq!(bar.rsi2, None);
        assert_eq!(bar.highlight, None);
    }
}
