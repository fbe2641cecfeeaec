//! Seasonal aggregate rows — received fully formed, never derived locally.

use serde::{Deserialize, Serialize};

/// One calendar day's seasonal statistics across all sampled years.
///
/// `avg_returns` and `win_rates` are fractions (0.006 = 0.6%); rendering
/// multiplies by 100. Each entry covers one forward trading-day horizon.
/// These rows are read-only: the client only classifies them into heatmap
/// buckets for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalDay {
    /// Calendar label in the upstream's convention, e.g. "Jan 3, 2025".
    pub date: String,
    pub trading_day_num: u32,
    pub trade_count: u32,
    pub avg_returns: Vec<f64>,
    pub win_rates: Vec<f64>,
}

impl SeasonalDay {
    /// Year convention of the dataset, parsed from the trailing ", YYYY"
    /// of the label. None when the label does not carry a year.
    pub fn label_year(&self) -> Option<i32> {
        self.date.rsplit(", ").next()?.trim().parse().ok()
    }
}
