//! End-to-end pipeline integration tests.
//!
//! Drives the full fetch → derive → sort → render → export path through
//! `Session`, the way a front-end would, and checks the exact displayed
//! strings and style tags.

use chrono::NaiveDate;
use tickergrid_core::domain::{Bar, SeasonalDay};
use tickergrid_core::format::format_volume;
use tickergrid_core::render::seasonal_views;
use tickergrid_core::session::{FetchOutcome, Session};
use tickergrid_core::sort::{SortColumn, SortDirection};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn bar(d: u32, open: f64, close: f64, volume: Option<u64>) -> Bar {
    Bar {
        date: day(d),
        open,
        high: open.max(close) + 0.5,
        low: open.min(close) - 0.5,
        close,
        volume,
        rsi2: None,
        rsi2_ma_fast: None,
        rsi2_ma_slow: None,
        highlight: None,
    }
}

fn three_bar_session() -> Session {
    // Closes −opens: +1.00, −2.00, 0.00.
    let mut session = Session::new();
    let ticket = session.begin_fetch("SPY").unwrap();
    let outcome = session.complete_fetch(
        &ticket,
        Ok(vec![
            bar(3, 100.0, 101.0, Some(1_500_000)),
            bar(4, 100.0, 98.0, Some(999)),
            bar(5, 100.0, 100.0, None),
        ]),
    );
    assert_eq!(outcome, FetchOutcome::Replaced { days: 3 });
    session
}

#[test]
fn default_sort_is_date_descending_and_toggle_reverses() {
    let mut session = three_bar_session();

    let dates: Vec<String> = session
        .rows()
        .iter()
        .map(|r| r.bar.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-05", "2024-01-04", "2024-01-03"]);

    let state = session.request_sort(SortColumn::Date);
    assert_eq!(state.direction, SortDirection::Ascending);
    let dates: Vec<String> = session
        .rows()
        .iter()
        .map(|r| r.bar.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-01-03", "2024-01-04", "2024-01-05"]);
}

#[test]
fn zero_open_bar_renders_without_nan() {
    let mut session = Session::new();
    let ticket = session.begin_fetch("IPO").unwrap();
    session.complete_fetch(&ticket, Ok(vec![bar(3, 0.0, 5.0, Some(10))]));

    let row = &session.rows()[0];
    assert_eq!(row.change_percent, 0.0);
    assert_eq!(row.change_display, "+$5.00");
    assert_eq!(row.change_percent_display, "+0.00%");
}

#[test]
fn volume_formats_match_display_contract() {
    assert_eq!(format_volume(Some(1_500_000)), "1.50M");
    assert_eq!(format_volume(Some(999)), "999");
    assert_eq!(format_volume(Some(0)), "N/A");
    assert_eq!(format_volume(None), "N/A");

    // Same strings surface through the rendered table (volume is column 7).
    let session = three_bar_session();
    let view = session.view().unwrap();
    let volumes: Vec<&str> = view
        .rows
        .iter()
        .map(|r| r.cells[7].text.as_str())
        .collect();
    assert_eq!(volumes, vec!["N/A", "999", "1.50M"]);
}

#[test]
fn history_view_headers_track_sort_state() {
    let mut session = three_bar_session();
    let view = session.view().unwrap();
    assert_eq!(view.header_label(0), "Date ▼");
    assert_eq!(view.header_label(4), "Close");
    assert_eq!(view.summary, "3 trading days");

    session.request_sort(SortColumn::Close);
    let view = session.view().unwrap();
    assert_eq!(view.header_label(0), "Date");
    assert_eq!(view.header_label(4), "Close ▲");
}

#[test]
fn change_cells_carry_sign_tags() {
    let session = three_bar_session();
    let view = session.view().unwrap();

    // Date descending: Jan 5 (0.00), Jan 4 (−2.00), Jan 3 (+1.00).
    assert_eq!(view.rows[0].cells[5].text, "+$0.00");
    assert!(view.rows[0].cells[5].has_tag("positive"));
    assert_eq!(view.rows[1].cells[5].text, "-$2.00");
    assert!(view.rows[1].cells[5].has_tag("negative"));
    assert_eq!(view.rows[2].cells[6].text, "+1.00%");
    assert!(view.rows[2].cells[6].has_tag("positive"));
}

#[test]
fn export_matches_displayed_order_and_header() {
    let mut session = three_bar_session();
    session.request_sort(SortColumn::Volume);

    let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let artifact = session.export(today).unwrap();
    assert_eq!(artifact.filename, "SPY_history_2026-08-30.csv");

    let lines: Vec<&str> = artifact.content.lines().collect();
    assert_eq!(
        lines[0],
        "date,open,high,low,close,change,change_pct,volume,rsi2,rsi2_ma_fast,rsi2_ma_slow"
    );
    assert_eq!(lines.len(), 1 + session.rows().len());

    // Volume ascending puts the missing volume (−∞ key) first.
    assert!(lines[1].starts_with("2024-01-05"));
    assert!(lines[2].starts_with("2024-01-04"));
    assert!(lines[3].starts_with("2024-01-03"));
}

#[test]
fn seasonal_return_buckets_are_boundary_exact() {
    let days = vec![SeasonalDay {
        date: "Aug 30, 2025".to_string(),
        trading_day_num: 167,
        trade_count: 15,
        avg_returns: vec![0.006, 0.005, 0.0005, -0.005],
        win_rates: vec![0.40, 0.73, 0.39, 0.55],
    }];
    let today = NaiveDate::from_ymd_opt(2025, 8, 30).unwrap();
    let (avg, win) = seasonal_views(&days, today);

    assert_eq!(avg.summary, "Based on 15 years of data");
    assert_eq!(avg.header, vec!["Date", "Day #", "Years", "+1d", "+2d", "+3d", "+4d"]);

    // 0.6% and exactly 0.5% both land in pos-med; 0.05% is the pos-low
    // boundary; −0.5% is the strong-negative boundary.
    let cells = &avg.rows[0].cells;
    assert_eq!(cells[3].text, "+0.60%");
    assert!(cells[3].has_tag("heat-ret-pos-med"));
    assert_eq!(cells[4].text, "+0.50%");
    assert!(cells[4].has_tag("heat-ret-pos-med"));
    assert_eq!(cells[5].text, "+0.05%");
    assert!(cells[5].has_tag("heat-ret-pos-low"));
    assert_eq!(cells[6].text, "-0.50%");
    assert!(cells[6].has_tag("heat-ret-neg-high"));

    // Win rate exactly 40 belongs to the 40–45 band, not under-40.
    let cells = &win.rows[0].cells;
    assert_eq!(cells[3].text, "40%");
    assert!(cells[3].has_tag("heat-40-45"));
    assert!(cells[4].has_tag("heat-70-100"));
    assert!(cells[5].has_tag("heat-0-40"));

    // The dataset's own year convention marks today's row.
    assert!(avg.rows[0].has_tag("highlight-today"));
    assert!(win.rows[0].has_tag("highlight-today"));
}

#[test]
fn empty_seasonal_dataset_renders_placeholder() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
    let (avg, win) = seasonal_views(&[], today);
    assert_eq!(avg.summary, "No seasonal data could be calculated.");
    assert_eq!(win.summary, "No seasonal data could be calculated.");
    assert!(avg.rows.is_empty());
    assert_eq!(avg.header, vec!["Date", "Day #", "Years"]);
}
