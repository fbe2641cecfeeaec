//! Criterion benchmarks for the table pipeline hot paths.
//!
//! Benchmarks:
//! 1. Derivation (bar → derived row batch)
//! 2. Sorting (per column, descending)
//! 3. Rendering (full history table projection)
//! 4. CSV export

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tickergrid_core::derive::derive_rows;
use tickergrid_core::domain::Bar;
use tickergrid_core::export::export_history_csv;
use tickergrid_core::render::history_view;
use tickergrid_core::sort::{sort_rows, SortColumn, SortState};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_bars(n: usize) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: Some(1_000_000 + (i as u64 * 991) % 5_000_000),
                rsi2: Some(((i as f64 * 0.7).sin() * 50.0) + 50.0),
                rsi2_ma_fast: Some(50.0),
                rsi2_ma_slow: Some(50.0),
                highlight: None,
            }
        })
        .collect()
}

// ── 1. Derivation ────────────────────────────────────────────────────

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_rows");
    for n in [250, 2_500] {
        let bars = make_bars(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &bars, |b, bars| {
            b.iter(|| derive_rows(black_box(bars)));
        });
    }
    group.finish();
}

// ── 2. Sorting ───────────────────────────────────────────────────────

fn bench_sort(c: &mut Criterion) {
    let rows = derive_rows(&make_bars(2_500));
    let mut group = c.benchmark_group("sort_rows");
    for column in [SortColumn::Date, SortColumn::ChangePercent, SortColumn::Volume] {
        let state = SortState {
            column,
            direction: column.default_direction(),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(column.label()),
            &state,
            |b, &state| {
                b.iter_batched(
                    || rows.clone(),
                    |mut rows| sort_rows(black_box(&mut rows), state),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

// ── 3. Rendering ─────────────────────────────────────────────────────

fn bench_render(c: &mut Criterion) {
    let rows = derive_rows(&make_bars(2_500));
    c.bench_function("history_view/2500", |b| {
        b.iter(|| history_view(black_box("SPY"), black_box(&rows), SortState::default()));
    });
}

// ── 4. CSV export ────────────────────────────────────────────────────

fn bench_export(c: &mut Criterion) {
    let rows = derive_rows(&make_bars(2_500));
    c.bench_function("export_history_csv/2500", |b| {
        b.iter(|| export_history_csv(black_box(&rows)).unwrap());
    });
}

criterion_group!(benches, bench_derive, bench_sort, bench_render, bench_export);
criterion_main!(benches);
