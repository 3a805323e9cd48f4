//! Performance benchmarks for the overtime engine.
//!
//! Covers a single bracket call, a full comprehensive calculation, a
//! month of per-day input, batches through the JSON boundary and scaling
//! by day count.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use overtime_engine::api::calculate_from_json;
use overtime_engine::calculation::{calculate_comprehensive, calculate_weekday_overtime};
use overtime_engine::config::{RateTable, RoundingMode, SettingsStore};
use overtime_engine::models::WorkHoursInput;

/// Builds a comma-separated hour string with `days` entries.
fn hours_for_days(days: usize) -> String {
    ["9", "2.5", "11", "4", "0", "6.75", "8"]
        .iter()
        .cycle()
        .take(days)
        .copied()
        .collect::<Vec<_>>()
        .join(",")
}

fn full_input(days: usize) -> WorkHoursInput {
    WorkHoursInput {
        weekday_overtime: hours_for_days(days),
        rest_day_work: hours_for_days(days),
        holiday_work: "8".to_string(),
        regular_day_off_work: "3.5".to_string(),
        is_emergency: false,
    }
}

fn request_body(days: usize) -> String {
    serde_json::json!({
        "monthly_salary": 36500,
        "weekday_overtime": hours_for_days(days),
        "rest_day_work": hours_for_days(days),
        "holiday_work": "8",
        "include_report": true
    })
    .to_string()
}

/// Benchmark: One weekday bracket evaluation.
fn bench_single_bracket(c: &mut Criterion) {
    let rates = RateTable::statutory();
    let hours = Decimal::from(9);
    let rate = Decimal::from(100);

    c.bench_function("single_bracket", |b| {
        b.iter(|| {
            black_box(calculate_weekday_overtime(
                black_box(hours),
                black_box(rate),
                &rates,
                false,
            ))
        })
    });
}

/// Benchmark: All four categories, one day each.
fn bench_comprehensive(c: &mut Criterion) {
    let rates = RateTable::statutory();
    let input = full_input(1);
    let salary = Decimal::from(36500);

    c.bench_function("comprehensive_single_day", |b| {
        b.iter(|| {
            black_box(calculate_comprehensive(
                black_box(salary),
                &input,
                &rates,
                RoundingMode::Ceiling,
            ))
        })
    });
}

/// Benchmark: A 31-day month in two categories.
fn bench_month_of_days(c: &mut Criterion) {
    let rates = RateTable::statutory();
    let input = full_input(31);
    let salary = Decimal::from(36500);

    c.bench_function("comprehensive_31_days", |b| {
        b.iter(|| {
            black_box(calculate_comprehensive(
                black_box(salary),
                &input,
                &rates,
                RoundingMode::NearestCent,
            ))
        })
    });
}

/// Benchmark: Batch of 100 JSON requests.
fn bench_batch_100(c: &mut Criterion) {
    let store = SettingsStore::in_memory();
    let bodies: Vec<String> = (1..=100).map(|i| request_body(i % 14 + 1)).collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.iter(|| {
            for body in &bodies {
                let _ = black_box(calculate_from_json(body, &store));
            }
        })
    });

    group.finish();
}

/// Benchmark: Day counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let store = SettingsStore::in_memory();

    let mut group = c.benchmark_group("scaling");

    for days in [1usize, 2, 7, 14, 31].iter() {
        let body = request_body(*days);

        group.throughput(Throughput::Elements(*days as u64));
        group.bench_with_input(BenchmarkId::new("days", days), days, |b, _| {
            b.iter(|| black_box(calculate_from_json(&body, &store)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_bracket,
    bench_comprehensive,
    bench_month_of_days,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
