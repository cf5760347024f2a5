//! Criterion benchmarks for business-day counting.
//!
//! Benchmarks cover:
//! - Counting across ranges of one month, one year and ten years
//! - Holiday set construction from the default provider

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use infra_calendar::{count_business_days, CommonHolidays, HolidayProvider};

/// Benchmark counting over increasingly long ranges.
fn bench_count_business_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_business_days");
    let holidays = CommonHolidays.holiday_set(2020..=2035);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    for days in [31_u64, 366, 3_653] {
        let end = start + chrono::Days::new(days - 1);
        group.bench_with_input(BenchmarkId::new("span_days", days), &end, |b, &end| {
            b.iter(|| count_business_days(black_box(start), black_box(end), &holidays));
        });
    }

    group.finish();
}

/// Benchmark building a holiday set across a span of years.
fn bench_holiday_set(c: &mut Criterion) {
    c.bench_function("holiday_set_20_years", |b| {
        b.iter(|| CommonHolidays.holiday_set(black_box(2015)..=black_box(2035)));
    });
}

criterion_group!(benches, bench_count_business_days, bench_holiday_set);
criterion_main!(benches);
