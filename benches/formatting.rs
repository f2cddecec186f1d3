use apputils::sql::{ColumnSelection, batch_placeholders, column_list, update_assignments};
use apputils::{CallSite, DateFormat, Logger, MemoryOutput, Verbosity};
use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger::format_line");
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let caller = CallSite::unknown();

    let colored = Logger::builder().build();
    group.bench_function("colored", |b| {
        b.iter(|| {
            colored.format_line(
                black_box(&timestamp),
                Verbosity::Error,
                &"Application started successfully",
                &caller,
            )
        });
    });

    let plain = Logger::builder()
        .colors(false)
        .date_format("%Y-%m-%d %H:%M:%S")
        .build();
    group.bench_function("plain_strftime", |b| {
        b.iter(|| {
            plain.format_line(
                black_box(&timestamp),
                Verbosity::Info,
                &"Application started successfully",
                &caller,
            )
        });
    });

    group.finish();
}

fn bench_date_format(c: &mut Criterion) {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let format = DateFormat::Rfc3339;
    c.bench_function("DateFormat::render rfc3339", |b| {
        b.iter(|| format.render(black_box(&timestamp)));
    });
}

fn bench_log_filtered(c: &mut Criterion) {
    let logger = Logger::builder()
        .verbosity(Verbosity::Error)
        .output(MemoryOutput::new())
        .callback(|message, level, extra| {
            black_box((message, level, extra.len()));
        })
        .build();
    c.bench_function("log_to! below threshold", |b| {
        b.iter(|| apputils::log_to!(logger, Verbosity::Debug, black_box("dropped")));
    });
}

fn bench_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql");
    let columns = ["id", "name", "email", "created_at", "updated_at"];

    group.bench_function("column_list", |b| {
        b.iter(|| column_list(black_box(&columns), ColumnSelection::Exclude(&["id"])));
    });
    group.bench_function("batch_placeholders", |b| {
        b.iter(|| batch_placeholders(black_box(5), black_box(100)));
    });
    group.bench_function("update_assignments", |b| {
        b.iter(|| update_assignments(black_box(&columns)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_format_line,
    bench_date_format,
    bench_log_filtered,
    bench_sql
);
criterion_main!(benches);
