//! Performance benchmarks for the timecard parser.
//!
//! The parser is pure CPU-bound text processing; these benches track how the
//! strategy cascade scales with document size:
//! - Single shift line: < 100μs mean
//! - Two-week timecard (14 lines): < 1ms mean
//! - Oversized dump (100 lines): < 10ms mean
//! - Fallback-layout documents, which pay for a full strict pass first
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use timecard_engine::parser::parse_timecard;

/// Builds a strict-layout document with the given number of shift lines.
fn strict_document(lines: usize) -> String {
    let mut text = String::from("ACME MARKETS    STORE #0412\nEmployee: 1042  SMITH, JANE\n\n");
    for i in 0..lines {
        let day = (i % 28) + 1;
        let month = (i / 28) % 12 + 1;
        // Every seventh line carries a concatenated reg+OT run.
        let hours = if i % 7 == 6 { "8.005.50" } else { "8.00" };
        text.push_str(&format!(
            "{month}/{day}/24   Mon 7:00a   Deli   Mon 3:00p{hours}\n"
        ));
    }
    text.push_str("\nWeekly Totals\n");
    text
}

/// Builds a fallback-layout document (separated hour columns), which forces
/// a full strict pass to come up empty first.
fn fallback_document(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        let day = (i % 28) + 1;
        let month = (i / 28) % 12 + 1;
        text.push_str(&format!(
            "{month}/{day}/24   Mon 7:00a   Grocery   Mon 3:00p   6.00   2.00\n"
        ));
    }
    text
}

fn bench_strict_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_strict");
    for lines in [1usize, 14, 100] {
        let text = strict_document(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| parse_timecard(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_fallback_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_fallback");
    for lines in [1usize, 14] {
        let text = fallback_document(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| parse_timecard(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_unrecognizable_document(c: &mut Criterion) {
    // The worst case for the cascade: all three strategies run to completion
    // and find nothing.
    let text = "WEEKLY SUMMARY\n".repeat(200);
    c.bench_function("parse_unrecognizable", |b| {
        b.iter(|| parse_timecard(black_box(&text)).unwrap_err());
    });
}

criterion_group!(
    benches,
    bench_strict_documents,
    bench_fallback_documents,
    bench_unrecognizable_document
);
criterion_main!(benches);
