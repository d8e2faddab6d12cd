//! Performance benchmarks for payroll report assembly and ingestion.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::build_payroll_report;
use payroll_engine::ingestion::ingest_batch;
use payroll_engine::store::MemoryRecordStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a time report with `rows` punches spread over a year and 50 employees.
fn create_time_report(rows: usize) -> String {
    let mut content = String::from("date,hours worked,employee id,job group\n");
    for i in 0..rows {
        let day = i % 28 + 1;
        let month = i / 28 % 12 + 1;
        let employee = i % 50 + 1;
        let group = if employee % 3 == 0 { "B" } else { "A" };
        content.push_str(&format!("{}/{}/2023,7.5,{},{}\n", day, month, employee, group));
    }
    content
}

/// Returns a memory store holding one ingested batch of `rows` punches.
fn create_populated_store(rt: &tokio::runtime::Runtime, rows: usize) -> Arc<MemoryRecordStore> {
    let store = Arc::new(MemoryRecordStore::new());
    let content = create_time_report(rows);
    rt.block_on(ingest_batch(store.as_ref(), "time-report-1.csv", content.as_bytes()))
        .unwrap();
    store
}

/// Benchmark: report assembly as the number of stored punches grows.
fn bench_report_assembly(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("report_assembly");

    for rows in [100usize, 1_000, 10_000].iter() {
        let store = create_populated_store(&rt, *rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("punches", rows), rows, |b, _| {
            b.to_async(&rt).iter(|| async {
                let report = build_payroll_report(store.as_ref()).await.unwrap();
                black_box(report)
            })
        });
    }

    group.finish();
}

/// Benchmark: ingesting a fresh batch into an empty store.
fn bench_ingestion(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let content = create_time_report(1_000);

    let mut group = c.benchmark_group("ingestion");
    group.throughput(Throughput::Elements(1_000));
    group.bench_function("1000_rows", |b| {
        b.to_async(&rt).iter(|| async {
            let store = MemoryRecordStore::new();
            let summary = ingest_batch(&store, "time-report-1.csv", content.as_bytes())
                .await
                .unwrap();
            black_box(summary)
        })
    });
    group.finish();
}

/// Benchmark: the full GET /payrollreport round trip through the router.
fn bench_report_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = create_populated_store(&rt, 1_000);
    let router = create_router(AppState::new(store));

    c.bench_function("payrollreport_1000_punches", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/payrollreport")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_report_assembly,
    bench_ingestion,
    bench_report_endpoint,
);
criterion_main!(benches);
