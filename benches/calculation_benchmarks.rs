//! Performance benchmarks for the Charge-Rate Cost Engine.
//!
//! This benchmark suite covers:
//! - A single charge-rate derivation, with and without the audit trace
//! - In-process batches of 100 and 1000 apprentices
//! - A full HTTP round trip through the router, single and batched
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use charge_rate_engine::api::{AppState, create_router};
use charge_rate_engine::calculation::{BatchItem, calculate, calculate_batch, calculate_with_audit};
use charge_rate_engine::config::ConfigLoader;
use charge_rate_engine::models::{BillableOptions, ChargeRateInput, UnbilledCategory};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with the bundled rate templates.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/templates").expect("Failed to load templates");
    AppState::new(config)
}

/// Creates `count` inputs with varied pay rates and billing policies.
fn create_batch_items(count: usize) -> Vec<BatchItem> {
    (0..count)
        .map(|i| {
            let mut input = ChargeRateInput::with_defaults(Decimal::new(2000 + i as i64 % 1500, 2));
            let category = UnbilledCategory::ALL[i % UnbilledCategory::ALL.len()];
            input.billable = BillableOptions::default().with(category, i % 2 == 0);
            BatchItem {
                apprentice_id: format!("app_{:04}", i),
                input,
            }
        })
        .collect()
}

/// Benchmark: Single derivation.
fn bench_single_calculation(c: &mut Criterion) {
    let input = ChargeRateInput::with_defaults(Decimal::new(2950, 2));

    c.bench_function("single_calculation", |b| {
        b.iter(|| calculate(black_box(&input)))
    });

    c.bench_function("single_calculation_with_audit", |b| {
        b.iter(|| calculate_with_audit(black_box(&input)))
    });
}

/// Benchmark: In-process batches.
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processing");

    for count in [100usize, 1000].iter() {
        let items = create_batch_items(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("apprentices", count), &items, |b, items| {
            b.iter(|| calculate_batch(black_box(items)))
        });
    }

    group.finish();
}

/// Benchmark: HTTP round trips through the router.
fn bench_http(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());

    let single_body = serde_json::json!({
        "apprentice_id": "app_bench",
        "pay_rate": "29.50",
        "template": "civil_outdoor"
    })
    .to_string();

    let batch_items: Vec<serde_json::Value> = (0..100)
        .map(|i| {
            serde_json::json!({
                "apprentice_id": format!("app_{:03}", i),
                "pay_rate": format!("{}.50", 20 + i % 15),
                "template": if i % 2 == 0 { "standard" } else { "four_day_week" }
            })
        })
        .collect();
    let batch_body = serde_json::json!({ "items": batch_items }).to_string();

    let mut group = c.benchmark_group("http");

    group.bench_function("charge_rate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/charge-rate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(single_body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("charge_rate_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/charge-rate/batch")
                        .header("Content-Type", "application/json")
                        .body(Body::from(batch_body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_calculation,
    bench_batches,
    bench_http,
);
criterion_main!(benches);
