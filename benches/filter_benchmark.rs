//! Filter and pagination benchmarks.
//!
//! The API returns at most a few thousand flights per call; this measures route
//! filtering and walking the filtered set batch by batch at that scale and above.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flightboard::model::FlightRecord;
use flightboard::state::{filter_by_route, load_batch, SearchController};

const CODES: [&str; 8] = ["TLV", "JFK", "LHR", "CDG", "FRA", "AMS", "SFO", "NRT"];

/// Deterministic flight list cycling through every route pair.
fn generate_flights(count: usize) -> Vec<FlightRecord> {
    (0..count)
        .map(|i| {
            let dep = CODES[i % CODES.len()];
            let arr = CODES[(i / CODES.len()) % CODES.len()];
            FlightRecord::route(dep, arr).with_number(i.to_string())
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_route");
    for size in [100usize, 1_000, 10_000] {
        let flights = generate_flights(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &flights, |b, flights| {
            b.iter(|| filter_by_route(black_box("TLV"), black_box("JFK"), black_box(flights)))
        });
    }
    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let flights = generate_flights(10_000);

    c.bench_function("load_batch_until_exhausted_10k", |b| {
        b.iter(|| {
            let mut cursor = 0;
            loop {
                let batch = load_batch(black_box(&flights), cursor, 3);
                cursor = batch.new_cursor;
                if batch.exhausted {
                    break;
                }
            }
            cursor
        })
    });
}

fn bench_search_cycle(c: &mut Criterion) {
    let flights = generate_flights(10_000);

    c.bench_function("submit_apply_and_drain_10k", |b| {
        b.iter(|| {
            let mut controller = SearchController::new(3);
            let pending = controller.submit_search("TLV", "JFK");
            controller.apply_fetch(pending.request, Ok(flights.clone()));
            while controller.can_load_more() {
                controller.load_more();
            }
            black_box(controller.cursor())
        })
    });
}

criterion_group!(benches, bench_filter, bench_paginate, bench_search_cycle);
criterion_main!(benches);
