//! Matching throughput benchmark
//!
//! Feeds a deterministic mix of plain and iceberg orders around a
//! drifting mid price, so every batch exercises resting, crossing, and
//! iceberg refills.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

use matching_engine::MatchingEngine;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

fn order_flow(count: usize) -> Vec<Order> {
    (0..count)
        .map(|i| {
            let side = if i % 2 == 0 { Side::Buy } else { Side::Sell };
            let id = OrderId::new(i as u64 + 1);
            // Oscillate around 1 000 so both sides get crossed regularly.
            let offset = (i % 7) as i32 - 3;
            let price = Price::new(if side == Side::Buy {
                1_000 + offset
            } else {
                1_000 - offset
            });
            let quantity = Quantity::new(50 + (i % 13) as i64 * 10);
            if i % 5 == 0 {
                Order::iceberg(side, id, price, quantity, Quantity::new(20))
            } else {
                Order::limit(side, id, price, quantity)
            }
        })
        .collect()
}

fn bench_process(c: &mut Criterion) {
    let flow = order_flow(1_000);

    c.bench_function("process_mixed_flow_1k", |b| {
        b.iter_batched(
            MatchingEngine::new,
            |mut engine| {
                for order in &flow {
                    black_box(engine.process(*order));
                }
                engine
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
