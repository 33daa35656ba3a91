use criterion::{criterion_group, criterion_main, Criterion};
use ft_core::{Bool, Float, Int, NInt, Str};
use serde::{Deserialize, Serialize};
use std::hint::black_box;

#[derive(Serialize, Deserialize)]
struct Record {
    id: Str,
    count: NInt,
    price: Float,
    active: Bool,
    quantity: Int,
}

const MIXED: &str = r#"{"id": 12345, "count": "  ", "price": "19.99", "active": "0", "quantity": 7.9}"#;

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode mixed record", |b| {
        b.iter(|| serde_json::from_str::<Record>(black_box(MIXED)))
    });
    c.bench_function("probe float text", |b| {
        b.iter(|| ft_core::probe(black_box(r#""-1.618""#)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let record: Record = serde_json::from_str(MIXED).unwrap();
    c.bench_function("encode mixed record", |b| {
        b.iter(|| serde_json::to_string(black_box(&record)))
    });

    let dirty = "<b>bla</b> \u{0002}&\u{00a0}".repeat(32);
    c.bench_function("encode dirty string", |b| {
        b.iter(|| Str::from(black_box(dirty.as_str())).to_json())
    });
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
