//! Criterion micro-benchmarks for buffer push, sparse set, and pop paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dynbuf::{Doubling, DynBuffer, I64Buffer};
use dynbuf_bench::{prefilled, random_indices};

/// Append-heavy workload from zero capacity: the amortized-O(1) claim.
fn bench_push_from_empty(c: &mut Criterion) {
    c.bench_function("push_10k_from_empty", |b| {
        b.iter(|| {
            let mut buf = I64Buffer::new();
            for v in 0..10_000i64 {
                buf.push(black_box(v)).unwrap();
            }
            black_box(buf.len())
        })
    });
}

/// Same workload with the allocation hoisted out via initial capacity.
fn bench_push_preallocated(c: &mut Criterion) {
    c.bench_function("push_10k_preallocated", |b| {
        b.iter(|| {
            let mut buf = I64Buffer::with_capacity(10_000);
            for v in 0..10_000i64 {
                buf.push(black_box(v)).unwrap();
            }
            black_box(buf.len())
        })
    });
}

/// One sparse write far past capacity: the multi-step growth loop plus a
/// single large reallocation.
fn bench_sparse_set_growth(c: &mut Criterion) {
    c.bench_function("sparse_set_index_100k", |b| {
        b.iter(|| {
            let mut buf = I64Buffer::new();
            buf.set(black_box(100_000), 1).unwrap();
            black_box(buf.capacity())
        })
    });
}

/// Randomized in-range writes against a prefilled buffer: the no-growth
/// fast path.
fn bench_random_set_in_range(c: &mut Criterion) {
    let indices = random_indices(10_000, 10_000, 42);
    c.bench_function("random_set_10k_in_range", |b| {
        b.iter(|| {
            let mut buf = prefilled(10_000);
            for &i in &indices {
                buf.set(i, black_box(-1)).unwrap();
            }
            black_box(buf.len())
        })
    });
}

/// Full drain via pop.
fn bench_pop_drain(c: &mut Criterion) {
    c.bench_function("pop_drain_10k", |b| {
        b.iter(|| {
            let mut buf = prefilled(10_000);
            let mut sum = 0i64;
            while let Some(v) = buf.pop() {
                sum += v;
            }
            black_box(sum)
        })
    });
}

/// Doubling vs the default half-again policy on the same append workload.
fn bench_doubling_policy(c: &mut Criterion) {
    c.bench_function("push_10k_doubling_policy", |b| {
        b.iter(|| {
            let mut buf: DynBuffer<i64, Doubling> = DynBuffer::with_policy(0, Doubling);
            for v in 0..10_000i64 {
                buf.push(black_box(v)).unwrap();
            }
            black_box(buf.capacity())
        })
    });
}

criterion_group!(
    benches,
    bench_push_from_empty,
    bench_push_preallocated,
    bench_sparse_set_growth,
    bench_random_set_in_range,
    bench_pop_drain,
    bench_doubling_policy,
);
criterion_main!(benches);
