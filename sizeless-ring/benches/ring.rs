//! Per-operation latency of the ring.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sizeless_ring::RingBuffer;

/// Enqueue followed by dequeue on a half-full ring, so the tail keeps wrapping.
fn enqueue_dequeue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_dequeue");

    for capacity in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            let mut ring: RingBuffer<u64> = RingBuffer::new(cap).unwrap();
            for i in 0..(cap / 2) as u64 {
                ring.enqueue(i).unwrap();
            }
            let mut i = 0u64;
            b.iter(|| {
                ring.enqueue(black_box(i)).unwrap();
                i = i.wrapping_add(1);
                black_box(ring.dequeue())
            })
        });
    }

    group.finish();
}

/// Rejected enqueue on a full ring.
fn enqueue_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue_full");

    group.bench_function("rejected", |b| {
        let mut ring: RingBuffer<u64> = RingBuffer::new(64).unwrap();
        for i in 0..64u64 {
            ring.enqueue(i).unwrap();
        }
        b.iter(|| black_box(ring.enqueue(black_box(0)).is_err()))
    });

    group.finish();
}

/// Fullness check must not depend on capacity.
fn is_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_full");

    for capacity in [16usize, 4096, 65_536] {
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &cap| {
            let mut ring: RingBuffer<u64> = RingBuffer::new(cap).unwrap();
            for i in 0..(cap - 1) as u64 {
                ring.enqueue(i).unwrap();
            }
            b.iter(|| black_box(&ring).is_full())
        });
    }

    group.finish();
}

fn peek(c: &mut Criterion) {
    let mut ring: RingBuffer<u64> = RingBuffer::new(256).unwrap();
    ring.enqueue(42).unwrap();
    c.bench_function("peek", |b| b.iter(|| black_box(black_box(&ring).peek().copied())));
}

criterion_group!(benches, enqueue_dequeue, enqueue_full, is_full, peek);
criterion_main!(benches);
