//! Throughput benchmarks for KeyedHeap
//!
//! Compares the keyed heap against `std::collections::BinaryHeap` wrapped in
//! `Reverse` (the standard min-heap idiom) on the same workloads.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the heapify group
//! cargo bench --bench heap_perf -- heapify
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keyed_heap::KeyedHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
}

fn random_values(n: usize) -> Vec<u32> {
    let mut rng = Lcg::new(0x5eed);
    (0..n).map(|_| rng.next_u32()).collect()
}

#[derive(Clone, Copy)]
struct Job {
    deadline: u32,
    #[allow(dead_code)]
    payload: [u64; 2],
}

fn benchmark_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for size in SIZES {
        let values = random_values(size);

        group.bench_with_input(BenchmarkId::new("keyed_identity", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = KeyedHeap::with_capacity(vs.len());
                for &v in vs {
                    heap.push(v);
                }
                let mut sum = 0u64;
                while let Ok(v) = heap.pop() {
                    sum += u64::from(v);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("keyed_field", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = KeyedHeap::with_capacity_and_key(vs.len(), |job: &Job| job.deadline);
                for &deadline in vs {
                    heap.push(Job {
                        deadline,
                        payload: [0; 2],
                    });
                }
                let mut sum = 0u64;
                while let Ok(job) = heap.pop() {
                    sum += u64::from(job.deadline);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_reverse", size), &values, |b, vs| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(vs.len());
                for &v in vs {
                    heap.push(Reverse(v));
                }
                let mut sum = 0u64;
                while let Some(Reverse(v)) = heap.pop() {
                    sum += u64::from(v);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn benchmark_heapify(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapify");

    for size in SIZES {
        let values = random_values(size);

        group.bench_with_input(BenchmarkId::new("keyed", size), &values, |b, vs| {
            b.iter(|| black_box(KeyedHeap::from(vs.clone())))
        });

        group.bench_with_input(BenchmarkId::new("std_reverse", size), &values, |b, vs| {
            b.iter(|| {
                let wrapped: Vec<_> = vs.iter().copied().map(Reverse).collect();
                black_box(BinaryHeap::from(wrapped))
            })
        });
    }

    group.finish();
}

fn benchmark_replacement(c: &mut Criterion) {
    let mut group = c.benchmark_group("replacement");

    for size in SIZES {
        let values = random_values(size);
        let incoming = random_values(size * 2);

        group.bench_with_input(BenchmarkId::new("pushpop", size), &incoming, |b, inc| {
            b.iter(|| {
                let mut heap = KeyedHeap::from(values.clone());
                let mut sum = 0u64;
                for &v in inc {
                    sum += u64::from(heap.pushpop(v));
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("replace_top", size), &incoming, |b, inc| {
            b.iter(|| {
                let mut heap = KeyedHeap::from(values.clone());
                let mut sum = 0u64;
                for &v in inc {
                    if let Ok(top) = heap.replace_top(v) {
                        sum += u64::from(top);
                    }
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("push_then_pop", size), &incoming, |b, inc| {
            b.iter(|| {
                let mut heap = KeyedHeap::from(values.clone());
                let mut sum = 0u64;
                for &v in inc {
                    heap.push(v);
                    if let Ok(top) = heap.pop() {
                        sum += u64::from(top);
                    }
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_pop,
    benchmark_heapify,
    benchmark_replacement,
);

criterion_main!(benches);
