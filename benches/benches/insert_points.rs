// Copyright 2026 the Quadpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadpoint_tree::{PointTree, TreeParams};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform in (-1.0, 1.0) excluding zero.
    fn next_coord(&mut self) -> f64 {
        loop {
            let v = (self.next_u64() >> 11) as f64 / (1_u64 << 52) as f64 * 2.0 - 1.0;
            if v != 0.0 {
                return v;
            }
        }
    }
}

fn gen_points(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(seed);
    (0..n).map(|_| (rng.next_coord(), rng.next_coord())).collect()
}

fn insert_all(params: TreeParams, points: &[(f64, f64)]) -> PointTree<f64> {
    let mut tree = PointTree::with_params(params);
    for &(x, y) in points {
        tree.insert(x, y).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let n = 10_000;
    let points = gen_points(n, 0x5eed);

    let mut group = c.benchmark_group("insert_points");
    group.throughput(Throughput::Elements(n as u64));

    // Root never overflows: pure leaf buffering.
    group.bench_function("leaf_only", |b| {
        b.iter_batched(
            || points.clone(),
            |pts| {
                black_box(insert_all(
                    TreeParams {
                        fill_factor: n,
                        max_depth: 32,
                    },
                    &pts,
                ))
            },
            BatchSize::SmallInput,
        );
    });

    // Root splits once; with uniform data no quadrant reaches n/2 again.
    group.bench_function("one_split", |b| {
        b.iter_batched(
            || points.clone(),
            |pts| {
                black_box(insert_all(
                    TreeParams {
                        fill_factor: n / 2,
                        max_depth: 32,
                    },
                    &pts,
                ))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
