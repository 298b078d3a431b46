//! Lookup benchmarks: link walking vs direct arena indexing

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linkmat::{GridMatrix, LinkedMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: usize = 256;
const PROBES: usize = 1024;

fn probe_positions() -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..PROBES)
        .map(|_| (rng.gen_range(0..SIDE), rng.gen_range(0..SIDE)))
        .collect()
}

fn bench_lookup(c: &mut Criterion) {
    let matrix: LinkedMatrix<i64> = LinkedMatrix::new(SIDE, SIDE).unwrap();
    let probes = probe_positions();

    c.bench_function("get_by_coordinate_link_walk", |b| {
        b.iter(|| {
            for &(row, col) in &probes {
                black_box(matrix.get_by_coordinate(row, col).unwrap());
            }
        })
    });

    c.bench_function("get_direct_index", |b| {
        b.iter(|| {
            for &(row, col) in &probes {
                black_box(matrix.get(row, col).unwrap());
            }
        })
    });

    c.bench_function("get_by_value_scan", |b| {
        // worst case: the bottom-right corner holds the only maximal value
        let target = ((SIDE - 1) + (SIDE - 1)) as i64;
        b.iter(|| black_box(matrix.get_by_value(black_box(target))));
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
