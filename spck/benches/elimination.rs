use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

use spck::{find_pivots, systematic_form, GeneratorConfig};

fn bench_elimination(crit: &mut Criterion) {
    let config = GeneratorConfig::regular(64, 6, 8).unwrap();
    let matrix = config
        .bipartite(&mut StdRng::seed_from_u64(7))
        .unwrap();

    crit.bench_function("find_pivots k=64", |b| {
        b.iter(|| {
            let mut work = matrix.clone();
            black_box(find_pivots(&mut work))
        })
    });

    crit.bench_function("systematic_form k=64", |b| {
        b.iter(|| {
            let mut work = matrix.clone();
            black_box(systematic_form(&mut work).unwrap())
        })
    });
}

criterion_group!(benches, bench_elimination);
criterion_main!(benches);
