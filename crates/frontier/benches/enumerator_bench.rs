//! Criterion benchmarks for incremental vertex enumeration.
//! Focus sizes: m random cuts in {4, 16, 64} on top of a unit-square seed.
//! Results: by default under target/criterion; to store elsewhere, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p frontier

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use frontier::enumerate::VertexEnumerator;
use frontier::geom::{Cfg, Hyperplane};
use nalgebra::DVector;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn unit_square() -> VertexEnumerator {
    let bounds = vec![
        Hyperplane::new(DVector::from_column_slice(&[1.0, 0.0]), 0.0),
        Hyperplane::new(DVector::from_column_slice(&[-1.0, 0.0]), -1.0),
        Hyperplane::new(DVector::from_column_slice(&[0.0, 1.0]), 0.0),
        Hyperplane::new(DVector::from_column_slice(&[0.0, -1.0]), -1.0),
    ];
    match VertexEnumerator::from_bounds(Cfg::new(2), bounds) {
        Ok(en) => en,
        Err(e) => panic!("seed region: {e}"),
    }
}

/// Random cuts that always keep the square's center strictly feasible.
fn random_cuts(m: usize, seed: u64) -> Vec<Hyperplane> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cuts = Vec::with_capacity(m);
    for _ in 0..m {
        let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let n = DVector::from_column_slice(&[theta.cos(), theta.sin()]);
        let margin = rng.gen_range(0.05..0.45);
        let offset = n[0] * 0.5 + n[1] * 0.5 - margin;
        cuts.push(Hyperplane::new(n, offset));
    }
    cuts
}

fn bench_enumerator(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for &m in &[4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("incremental_cuts", m), &m, |b, &m| {
            b.iter_batched(
                || (unit_square(), random_cuts(m, 43)),
                |(mut en, cuts)| {
                    for cut in cuts {
                        let _created = en.add_hyperplane(cut).unwrap();
                    }
                    en.num_vertices()
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("seed_from_bounds", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let mut bounds = vec![
                        Hyperplane::new(DVector::from_column_slice(&[1.0, 0.0]), 0.0),
                        Hyperplane::new(DVector::from_column_slice(&[-1.0, 0.0]), -1.0),
                        Hyperplane::new(DVector::from_column_slice(&[0.0, 1.0]), 0.0),
                        Hyperplane::new(DVector::from_column_slice(&[0.0, -1.0]), -1.0),
                    ];
                    bounds.extend(random_cuts(m, 44));
                    bounds
                },
                |bounds| VertexEnumerator::from_bounds(Cfg::new(2), bounds).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enumerator);
criterion_main!(benches);
