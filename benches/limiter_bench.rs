//! Benchmarks for moment limiting.
//!
//! Run with: `cargo bench --bench limiter_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dg1d::{
    Basis, BoundaryCondition, Euler1D, InitialCondition, Limiter, LimiterKind, Mesh1D, PdeSystem,
    RiemannSolver, Solution,
};

fn sod_solution(n_elements: usize, order: usize) -> Solution {
    let euler = Euler1D::default();
    let ic: InitialCondition = "sodtube".parse().unwrap();
    let mut sol = Solution::new(
        Mesh1D::uniform(0.0, 1.0, n_elements).unwrap(),
        Basis::new(order).unwrap(),
        PdeSystem::Euler(euler),
        RiemannSolver::Roe,
        BoundaryCondition::Transmissive,
    )
    .unwrap();
    sol.project(|x| ic.evaluate(&euler, x + 0.003));
    sol
}

fn bench_full_biswas(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_biswas");
    for order in [1, 2, 4] {
        let template = sod_solution(400, order);
        let limiter = Limiter::new(LimiterKind::FullBiswas, template.basis());
        group.bench_with_input(BenchmarkId::from_parameter(order), &order, |b, _| {
            b.iter_batched(
                || template.clone(),
                |mut sol| {
                    limiter.limit(black_box(&mut sol));
                    sol
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_biswas);
criterion_main!(benches);
