//! Moment limiter behaviour on projected profiles.

use dg1d::{
    Advection1D, Basis, BoundaryCondition, Euler1D, InitialCondition, Limiter, LimiterKind,
    Mesh1D, PdeSystem, RiemannSolver, Solution,
};
use std::f64::consts::PI;

fn scalar(order: usize, n: usize, boundary: BoundaryCondition, f: impl Fn(f64) -> f64) -> Solution {
    let mut sol = Solution::new(
        Mesh1D::uniform(0.0, 2.0, n).unwrap(),
        Basis::new(order).unwrap(),
        PdeSystem::Advection(Advection1D::new(1.0)),
        RiemannSolver::Upwind,
        boundary,
    )
    .unwrap();
    sol.project(|x| [f(x), 0.0, 0.0]);
    sol
}

fn interior_modes(sol: &Solution) -> Vec<Vec<f64>> {
    let n_f = sol.n_fields();
    sol.interior_elements()
        .flat_map(|e| (0..n_f).map(move |f| (e, f)))
        .map(|(e, f)| sol.element_modes(e, f))
        .collect()
}

fn step(x: f64) -> f64 {
    if x > 0.5 && x < 1.2 { 1.0 } else { 0.2 }
}

fn mixed(x: f64) -> f64 {
    (3.0 * x).sin() + if x > 1.0 { 0.5 } else { 0.0 }
}

#[test]
fn test_limiting_is_idempotent_for_linear_modes() {
    let profiles: [fn(f64) -> f64; 3] = [step, |x| (PI * x).sin(), mixed];
    for profile in profiles {
        let mut sol = scalar(1, 16, BoundaryCondition::Periodic, profile);
        let limiter = Limiter::new(LimiterKind::FullBiswas, sol.basis());
        limiter.limit(&mut sol);
        let once = interior_modes(&sol);
        limiter.limit(&mut sol);
        assert_eq!(interior_modes(&sol), once);
    }
}

#[test]
fn test_cell_means_are_never_modified() {
    let euler = Euler1D::default();
    let sod: InitialCondition = "sodtube".parse().unwrap();
    for order in 1..=3 {
        let mut sol = Solution::new(
            Mesh1D::uniform(0.0, 1.0, 25).unwrap(),
            Basis::new(order).unwrap(),
            PdeSystem::Euler(euler),
            RiemannSolver::Roe,
            BoundaryCondition::Transmissive,
        )
        .unwrap();
        // Shift the discontinuity off the element edges
        sol.project(|x| sod.evaluate(&euler, x + 0.013));
        let means: Vec<Vec<f64>> = (0..3).map(|f| sol.cell_means(f)).collect();

        Limiter::new(LimiterKind::FullBiswas, sol.basis()).limit(&mut sol);
        for (f, before) in means.iter().enumerate() {
            assert_eq!(&sol.cell_means(f), before);
        }
    }
}

#[test]
fn test_linear_profile_untouched_away_from_boundaries() {
    for order in [1, 2] {
        let mut sol = scalar(order, 10, BoundaryCondition::Transmissive, |x| 0.3 + 2.0 * x);
        let before = interior_modes(&sol);
        Limiter::new(LimiterKind::FullBiswas, sol.basis()).limit(&mut sol);
        let after = interior_modes(&sol);

        for k in 1..before.len() - 1 {
            for (a, b) in after[k].iter().zip(&before[k]) {
                assert!((a - b).abs() < 1e-12, "element {}: {:?} vs {:?}", k, after[k], before[k]);
            }
        }
        // Mirrored ghosts flatten the slope in the two boundary elements
        if order == 1 {
            assert!(after[0][1].abs() < 1e-14);
            assert!(after[before.len() - 1][1].abs() < 1e-14);
        }
    }
}

#[test]
fn test_slopes_at_extrema_are_flattened() {
    let mut sol = scalar(1, 4, BoundaryCondition::Periodic, |x| if x < 1.0 { x } else { 2.0 - x });
    Limiter::new(LimiterKind::FullBiswas, sol.basis()).limit(&mut sol);
    // Element 1 ([0.5, 1]) sits at the peak neighbouring a descending element
    let peak = sol.element_modes(2, 0);
    assert!(peak[1].abs() < 1e-14, "slope at the peak: {}", peak[1]);
}

#[test]
fn test_unknown_name_disables_limiting() {
    let mut sol = scalar(2, 16, BoundaryCondition::Periodic, step);
    let before = interior_modes(&sol);
    let limiter = Limiter::from_name("superbee", sol.basis());
    assert_eq!(limiter.kind(), LimiterKind::None);
    limiter.limit(&mut sol);
    assert_eq!(interior_modes(&sol), before);
}

#[test]
fn test_adaptive_hr_is_accepted_as_no_op() {
    let mut sol = scalar(2, 16, BoundaryCondition::Periodic, mixed);
    let before = interior_modes(&sol);
    let limiter = Limiter::from_name("adaptive_hr", sol.basis());
    assert_eq!(limiter.kind(), LimiterKind::AdaptiveHr);
    limiter.limit(&mut sol);
    assert_eq!(interior_modes(&sol), before);
}
