//! Reference values for the Euler numerical fluxes on Toro's six
//! Riemann problems (γ = 1.4).

use approx::assert_relative_eq;
use dg1d::equations::{Euler1D, PdeSystem};
use dg1d::flux::{self, RiemannSolver};
use faer::Mat;

/// Primitive (ρ, v, p) left and right states.
const CASES: [([f64; 3], [f64; 3]); 6] = [
    ([1.0, 0.0, 1.0], [0.125, 0.0, 0.1]),
    ([1.0, 0.75, 1.0], [0.125, 0.0, 0.1]),
    ([1.0, -2.0, 0.4], [1.0, 2.0, 0.4]),
    ([1.0, 0.0, 1000.0], [1.0, 0.0, 0.01]),
    ([5.99924, 19.5975, 460.894], [5.99242, -6.19633, 46.0950]),
    ([1.4, 0.0, 1.0], [1.0, 0.0, 1.0]),
];

const RUSANOV: [[f64; 3]; 6] = [
    [0.51765698102, 0.55, 1.3311179512],
    [1.2207819810, 1.5562059837, 3.8646951951],
    [0.0, -1.0966629547, 0.0],
    [0.0, 500.005, 46770.249628],
    [40.321739283, 3838.6450281, 57316.182989],
    [0.23664319132, 1.0, 0.0],
];

const GODUNOV: [[f64; 3]; 6] = [
    [0.3953910704650308, 0.6698366621333465, 1.1540375166808616],
    [0.8109525650238815, 1.5445355710738495, 3.0029992255123030],
    [0.0, 0.0018938734200542, 0.0],
    [11.2697554398918438, 681.7522718876612089, 33777.3342909460770898],
    [117.5701059, 2764.9741503752502467, 54190.4009509894967778],
    [0.0, 1.0, 0.0],
];

/// Roe without an entropy fix. The reference table also lists values for
/// cases 3 and 4 (momentum flux -3.77 and 353.24), but the Roe-averaged
/// decomposition gives 2.0676 and 500.005 there, so those entries were not
/// produced by this formula and are left out.
const ROE: [(usize, [f64; 3]); 4] = [
    (0, [0.39066048579, 0.55, 1.2958822774]),
    (1, [0.88328703998, 1.4815703003, 3.2200016348]),
    (4, [100.69219686, 2814.0961713, 50998.456608]),
    (5, [0.0, 1.0, 0.0]),
];

fn conserved_pair(case: usize) -> ([f64; 3], [f64; 3]) {
    let euler = Euler1D::default();
    let (l, r) = CASES[case];
    (
        euler.conserved(l[0], l[1], l[2]),
        euler.conserved(r[0], r[1], r[2]),
    )
}

fn numerical_flux(solver: RiemannSolver, case: usize) -> [f64; 3] {
    let system = PdeSystem::Euler(Euler1D::default());
    let (q_l, q_r) = conserved_pair(case);
    let mut out = [0.0; 3];
    system.numerical_flux(solver, &q_l, &q_r, &mut out);
    out
}

fn assert_flux(actual: [f64; 3], expected: [f64; 3], label: &str) {
    for f in 0..3 {
        assert_relative_eq!(actual[f], expected[f], max_relative = 1e-6, epsilon = 1e-6);
    }
    println!("{}: {:?}", label, actual);
}

#[test]
fn test_rusanov_fixtures() {
    for (case, expected) in RUSANOV.iter().enumerate() {
        assert_flux(
            numerical_flux(RiemannSolver::Rusanov, case),
            *expected,
            &format!("rusanov case {}", case + 1),
        );
    }
}

#[test]
fn test_godunov_fixtures() {
    for (case, expected) in GODUNOV.iter().enumerate() {
        assert_flux(
            numerical_flux(RiemannSolver::Godunov, case),
            *expected,
            &format!("godunov case {}", case + 1),
        );
    }
}

#[test]
fn test_roe_fixtures() {
    for (case, expected) in ROE {
        assert_flux(
            numerical_flux(RiemannSolver::Roe, case),
            expected,
            &format!("roe case {}", case + 1),
        );
    }
}

#[test]
fn test_batched_riemann_matches_pointwise() {
    // All six interfaces in one call
    let system = PdeSystem::Euler(Euler1D::default());
    let mut q_l = Vec::new();
    let mut q_r = Vec::new();
    for case in 0..CASES.len() {
        let (l, r) = conserved_pair(case);
        q_l.extend_from_slice(&l);
        q_r.extend_from_slice(&r);
    }
    let mut out = vec![0.0; q_l.len()];
    flux::riemann(&system, RiemannSolver::Godunov, &q_l, &q_r, &mut out);

    for (case, expected) in GODUNOV.iter().enumerate() {
        let got = [out[3 * case], out[3 * case + 1], out[3 * case + 2]];
        assert_flux(got, *expected, &format!("batched case {}", case + 1));
    }
}

#[test]
fn test_interior_flux_fixture() {
    // Four elements, three nodes: u[g][c] = 12 g + c + 1
    let system = PdeSystem::Euler(Euler1D::default());
    let ug = Mat::from_fn(3, 12, |g, c| (12 * g + c + 1) as f64);
    let mut fg = Mat::zeros(3, 12);
    flux::interior_flux(&system, &ug, &mut fg);

    let expected = [
        [
            2.0, 4.4, 6.8, 5.0, 7.4, 8.9375, 8.0, 10.91428571, 12.31020408, 11.0, 14.48, 15.818,
        ],
        [
            14.0, 18.06153846, 19.36804734, 17.0, 21.65, 22.93671875, 20.0, 25.24210526,
            26.51523546, 23.0, 28.83636364, 30.09958678,
        ],
        [
            26.0, 32.432, 33.68768, 29.0, 36.02857143, 37.27831633, 32.0, 39.62580645,
            40.87075963, 35.0, 43.22352941, 44.46453287,
        ],
    ];
    for (g, row) in expected.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            assert!(
                (fg[(g, c)] - value).abs() < 1e-7,
                "flux[{}, {}] = {}, expected {}",
                g,
                c,
                fg[(g, c)],
                value
            );
        }
    }
}

#[test]
fn test_max_wave_speed_fixture() {
    let system = PdeSystem::Euler(Euler1D::default());
    let states: Vec<f64> = (1..=12).map(f64::from).collect();
    assert_relative_eq!(
        flux::max_wave_speed(&system, &states),
        2.74833147735,
        max_relative = 1e-10
    );
}

#[test]
fn test_symmetric_states_give_symmetric_fluxes() {
    // Mirroring the problem flips the sign of the mass and energy fluxes
    let euler = Euler1D::default();
    let system = PdeSystem::Euler(euler);
    let (l, r) = CASES[4];
    let q_l = euler.conserved(l[0], l[1], l[2]);
    let q_r = euler.conserved(r[0], r[1], r[2]);
    let m_l = euler.conserved(r[0], -r[1], r[2]);
    let m_r = euler.conserved(l[0], -l[1], l[2]);

    for solver in [RiemannSolver::Rusanov, RiemannSolver::Roe, RiemannSolver::Godunov] {
        let mut f = [0.0; 3];
        let mut g = [0.0; 3];
        system.numerical_flux(solver, &q_l, &q_r, &mut f);
        system.numerical_flux(solver, &m_l, &m_r, &mut g);
        assert_relative_eq!(f[0], -g[0], max_relative = 1e-9);
        assert_relative_eq!(f[1], g[1], max_relative = 1e-9);
        assert_relative_eq!(f[2], -g[2], max_relative = 1e-9);
    }
}
