//! End-to-end runs configured from JSON input decks.

use dg1d::{DeckConfig, DgError, Euler1D, InitialCondition, LimiterKind};

#[test]
fn test_sinewave_one_period() {
    let deck = DeckConfig::from_json_str(
        r#"{
            "system": "advection",
            "initial_condition": "sinewave 32",
            "order": 2,
            "riemann": "upwind",
            "cfl": 0.3
        }"#,
    )
    .unwrap();
    let mut sim = deck.build().unwrap();
    let result = sim.run().unwrap();

    assert!(result.completed);
    assert!((result.final_time - 2.0).abs() < 1e-12);
    assert_eq!(result.n_outputs, 11);

    let ic: InitialCondition = "sinewave".parse().unwrap();
    let euler = Euler1D::default();
    let error = sim
        .solution()
        .l2_error(0, |x| ic.exact(&euler, 1.0, x, 2.0)[0]);
    assert!(error < 1e-3, "L2 error after one period: {:e}", error);
}

#[test]
fn test_entropy_wave_translation() {
    let deck = DeckConfig::from_json_str(
        r#"{
            "initial_condition": "entropywave",
            "n_elements": 20,
            "order": 2,
            "riemann": "roe",
            "final_time": 0.5,
            "cfl": 0.3,
            "n_outputs": 3
        }"#,
    )
    .unwrap();
    let mut sim = deck.build().unwrap();
    let mut times = Vec::new();
    let result = sim.run_with_callback(|_, t| times.push(t)).unwrap();

    assert!(result.completed);
    assert_eq!(times.len(), 3);
    assert!((times[1] - 0.25).abs() < 1e-12);

    let ic: InitialCondition = "entropywave".parse().unwrap();
    let euler = Euler1D::default();
    let sol = sim.solution();
    let rho_error = sol.l2_error(0, |x| ic.exact(&euler, 1.0, x, 0.5)[0]);
    assert!(rho_error < 1e-3, "density error {:e}", rho_error);

    // Pressure stays uniform at 1
    for x in [-0.9, -0.35, 0.1, 0.62] {
        let q = [sol.evaluate(x, 0), sol.evaluate(x, 1), sol.evaluate(x, 2)];
        assert!((euler.pressure(&q) - 1.0).abs() < 1e-3);
    }
}

#[test]
fn test_sod_shock_tube() {
    let deck = DeckConfig::from_json_str(
        r#"{
            "initial_condition": "sodtube",
            "n_elements": 100,
            "order": 1,
            "riemann": "godunov",
            "limiting": "full_biswas",
            "cfl": 0.3
        }"#,
    )
    .unwrap();
    let mut sim = deck.build().unwrap();
    assert_eq!(sim.limiter().kind(), LimiterKind::FullBiswas);

    let mass0 = sim.solution().integral(0);
    let result = sim.run().unwrap();
    assert!(result.completed);
    assert!((result.final_time - 0.2).abs() < 1e-12);

    let sol = sim.solution();
    assert!(sol.is_finite());

    // Waves have not reached the boundaries
    assert!((sol.integral(0) - mass0).abs() < 1e-10);
    assert!((mass0 - 0.5625).abs() < 1e-12);

    // Limited means stay within the initial bounds
    for rho in sol.cell_means(0) {
        assert!(rho > 0.125 - 1e-8 && rho < 1.0 + 1e-8, "density mean {}", rho);
    }

    // L1 density error against the exact solution
    let ic: InitialCondition = "sodtube".parse().unwrap();
    let euler = Euler1D::default();
    let n_samples = 2000;
    let l1: f64 = (0..n_samples)
        .map(|i| {
            let x = (i as f64 + 0.5) / n_samples as f64;
            (sol.evaluate(x, 0) - ic.exact(&euler, 1.0, x, 0.2)[0]).abs()
        })
        .sum::<f64>()
        / n_samples as f64;
    assert!(l1 < 1e-2, "L1 density error {:e}", l1);
}

#[test]
fn test_deck_from_path() {
    let path = std::env::temp_dir().join(format!("dg1d_deck_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"initial_condition": "tophat", "n_elements": 20, "order": 1, "final_time": 0.05, "max_steps": 3}"#,
    )
    .unwrap();
    let deck = DeckConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut sim = deck.build().unwrap();
    let result = sim.run().unwrap();
    assert!(!result.completed);
    assert_eq!(result.n_steps, 3);
}

#[test]
fn test_blow_up_is_reported() {
    // Far above the stability limit the solution diverges
    let deck = DeckConfig::from_json_str(
        r#"{"initial_condition": "sinewave", "n_elements": 16, "order": 3, "cfl": 50.0, "final_time": 1000.0}"#,
    )
    .unwrap();
    let mut sim = deck.build().unwrap();
    assert!(matches!(sim.run(), Err(DgError::NonFinite { .. })));
}
