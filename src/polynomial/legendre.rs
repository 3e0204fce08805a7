//! Legendre polynomial evaluation.
//!
//! Legendre polynomials P_n(x) are orthogonal on [-1, 1] with weight 1:
//! ∫_{-1}^{1} P_m(x) P_n(x) dx = 2/(2n+1) δ_{mn}

/// Evaluate P_n(x) with the three-term recurrence.
///
/// P_0(x) = 1
/// P_1(x) = x
/// (k+1) P_{k+1}(x) = (2k+1) x P_k(x) - k P_{k-1}(x)
pub fn legendre(n: usize, x: f64) -> f64 {
    legendre_and_derivative(n, x).0
}

/// Evaluate P'_n(x).
pub fn legendre_derivative(n: usize, x: f64) -> f64 {
    legendre_and_derivative(n, x).1
}

/// Evaluate P_n(x) and P'_n(x) in one sweep.
///
/// The derivative is carried along with the companion recurrence
/// P'_{k+1}(x) = P'_{k-1}(x) + (2k+1) P_k(x), which stays regular at the
/// endpoints x = ±1 where the closed form n (x P_n - P_{n-1}) / (x² - 1)
/// would divide by zero.
pub fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    let (mut p_prev, mut p_curr) = (1.0, x);
    let (mut dp_prev, mut dp_curr) = (0.0, 1.0);

    if n == 0 {
        return (p_prev, dp_prev);
    }

    for k in 1..n {
        let kf = k as f64;
        let p_next = ((2.0 * kf + 1.0) * x * p_curr - kf * p_prev) / (kf + 1.0);
        let dp_next = dp_prev + (2.0 * kf + 1.0) * p_curr;
        p_prev = p_curr;
        p_curr = p_next;
        dp_prev = dp_curr;
        dp_curr = dp_next;
    }

    (p_curr, dp_curr)
}

/// Values P_0(x), ..., P_{n_max}(x) in a single recurrence.
pub fn legendre_values(n_max: usize, x: f64) -> Vec<f64> {
    let mut values = Vec::with_capacity(n_max + 1);
    values.push(1.0);
    if n_max == 0 {
        return values;
    }
    values.push(x);
    for k in 1..n_max {
        let kf = k as f64;
        let next = ((2.0 * kf + 1.0) * x * values[k] - kf * values[k - 1]) / (kf + 1.0);
        values.push(next);
    }
    values
}

/// Squared L² norm ∫_{-1}^{1} P_n(x)² dx = 2/(2n+1).
pub fn legendre_norm_squared(n: usize) -> f64 {
    2.0 / (2 * n + 1) as f64
}
