//! Simulation runner implementation.
//!
//! Steps a [`Solution`] to a final time with SSP-RK3, limiting after every
//! stage and reporting the state at evenly spaced output times.

use crate::error::{DgError, Result};
use crate::solver::{DG, Limiter, Solution};
use crate::time::{SspRk3, compute_dt};

// =============================================================================
// Simulation Configuration
// =============================================================================

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// CFL number for the time step.
    pub cfl: f64,
    /// Time at which the run stops.
    pub final_time: f64,
    /// Number of evenly spaced output times, including t = 0 and the final time.
    pub n_outputs: usize,
    /// Maximum number of time steps.
    pub max_steps: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cfl: 0.5,
            final_time: 1.0,
            n_outputs: 11,
            max_steps: None,
        }
    }
}

impl SimulationConfig {
    /// Times at which the callback fires.
    ///
    /// With a single output only the final state is reported.
    pub fn output_times(&self) -> Vec<f64> {
        match self.n_outputs {
            0 => Vec::new(),
            1 => vec![self.final_time],
            n => (0..n)
                .map(|k| self.final_time * k as f64 / (n - 1) as f64)
                .collect(),
        }
    }
}

// =============================================================================
// Simulation Result
// =============================================================================

/// Result of a simulation run.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Final simulation time reached.
    pub final_time: f64,
    /// Total number of time steps taken.
    pub n_steps: usize,
    /// Minimum time step used.
    pub dt_min: f64,
    /// Maximum time step used.
    pub dt_max: f64,
    /// Total wall-clock time in seconds.
    pub wall_time: f64,
    /// Number of callback invocations.
    pub n_outputs: usize,
    /// Whether the run reached the final time.
    pub completed: bool,
}

// =============================================================================
// Simulation Runner
// =============================================================================

/// Solution, assembler, limiter and integrator bundled for a run.
pub struct Simulation {
    solution: Solution,
    dg: DG,
    limiter: Limiter,
    integrator: SspRk3,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a runner for an already projected solution.
    pub fn new(solution: Solution, limiter: Limiter) -> Self {
        let dg = DG::new(&solution);
        let integrator = SspRk3::new(&solution);
        Self {
            solution,
            dg,
            limiter,
            integrator,
            config: SimulationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the CFL number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.config.cfl = cfl;
        self
    }

    pub fn with_final_time(mut self, final_time: f64) -> Self {
        self.config.final_time = final_time;
        self
    }

    pub fn with_n_outputs(mut self, n_outputs: usize) -> Self {
        self.config.n_outputs = n_outputs;
        self
    }

    /// Set the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.config.max_steps = Some(max_steps);
        self
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn solution_mut(&mut self) -> &mut Solution {
        &mut self.solution
    }

    pub fn limiter(&self) -> &Limiter {
        &self.limiter
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run to the configured final time.
    pub fn run(&mut self) -> Result<SimulationResult> {
        self.run_with_callback(|_, _| {})
    }

    /// Run to the configured final time, calling `callback(solution, t)` at
    /// every output time.
    ///
    /// The initial state is limited before the first step. A step limit
    /// ends the run early with `completed == false`; NaN or Inf in the
    /// state is an error.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<SimulationResult>
    where
        F: FnMut(&Solution, f64),
    {
        let start_wall = std::time::Instant::now();
        let t_end = self.config.final_time;
        let output_times = self.config.output_times();
        let tol = 1e-12 * t_end.abs().max(1.0);

        log::info!(
            "Starting simulation: {} on {} elements, p = {}, {} flux, {} limiter, t_end = {}",
            self.solution.system().name(),
            self.solution.n_elements(),
            self.solution.basis().order,
            self.solution.riemann_solver(),
            self.limiter.kind(),
            t_end
        );

        self.limiter.limit(&mut self.solution);
        if !self.solution.is_finite() {
            return Err(DgError::NonFinite { time: 0.0 });
        }

        let mut t = 0.0;
        let mut n_steps = 0;
        let mut dt_min_used = f64::INFINITY;
        let mut dt_max_used: f64 = 0.0;
        let mut next_output = 0;

        while next_output < output_times.len() && output_times[next_output] <= tol {
            callback(&self.solution, t);
            next_output += 1;
        }

        while t < t_end - tol {
            if let Some(max_steps) = self.config.max_steps
                && n_steps >= max_steps
            {
                log::warn!("Maximum step limit ({}) reached at t = {:.6}", max_steps, t);
                return Ok(SimulationResult {
                    final_time: t,
                    n_steps,
                    dt_min: dt_min_used,
                    dt_max: dt_max_used,
                    wall_time: start_wall.elapsed().as_secs_f64(),
                    n_outputs: next_output,
                    completed: false,
                });
            }

            let mut dt = compute_dt(&self.solution, self.config.cfl);
            if dt.is_nan() {
                return Err(DgError::NonFinite { time: t });
            }

            // Land exactly on the next output time (or the end)
            let target = output_times
                .get(next_output)
                .copied()
                .unwrap_or(t_end)
                .min(t_end);
            let landing = t + dt >= target - tol;
            if landing {
                dt = target - t;
            }

            self.integrator
                .step(&mut self.solution, &mut self.dg, &self.limiter, dt)?;
            t = if landing { target } else { t + dt };
            n_steps += 1;

            if !self.solution.is_finite() {
                return Err(DgError::NonFinite { time: t });
            }

            dt_min_used = dt_min_used.min(dt);
            dt_max_used = dt_max_used.max(dt);

            while next_output < output_times.len() && output_times[next_output] <= t + tol {
                callback(&self.solution, t);
                next_output += 1;
            }

            log::debug!("Step {}: t = {:.6}, dt = {:.3e}", n_steps, t, dt);
        }

        let wall_time = start_wall.elapsed().as_secs_f64();
        log::info!(
            "Simulation complete: {} steps, dt range [{:.2e}, {:.2e}], {:.2}s",
            n_steps,
            dt_min_used,
            dt_max_used,
            wall_time
        );

        Ok(SimulationResult {
            final_time: t,
            n_steps,
            dt_min: dt_min_used,
            dt_max: dt_max_used,
            wall_time,
            n_outputs: next_output,
            completed: true,
        })
    }
}
