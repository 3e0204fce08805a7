//! Simulation runner.
//!
//! Ties a projected [`Solution`](crate::solver::Solution) to the residual
//! assembler, limiter and SSP-RK3 integrator, and steps it to a final time
//! with evenly spaced output callbacks.
//!
//! # Example
//! ```ignore
//! use dg1d::config::DeckConfig;
//!
//! let deck = DeckConfig::from_json_str(r#"{"initial_condition": "sodtube", "n_elements": 100, "order": 2}"#)?;
//! let mut sim = deck.build()?;
//! let result = sim.run_with_callback(|solution, t| {
//!     println!("t = {:.3}, mass = {:.6}", t, solution.integral(0));
//! })?;
//! ```

mod runner;

pub use runner::{Simulation, SimulationConfig, SimulationResult};
