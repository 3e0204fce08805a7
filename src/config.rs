//! Input deck.
//!
//! A run is described by a small JSON document:
//!
//! ```json
//! {
//!     "initial_condition": "sodtube",
//!     "n_elements": 200,
//!     "order": 2,
//!     "riemann": "godunov",
//!     "limiting": "full_biswas"
//! }
//! ```
//!
//! Everything except the initial condition has a default; domain, boundary
//! condition, final time and system default to those of the initial
//! condition. An initial condition may carry a resolution token
//! (`"sinewave 64"`) standing in for `n_elements`.

use crate::basis::Basis;
use crate::enhance::Enhancer;
use crate::equations::{Advection1D, Euler1D, GAMMA_AIR, PdeSystem, SystemKind};
use crate::error::{DgError, Result};
use crate::flux::RiemannSolver;
use crate::mesh::Mesh1D;
use crate::simulation::{Simulation, SimulationConfig};
use crate::solver::{BoundaryCondition, InitialCondition, Limiter, Solution};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_velocity() -> f64 {
    1.0
}

fn default_gamma() -> f64 {
    GAMMA_AIR
}

fn default_n_elements() -> usize {
    32
}

fn default_order() -> i64 {
    1
}

fn default_limiting() -> String {
    "none".to_string()
}

fn default_cfl() -> f64 {
    0.5
}

fn default_n_outputs() -> usize {
    11
}

/// Deserialised input deck.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckConfig {
    /// "advection" or "euler"; must agree with the initial condition.
    #[serde(default)]
    pub system: Option<String>,

    /// Advection speed.
    #[serde(default = "default_velocity")]
    pub velocity: f64,

    /// Ratio of specific heats.
    #[serde(default = "default_gamma")]
    pub gamma: f64,

    /// Initial condition name, optionally followed by an element count.
    pub initial_condition: String,

    #[serde(default)]
    pub n_elements: Option<usize>,

    #[serde(default = "default_order")]
    pub order: i64,

    #[serde(default)]
    pub domain: Option<[f64; 2]>,

    #[serde(default)]
    pub boundary: Option<String>,

    /// Riemann solver; the system default when absent.
    #[serde(default)]
    pub riemann: Option<String>,

    /// Limiter name; unknown names disable limiting.
    #[serde(default = "default_limiting")]
    pub limiting: String,

    /// Enhancement string, e.g. "icb 0 1".
    #[serde(default)]
    pub enhancement: Option<String>,

    #[serde(default = "default_cfl")]
    pub cfl: f64,

    #[serde(default)]
    pub final_time: Option<f64>,

    #[serde(default = "default_n_outputs")]
    pub n_outputs: usize,

    #[serde(default)]
    pub max_steps: Option<usize>,
}

impl DeckConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Initial condition and the resolution token, if any.
    pub fn initial_condition(&self) -> Result<(InitialCondition, Option<usize>)> {
        let mut tokens = self.initial_condition.split_whitespace();
        let name = tokens
            .next()
            .ok_or_else(|| DgError::UnknownInitialCondition(self.initial_condition.clone()))?;
        let ic: InitialCondition = name.parse()?;
        let resolution = tokens
            .next()
            .map(|t| {
                t.parse::<usize>().map_err(|_| {
                    DgError::InvalidConfig(format!("bad resolution '{}' in initial condition", t))
                })
            })
            .transpose()?;
        Ok((ic, resolution))
    }

    /// Element count: explicit field, then the resolution token, then the default.
    pub fn resolved_n_elements(&self) -> Result<usize> {
        let (_, resolution) = self.initial_condition()?;
        Ok(self
            .n_elements
            .or(resolution)
            .unwrap_or_else(default_n_elements))
    }

    /// Check value ranges and cross-field consistency without building.
    pub fn validate(&self) -> Result<()> {
        let (ic, _) = self.initial_condition()?;

        if let Some(system) = &self.system {
            let kind: SystemKind = system.parse()?;
            if kind != ic.system() {
                return Err(DgError::InvalidConfig(format!(
                    "initial condition '{}' is not defined for the {} system",
                    self.initial_condition, system
                )));
            }
        }
        if self.order < 0 {
            return Err(DgError::InvalidOrder(self.order));
        }
        if self.resolved_n_elements()? == 0 {
            return Err(DgError::InvalidMesh("need at least one element".into()));
        }
        if let Some([a, b]) = self.domain
            && !(b > a)
        {
            return Err(DgError::InvalidMesh(format!("empty domain [{}, {}]", a, b)));
        }
        if !(self.cfl > 0.0) {
            return Err(DgError::InvalidConfig(format!("cfl must be positive, got {}", self.cfl)));
        }
        if !(self.gamma > 1.0) {
            return Err(DgError::InvalidConfig(format!("gamma must exceed 1, got {}", self.gamma)));
        }
        if let Some(t) = self.final_time
            && !(t >= 0.0)
        {
            return Err(DgError::InvalidConfig(format!("negative final time {}", t)));
        }
        if let Some(bc) = &self.boundary {
            bc.parse::<BoundaryCondition>()?;
        }
        if let Some(solver) = &self.riemann {
            solver.parse::<RiemannSolver>()?;
        }
        Ok(())
    }

    /// Build a ready-to-run simulation with the initial condition projected.
    pub fn build(&self) -> Result<Simulation> {
        self.validate()?;
        let (ic, _) = self.initial_condition()?;

        let euler = Euler1D::new(self.gamma);
        let system = match ic.system() {
            SystemKind::Advection => PdeSystem::Advection(Advection1D::new(self.velocity)),
            SystemKind::Euler => PdeSystem::Euler(euler),
        };

        let (x_min, x_max) = self
            .domain
            .map(|[a, b]| (a, b))
            .unwrap_or_else(|| ic.default_domain());
        let mesh = Mesh1D::uniform(x_min, x_max, self.resolved_n_elements()?)?;
        let basis = Basis::from_order(self.order)?;

        let riemann = match &self.riemann {
            Some(name) => name.parse()?,
            None => system.default_solver(),
        };
        let boundary = match &self.boundary {
            Some(name) => name.parse()?,
            None => ic.default_boundary(),
        };

        let mut solution = Solution::new(mesh, basis, system, riemann, boundary)?;
        if let Some(spec) = &self.enhancement {
            let enhancer = Enhancer::from_spec_str(solution.basis().order, spec)?;
            solution = solution.with_enhancer(enhancer)?;
        }
        solution.project(|x| ic.evaluate(&euler, x));

        let limiter = Limiter::from_name(&self.limiting, solution.basis());
        let config = SimulationConfig {
            cfl: self.cfl,
            final_time: self.final_time.unwrap_or_else(|| ic.default_final_time()),
            n_outputs: self.n_outputs,
            max_steps: self.max_steps,
        };

        Ok(Simulation::new(solution, limiter).with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::LimiterKind;

    #[test]
    fn test_minimal_deck_defaults() {
        let deck = DeckConfig::from_json_str(r#"{"initial_condition": "sinewave"}"#).unwrap();
        assert!((deck.cfl - 0.5).abs() < 1e-14);
        assert!((deck.gamma - 1.4).abs() < 1e-14);
        assert_eq!(deck.n_outputs, 11);
        assert_eq!(deck.order, 1);
        assert_eq!(deck.limiting, "none");

        let sim = deck.build().unwrap();
        let sol = sim.solution();
        assert_eq!(sol.n_elements(), 32);
        assert_eq!(sol.boundary(), BoundaryCondition::Periodic);
        assert_eq!(sol.riemann_solver(), RiemannSolver::Upwind);
        assert!((sim.config().final_time - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_resolution_token() {
        let deck = DeckConfig::from_json_str(r#"{"initial_condition": "sinewave 64"}"#).unwrap();
        assert_eq!(deck.resolved_n_elements().unwrap(), 64);

        let deck = DeckConfig::from_json_str(
            r#"{"initial_condition": "sinewave 64", "n_elements": 10}"#,
        )
        .unwrap();
        assert_eq!(deck.resolved_n_elements().unwrap(), 10);

        let deck = DeckConfig::from_json_str(r#"{"initial_condition": "sinewave many"}"#).unwrap();
        assert!(matches!(deck.validate(), Err(DgError::InvalidConfig(_))));
    }

    #[test]
    fn test_euler_deck() {
        let deck = DeckConfig::from_json_str(
            r#"{
                "system": "euler",
                "initial_condition": "sodtube",
                "n_elements": 50,
                "order": 2,
                "riemann": "godunov",
                "limiting": "full_biswas",
                "enhancement": "icb 0 1"
            }"#,
        )
        .unwrap();
        let sim = deck.build().unwrap();
        let sol = sim.solution();
        assert_eq!(sol.n_fields(), 3);
        assert_eq!(sol.boundary(), BoundaryCondition::Transmissive);
        assert_eq!(sol.riemann_solver(), RiemannSolver::Godunov);
        assert!(sol.enhancer().is_some());
        assert_eq!(sim.limiter().kind(), LimiterKind::FullBiswas);
        assert!((sim.config().final_time - 0.2).abs() < 1e-14);
        assert!((sol.mesh().x_max - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_rejects_inconsistent_decks() {
        let cases = [
            r#"{"initial_condition": "sodtube", "system": "advection"}"#,
            r#"{"initial_condition": "sinewave", "order": -1}"#,
            r#"{"initial_condition": "sinewave", "order": -3}"#,
            r#"{"initial_condition": "sinewave", "n_elements": 0}"#,
            r#"{"initial_condition": "sinewave", "domain": [1.0, 1.0]}"#,
            r#"{"initial_condition": "sinewave", "cfl": 0.0}"#,
            r#"{"initial_condition": "sinewave", "boundary": "sticky"}"#,
            r#"{"initial_condition": "sinewave", "riemann": "hllc"}"#,
            r#"{"initial_condition": "vortex"}"#,
        ];
        for json in cases {
            let deck = DeckConfig::from_json_str(json).unwrap();
            assert!(deck.build().is_err(), "accepted {}", json);
        }
    }

    #[test]
    fn test_high_order_accepted() {
        let deck = DeckConfig::from_json_str(
            r#"{"initial_condition": "sinewave 4", "order": 18, "enhancement": "icb 0 1"}"#,
        )
        .unwrap();
        deck.validate().unwrap();
        let sim = deck.build().unwrap();
        assert_eq!(sim.solution().basis().order, 18);
        assert_eq!(sim.solution().enhancer().unwrap().order, 20);
    }

    #[test]
    fn test_upwind_rejected_for_euler() {
        let deck = DeckConfig::from_json_str(
            r#"{"initial_condition": "sodtube", "riemann": "upwind"}"#,
        )
        .unwrap();
        assert!(matches!(
            deck.build(),
            Err(DgError::UnsupportedRiemannSolver { .. })
        ));
    }

    #[test]
    fn test_enhancement_mode_above_order_rejected() {
        let deck = DeckConfig::from_json_str(
            r#"{"initial_condition": "sinewave", "order": 1, "enhancement": "icb 0 2"}"#,
        )
        .unwrap();
        assert!(matches!(deck.build(), Err(DgError::InvalidEnhancement(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            DeckConfig::from_json_str(r#"{"n_elements": 10}"#),
            Err(DgError::Parse(_))
        ));
        assert!(matches!(
            DeckConfig::from_path("/nonexistent/deck.json"),
            Err(DgError::Io(_))
        ));
    }
}
