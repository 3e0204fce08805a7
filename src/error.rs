//! Error types for solver construction and execution.

use thiserror::Error;

/// Errors raised while configuring or running the DG solver.
///
/// Floating-point degeneracy inside the flux physics is not caught here:
/// vanishing densities or pressures propagate as NaN/Inf and are only
/// reported by the simulation runner through [`DgError::NonFinite`].
#[derive(Error, Debug)]
pub enum DgError {
    /// Negative polynomial order.
    #[error("Invalid polynomial order {0}: must be non-negative")]
    InvalidOrder(i64),

    /// Riemann solver name not recognised.
    #[error("Unknown Riemann solver: {0}")]
    UnknownRiemannSolver(String),

    /// Riemann solver not defined for the selected physics.
    #[error("Riemann solver '{solver}' is not supported for {system}")]
    UnsupportedRiemannSolver { solver: String, system: String },

    /// Malformed enhancement specification.
    #[error("Invalid enhancement: {0}")]
    InvalidEnhancement(String),

    /// Enhancement system could not be inverted.
    #[error("Singular system: {0}")]
    SingularSystem(String),

    /// PDE system name not recognised.
    #[error("Unknown PDE system: {0}")]
    UnknownSystem(String),

    /// Boundary condition name not recognised.
    #[error("Unknown boundary condition: {0}")]
    UnknownBoundaryCondition(String),

    /// Initial condition name not recognised.
    #[error("Unknown initial condition: {0}")]
    UnknownInitialCondition(String),

    /// Mesh parameters are unusable.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Buffer or state shape does not match the expected layout.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Configuration value out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// NaN or Inf appeared in the modal state.
    #[error("Non-finite solution detected at t = {time}")]
    NonFinite { time: f64 },

    /// Reading an input deck failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input deck is not valid JSON for the expected schema.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DgError {
    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DgError>;
