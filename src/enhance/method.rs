//! Parsing of enhancement specifications such as `"icb 0 1"`.

use crate::error::{DgError, Result};
use std::fmt;
use std::str::FromStr;

/// Reconstruction policy used to build the enhanced face values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnhancementMethod {
    /// Inner-product recovery: the enhanced polynomial reproduces the own
    /// element exactly and the selected modes of the neighbour in the
    /// L² sense.
    Icb,
}

impl EnhancementMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Icb => "icb",
        }
    }
}

impl FromStr for EnhancementMethod {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "icb" => Ok(Self::Icb),
            other => Err(DgError::InvalidEnhancement(format!(
                "unknown enhancement policy '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for EnhancementMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A policy tag plus the neighbour modes folded into the reconstruction.
///
/// Modes are kept sorted and unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnhancementSpec {
    pub method: EnhancementMethod,
    pub modes: Vec<usize>,
}

impl EnhancementSpec {
    pub fn new(method: EnhancementMethod, mut modes: Vec<usize>) -> Result<Self> {
        modes.sort_unstable();
        if let Some(pair) = modes.windows(2).find(|w| w[0] == w[1]) {
            return Err(DgError::InvalidEnhancement(format!(
                "mode {} selected more than once",
                pair[0]
            )));
        }
        Ok(Self { method, modes })
    }

    /// Reject modes the solution does not carry.
    pub fn validate(&self, solution_order: usize) -> Result<()> {
        match self.modes.last() {
            Some(&m) if m > solution_order => Err(DgError::InvalidEnhancement(format!(
                "mode {} exceeds solution order {}",
                m, solution_order
            ))),
            _ => Ok(()),
        }
    }
}

impl FromStr for EnhancementSpec {
    type Err = DgError;

    /// Whitespace separated: policy tag followed by zero or more mode indices.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let method = tokens
            .next()
            .ok_or_else(|| DgError::InvalidEnhancement("empty specification".into()))?
            .parse()?;
        let modes = tokens
            .map(|t| {
                t.parse::<usize>().map_err(|_| {
                    DgError::InvalidEnhancement(format!("'{}' is not a mode index", t))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(method, modes)
    }
}

impl fmt::Display for EnhancementSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.method)?;
        for m in &self.modes {
            write!(f, " {}", m)?;
        }
        Ok(())
    }
}
