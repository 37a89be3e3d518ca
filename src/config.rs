//! Run configuration and the layout of the DALEC state vector.

use crate::errors::EnkfError;
use serde::{Deserialize, Serialize};

/// The sixteen components of the augmented DALEC state vector, in storage
/// order.
///
/// Each variant names one row of the ensemble matrix: the five carbon pools,
/// the daily fluxes between them, and gross primary production. Indexing the
/// state through this enum keeps row offsets a closed set, with no way to ask
/// for a seventeenth component or to typo an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateVariable {
    /// Autotrophic respiration.
    Ra = 0,
    /// Allocation of carbon to foliage.
    Af = 1,
    /// Allocation of carbon to wood.
    Aw = 2,
    /// Allocation of carbon to fine roots.
    Ar = 3,
    /// Litterfall from foliage.
    Lf = 4,
    /// Litterfall from wood.
    Lw = 5,
    /// Litterfall from fine roots.
    Lr = 6,
    /// Foliar carbon pool.
    Cf = 7,
    /// Woody carbon pool, stems plus coarse roots.
    Cw = 8,
    /// Fine-root carbon pool.
    Cr = 9,
    /// Heterotrophic respiration from litter.
    Rh1 = 10,
    /// Heterotrophic respiration from soil organic matter.
    Rh2 = 11,
    /// Decomposition of litter into soil organic matter.
    D = 12,
    /// Litter carbon pool.
    Cl = 13,
    /// Soil organic matter carbon pool.
    Cs = 14,
    /// Gross primary production.
    Gpp = 15,
}

impl StateVariable {
    /// Every state variable, in row order.
    pub const ALL: [StateVariable; 16] = [
        StateVariable::Ra,
        StateVariable::Af,
        StateVariable::Aw,
        StateVariable::Ar,
        StateVariable::Lf,
        StateVariable::Lw,
        StateVariable::Lr,
        StateVariable::Cf,
        StateVariable::Cw,
        StateVariable::Cr,
        StateVariable::Rh1,
        StateVariable::Rh2,
        StateVariable::D,
        StateVariable::Cl,
        StateVariable::Cs,
        StateVariable::Gpp,
    ];

    /// Row offset of this component in the state vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label used in reports and plots.
    pub fn name(self) -> &'static str {
        match self {
            StateVariable::Ra => "ra",
            StateVariable::Af => "af",
            StateVariable::Aw => "aw",
            StateVariable::Ar => "ar",
            StateVariable::Lf => "lf",
            StateVariable::Lw => "lw",
            StateVariable::Lr => "lr",
            StateVariable::Cf => "cf",
            StateVariable::Cw => "cw",
            StateVariable::Cr => "cr",
            StateVariable::Rh1 => "rh1",
            StateVariable::Rh2 => "rh2",
            StateVariable::D => "d",
            StateVariable::Cl => "cl",
            StateVariable::Cs => "cs",
            StateVariable::Gpp => "gpp",
        }
    }
}

impl std::fmt::Display for StateVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Dimensions and seeding for one filter run.
///
/// Build a configuration step by step from the defaults, which reproduce the
/// Oregon reference run: 200 members over the 16-component state vector.
///
/// # Examples
///
/// ```
/// use dalec_enkf::prelude::*;
///
/// let config = Config::new().members(500).seed(1004);
/// assert_eq!(config.nrens, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of ensemble members, the columns of the state matrix.
    pub nrens: usize,
    /// Dimension of the state vector, the rows of the state matrix.
    pub ndims: usize,
    /// Upper bound on the number of model parameters carried in the state.
    pub max_params: usize,
    /// Seed for every pseudorandom stream in the run.
    pub seed: u64,
}

impl Config {
    /// A configuration with the reference run's dimensions.
    pub fn new() -> Self {
        Config {
            nrens: 200,
            ndims: StateVariable::ALL.len(),
            max_params: 15,
            seed: 0,
        }
    }

    /// Set the ensemble size.
    pub fn members(mut self, nrens: usize) -> Self {
        self.nrens = nrens;
        self
    }

    /// Set the seed for the run's pseudorandom streams.
    ///
    /// Two runs with the same seed and dimensions draw identical ensembles.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration before any sampling runs.
    ///
    /// Verifies that the state-variable offsets cover `0..ndims` exactly
    /// once each, and that the ensemble is large enough to carry any spread
    /// at all. A failure here is fatal for the run.
    pub fn validate(&self) -> Result<(), EnkfError> {
        if self.ndims != StateVariable::ALL.len() {
            return Err(EnkfError::Config(format!(
                "state vector has {} components but ndims is {}",
                StateVariable::ALL.len(),
                self.ndims
            )));
        }
        let mut seen = vec![false; self.ndims];
        for var in StateVariable::ALL.iter() {
            let row = var.index();
            if row >= self.ndims {
                return Err(EnkfError::Config(format!(
                    "{} maps to row {}, outside a state vector of {} rows",
                    var, row, self.ndims
                )));
            }
            if seen[row] {
                return Err(EnkfError::Config(format!(
                    "{} maps to row {}, which is already taken",
                    var, row
                )));
            }
            seen[row] = true;
        }
        if self.nrens < 2 {
            return Err(EnkfError::Config(format!(
                "an ensemble needs at least two members, got {}",
                self.nrens
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_a_bijection_onto_the_state_vector() {
        let mut rows: Vec<usize> = StateVariable::ALL.iter().map(|v| v.index()).collect();
        rows.sort_unstable();
        let expected: Vec<usize> = (0..StateVariable::ALL.len()).collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn default_config_matches_the_reference_run() {
        let config = Config::new();
        assert_eq!(config.nrens, 200);
        assert_eq!(config.ndims, 16);
        assert_eq!(config.max_params, 15);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn mismatched_ndims_is_fatal() {
        let mut config = Config::new();
        config.ndims = 12;
        match config.validate() {
            Err(EnkfError::Config(_)) => {}
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_ensemble_is_fatal() {
        let config = Config::new().members(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn labels_are_unique() {
        let mut names: Vec<&str> = StateVariable::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StateVariable::ALL.len());
    }
}
