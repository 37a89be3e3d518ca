/*!
* # DALEC-EnKF - ensemble tooling for the DALEC carbon cycle model.
* Williams et al. (2005) describe a method for assimilating eddy-flux and stock observations
* into DALEC, a box model of carbon cycling in evergreen forests, using the ensemble Kalman
* filter of Evensen (2003).  The model tracks five carbon pools (foliage, wood, fine roots,
* litter and soil organic matter) alongside the daily fluxes that move carbon between them,
* sixteen state variables in all.  The filter represents uncertainty in that state with an
* ensemble of perturbed copies, and the quality of the whole assimilation rests on how the
* ensemble is seeded.
*
* This crate builds the filter setup for the Metolius young ponderosa pine site in central
* Oregon: the perturbed initial ensemble, the error covariance basis, and the Evensen (2003)
* scale factor for time-correlated stochastic model error, together with the reference
* parameter sets and the daily meteorological drivers the model consumes.  Forecasting the
* members through DALEC and folding in observations belong to the cycle driver built on top
* of these pieces.
*
*  ## Quick Start
*
* To use dalec-enkf, add it to your `Cargo.toml`
* ```toml
* [dependencies]
* dalec-enkf = "^0.1.0"
* ```
*
*  - Load the crate prelude in the preamble of your `main.rs`.
*  - Read drivers, then draw the starting matrices from a seeded generator:
* ```rust
* use dalec_enkf::prelude::*;
* use rand::rngs::StdRng;
* use rand::SeedableRng;
*
* fn main() -> Result<(), EnkfError> {
*     // daily weather drivers for the Metolius site
*     let mets = Met::read("data/dalec_drivers.OREGON.no_obs.csv")?;
*     println!("{} days of drivers", mets.len());
*
*     // reference parameters and filter dimensions
*     let mp = ModelParameters::oregon();
*     let config = Config::new();
*
*     // one generator seeds every draw, so runs repeat exactly
*     let mut rng = StdRng::seed_from_u64(config.seed);
*     let a = initialise_ensemble(&mp, &config, &mut rng)?;
*     let q = initialise_error_covariance(&config, &mut rng);
*     let rho = stochastic_model_error(1.0, 1.0, 1.0)?;
*
*     println!("A is {:?}, Q is {:?}, rho = {}", a.dim(), q.dim(), rho);
*     Ok(())
* }
* ```
*
* Adjust filter dimensions from the defaults using a builder pattern.
*
* ```rust
* use dalec_enkf::prelude::*;
*
* // build step by step
* let mut config = Config::new();
* config = config.members(50);
* config = config.seed(42);
*
* // or inline, same result
* let config_b = Config::new().members(50).seed(42);
*
* assert_eq!(config, config_b);
* ```
*/

#![warn(missing_docs)]
pub mod config;
pub mod ensemble;
pub mod errors;
pub mod met;
pub mod params;
pub mod plot;
pub mod utils;

/// Re-exports of everything a filter run touches.
pub mod prelude {
    pub use crate::config::{Config, StateVariable};
    pub use crate::ensemble::{
        initialise_ensemble, initialise_error_covariance, spread_summary,
        stochastic_model_error, SpreadSummary,
    };
    pub use crate::errors::EnkfError;
    pub use crate::met::Met;
    pub use crate::params::{AcmParameters, ModelParameters};
    pub use crate::plot;
    pub use crate::utils;
}
