//! Ensemble initialisation for the DALEC state vector.
//!
//! The filter represents the state distribution by an `ndims` × `nrens`
//! matrix whose columns are ensemble members. This module builds everything
//! the first forecast needs: the perturbed state matrix `A`, the diffuse
//! error basis `Q`, and the Evensen (2003) scale factor `rho` for
//! time-correlated stochastic model error. Advancing the members through
//! DALEC and assimilating observations are the cycle driver's job and
//! happen downstream of these routines.

use crate::config::{Config, StateVariable};
use crate::errors::EnkfError;
use crate::params::ModelParameters;
use crate::utils;
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};
use rayon::prelude::*;
use serde::Serialize;

/// Location and spread of one row of an ensemble matrix.
#[derive(Debug, Clone, Serialize)]
pub struct SpreadSummary {
    /// Short name of the state variable.
    pub variable: &'static str,
    /// Ensemble mean of the row.
    pub mean: f64,
    /// Ensemble standard deviation of the row.
    pub sd: f64,
}

/// Draw the initial ensemble state matrix.
///
/// Every entry is an independent draw from a normal distribution centred on
/// zero with a standard deviation of 10% of the component's reference scale
/// (see [`ModelParameters::spread_scale`]), so each member starts as a
/// perturbation sized to the physical magnitude of its components. The
/// returned matrix is fully populated; no prior values are read.
///
/// Each member samples from its own substream seeded off `rng`, which keeps
/// the parallel fill reproducible: a fixed [`Config::seed`] yields the same
/// matrix on every run regardless of thread count.
///
/// # Examples
///
/// ```
/// use dalec_enkf::prelude::*;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mp = ModelParameters::oregon();
/// let config = Config::new().members(10).seed(7);
/// let mut rng = StdRng::seed_from_u64(config.seed);
/// let a = initialise_ensemble(&mp, &config, &mut rng).unwrap();
/// assert_eq!(a.dim(), (16, 10));
/// ```
pub fn initialise_ensemble<R>(
    mp: &ModelParameters,
    c: &Config,
    rng: &mut R,
) -> Result<Array2<f64>, EnkfError>
where
    R: Rng + ?Sized,
{
    c.validate()?;

    let mut spreads = Vec::with_capacity(StateVariable::ALL.len());
    for var in StateVariable::ALL.iter() {
        spreads.push(Normal::new(0.0, 0.1 * mp.spread_scale(*var))?);
    }

    let seeds = member_seeds(c.nrens, rng);
    let mut a: Array2<f64> = Array2::zeros((c.ndims, c.nrens));
    a.axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .for_each(|(j, mut member)| {
            let mut draw = StdRng::seed_from_u64(seeds[j]);
            for (var, spread) in StateVariable::ALL.iter().zip(&spreads) {
                member[var.index()] = spread.sample(&mut draw);
            }
        });

    Ok(a)
}

/// Draw the ensemble error-covariance basis.
///
/// Returns an `ndims` × `nrens` matrix of independent standard normal draws:
/// mean zero, variance one, no correlation between entries and no physical
/// scaling. Projecting this basis into state units and imposing correlation
/// structure is left to the forecast step that consumes it.
pub fn initialise_error_covariance<R>(c: &Config, rng: &mut R) -> Array2<f64>
where
    R: Rng + ?Sized,
{
    let seeds = member_seeds(c.nrens, rng);
    let mut q: Array2<f64> = Array2::zeros((c.ndims, c.nrens));
    q.axis_iter_mut(Axis(1))
        .into_par_iter()
        .enumerate()
        .for_each(|(j, mut member)| {
            let mut draw = StdRng::seed_from_u64(seeds[j]);
            for entry in member.iter_mut() {
                *entry = StandardNormal.sample(&mut draw);
            }
        });
    q
}

/// Scale factor for time-correlated stochastic model error.
///
/// Implements eq. 42 of Evensen (2003). An AR(1) forcing sequence with
/// decorrelation length `tau`, advanced `n` steps per unit time with step
/// length `delta_t`, must be scaled by the returned `rho` so that the
/// ensemble variance growth per unit time is independent of `delta_t` and
/// `tau`, provided the dynamical model is linear.
///
/// With one unit-length step per unit time the forcing decorrelates
/// completely between steps and the factor is exactly one:
///
/// ```
/// use dalec_enkf::ensemble::stochastic_model_error;
///
/// let rho = stochastic_model_error(1.0, 1.0, 1.0).unwrap();
/// assert_eq!(rho, 1.0);
/// ```
///
/// Parameterisations that push the variance-growth denominator to zero or
/// below have no real solution and fail with
/// [`EnkfError::NumericDomain`](crate::errors::EnkfError) rather than
/// returning NaN.
pub fn stochastic_model_error(delta_t: f64, tau: f64, n: f64) -> Result<f64, EnkfError> {
    // eqn 32: alpha relates the forcing's step-to-step memory to the
    // time step and the decorrelation length.
    let alpha = 1.0 - delta_t / tau;

    let num = (1.0 - alpha) * (1.0 - alpha);
    let den = n - 2.0 * alpha * n * alpha * alpha + (2.0 * alpha).powf(n + 1.0);
    if !den.is_finite() || den <= 0.0 {
        return Err(EnkfError::NumericDomain(format!(
            "variance growth denominator is {} for delta_t = {}, tau = {}, n = {}",
            den, delta_t, tau, n
        )));
    }

    let radicand = num / den / delta_t;
    if !radicand.is_finite() || radicand < 0.0 {
        return Err(EnkfError::NumericDomain(format!(
            "squared model error factor is {} for delta_t = {}, tau = {}, n = {}",
            radicand, delta_t, tau, n
        )));
    }

    Ok(radicand.sqrt())
}

/// Summarise an ensemble matrix row by row.
///
/// Returns one [`SpreadSummary`] per state variable, in row order. Panics if
/// `a` has fewer rows than the state vector.
pub fn spread_summary(a: &Array2<f64>) -> Vec<SpreadSummary> {
    StateVariable::ALL
        .iter()
        .map(|var| {
            let row = a.row(var.index()).to_vec();
            SpreadSummary {
                variable: var.name(),
                mean: utils::mean(&row),
                sd: utils::std_dev(&row),
            }
        })
        .collect()
}

// One substream seed per member, drawn from the caller's handle so that
// consecutive initialiser calls never share a stream.
fn member_seeds<R>(nrens: usize, rng: &mut R) -> Vec<u64>
where
    R: Rng + ?Sized,
{
    (0..nrens).map(|_| rng.gen()).collect()
}
