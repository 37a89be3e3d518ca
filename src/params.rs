//! Fixed parameterisation of DALEC and its photosynthesis sub-model.
//!
//! The values here are the calibrated constants for a ponderosa pine site in
//! central Oregon (Williams et al. 2005). They are plain data: nothing in
//! this module computes, and nothing downstream mutates them.

use crate::config::StateVariable;
use serde::{Deserialize, Serialize};

/// Rate and allocation coefficients of the DALEC carbon model, with the
/// initial size of each carbon pool.
///
/// Pools are in g C m-2, rates in day-1, allocation terms as fractions.
/// The coefficients keep their conventional `t1..t9` names from the model
/// literature so that runs stay comparable with published parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Decomposition rate of litter into soil organic matter.
    pub t1: f64,
    /// Fraction of GPP respired autotrophically.
    pub t2: f64,
    /// Fraction of NPP allocated to foliage.
    pub t3: f64,
    /// Fraction of NPP allocated to fine roots.
    pub t4: f64,
    /// Turnover rate of foliage.
    pub t5: f64,
    /// Turnover rate of wood.
    pub t6: f64,
    /// Turnover rate of fine roots.
    pub t7: f64,
    /// Mineralisation rate of litter.
    pub t8: f64,
    /// Mineralisation rate of soil organic matter.
    pub t9: f64,
    /// Initial foliar carbon pool.
    pub cf0: f64,
    /// Initial woody carbon pool.
    pub cw0: f64,
    /// Initial fine-root carbon pool.
    pub cr0: f64,
    /// Initial litter carbon pool.
    pub cl0: f64,
    /// Initial soil organic matter carbon pool.
    pub cs0: f64,
}

impl ModelParameters {
    /// Calibrated values for the Oregon ponderosa pine site.
    pub fn oregon() -> Self {
        ModelParameters {
            t1: 4.41e-6,
            t2: 0.473267,
            t3: 0.314951,
            t4: 0.434401,
            t5: 0.00266518,
            t6: 2.06e-6,
            t7: 2.48e-3,
            t8: 2.28e-2,
            t9: 2.65e-6,
            cf0: 57.7049,
            cw0: 769.863,
            cr0: 101.955,
            cl0: 40.4494,
            cs0: 9896.7,
        }
    }

    /// Reference scale of one state-vector component.
    ///
    /// Initial ensemble spread is sized relative to the expected magnitude
    /// of each component, so that relative uncertainty stays comparable
    /// between fluxes of order one and pools of order thousands: order-one
    /// for respiration and GPP, 0.3 for the daily flux and allocation
    /// terms, and the initial pool value for the five pools.
    pub fn spread_scale(&self, var: StateVariable) -> f64 {
        match var {
            StateVariable::Ra | StateVariable::Gpp => 1.0,
            StateVariable::Af
            | StateVariable::Aw
            | StateVariable::Ar
            | StateVariable::Lf
            | StateVariable::Lw
            | StateVariable::Lr
            | StateVariable::Rh1
            | StateVariable::Rh2
            | StateVariable::D => 0.3,
            StateVariable::Cf => self.cf0,
            StateVariable::Cw => self.cw0,
            StateVariable::Cr => self.cr0,
            StateVariable::Cl => self.cl0,
            StateVariable::Cs => self.cs0,
        }
    }
}

/// Coefficients of the aggregated canopy model (ACM), plus site constants.
///
/// ACM supplies gross primary production to DALEC from daily weather, leaf
/// area and foliar nitrogen. The ten empirical constants are conventionally
/// numbered `a_1..a_10`; they are stored here as `a0..a9`. Only the forecast
/// step evaluates them, so the initialisation in this crate carries them
/// along untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcmParameters {
    /// ACM empirical constant `a_1`.
    pub a0: f64,
    /// ACM empirical constant `a_2`.
    pub a1: f64,
    /// ACM empirical constant `a_3`.
    pub a2: f64,
    /// ACM empirical constant `a_4`.
    pub a3: f64,
    /// ACM empirical constant `a_5`.
    pub a4: f64,
    /// ACM empirical constant `a_6`.
    pub a5: f64,
    /// ACM empirical constant `a_7`.
    pub a6: f64,
    /// ACM empirical constant `a_8`.
    pub a7: f64,
    /// ACM empirical constant `a_9`.
    pub a8: f64,
    /// ACM empirical constant `a_10`.
    pub a9: f64,
    /// Site latitude in degrees north.
    pub lat: f64,
    /// Specific leaf area, converting foliar carbon to leaf area.
    pub sla: f64,
}

impl AcmParameters {
    /// ACM parameterisation and site constants for the Oregon site.
    pub fn oregon() -> Self {
        AcmParameters {
            a0: 2.155,
            a1: 0.0142,
            a2: 217.9,
            a3: 0.980,
            a4: 0.155,
            a5: 2.653,
            a6: 4.309,
            a7: 0.060,
            a8: 1.062,
            a9: 0.0006,
            lat: 44.4,
            sla: 111.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oregon_literals_survive() {
        let mp = ModelParameters::oregon();
        assert_eq!(mp.t1, 4.41e-6);
        assert_eq!(mp.t5, 0.00266518);
        assert_eq!(mp.cf0, 57.7049);
        assert_eq!(mp.cs0, 9896.7);

        let acm = AcmParameters::oregon();
        assert_eq!(acm.a0, 2.155);
        assert_eq!(acm.a9, 0.0006);
        assert_eq!(acm.lat, 44.4);
        assert_eq!(acm.sla, 111.0);
    }

    #[test]
    fn spread_scales_follow_component_magnitude() {
        let mp = ModelParameters::oregon();
        assert_eq!(mp.spread_scale(StateVariable::Ra), 1.0);
        assert_eq!(mp.spread_scale(StateVariable::Gpp), 1.0);
        assert_eq!(mp.spread_scale(StateVariable::Af), 0.3);
        assert_eq!(mp.spread_scale(StateVariable::D), 0.3);
        assert_eq!(mp.spread_scale(StateVariable::Cf), mp.cf0);
        assert_eq!(mp.spread_scale(StateVariable::Cs), mp.cs0);
    }

    #[test]
    fn every_component_has_a_positive_scale() {
        let mp = ModelParameters::oregon();
        for var in StateVariable::ALL.iter() {
            assert!(mp.spread_scale(*var) > 0.0, "{} has no scale", var);
        }
    }
}
