//! Daily meteorological forcing for the DALEC forward model.

use crate::errors::EnkfError;
use serde::Deserialize;
use std::fs::File;

/// One day of meteorological forcing.
///
/// These are the drivers the forecast step feeds to ACM and DALEC. Columns
/// are read positionally, in field order, from a headed csv file: day of
/// year, minimum and maximum air temperature (deg C), irradiance
/// (MJ m-2 d-1), atmospheric CO2 (ppm) and foliar nitrogen.
#[derive(Debug, Deserialize)]
pub struct Met {
    /// Day of year.
    pub doy: f64,
    /// Daily minimum air temperature.
    pub mint: f64,
    /// Daily maximum air temperature.
    pub maxt: f64,
    /// Daily total irradiance.
    pub rad: f64,
    /// Atmospheric CO2 concentration.
    pub ca: f64,
    /// Foliar nitrogen.
    pub nit: f64,
}

impl Met {
    /// Read a driver time series from a csv file, one row per day.
    ///
    /// A missing file or a malformed row is fatal for the run; there is no
    /// sensible way to forecast across a gap in the forcing.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dalec_enkf::prelude::*;
    ///
    /// fn main() -> Result<(), EnkfError> {
    ///     let met = Met::read("data/dalec_drivers.OREGON.no_obs.csv")?;
    ///     println!("{} days of forcing", met.len());
    ///     Ok(())
    /// }
    /// ```
    pub fn read(path: &str) -> Result<Vec<Met>, EnkfError> {
        let mut record = Vec::new();
        let file = File::open(path)?;
        let mut rdr = csv::Reader::from_reader(file);
        for result in rdr.records() {
            let row = result?;
            let row: Met = row.deserialize(None)?;
            record.push(row);
        }
        Ok(record)
    }
}
