//! Small numeric and csv helpers shared by the reports and the tests.

use crate::errors::EnkfError;
use serde::Serialize;

/// Calculate the mean of a slice of f64 values.
///  - `numbers` is a reference to a slice of f64 values.
///  - Returns the mean of `numbers`.
///
/// # Examples
///
/// ```rust
/// let numbers = vec![1.0, 1.5, 2.0, 2.5, 3.0];
/// let mn = dalec_enkf::utils::mean(&numbers);
/// assert_eq!(2.0, mn);
/// ```
pub fn mean(numbers: &[f64]) -> f64 {
    let sum: f64 = numbers.iter().sum();

    sum / numbers.len() as f64
}

/// Calculate the sample standard deviation of a slice of f64 values.
///  - `numbers` is a reference to a slice of f64 values; fewer than two
///    values yield NaN.
///  - Returns the standard deviation of `numbers` about their mean.
///
/// # Examples
///
/// ```rust
/// let numbers = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = dalec_enkf::utils::std_dev(&numbers);
/// assert!((sd - 2.5_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn std_dev(numbers: &[f64]) -> f64 {
    let mn = mean(numbers);
    let sum_sq: f64 = numbers.iter().map(|x| (x - mn) * (x - mn)).sum();

    (sum_sq / (numbers.len() as f64 - 1.0)).sqrt()
}

/// Write serializable records to a csv file.
pub fn record<T: Serialize>(rec: &[T], path: &str) -> Result<(), EnkfError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for i in rec {
        wtr.serialize(i)?;
    }
    wtr.flush()?;
    Ok(())
}
