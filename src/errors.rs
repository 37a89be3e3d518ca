//! Error handling for every fallible operation in the crate.

/// Custom error type for the dalec-enkf crate.
///
/// Every failure aborts the run: this is a one-shot offline analysis tool,
/// so there are no retry or partial-recovery semantics to encode.
#[derive(Debug)]
pub enum EnkfError {
    /// The run configuration failed its startup checks.
    Config(String),
    /// A formula left its real domain and would otherwise yield NaN.
    NumericDomain(String),
    /// Could not build a normal distribution from the requested spread.
    Normal(rand_distr::NormalError),
    /// Error type from the csv crate.
    Csv(csv::Error),
    /// Error type from std::io.
    Io(std::io::Error),
}

impl std::error::Error for EnkfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnkfError::Config(_) => None,
            EnkfError::NumericDomain(_) => None,
            EnkfError::Normal(err) => Some(err),
            EnkfError::Csv(err) => Some(err),
            EnkfError::Io(err) => Some(err),
        }
    }
}

impl std::fmt::Display for EnkfError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EnkfError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            EnkfError::NumericDomain(msg) => write!(f, "numeric domain error: {}", msg),
            EnkfError::Normal(err) => {
                write!(f, "could not sample perturbations: {}", err)
            }
            EnkfError::Csv(err) => {
                write!(f, "could not serialize/deserialize csv file: {}", err)
            }
            EnkfError::Io(err) => write!(f, "could not read file from path provided: {}", err),
        }
    }
}

impl From<rand_distr::NormalError> for EnkfError {
    fn from(err: rand_distr::NormalError) -> Self {
        EnkfError::Normal(err)
    }
}

impl From<csv::Error> for EnkfError {
    fn from(err: csv::Error) -> Self {
        EnkfError::Csv(err)
    }
}

impl From<std::io::Error> for EnkfError {
    fn from(err: std::io::Error) -> Self {
        EnkfError::Io(err)
    }
}
