//! Calculator errors.

use thiserror::Error;

/// Result type for emission calculations.
pub type CalcResult<T> = Result<T, CalcError>;

/// The calculator's only failure: a country the factor table does not know.
///
/// Callers are expected to restrict country selection to table keys, so this
/// signals a configuration mistake rather than bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Unknown country: {country}")]
    UnknownCountry { country: String },
}
