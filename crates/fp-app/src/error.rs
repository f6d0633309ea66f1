//! Error types for the fp-app service layer.

use std::path::PathBuf;

use crate::input_service::InputError;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI and GUI one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Factor table error: {0}")]
    Factors(String),

    #[error("Failed to read factor file: {path}")]
    FactorFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Calculation failed: {0}")]
    Calc(#[from] fp_calc::CalcError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fp-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<fp_factors::FactorsError> for AppError {
    fn from(err: fp_factors::FactorsError) -> Self {
        AppError::Factors(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}
