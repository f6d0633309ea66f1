//! fp-factors: emission factor table file format, validation and lookup.

pub mod schema;
pub mod table;
pub mod validate;

pub use schema::*;
pub use table::{CountryFactors, FactorTable};
pub use validate::{ValidationError, validate_table};

use std::path::Path;

pub type FactorsResult<T> = Result<T, FactorsError>;

#[derive(thiserror::Error, Debug)]
pub enum FactorsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> FactorsResult<FactorTableDef> {
    let content = std::fs::read_to_string(path)?;
    let def: FactorTableDef = serde_yaml::from_str(&content)?;
    validate_table(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &Path, def: &FactorTableDef) -> FactorsResult<()> {
    validate_table(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> FactorsResult<FactorTableDef> {
    let content = std::fs::read_to_string(path)?;
    let def: FactorTableDef = serde_json::from_str(&content)?;
    validate_table(&def)?;
    Ok(def)
}

pub fn save_json(path: &Path, def: &FactorTableDef) -> FactorsResult<()> {
    validate_table(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a table, picking the format from the file extension.
pub fn load_any(path: &Path) -> FactorsResult<FactorTable> {
    let def = match extension(path).as_str() {
        "yaml" | "yml" => load_yaml(path)?,
        "json" => load_json(path)?,
        other => return Err(FactorsError::UnsupportedFormat(other.to_string())),
    };
    let table = FactorTable::from_def(&def)?;
    tracing::info!(
        path = %path.display(),
        countries = table.len(),
        "loaded factor table"
    );
    Ok(table)
}

/// Save a table, picking the format from the file extension.
pub fn save_any(path: &Path, def: &FactorTableDef) -> FactorsResult<()> {
    match extension(path).as_str() {
        "yaml" | "yml" => save_yaml(path, def),
        "json" => save_json(path, def),
        other => Err(FactorsError::UnsupportedFormat(other.to_string())),
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}
