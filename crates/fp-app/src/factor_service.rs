//! Factor table loading and introspection.

use std::path::Path;

use fp_calc::Category;
use fp_factors::{CountryFactors, FactorTable};

use crate::error::{AppError, AppResult};

/// Summary of one table entry for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySummary {
    pub name: String,
    pub factors: CountryFactors,
    pub national_average_tonnes: Option<f64>,
}

impl CountrySummary {
    /// One line per category, e.g. `Transportation: 0.14 kg CO2/km`.
    pub fn factor_lines(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .map(|c| {
                format!(
                    "{}: {} kg CO2/{}",
                    c.label(),
                    c.factor(&self.factors),
                    c.activity_unit()
                )
            })
            .collect()
    }
}

/// Load the table from `path`, or fall back to the built-in reference table.
///
/// The format follows the extension (`.yaml`, `.yml`, `.json`).
pub fn load_factor_table(path: Option<&Path>) -> AppResult<FactorTable> {
    let Some(path) = path else {
        tracing::debug!("using built-in reference factor table");
        return Ok(FactorTable::reference());
    };

    std::fs::metadata(path).map_err(|e| AppError::FactorFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(fp_factors::load_any(path)?)
}

/// Save `table` to `path`; the format follows the extension.
pub fn write_factor_table(path: &Path, table: &FactorTable) -> AppResult<()> {
    fp_factors::save_any(path, &table.to_def())?;
    tracing::info!(path = %path.display(), countries = table.len(), "wrote factor table");
    Ok(())
}

/// Write the built-in table to `path`, e.g. as a starting point for edits.
pub fn write_reference_table(path: &Path) -> AppResult<()> {
    write_factor_table(path, &FactorTable::reference())
}

/// List every country in the table with its factors.
pub fn list_countries(table: &FactorTable) -> Vec<CountrySummary> {
    table
        .countries()
        .filter_map(|name| {
            let f = table.get(name)?;
            Some(CountrySummary {
                name: name.to_string(),
                factors: *f,
                national_average_tonnes: table.national_average(name).map(|a| a.tonnes_per_year),
            })
        })
        .collect()
}
