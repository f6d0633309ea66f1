//! Factor table validation logic.

use crate::schema::{CountryDef, FactorTableDef};
use fp_core::CoreError;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate country: {name}")]
    DuplicateCountry { name: String },

    #[error("Factor table has no countries")]
    Empty,

    #[error("Country name must not be blank")]
    BlankName,

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_table(table: &FactorTableDef) -> Result<(), ValidationError> {
    if table.version > crate::schema::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: table.version,
        });
    }

    if table.countries.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut names = HashSet::new();
    for country in &table.countries {
        if country.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if !names.insert(country.name.as_str()) {
            return Err(ValidationError::DuplicateCountry {
                name: country.name.clone(),
            });
        }
        validate_country(country)?;
    }

    Ok(())
}

fn validate_country(country: &CountryDef) -> Result<(), ValidationError> {
    let f = &country.factors;
    let coefficients = [
        ("transport_per_km", f.transport_per_km),
        ("electricity_per_kwh", f.electricity_per_kwh),
        ("diet_per_meal", f.diet_per_meal),
        ("waste_per_kg", f.waste_per_kg),
    ];
    for (field, value) in coefficients {
        check_non_negative(&country.name, field, value)?;
    }

    if let Some(avg) = &country.national_average {
        check_non_negative(
            &country.name,
            "national_average.tonnes_per_year",
            avg.tonnes_per_year,
        )?;
    }

    Ok(())
}

fn check_non_negative(country: &str, field: &str, value: f64) -> Result<(), ValidationError> {
    match fp_core::ensure_non_negative(value, "factor") {
        Ok(_) => Ok(()),
        Err(err) => {
            let reason = match err {
                CoreError::NonFinite { .. } => "must be finite",
                CoreError::Negative { .. } => "must be non-negative",
            };
            Err(ValidationError::InvalidValue {
                field: format!("{country}.{field}"),
                value: value.to_string(),
                reason: reason.to_string(),
            })
        }
    }
}
