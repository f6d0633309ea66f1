//! Input-collection boundary: everything a form accepts before it reaches
//! the calculator.
//!
//! The calculator trusts its inputs. This module is where negative,
//! non-finite and out-of-range values get rejected (or clamped, for
//! slider-style widgets).

use std::ops::RangeInclusive;

use fp_calc::Inputs;
use fp_core::CoreError;
use fp_factors::FactorTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Distance,
    Electricity,
    Waste,
    Meals,
}

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Daily commute distance",
            Self::Electricity => "Monthly electricity consumption",
            Self::Waste => "Waste generated per week",
            Self::Meals => "Number of meals per day",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Distance => "km/day",
            Self::Electricity => "kWh/month",
            Self::Waste => "kg/week",
            Self::Meals => "meals/day",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: InputField, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: InputField, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown country: {country} (available: {available})")]
    UnknownCountry { country: String, available: String },
}

/// Accepted range of each form field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRanges {
    pub distance_km_per_day: RangeInclusive<f64>,
    pub electricity_kwh_per_month: RangeInclusive<f64>,
    pub waste_kg_per_week: RangeInclusive<f64>,
    /// `None` means no upper bound.
    pub meals_max: Option<u32>,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            distance_km_per_day: 0.0..=100.0,
            electricity_kwh_per_month: 0.0..=1000.0,
            waste_kg_per_week: 0.0..=100.0,
            meals_max: None,
        }
    }
}

/// Form values as the user entered them, before any checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub distance_km_per_day: f64,
    pub electricity_kwh_per_month: f64,
    pub waste_kg_per_week: f64,
    pub meals_per_day: i64,
}

/// Reject anything the calculator must never see.
pub fn collect_inputs(raw: &RawInputs, ranges: &InputRanges) -> Result<Inputs, InputError> {
    let result = check_all(raw, ranges);
    if let Err(err) = &result {
        tracing::warn!(%err, "rejected form input");
    }
    result
}

fn check_all(raw: &RawInputs, ranges: &InputRanges) -> Result<Inputs, InputError> {
    let distance = check_real(
        InputField::Distance,
        raw.distance_km_per_day,
        &ranges.distance_km_per_day,
    )?;
    let electricity = check_real(
        InputField::Electricity,
        raw.electricity_kwh_per_month,
        &ranges.electricity_kwh_per_month,
    )?;
    let waste = check_real(
        InputField::Waste,
        raw.waste_kg_per_week,
        &ranges.waste_kg_per_week,
    )?;
    let meals = check_meals(raw.meals_per_day, ranges.meals_max)?;

    Ok(Inputs {
        distance_km_per_day: distance,
        electricity_kwh_per_month: electricity,
        waste_kg_per_week: waste,
        meals_per_day: meals,
    })
}

fn check_real(
    field: InputField,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<f64, InputError> {
    let value = fp_core::ensure_non_negative(value, "input").map_err(|err| match err {
        CoreError::Negative { value, .. } => InputError::Negative { field, value },
        CoreError::NonFinite { value, .. } => InputError::NonFinite { field, value },
    })?;

    if !range.contains(&value) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(value)
}

fn check_meals(value: i64, max: Option<u32>) -> Result<u32, InputError> {
    let field = InputField::Meals;
    if value < 0 {
        return Err(InputError::Negative {
            field,
            value: value as f64,
        });
    }
    let upper = max.unwrap_or(u32::MAX);
    match u32::try_from(value) {
        Ok(meals) if meals <= upper => Ok(meals),
        _ => Err(InputError::OutOfRange {
            field,
            value: value as f64,
            min: 0.0,
            max: f64::from(upper),
        }),
    }
}

/// Slider semantics: pull every value into its range instead of failing.
/// NaN lands on the lower bound.
pub fn clamp_inputs(raw: &RawInputs, ranges: &InputRanges) -> Inputs {
    let clamp = |v: f64, r: &RangeInclusive<f64>| {
        if v.is_nan() {
            *r.start()
        } else {
            v.clamp(*r.start(), *r.end())
        }
    };
    let meals_max = i64::from(ranges.meals_max.unwrap_or(u32::MAX));

    Inputs {
        distance_km_per_day: clamp(raw.distance_km_per_day, &ranges.distance_km_per_day),
        electricity_kwh_per_month: clamp(
            raw.electricity_kwh_per_month,
            &ranges.electricity_kwh_per_month,
        ),
        waste_kg_per_week: clamp(raw.waste_kg_per_week, &ranges.waste_kg_per_week),
        meals_per_day: raw.meals_per_day.clamp(0, meals_max) as u32,
    }
}

/// The country selector only offers keys of the table.
pub fn select_country<'a>(table: &FactorTable, country: &'a str) -> Result<&'a str, InputError> {
    if table.contains(country) {
        Ok(country)
    } else {
        Err(InputError::UnknownCountry {
            country: country.to_string(),
            available: table.countries().collect::<Vec<_>>().join(", "),
        })
    }
}
