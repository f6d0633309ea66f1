//! Factor table file schema.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorTableDef {
    pub version: u32,
    #[serde(default)]
    pub countries: Vec<CountryDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryDef {
    pub name: String,
    pub factors: EmissionFactorsDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_average: Option<NationalAverageDef>,
}

/// Per-unit coefficients, kg CO2e per unit of activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EmissionFactorsDef {
    /// kg CO2e per km travelled
    pub transport_per_km: f64,
    /// kg CO2e per kWh consumed
    pub electricity_per_kwh: f64,
    /// kg CO2e per meal
    pub diet_per_meal: f64,
    /// kg CO2e per kg of waste
    pub waste_per_kg: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NationalAverageDef {
    pub tonnes_per_year: f64,
    pub year: u16,
}

/// The table the calculator ships with.
pub fn reference_table() -> FactorTableDef {
    FactorTableDef {
        version: LATEST_VERSION,
        countries: vec![CountryDef {
            name: "India".to_string(),
            factors: EmissionFactorsDef {
                transport_per_km: 0.14,
                electricity_per_kwh: 0.82,
                diet_per_meal: 1.25,
                waste_per_kg: 0.1,
            },
            national_average: Some(NationalAverageDef {
                tonnes_per_year: 1.9,
                year: 2021,
            }),
        }],
    }
}
