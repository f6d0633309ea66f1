//! Immutable country → factors lookup built once at startup.

use std::collections::BTreeMap;

use crate::schema::{CountryDef, EmissionFactorsDef, FactorTableDef, NationalAverageDef};
use crate::validate::{ValidationError, validate_table};

/// Emission factors for a single country.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryFactors {
    pub transport_per_km: f64,
    pub electricity_per_kwh: f64,
    pub diet_per_meal: f64,
    pub waste_per_kg: f64,
}

impl From<EmissionFactorsDef> for CountryFactors {
    fn from(def: EmissionFactorsDef) -> Self {
        Self {
            transport_per_km: def.transport_per_km,
            electricity_per_kwh: def.electricity_per_kwh,
            diet_per_meal: def.diet_per_meal,
            waste_per_kg: def.waste_per_kg,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CountryEntry {
    factors: CountryFactors,
    national_average: Option<NationalAverageDef>,
}

/// Country-keyed factor table. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    entries: BTreeMap<String, CountryEntry>,
}

impl FactorTable {
    /// Validate `def` and build the lookup from it.
    pub fn from_def(def: &FactorTableDef) -> Result<Self, ValidationError> {
        validate_table(def)?;
        Ok(Self::from_countries(&def.countries))
    }

    /// The built-in table (India only).
    pub fn reference() -> Self {
        Self::from_countries(&crate::schema::reference_table().countries)
    }

    fn from_countries(countries: &[CountryDef]) -> Self {
        let entries = countries
            .iter()
            .map(|c| {
                (
                    c.name.clone(),
                    CountryEntry {
                        factors: c.factors.into(),
                        national_average: c.national_average,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, country: &str) -> Option<&CountryFactors> {
        self.entries.get(country).map(|e| &e.factors)
    }

    pub fn national_average(&self, country: &str) -> Option<&NationalAverageDef> {
        self.entries
            .get(country)
            .and_then(|e| e.national_average.as_ref())
    }

    pub fn contains(&self, country: &str) -> bool {
        self.entries.contains_key(country)
    }

    /// Country names in sorted order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Back to the file representation, sorted by country.
    pub fn to_def(&self) -> FactorTableDef {
        FactorTableDef {
            version: crate::schema::LATEST_VERSION,
            countries: self
                .entries
                .iter()
                .map(|(name, e)| CountryDef {
                    name: name.clone(),
                    factors: EmissionFactorsDef {
                        transport_per_km: e.factors.transport_per_km,
                        electricity_per_kwh: e.factors.electricity_per_kwh,
                        diet_per_meal: e.factors.diet_per_meal,
                        waste_per_kg: e.factors.waste_per_kg,
                    },
                    national_average: e.national_average,
                })
                .collect(),
        }
    }
}

impl Default for FactorTable {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_lookup() {
        let table = FactorTable::reference();
        assert_eq!(table.len(), 1);
        assert!(table.contains("India"));
        assert!(!table.contains("France"));
        let india = table.get("India").unwrap();
        assert_eq!(india.transport_per_km, 0.14);
        assert_eq!(india.waste_per_kg, 0.1);
        assert_eq!(table.national_average("India").unwrap().tonnes_per_year, 1.9);
        assert!(table.get("india").is_none());
    }

    #[test]
    fn from_def_matches_reference() {
        let table = FactorTable::from_def(&crate::schema::reference_table()).unwrap();
        assert_eq!(table, FactorTable::reference());
    }

    #[test]
    fn countries_are_sorted() {
        let mut def = crate::schema::reference_table();
        let mut extra = def.countries[0].clone();
        extra.name = "Bhutan".to_string();
        extra.national_average = None;
        def.countries.push(extra);
        let table = FactorTable::from_def(&def).unwrap();
        let names: Vec<&str> = table.countries().collect();
        assert_eq!(names, vec!["Bhutan", "India"]);
        assert!(table.national_average("Bhutan").is_none());
    }

    #[test]
    fn to_def_round_trips() {
        let table = FactorTable::reference();
        assert_eq!(table.to_def(), crate::schema::reference_table());
    }
}
