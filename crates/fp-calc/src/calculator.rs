use crate::{CalcError, CalcResult, EmissionsResult, Inputs, RoundingPolicy};
use fp_core::constants::KG_PER_TONNE;
use fp_core::{REPORT_DECIMALS, round_dp};
use fp_factors::{CountryFactors, FactorTable};

/// Unrounded annual emissions per category, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryKg {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
}

impl CategoryKg {
    pub fn from_inputs(inputs: &Inputs, factors: &CountryFactors) -> Self {
        let yearly = inputs.annualize();
        Self {
            transportation: factors.transport_per_km * yearly.distance_km,
            electricity: factors.electricity_per_kwh * yearly.electricity_kwh,
            diet: factors.diet_per_meal * yearly.meals,
            waste: factors.waste_per_kg * yearly.waste_kg,
        }
    }
}

/// Annual emissions for `country` with the default rounding policy.
pub fn compute(country: &str, inputs: &Inputs, table: &FactorTable) -> CalcResult<EmissionsResult> {
    compute_with(country, inputs, table, RoundingPolicy::PerCategory)
}

pub fn compute_with(
    country: &str,
    inputs: &Inputs,
    table: &FactorTable,
    policy: RoundingPolicy,
) -> CalcResult<EmissionsResult> {
    let factors = table.get(country).ok_or_else(|| CalcError::UnknownCountry {
        country: country.to_string(),
    })?;

    let kg = CategoryKg::from_inputs(inputs, factors);

    let transportation_t = kg.transportation / KG_PER_TONNE;
    let electricity_t = kg.electricity / KG_PER_TONNE;
    let diet_t = kg.diet / KG_PER_TONNE;
    let waste_t = kg.waste / KG_PER_TONNE;

    let transportation = round_dp(transportation_t, REPORT_DECIMALS);
    let electricity = round_dp(electricity_t, REPORT_DECIMALS);
    let diet = round_dp(diet_t, REPORT_DECIMALS);
    let waste = round_dp(waste_t, REPORT_DECIMALS);

    // Summation order is fixed; it can move the last digit.
    let total = match policy {
        RoundingPolicy::PerCategory => round_dp(
            transportation + electricity + diet + waste,
            REPORT_DECIMALS,
        ),
        RoundingPolicy::TotalOnce => round_dp(
            transportation_t + electricity_t + diet_t + waste_t,
            REPORT_DECIMALS,
        ),
    };

    tracing::debug!(
        country,
        policy = policy.label(),
        transportation,
        electricity,
        diet,
        waste,
        total,
        "computed annual emissions"
    );

    Ok(EmissionsResult {
        transportation,
        electricity,
        diet,
        waste,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_factors::{CountryDef, EmissionFactorsDef, FactorTableDef};

    fn india_example() -> Inputs {
        Inputs {
            distance_km_per_day: 10.0,
            electricity_kwh_per_month: 100.0,
            waste_kg_per_week: 5.0,
            meals_per_day: 2,
        }
    }

    fn single_country(factors: EmissionFactorsDef) -> FactorTable {
        let def = FactorTableDef {
            version: fp_factors::LATEST_VERSION,
            countries: vec![CountryDef {
                name: "Testland".to_string(),
                factors,
                national_average: None,
            }],
        };
        FactorTable::from_def(&def).expect("test table should validate")
    }

    #[test]
    fn reference_example_matches_known_figures() {
        let table = FactorTable::reference();
        let result = compute("India", &india_example(), &table).expect("India is in the table");
        assert_eq!(result.transportation, 0.51);
        assert_eq!(result.electricity, 0.98);
        assert_eq!(result.diet, 0.91);
        assert_eq!(result.waste, 0.03);
        assert_eq!(result.total, 2.43);
    }

    #[test]
    fn zero_inputs_give_zero_result() {
        let table = FactorTable::reference();
        let result = compute("India", &Inputs::default(), &table).unwrap();
        assert_eq!(result, EmissionsResult::default());
    }

    #[test]
    fn unknown_country_is_rejected() {
        let table = FactorTable::reference();
        let err = compute("France", &india_example(), &table).expect_err("France is not listed");
        assert_eq!(
            err,
            CalcError::UnknownCountry {
                country: "France".to_string()
            }
        );
    }

    #[test]
    fn category_kg_uses_matching_factor() {
        let table = FactorTable::reference();
        let kg = CategoryKg::from_inputs(&india_example(), table.get("India").unwrap());
        assert!((kg.transportation - 511.0).abs() < 1e-9);
        assert!((kg.electricity - 984.0).abs() < 1e-9);
        assert!((kg.diet - 912.5).abs() < 1e-9);
        assert!((kg.waste - 26.0).abs() < 1e-9);
    }

    #[test]
    fn category_rounding_at_half_way_points() {
        // 12 * 7.5 * 0.5 = 45 kg -> 0.045 t, stored just below the half-way point
        let table = single_country(EmissionFactorsDef {
            transport_per_km: 0.0,
            electricity_per_kwh: 0.5,
            diet_per_meal: 0.0,
            waste_per_kg: 0.0,
        });
        let inputs = Inputs {
            electricity_kwh_per_month: 7.5,
            ..Inputs::default()
        };
        let result = compute("Testland", &inputs, &table).unwrap();
        assert_eq!(result.electricity, 0.04);
        assert_eq!(result.total, 0.04);

        // 12 * 2.5 * 0.5 = 15 kg -> 0.015 t
        let inputs = Inputs {
            electricity_kwh_per_month: 2.5,
            ..Inputs::default()
        };
        let result = compute("Testland", &inputs, &table).unwrap();
        assert_eq!(result.electricity, 0.01);
    }

    #[test]
    fn double_rounding_diverges_from_single_rounding() {
        // Every category lands below 0.005 t, so each rounds to zero while
        // the unrounded sum is 0.0129 t.
        let table = single_country(EmissionFactorsDef {
            transport_per_km: 1.0,
            electricity_per_kwh: 0.5,
            diet_per_meal: 0.01,
            waste_per_kg: 0.5,
        });
        let inputs = Inputs {
            distance_km_per_day: 0.01,
            electricity_kwh_per_month: 0.5,
            waste_kg_per_week: 0.1,
            meals_per_day: 1,
        };

        let per_category =
            compute_with("Testland", &inputs, &table, RoundingPolicy::PerCategory).unwrap();
        assert_eq!(per_category.transportation, 0.0);
        assert_eq!(per_category.electricity, 0.0);
        assert_eq!(per_category.diet, 0.0);
        assert_eq!(per_category.waste, 0.0);
        assert_eq!(per_category.total, 0.0);

        let once = compute_with("Testland", &inputs, &table, RoundingPolicy::TotalOnce).unwrap();
        assert_eq!(once.total, 0.01);
        // category figures do not depend on the policy
        assert_eq!(once.transportation, per_category.transportation);
        assert_eq!(once.waste, per_category.waste);
    }

    #[test]
    fn total_is_rounded_sum_of_rounded_categories() {
        let table = FactorTable::reference();
        let inputs = Inputs {
            distance_km_per_day: 37.3,
            electricity_kwh_per_month: 412.9,
            waste_kg_per_week: 11.7,
            meals_per_day: 3,
        };
        let r = compute("India", &inputs, &table).unwrap();
        let expected = round_dp(r.transportation + r.electricity + r.diet + r.waste, 2);
        assert_eq!(r.total, expected);
    }
}
