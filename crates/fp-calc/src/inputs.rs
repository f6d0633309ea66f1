use fp_core::constants::{DAYS_PER_YEAR, MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Lifestyle measurements, each in its own per-period unit.
///
/// Values are assumed finite and non-negative; the input boundary in
/// `fp-app` enforces that before anything reaches the calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Daily commute distance, km/day
    pub distance_km_per_day: f64,
    /// Monthly electricity consumption, kWh/month
    pub electricity_kwh_per_month: f64,
    /// Weekly waste generated, kg/week
    pub waste_kg_per_week: f64,
    /// Meals per day
    pub meals_per_day: u32,
}

/// The same measurements scaled to one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualizedInputs {
    pub distance_km: f64,
    pub electricity_kwh: f64,
    pub meals: f64,
    pub waste_kg: f64,
}

impl Inputs {
    pub fn annualize(&self) -> AnnualizedInputs {
        AnnualizedInputs {
            distance_km: self.distance_km_per_day * DAYS_PER_YEAR,
            electricity_kwh: self.electricity_kwh_per_month * MONTHS_PER_YEAR,
            meals: f64::from(self.meals_per_day) * DAYS_PER_YEAR,
            waste_kg: self.waste_kg_per_week * WEEKS_PER_YEAR,
        }
    }
}
