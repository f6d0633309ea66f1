use crate::Category;
use fp_core::units::{Mass, tonnes};
use serde::{Deserialize, Serialize};

/// How `total` is derived from the category figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Sum the already-rounded category figures, then round the sum again.
    #[default]
    PerCategory,
    /// Round the unrounded tonne sum once.
    TotalOnce,
}

impl RoundingPolicy {
    pub fn label(self) -> &'static str {
        match self {
            Self::PerCategory => "per-category",
            Self::TotalOnce => "total-once",
        }
    }
}

/// Annual emissions in tonnes CO2e, each rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub total: f64,
}

impl EmissionsResult {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
        }
    }

    /// Category figures in display order.
    pub fn categories(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|c| (c, self.get(c)))
    }

    pub fn total_mass(&self) -> Mass {
        tonnes(self.total)
    }
}
