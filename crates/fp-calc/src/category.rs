use fp_factors::CountryFactors;
use serde::{Deserialize, Serialize};

/// Emission category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Transportation,
    Electricity,
    Diet,
    Waste,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Electricity => "Electricity",
            Self::Diet => "Diet",
            Self::Waste => "Waste",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Transportation => "🚗",
            Self::Electricity => "💡",
            Self::Diet => "🍽️",
            Self::Waste => "🗑️",
        }
    }

    /// The activity unit the matching factor is expressed against.
    pub fn activity_unit(self) -> &'static str {
        match self {
            Self::Transportation => "km",
            Self::Electricity => "kWh",
            Self::Diet => "meal",
            Self::Waste => "kg",
        }
    }

    /// kg CO2e per [`Category::activity_unit`].
    pub fn factor(self, factors: &CountryFactors) -> f64 {
        match self {
            Self::Transportation => factors.transport_per_km,
            Self::Electricity => factors.electricity_per_kwh,
            Self::Diet => factors.diet_per_meal,
            Self::Waste => factors.waste_per_kg,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_is_fixed() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Transportation", "Electricity", "Diet", "Waste"]);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Category::Diet.to_string(), "Diet");
    }

    #[test]
    fn factor_follows_activity_unit() {
        let table = fp_factors::FactorTable::reference();
        let india = table.get("India").unwrap();
        let listed: Vec<(f64, &str)> = Category::ALL
            .iter()
            .map(|c| (c.factor(india), c.activity_unit()))
            .collect();
        assert_eq!(
            listed,
            vec![(0.14, "km"), (0.82, "kWh"), (1.25, "meal"), (0.1, "kg")]
        );
    }
}
