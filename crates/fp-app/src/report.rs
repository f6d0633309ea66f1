//! Result presentation data: figures, headline, comparison text and the
//! series behind the three charts.
//!
//! Frontends only draw what is in a [`Report`]; no number is derived twice.

use fp_calc::{Category, EmissionsResult, Inputs, RoundingPolicy};
use fp_factors::FactorTable;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const VALUE_AXIS_LABEL: &str = "Emissions (tonnes)";
pub const CATEGORY_AXIS_LABEL: &str = "Category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Pie, ChartKind::Bar, ChartKind::Line];

    pub fn title(self) -> &'static str {
        match self {
            Self::Pie => "Proportion of CO2 Emissions by Category",
            Self::Bar => "Annual CO2 Emissions by Category",
            Self::Line => "Trend of CO2 Emissions by Category",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFigure {
    pub category: Category,
    pub tonnes: f64,
}

impl CategoryFigure {
    /// e.g. `🚗 Transportation: 0.51`
    pub fn text(&self) -> String {
        format!(
            "{} {}: {}",
            self.category.icon(),
            self.category.label(),
            format_tonnes(self.tonnes)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub category: Category,
    pub tonnes: f64,
    /// Fraction of the category sum; only filled for the pie chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    pub fn build(kind: ChartKind, result: &EmissionsResult) -> Self {
        let sum: f64 = result.categories().iter().map(|(_, v)| v).sum();
        let points = result
            .categories()
            .into_iter()
            .map(|(category, tonnes)| ChartPoint {
                category,
                tonnes,
                share: match kind {
                    ChartKind::Pie if sum > 0.0 => Some(tonnes / sum),
                    ChartKind::Pie => Some(0.0),
                    ChartKind::Bar | ChartKind::Line => None,
                },
            })
            .collect();

        Self {
            kind,
            title: kind.title().to_string(),
            points,
        }
    }

    /// Two-column CSV keyed by category name.
    pub fn to_csv(&self) -> String {
        let mut csv = format!("{},{}", CATEGORY_AXIS_LABEL, VALUE_AXIS_LABEL);
        if self.kind == ChartKind::Pie {
            csv.push_str(",Share");
        }
        csv.push('\n');
        for point in &self.points {
            csv.push_str(&format!("{},{}", point.category.label(), point.tonnes));
            if let Some(share) = point.share {
                csv.push_str(&format!(",{share:.4}"));
            }
            csv.push('\n');
        }
        csv
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub country: String,
    pub inputs: Inputs,
    pub policy: RoundingPolicy,
    pub result: EmissionsResult,
    pub figures: Vec<CategoryFigure>,
    pub headline: String,
    /// `result.total` in kilograms.
    pub total_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
    pub charts: Vec<ChartSpec>,
}

impl Report {
    pub fn build(
        country: &str,
        inputs: Inputs,
        policy: RoundingPolicy,
        result: EmissionsResult,
        table: &FactorTable,
    ) -> Self {
        let figures = result
            .categories()
            .into_iter()
            .map(|(category, tonnes)| CategoryFigure { category, tonnes })
            .collect();

        let comparison = table.national_average(country).map(|avg| {
            format!(
                "{country}'s average per capita CO2 emission was {} tonnes/year in {}.",
                avg.tonnes_per_year, avg.year
            )
        });

        Self {
            country: country.to_string(),
            inputs,
            policy,
            result,
            figures,
            headline: format!(
                "Your total carbon footprint is: {} tonnes CO2/year",
                format_tonnes(result.total)
            ),
            total_kg: fp_core::mass_kg(result.total_mass()),
            comparison,
            charts: ChartKind::ALL
                .iter()
                .map(|&kind| ChartSpec::build(kind, &result))
                .collect(),
        }
    }

    pub fn chart(&self, kind: ChartKind) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.kind == kind)
    }

    /// Plain-text rendering used by the CLI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Country: {}\n\n", self.country));
        out.push_str("Emissions by Category (in tonnes/year)\n");
        for figure in &self.figures {
            out.push_str(&format!("  {}\n", figure.text()));
        }
        out.push('\n');
        out.push_str(&self.headline);
        out.push('\n');
        out.push_str(&format!("({} kg CO2/year)\n", format_kg(self.total_kg)));
        if let Some(comparison) = &self.comparison {
            out.push_str(comparison);
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Emission figures always show two decimals.
pub fn format_tonnes(v: f64) -> String {
    format!("{v:.2}")
}

/// Whole kilograms; a two-decimal tonne figure never needs more.
pub fn format_kg(v: f64) -> String {
    format!("{v:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_result() -> EmissionsResult {
        EmissionsResult {
            transportation: 0.51,
            electricity: 0.98,
            diet: 0.91,
            waste: 0.03,
            total: 2.43,
        }
    }

    fn example_report() -> Report {
        Report::build(
            "India",
            Inputs::default(),
            RoundingPolicy::PerCategory,
            example_result(),
            &FactorTable::reference(),
        )
    }

    #[test]
    fn figures_and_headline() {
        let report = example_report();
        let texts: Vec<String> = report.figures.iter().map(|f| f.text()).collect();
        assert_eq!(texts[0], "🚗 Transportation: 0.51");
        assert_eq!(texts[3], "🗑️ Waste: 0.03");
        assert_eq!(
            report.headline,
            "Your total carbon footprint is: 2.43 tonnes CO2/year"
        );
    }

    #[test]
    fn comparison_comes_from_table() {
        let report = example_report();
        assert_eq!(
            report.comparison.as_deref(),
            Some("India's average per capita CO2 emission was 1.9 tonnes/year in 2021.")
        );
    }

    #[test]
    fn three_charts_share_category_values() {
        let report = example_report();
        assert_eq!(report.charts.len(), 3);
        for kind in ChartKind::ALL {
            let chart = report.chart(kind).unwrap();
            assert_eq!(chart.title, kind.title());
            let values: Vec<f64> = chart.points.iter().map(|p| p.tonnes).collect();
            assert_eq!(values, vec![0.51, 0.98, 0.91, 0.03]);
        }
    }

    #[test]
    fn pie_shares_sum_to_one() {
        let pie = ChartSpec::build(ChartKind::Pie, &example_result());
        let sum: f64 = pie.points.iter().filter_map(|p| p.share).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        let bar = ChartSpec::build(ChartKind::Bar, &example_result());
        assert!(bar.points.iter().all(|p| p.share.is_none()));
    }

    #[test]
    fn pie_shares_of_zero_result_are_zero() {
        let pie = ChartSpec::build(ChartKind::Pie, &EmissionsResult::default());
        assert!(pie.points.iter().all(|p| p.share == Some(0.0)));
    }

    #[test]
    fn bar_csv_layout() {
        let csv = ChartSpec::build(ChartKind::Bar, &example_result()).to_csv();
        assert_eq!(
            csv,
            "Category,Emissions (tonnes)\nTransportation,0.51\nElectricity,0.98\nDiet,0.91\nWaste,0.03\n"
        );
    }

    #[test]
    fn text_rendering_contains_everything() {
        let text = example_report().render_text();
        assert!(text.contains("Country: India"));
        assert!(text.contains("💡 Electricity: 0.98"));
        assert!(text.contains("2.43 tonnes CO2/year"));
        assert!(text.contains("1.9 tonnes/year in 2021"));
    }

    #[test]
    fn total_in_kilograms() {
        let report = example_report();
        assert!((report.total_kg - 2430.0).abs() < 1e-9);
        assert!(report.render_text().contains("(2430 kg CO2/year)"));
    }

    mod props {
        use super::super::*;
        use crate::{CalcRequest, InputRanges, RawInputs, evaluate};
        use proptest::prelude::*;

        fn raw_strategy() -> impl Strategy<Value = RawInputs> {
            (0.0_f64..=100.0, 0.0_f64..=1000.0, 0.0_f64..=100.0, 0_i64..=10).prop_map(
                |(distance, electricity, waste, meals)| RawInputs {
                    distance_km_per_day: distance,
                    electricity_kwh_per_month: electricity,
                    waste_kg_per_week: waste,
                    meals_per_day: meals,
                },
            )
        }

        fn policy_strategy() -> impl Strategy<Value = RoundingPolicy> {
            prop_oneof![
                Just(RoundingPolicy::PerCategory),
                Just(RoundingPolicy::TotalOnce)
            ]
        }

        fn report_for(raw: RawInputs, policy: RoundingPolicy) -> Report {
            let request = CalcRequest {
                country: "India",
                raw,
                policy,
            };
            evaluate(&FactorTable::reference(), &InputRanges::default(), &request).unwrap()
        }

        proptest! {
            #[test]
            fn json_round_trip_is_exact(raw in raw_strategy(), policy in policy_strategy()) {
                let report = report_for(raw, policy);
                let json = report.to_json().unwrap();
                let back: Report = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(back, report);
            }
        }

        #[test]
        fn pie_shares_with_long_expansions_round_trip() {
            // shares such as 0.51 / 2.43 need all 17 significant digits
            let report = report_for(
                RawInputs {
                    distance_km_per_day: 10.0,
                    electricity_kwh_per_month: 100.0,
                    waste_kg_per_week: 5.0,
                    meals_per_day: 2,
                },
                RoundingPolicy::PerCategory,
            );
            let back: Report = serde_json::from_str(&report.to_json().unwrap()).unwrap();
            let shares = |r: &Report| -> Vec<f64> {
                r.chart(ChartKind::Pie)
                    .unwrap()
                    .points
                    .iter()
                    .filter_map(|p| p.share)
                    .collect()
            };
            assert_eq!(shares(&back), shares(&report));
        }
    }
}
