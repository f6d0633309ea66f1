use fp_app::{InputField, InputRanges, RawInputs};
use fp_calc::RoundingPolicy;
use fp_factors::FactorTable;

/// What the form currently holds. Nothing is computed from it until the
/// Calculate button is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub country: String,
    pub raw: RawInputs,
    pub policy: RoundingPolicy,
}

impl FormState {
    /// Zeroed form with the first country of the table selected.
    pub fn for_table(table: &FactorTable) -> Self {
        Self {
            country: table.countries().next().unwrap_or_default().to_string(),
            raw: RawInputs::default(),
            policy: RoundingPolicy::default(),
        }
    }
}

#[derive(Default)]
pub struct InputView;

impl InputView {
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        table: &FactorTable,
        ranges: &InputRanges,
        form: &mut FormState,
    ) {
        ui.heading("🌍 Your Country");
        egui::ComboBox::from_id_salt("country_selector")
            .selected_text(form.country.as_str())
            .show_ui(ui, |ui| {
                for name in table.countries() {
                    ui.selectable_value(&mut form.country, name.to_string(), name);
                }
            });

        ui.add_space(8.0);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.heading(format!("🚗 {} (in km)", InputField::Distance.label()));
            ui.add(
                egui::Slider::new(
                    &mut form.raw.distance_km_per_day,
                    ranges.distance_km_per_day.clone(),
                )
                .text("Distance"),
            );
            ui.heading(format!("💡 {} (in kWh)", InputField::Electricity.label()));
            ui.add(
                egui::Slider::new(
                    &mut form.raw.electricity_kwh_per_month,
                    ranges.electricity_kwh_per_month.clone(),
                )
                .text("Electricity"),
            );

            let ui = &mut columns[1];
            ui.heading(format!("🗑️ {} (in kg)", InputField::Waste.label()));
            ui.add(
                egui::Slider::new(
                    &mut form.raw.waste_kg_per_week,
                    ranges.waste_kg_per_week.clone(),
                )
                .text("Waste"),
            );
            ui.heading(format!("🍽️ {}", InputField::Meals.label()));
            let meals_max = i64::from(ranges.meals_max.unwrap_or(u32::MAX));
            ui.add(
                egui::DragValue::new(&mut form.raw.meals_per_day)
                    .range(0..=meals_max)
                    .prefix("Meals "),
            );
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Total rounding:");
            ui.selectable_value(
                &mut form.policy,
                RoundingPolicy::PerCategory,
                "Sum of rounded categories",
            );
            ui.selectable_value(
                &mut form.policy,
                RoundingPolicy::TotalOnce,
                "Round unrounded sum once",
            );
        });
    }
}
