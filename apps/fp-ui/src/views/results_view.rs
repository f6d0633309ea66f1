use fp_app::Report;

#[derive(Default)]
pub struct ResultsView;

impl ResultsView {
    pub fn show(&self, ui: &mut egui::Ui, report: &Report) {
        ui.heading("📊 Results");

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.strong("Emissions by Category (in tonnes/year)");
            show_figure_table(ui, report);

            let ui = &mut columns[1];
            ui.strong("🌍 Total Carbon Footprint");
            ui.colored_label(egui::Color32::from_rgb(40, 160, 80), &report.headline);
            ui.weak(format!("{} kg CO2/year", fp_app::format_kg(report.total_kg)));
            if let Some(comparison) = &report.comparison {
                ui.colored_label(
                    egui::Color32::from_rgb(220, 160, 30),
                    format!("⚠️ {}", comparison),
                );
            }
        });
    }
}

fn show_figure_table(ui: &mut egui::Ui, report: &Report) {
    use egui_extras::{Column, TableBuilder};

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(180.0).at_least(120.0)) // Category
        .column(Column::initial(100.0).at_least(80.0)) // Tonnes
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Category");
            });
            header.col(|ui| {
                ui.strong("t CO2/year");
            });
        })
        .body(|mut body| {
            for figure in &report.figures {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(format!(
                            "{} {}",
                            figure.category.icon(),
                            figure.category.label()
                        ));
                    });
                    row.col(|ui| {
                        ui.label(fp_app::format_tonnes(figure.tonnes));
                    });
                });
            }
        });
}
