use crate::views::{ChartView, FormState, InputView, ResultsView};
use egui_file_dialog::{DialogMode, FileDialog};
use fp_app::{CalcRequest, InputRanges, Report, evaluate, load_factor_table};
use fp_factors::FactorTable;
use std::path::PathBuf;

pub struct FootprintApp {
    table: FactorTable,
    table_path: Option<PathBuf>,
    ranges: InputRanges,
    form: FormState,
    report: Option<Report>,
    last_message: Option<String>,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    input_view: InputView,
    results_view: ResultsView,
    chart_view: ChartView,
}

impl FootprintApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let table = FactorTable::reference();
        let form = FormState::for_table(&table);

        Self {
            table,
            table_path: None,
            ranges: InputRanges::default(),
            form,
            report: None,
            last_message: None,
            file_dialog: FileDialog::new(),
            last_directory: None,
            input_view: InputView,
            results_view: ResultsView,
            chart_view: ChartView,
        }
    }

    fn open_factors(&mut self, path: PathBuf) {
        match load_factor_table(Some(&path)) {
            Ok(table) => {
                // Remember the directory for next time
                if let Some(parent) = path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                if !table.contains(&self.form.country) {
                    self.form.country = FormState::for_table(&table).country;
                }
                self.table = table;
                self.table_path = Some(path);
                self.report = None;
                self.last_message = None;
            }
            Err(e) => {
                self.last_message = Some(format!("Failed to load factor table: {}", e));
            }
        }
    }

    fn use_reference_table(&mut self) {
        self.table = FactorTable::reference();
        self.table_path = None;
        self.form = FormState::for_table(&self.table);
        self.report = None;
        self.last_message = None;
    }

    fn calculate(&mut self) {
        let request = CalcRequest {
            country: &self.form.country,
            raw: self.form.raw,
            policy: self.form.policy,
        };
        match evaluate(&self.table, &self.ranges, &request) {
            Ok(report) => {
                self.report = Some(report);
                self.last_message = None;
            }
            Err(e) => {
                tracing::warn!(%e, "calculation rejected");
                self.report = None;
                self.last_message = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for FootprintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open factors…").clicked() {
                    let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                    let _ = self
                        .file_dialog
                        .open(DialogMode::SelectFile, true, initial_dir);
                }
                if ui.button("Reference table").clicked() {
                    self.use_reference_table();
                }

                ui.separator();
                match &self.table_path {
                    Some(path) => ui.label(format!("Factors: {}", path.display())),
                    None => ui.label("Factors: built-in reference table"),
                };
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_factors(path.to_path_buf());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("🌿 Personal Carbon Calculator App");
                ui.separator();

                self.input_view
                    .show(ui, &self.table, &self.ranges, &mut self.form);

                ui.add_space(8.0);
                if ui.button("Calculate CO2 Emissions").clicked() {
                    self.calculate();
                }

                if let Some(message) = &self.last_message {
                    ui.colored_label(egui::Color32::RED, message);
                }

                if let Some(report) = &self.report {
                    ui.separator();
                    self.results_view.show(ui, report);
                    ui.separator();
                    self.chart_view.show(ui, report);
                }
            });
        });
    }
}
