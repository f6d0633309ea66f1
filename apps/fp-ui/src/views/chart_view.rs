use egui::Color32;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use fp_app::{ChartKind, ChartSpec, Report, VALUE_AXIS_LABEL, format_tonnes};

/// First colors of plotly's sequential "Plasma" scale.
const PIE_COLORS: [Color32; 4] = [
    Color32::from_rgb(0x0d, 0x08, 0x87),
    Color32::from_rgb(0x46, 0x03, 0x9f),
    Color32::from_rgb(0x72, 0x01, 0xa8),
    Color32::from_rgb(0x9c, 0x17, 0x9e),
];

/// One color per category for the bar chart.
const BAR_COLORS: [Color32; 4] = [
    Color32::from_rgb(0x63, 0x6e, 0xfa),
    Color32::from_rgb(0xef, 0x55, 0x3b),
    Color32::from_rgb(0x00, 0xcc, 0x96),
    Color32::from_rgb(0xab, 0x63, 0xfa),
];

const CHART_HEIGHT: f32 = 280.0;

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(&self, ui: &mut egui::Ui, report: &Report) {
        ui.heading("📈 Visual Representation of Your Emissions");

        for kind in ChartKind::ALL {
            let Some(chart) = report.chart(kind) else {
                continue;
            };
            ui.add_space(8.0);
            ui.strong(&chart.title);
            match kind {
                ChartKind::Pie => show_pie(ui, chart),
                ChartKind::Bar => show_bar(ui, chart),
                ChartKind::Line => show_line(ui, chart),
            }
        }
    }
}

fn show_pie(ui: &mut egui::Ui, chart: &ChartSpec) {
    let total_share: f64 = chart.points.iter().filter_map(|p| p.share).sum();
    if total_share <= 0.0 {
        ui.label("All categories are zero; nothing to show.");
        return;
    }

    Plot::new("pie_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // Slices start at 12 o'clock and run clockwise.
            let mut start = std::f64::consts::FRAC_PI_2;
            for (i, point) in chart.points.iter().enumerate() {
                let share = point.share.unwrap_or(0.0);
                if share <= 0.0 {
                    continue;
                }
                let sweep = share * std::f64::consts::TAU;
                let slice = pie_slice(start, start - sweep);
                plot_ui.polygon(
                    Polygon::new(slice)
                        .fill_color(PIE_COLORS[i % PIE_COLORS.len()])
                        .name(point.category.label()),
                );

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    format!("{:.1}%", share * 100.0),
                ));
                start -= sweep;
            }
        });
}

/// Unit-circle wedge from `from` to `to` (radians), centre included.
fn pie_slice(from: f64, to: f64) -> PlotPoints {
    let steps = (((from - to).abs() / 0.05).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for s in 0..=steps {
        let angle = from + (to - from) * s as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points.into()
}

fn show_bar(ui: &mut egui::Ui, chart: &ChartSpec) {
    let bars: Vec<Bar> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Bar::new(i as f64, p.tonnes)
                .name(p.category.label())
                .fill(BAR_COLORS[i % BAR_COLORS.len()])
                .width(0.6)
        })
        .collect();

    Plot::new("bar_chart")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label(VALUE_AXIS_LABEL)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Emissions"));
            for (i, p) in chart.points.iter().enumerate() {
                plot_ui.text(Text::new(
                    PlotPoint::new(i as f64, p.tonnes),
                    format_tonnes(p.tonnes),
                ));
            }
        });
    category_legend(ui, chart);
}

fn show_line(ui: &mut egui::Ui, chart: &ChartSpec) {
    let points: Vec<[f64; 2]> = chart
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.tonnes])
        .collect();

    Plot::new("line_chart")
        .height(CHART_HEIGHT)
        .y_axis_label(VALUE_AXIS_LABEL)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(points.clone())).name("Emissions"));
            plot_ui.points(Points::new(PlotPoints::from(points)).radius(4.0));
        });
    category_legend(ui, chart);
}

/// The x axis is numeric; spell out which category sits at which index.
fn category_legend(ui: &mut egui::Ui, chart: &ChartSpec) {
    ui.horizontal(|ui| {
        for (i, p) in chart.points.iter().enumerate() {
            ui.label(format!("{}: {}", i, p.category.label()));
        }
    });
}
