//! Demo host application for the dotchart widget.
//!
//! Plays the role of the embedding host: it owns the selection registry,
//! synthesizes a data table, pushes a configuration object on every frame
//! and sizes the widget. A side panel edits the configuration through the
//! same option names the widget recognizes, so this doubles as a manual
//! exercise of the settings schema and the property enumeration.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use dotchart::{ChartView, DataTable, MemorySelectionHost, SelectionHost, SeriesColumn};

const CATEGORIES: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Main application entry point that launches the demo host window.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("dotchart demo host"),
        ..Default::default()
    };

    eframe::run_native(
        "dotchart demo host",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}

/// Editable configuration state mirrored into the JSON config object.
struct ConfigPanel {
    show_x_axis: bool,
    show_y_axis: bool,
    show_y_label: bool,
    y_label_text: String,
    title_text: String,
    hide_title: bool,
    dot_size: f32,
    data_on_point: bool,
    tooltip_gradient: bool,
}

impl Default for ConfigPanel {
    fn default() -> Self {
        Self {
            show_x_axis: true,
            show_y_axis: true,
            show_y_label: false,
            y_label_text: "Units".to_string(),
            title_text: "Analyze".to_string(),
            hide_title: false,
            dot_size: 3.5,
            data_on_point: true,
            tooltip_gradient: true,
        }
    }
}

impl ConfigPanel {
    /// Builds the host configuration object the widget consumes.
    fn to_config(&self) -> serde_json::Value {
        json!({
            "x_axis": { "show": self.show_x_axis },
            "y_axis": {
                "show": self.show_y_axis,
                "show_label": self.show_y_label,
                "label_text": self.y_label_text,
            },
            "general": {
                "dot_size": self.dot_size,
                "data_on_point": self.data_on_point,
            },
            "title": { "text": self.title_text, "hide": self.hide_title },
            "tooltip": { "gradient": self.tooltip_gradient },
        })
    }
}

struct DemoApp {
    chart: ChartView,
    host: MemorySelectionHost,
    table: DataTable,
    config: ConfigPanel,
    allow_interactions: bool,
    drop_feb: bool,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            chart: ChartView::new(),
            host: MemorySelectionHost::new(),
            table: synthesize_table(false),
            config: ConfigPanel::default(),
            allow_interactions: true,
            drop_feb: false,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("config_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Host controls");
                ui.separator();

                ui.checkbox(&mut self.allow_interactions, "Allow interactions");
                if ui
                    .checkbox(&mut self.drop_feb, "Drop category Feb")
                    .changed()
                {
                    // A data change on the host side: the widget must
                    // re-resolve the selection on the next redraw.
                    self.table = synthesize_table(self.drop_feb);
                }
                ui.separator();

                ui.label("Configuration");
                ui.checkbox(&mut self.config.show_x_axis, "X axis");
                ui.checkbox(&mut self.config.show_y_axis, "Y axis");
                ui.checkbox(&mut self.config.show_y_label, "Y axis label");
                ui.text_edit_singleline(&mut self.config.y_label_text);
                ui.checkbox(&mut self.config.hide_title, "Hide title");
                ui.text_edit_singleline(&mut self.config.title_text);
                ui.add(
                    egui::Slider::new(&mut self.config.dot_size, 2.0..=10.0).text("Dot size"),
                );
                ui.checkbox(&mut self.config.data_on_point, "Values on points");
                ui.checkbox(&mut self.config.tooltip_gradient, "Tooltip gradient");
                ui.separator();

                ui.label(format!(
                    "Selected: {} point(s)",
                    self.host.selection().len()
                ));
                if ui.button("Clear selection (host side)").clicked() {
                    self.host.retain(|_| false);
                }

                ui.separator();
                ui.label("Effective title properties:");
                for instance in self.chart.enumerate_properties("title") {
                    for (name, value) in &instance.properties {
                        ui.monospace(format!("{name} = {value}"));
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.host.set_allow_interactions(self.allow_interactions);
            let config = self.config.to_config();
            self.chart.show(ui, &self.table, &config, &mut self.host);
        });
    }
}

/// Synthesizes a two-series table with seeded random values, so runs are
/// reproducible while still looking organic.
fn synthesize_table(drop_feb: bool) -> DataTable {
    let mut rng = StdRng::seed_from_u64(7);
    let categories: Vec<String> = CATEGORIES
        .iter()
        .filter(|c| !(drop_feb && **c == "Feb"))
        .map(|c| c.to_string())
        .collect();
    let n = categories.len();

    let mut table = DataTable::new("Month", categories);
    table.push_series(SeriesColumn::new(
        "Sales",
        "sales",
        (0..n).map(|_| Some(rng.gen_range(200.0..1200.0))).collect(),
    ));
    table.push_series(SeriesColumn::new(
        "Profit",
        "profit",
        (0..n).map(|_| Some(rng.gen_range(50.0..400.0))).collect(),
    ));
    table
}
