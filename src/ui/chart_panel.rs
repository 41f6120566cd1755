//! The chart widget: per-frame orchestration of the render pipeline.
//!
//! `ChartView` is what a host embeds. Each frame the host hands it the
//! current data table, configuration object and selection host; the view
//! rebuilds the point catalog and layout, routes pointer input through the
//! interaction machine, resynchronizes the overlay plan and draws the
//! whole scene. Nothing is cached across frames except the machine's
//! mirrored selection; every redraw is a full rebuild.

use eframe::egui;
use serde_json::Value;

use crate::domain::catalog::{build_catalog, DataTable};
use crate::domain::layout;
use crate::host::SelectionHost;
use crate::settings::{ChartSettings, PropertyInstance, SeriesProperties};
use crate::state::InteractionMachine;
use crate::rendering::{axis_renderer, chart_renderer, overlay_renderer};

/// Extra pixels around a dot that still count as hitting it.
const HIT_SLOP: f32 = 2.0;

/// Embeddable interactive line/point chart.
#[derive(Default)]
pub struct ChartView {
    machine: InteractionMachine,
    settings: ChartSettings,
    series_properties: Vec<SeriesProperties>,
}

impl ChartView {
    /// Creates an idle view with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved configuration of the last update.
    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    /// The interaction machine (selection mirror, derived mode).
    pub fn machine(&self) -> &InteractionMachine {
        &self.machine
    }

    /// Reports current effective settings for the host's property-editing
    /// UI. The `colors` group enumerates one instance per series of the
    /// most recent update.
    pub fn enumerate_properties(&self, group: &str) -> Vec<PropertyInstance> {
        self.settings.enumerate_properties(group, &self.series_properties)
    }

    /// Renders one frame.
    ///
    /// The widget fills the available space; the host sizes it by sizing
    /// the containing UI region. An empty or malformed table is the normal
    /// empty state: space is allocated, nothing is drawn, no error is
    /// surfaced.
    ///
    /// # Arguments
    /// * `ui` - The egui UI region to fill
    /// * `table` - Current data table (series × categories)
    /// * `config` - Host configuration object (unrecognized options ignored)
    /// * `host` - Selection protocol + capabilities
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        table: &DataTable,
        config: &Value,
        host: &mut dyn SelectionHost,
    ) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

        self.settings = ChartSettings::from_object(config);

        // Redraw entry point: adopt whatever the host's persistent
        // selection is before resolving overlays against fresh data.
        self.machine.sync_from_host(host);

        let catalog = build_catalog(table, &self.settings);
        self.series_properties = catalog
            .series()
            .iter()
            .map(|s| SeriesProperties {
                display_name: s.display_name.clone(),
                color: s.color,
                key: s.key.clone(),
            })
            .collect();

        if catalog.is_empty() {
            return response;
        }

        let layout = layout::compute(rect, &self.settings, &catalog);
        let painter = ui.painter().with_clip_rect(rect);

        // ===== Pointer input =====

        let hit = response
            .hover_pos()
            .and_then(|pos| layout.hit_test(&catalog, pos, HIT_SLOP))
            .cloned();

        match &hit {
            Some(point) => self.machine.pointer_entered(point.key.clone(), host),
            None => self.machine.pointer_exited_plot(host),
        }

        if response.clicked() {
            let multi = ui.input(|i| i.modifiers.command);
            let consumed = match &hit {
                Some(point) => self.machine.point_clicked(&point.key, multi, host),
                None => false,
            };
            // A click consumed by a point must not also deselect via the
            // background handler.
            if !consumed {
                self.machine.background_clicked(host);
            }
        }

        if hit.is_some() && host.allow_interactions() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        // ===== Resync + draw =====

        let plan = self.machine.resync(&catalog, &layout);

        axis_renderer::render_title(&painter, &layout, &self.settings);
        axis_renderer::render_y_axis(&painter, &layout, &self.settings);
        axis_renderer::render_x_axis(&painter, &catalog, &layout, &self.settings, &plan.dimming);
        chart_renderer::render_series(&painter, &catalog, &layout, &self.settings);
        overlay_renderer::render_overlays(&painter, &plan, &self.settings, catalog.category_label());

        response
    }
}
