//! Axis, grid and title rendering.
//!
//! Draws the category (x) axis labels, the linear (y) axis ticks with
//! horizontal grid lines, the optional y-axis label and the chart title.
//! Category-label dimming is applied here from the overlay plan's dimming
//! state: while a selection exists every label is dimmed except the
//! selected points' own categories.

use eframe::egui;

use crate::domain::catalog::Catalog;
use crate::domain::layout::LayoutResult;
use crate::palette;
use crate::settings::ChartSettings;
use crate::state::LabelDimming;
use crate::utils::format_value;

/// Opacity multiplier for dimmed category labels.
const DIMMED_OPACITY: f32 = 0.4;

/// Renders the x axis: one category label per band, dimming applied.
pub fn render_x_axis(
    painter: &egui::Painter,
    catalog: &Catalog,
    layout: &LayoutResult,
    settings: &ChartSettings,
    dimming: &LabelDimming,
) {
    if !settings.x_axis.show {
        return;
    }

    for (point_index, category) in catalog.categories().iter().enumerate() {
        let Some(anchor) = layout.label_anchor(point_index) else {
            continue;
        };

        let dimmed = dimming.active && !dimming.exempt.contains(&point_index);
        let color = if dimmed {
            palette::AXIS_TEXT.gamma_multiply(DIMMED_OPACITY)
        } else {
            palette::AXIS_TEXT
        };

        painter.text(
            anchor,
            egui::Align2::CENTER_TOP,
            category,
            egui::FontId::proportional(layout.fonts().x_axis),
            color,
        );
    }
}

/// Renders the y axis: tick labels, horizontal grid lines and the optional
/// axis label text.
pub fn render_y_axis(painter: &egui::Painter, layout: &LayoutResult, settings: &ChartSettings) {
    if !settings.y_axis.show {
        return;
    }

    let plot = layout.plot_rect();

    for &(y, value) in layout.y_ticks() {
        painter.line_segment(
            [egui::pos2(plot.min.x - 10.0, y), egui::pos2(plot.max.x, y)],
            egui::Stroke::new(1.0, palette::GRID_LINE),
        );
        painter.text(
            egui::pos2(plot.min.x - 12.0, y),
            egui::Align2::RIGHT_CENTER,
            format_value(value),
            egui::FontId::proportional(layout.fonts().y_axis),
            palette::AXIS_TEXT,
        );
    }

    if settings.y_axis.show_label && !settings.y_axis.label_text.is_empty() {
        painter.text(
            egui::pos2(plot.min.x - 9.0, plot.min.y - layout.fonts().y_axis * 1.5),
            egui::Align2::LEFT_BOTTOM,
            &settings.y_axis.label_text,
            egui::FontId::proportional(layout.fonts().y_label),
            palette::AXIS_TEXT,
        );
    }
}

/// Renders the chart title unless hidden.
pub fn render_title(painter: &egui::Painter, layout: &LayoutResult, settings: &ChartSettings) {
    if settings.title.hide || settings.title.text.is_empty() {
        return;
    }

    painter.text(
        layout.title_pos(),
        egui::Align2::LEFT_TOP,
        &settings.title.text,
        egui::FontId::proportional(layout.fonts().title),
        palette::TITLE_TEXT,
    );
}
