//! Series rendering: lines, dots and on-point value labels.
//!
//! Pure drawing against the current catalog and layout, no decisions. All
//! interaction-dependent visuals (tooltips, highlights, dimming) come from
//! the overlay renderer instead.

use eframe::egui;
use egui::Stroke;

use crate::domain::catalog::Catalog;
use crate::domain::layout::LayoutResult;
use crate::settings::ChartSettings;
use crate::utils::format_value;

/// Stroke width of a series polyline.
const LINE_WIDTH: f32 = 2.0;

/// Renders every series as a polyline through its laid-out points plus one
/// filled dot per point.
///
/// # Arguments
/// * `painter` - The egui painter clipped to the widget area
/// * `catalog` - The current render cycle's points
/// * `layout` - Layout positions for the catalog
/// * `settings` - Resolved widget configuration
pub fn render_series(
    painter: &egui::Painter,
    catalog: &Catalog,
    layout: &LayoutResult,
    settings: &ChartSettings,
) {
    for series in catalog.series() {
        let positions: Vec<egui::Pos2> = catalog
            .points_of_series(series.series_index)
            .filter_map(|p| layout.position_of(&p.key))
            .collect();

        for pair in positions.windows(2) {
            painter.line_segment([pair[0], pair[1]], Stroke::new(LINE_WIDTH, series.color));
        }

        for point in catalog.points_of_series(series.series_index) {
            let Some(center) = layout.position_of(&point.key) else {
                continue;
            };
            painter.circle_filled(center, point.radius, point.color);

            if settings.general.data_on_point {
                painter.text(
                    egui::pos2(center.x, center.y - point.radius - 2.0),
                    egui::Align2::CENTER_BOTTOM,
                    format_value(point.value),
                    egui::FontId::proportional(layout.fonts().value_label),
                    crate::palette::AXIS_TEXT,
                );
            }
        }
    }
}
