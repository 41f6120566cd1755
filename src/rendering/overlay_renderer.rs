//! Overlay rendering: tooltips and highlight rectangles.
//!
//! Consumes a complete [`OverlayPlan`] and draws exactly what it names:
//! no decisions, no partial updates. Immediate-mode drawing makes the
//! clear-then-redraw contract implicit: a frame draws the current plan and
//! nothing else, so overlays of discarded plans cannot linger.

use eframe::egui;
use egui::{Color32, Mesh, Rect, Stroke};

use crate::palette::{adjust_brightness, with_alpha};
use crate::settings::ChartSettings;
use crate::state::OverlayPlan;
use crate::utils::format_value;

/// Corner rounding of tooltip boxes and highlight rectangles.
const CORNER_RADIUS: f32 = 4.0;
/// Gap between a tooltip box and its anchor dot.
const ANCHOR_GAP: f32 = 10.0;

/// Renders every overlay of the plan: one highlight rectangle and one
/// tooltip box per entry. Label dimming is not drawn here; the axis
/// renderer reads it off the plan while drawing category labels.
///
/// # Arguments
/// * `painter` - The egui painter clipped to the widget area
/// * `plan` - The interaction machine's current overlay plan
/// * `settings` - Resolved widget configuration (tooltip fonts, gradient)
/// * `category_label` - Category column name, used when no tooltip label
///   text is configured
pub fn render_overlays(
    painter: &egui::Painter,
    plan: &OverlayPlan,
    settings: &ChartSettings,
    category_label: &str,
) {
    for highlight in &plan.highlights {
        painter.rect_stroke(
            highlight.rect,
            CORNER_RADIUS,
            Stroke::new(2.0, adjust_brightness(highlight.color, 1.2)),
            egui::StrokeKind::Outside,
        );
    }

    for tooltip in &plan.tooltips {
        let label = if settings.tooltip.label_text.is_empty() {
            category_label
        } else {
            settings.tooltip.label_text.as_str()
        };

        let label_font = egui::FontId::proportional(settings.tooltip.label_font_size);
        let value_font = egui::FontId::proportional(settings.tooltip.value_font_size);
        let label_text = format!("{}: {}", label, tooltip.category);
        let value_text = format!("{}: {}", tooltip.series_label, format_value(tooltip.value));

        // Measure both lines to size the box before drawing it.
        let label_galley = painter.layout_no_wrap(label_text.clone(), label_font.clone(), Color32::WHITE);
        let value_galley = painter.layout_no_wrap(value_text.clone(), value_font.clone(), Color32::WHITE);

        let padding = egui::vec2(6.0, 4.0);
        let line_gap = 2.0;
        let content = egui::vec2(
            label_galley.size().x.max(value_galley.size().x),
            label_galley.size().y + line_gap + value_galley.size().y,
        );
        let box_size = content + padding * 2.0;

        // Above the anchor when there is room, below otherwise.
        let clip = painter.clip_rect();
        let mut box_min = egui::pos2(
            tooltip.anchor.x - box_size.x * 0.5,
            tooltip.anchor.y - ANCHOR_GAP - box_size.y,
        );
        if box_min.y < clip.min.y {
            box_min.y = tooltip.anchor.y + ANCHOR_GAP;
        }
        box_min.x = box_min.x.clamp(clip.min.x, (clip.max.x - box_size.x).max(clip.min.x));
        let box_rect = Rect::from_min_size(box_min, box_size);

        draw_tooltip_background(painter, box_rect, tooltip.color, settings.tooltip.gradient);
        painter.rect_stroke(
            box_rect,
            CORNER_RADIUS,
            Stroke::new(1.0, adjust_brightness(tooltip.color, 0.8)),
            egui::StrokeKind::Outside,
        );

        let text_x = box_rect.min.x + padding.x;
        painter.galley(
            egui::pos2(text_x, box_rect.min.y + padding.y),
            label_galley,
            Color32::WHITE,
        );
        painter.galley(
            egui::pos2(
                text_x,
                box_rect.min.y + padding.y + content.y - value_galley.size().y,
            ),
            value_galley,
            Color32::WHITE,
        );
    }
}

/// Fills the tooltip box, either flat or as a vertical gradient from the
/// series color down to white.
fn draw_tooltip_background(painter: &egui::Painter, rect: Rect, color: Color32, gradient: bool) {
    if !gradient {
        painter.rect_filled(rect, CORNER_RADIUS, with_alpha(color, 230));
        return;
    }

    // Two-tone vertical gradient via per-vertex mesh colors.
    let top = with_alpha(color, 230);
    let bottom = with_alpha(Color32::WHITE, 230);
    let mut mesh = Mesh::default();
    let idx = mesh.vertices.len() as u32;
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.add_triangle(idx, idx + 1, idx + 2);
    mesh.add_triangle(idx, idx + 2, idx + 3);
    painter.add(mesh);
}
