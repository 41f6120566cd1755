//! Rendering subsystem for the chart widget:
//! - Series rendering (lines, dots, on-point value labels)
//! - Axis rendering (category labels with dimming, y ticks, grid, title)
//! - Overlay rendering (tooltips and highlight rectangles from a plan)

pub mod axis_renderer;
pub mod chart_renderer;
pub mod overlay_renderer;
