//! Default colors for series and chart chrome.
//!
//! One fixed palette instead of a theme system: the host's property pane is
//! the styling surface, so the widget only needs sensible defaults to cycle
//! through until the host overrides a series fill.

use egui::Color32;
use once_cell::sync::Lazy;

/// Default fill cycle for series without a host-configured color.
/// The first entry is the original default series blue.
pub static DEFAULT_SERIES_COLORS: Lazy<Vec<Color32>> = Lazy::new(|| {
    vec![
        hex_to_color32("#5065B6"),
        hex_to_color32("#E8663C"),
        hex_to_color32("#45A187"),
        hex_to_color32("#C9A227"),
        hex_to_color32("#8D5AA8"),
        hex_to_color32("#C75D7E"),
    ]
});

/// Fill color for series `index`, cycling through the default palette.
pub fn series_color(index: usize) -> Color32 {
    DEFAULT_SERIES_COLORS[index % DEFAULT_SERIES_COLORS.len()]
}

/// Axis/label text color.
pub const AXIS_TEXT: Color32 = Color32::from_gray(90);

/// Grid line color.
pub const GRID_LINE: Color32 = Color32::from_gray(210);

/// Title text color.
pub const TITLE_TEXT: Color32 = Color32::from_gray(60);

/// Converts a `#RRGGBB` hex string to a Color32, falling back to black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Formats a color back to `#RRGGBB` for property enumeration.
pub fn color32_to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = hex_to_color32("#5065B6");
        assert_eq!(color32_to_hex(color), "#5065B6");
    }

    #[test]
    fn test_malformed_hex_falls_back_to_black() {
        assert_eq!(hex_to_color32("oops"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_palette_cycles() {
        let n = DEFAULT_SERIES_COLORS.len();
        assert_eq!(series_color(0), series_color(n));
    }
}
