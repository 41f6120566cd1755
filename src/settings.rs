//! Configuration schema for the chart widget.
//!
//! The host hands the widget an untyped configuration object
//! (`serde_json::Value`) on every update; this module resolves it into one
//! typed [`ChartSettings`] instance with documented defaults applied for
//! every missing, unrecognized or mistyped option. The reverse direction,
//! reporting current effective settings back to the host's property-editing
//! UI, is [`ChartSettings::enumerate_properties`].
//!
//! Defaults live on the constructed instance, one per widget; there is no
//! process-wide settings object.

use egui::Color32;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::identity::SelectionKey;
use crate::palette;

/// X-axis options (`x_axis` group).
#[derive(Debug, Clone, PartialEq)]
pub struct XAxisSettings {
    /// Whether the axis (labels and padding) is rendered.
    pub show: bool,
    /// Explicit label font size; `None` scales with the viewport.
    pub font_size: Option<f32>,
}

/// Y-axis options (`y_axis` group).
#[derive(Debug, Clone, PartialEq)]
pub struct YAxisSettings {
    /// Whether the axis (ticks, grid and padding) is rendered.
    pub show: bool,
    /// Whether the axis label text is rendered.
    pub show_label: bool,
    /// Explicit tick font size; `None` scales with the viewport.
    pub font_size: Option<f32>,
    /// Explicit axis-label font size; `None` scales with the viewport.
    pub label_font_size: Option<f32>,
    /// Axis label text.
    pub label_text: String,
}

/// General view options (`general` group).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSettings {
    /// Dot radius for data points.
    pub dot_size: f32,
    /// Whether the rounded value is drawn above each dot.
    pub data_on_point: bool,
}

/// Title options (`title` group).
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSettings {
    /// Title text.
    pub text: String,
    /// Whether the title is hidden.
    pub hide: bool,
    /// Explicit title font size; `None` scales with the viewport.
    pub font_size: Option<f32>,
}

/// Tooltip options (`tooltip` group).
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSettings {
    /// Font size of the label line.
    pub label_font_size: f32,
    /// Font size of the value line.
    pub value_font_size: f32,
    /// Label line text; when empty the category column name is used.
    pub label_text: String,
    /// Whether the tooltip background fades to white.
    pub gradient: bool,
}

/// Resolved widget configuration, defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub x_axis: XAxisSettings,
    pub y_axis: YAxisSettings,
    pub general: GeneralSettings,
    pub title: TitleSettings,
    pub tooltip: TooltipSettings,
    /// Host-configured series fills, keyed by series query name.
    pub fills: BTreeMap<String, Color32>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            x_axis: XAxisSettings {
                show: true,
                font_size: None,
            },
            y_axis: YAxisSettings {
                show: true,
                show_label: false,
                font_size: None,
                label_font_size: None,
                label_text: String::new(),
            },
            general: GeneralSettings {
                dot_size: 3.5,
                data_on_point: true,
            },
            title: TitleSettings {
                text: "Analyze".to_string(),
                hide: false,
                font_size: None,
            },
            tooltip: TooltipSettings {
                label_font_size: 12.0,
                value_font_size: 14.0,
                label_text: String::new(),
                gradient: true,
            },
            fills: BTreeMap::new(),
        }
    }
}

impl ChartSettings {
    /// Resolves a host configuration object into typed settings.
    ///
    /// Recognized groups/options are read; everything missing, unrecognized
    /// or of the wrong type falls back to the documented default. The host
    /// validates option *values* before they reach the widget, so no error
    /// is surfaced here.
    pub fn from_object(config: &Value) -> Self {
        let defaults = Self::default();

        let fills = config
            .get("colors")
            .and_then(Value::as_object)
            .map(|colors| {
                colors
                    .iter()
                    .filter_map(|(series, v)| {
                        v.as_str()
                            .map(|hex| (series.clone(), palette::hex_to_color32(hex)))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            x_axis: XAxisSettings {
                show: get_bool(config, "x_axis", "show", defaults.x_axis.show),
                font_size: get_font_size(config, "x_axis", "font_size"),
            },
            y_axis: YAxisSettings {
                show: get_bool(config, "y_axis", "show", defaults.y_axis.show),
                show_label: get_bool(config, "y_axis", "show_label", defaults.y_axis.show_label),
                font_size: get_font_size(config, "y_axis", "font_size"),
                label_font_size: get_font_size(config, "y_axis", "label_font_size"),
                label_text: get_string(config, "y_axis", "label_text", &defaults.y_axis.label_text),
            },
            general: GeneralSettings {
                dot_size: get_f32(config, "general", "dot_size", defaults.general.dot_size),
                data_on_point: get_bool(
                    config,
                    "general",
                    "data_on_point",
                    defaults.general.data_on_point,
                ),
            },
            title: TitleSettings {
                text: get_string(config, "title", "text", &defaults.title.text),
                hide: get_bool(config, "title", "hide", defaults.title.hide),
                font_size: get_font_size(config, "title", "font_size"),
            },
            tooltip: TooltipSettings {
                label_font_size: get_f32(
                    config,
                    "tooltip",
                    "label_font_size",
                    defaults.tooltip.label_font_size,
                ),
                value_font_size: get_f32(
                    config,
                    "tooltip",
                    "value_font_size",
                    defaults.tooltip.value_font_size,
                ),
                label_text: get_string(
                    config,
                    "tooltip",
                    "label_text",
                    &defaults.tooltip.label_text,
                ),
                gradient: get_bool(config, "tooltip", "gradient", defaults.tooltip.gradient),
            },
            fills,
        }
    }

    /// Fill color for a series, host override first, palette cycle second.
    pub fn series_fill(&self, query_name: &str, series_index: usize) -> Color32 {
        self.fills
            .get(query_name)
            .copied()
            .unwrap_or_else(|| palette::series_color(series_index))
    }

    /// Reports current effective settings for one option group, keyed by the
    /// same option names the host configures, for its property-editing UI.
    ///
    /// The `colors` group needs per-series context (display name, resolved
    /// fill, key) and yields one instance per entry of `series`; every other
    /// group yields a single selector-less instance. An unknown group name
    /// yields nothing.
    pub fn enumerate_properties(
        &self,
        group: &str,
        series: &[SeriesProperties],
    ) -> Vec<PropertyInstance> {
        match group {
            "x_axis" => vec![PropertyInstance::plain(
                group,
                props(&[
                    ("show", json!(self.x_axis.show)),
                    ("font_size", json_font(self.x_axis.font_size)),
                ]),
            )],
            "y_axis" => vec![PropertyInstance::plain(
                group,
                props(&[
                    ("show", json!(self.y_axis.show)),
                    ("show_label", json!(self.y_axis.show_label)),
                    ("font_size", json_font(self.y_axis.font_size)),
                    ("label_font_size", json_font(self.y_axis.label_font_size)),
                    ("label_text", json!(self.y_axis.label_text)),
                ]),
            )],
            "general" => vec![PropertyInstance::plain(
                group,
                props(&[
                    ("dot_size", json!(self.general.dot_size)),
                    ("data_on_point", json!(self.general.data_on_point)),
                ]),
            )],
            "title" => vec![PropertyInstance::plain(
                group,
                props(&[
                    ("text", json!(self.title.text)),
                    ("hide", json!(self.title.hide)),
                    ("font_size", json_font(self.title.font_size)),
                ]),
            )],
            "tooltip" => vec![PropertyInstance::plain(
                group,
                props(&[
                    ("label_font_size", json!(self.tooltip.label_font_size)),
                    ("value_font_size", json!(self.tooltip.value_font_size)),
                    ("label_text", json!(self.tooltip.label_text)),
                    ("gradient", json!(self.tooltip.gradient)),
                ]),
            )],
            "colors" => series
                .iter()
                .map(|s| PropertyInstance {
                    group: group.to_string(),
                    display_name: Some(s.display_name.clone()),
                    properties: props(&[("fill", json!(palette::color32_to_hex(s.color)))]),
                    selector: Some(s.key.clone()),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Per-series context for enumerating the `colors` group.
#[derive(Debug, Clone)]
pub struct SeriesProperties {
    /// Series display name, shown in the host's property pane.
    pub display_name: String,
    /// Resolved fill color.
    pub color: Color32,
    /// The series key, returned as the instance selector.
    pub key: SelectionKey,
}

/// One enumerated settings instance, mirroring the host's property model.
#[derive(Debug, Clone)]
pub struct PropertyInstance {
    /// Option group name.
    pub group: String,
    /// Display name for per-series instances.
    pub display_name: Option<String>,
    /// Option name → current effective value.
    pub properties: Map<String, Value>,
    /// Selector binding the instance to a series, when applicable.
    pub selector: Option<SelectionKey>,
}

impl PropertyInstance {
    fn plain(group: &str, properties: Map<String, Value>) -> Self {
        Self {
            group: group.to_string(),
            display_name: None,
            properties,
            selector: None,
        }
    }
}

fn props(entries: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, value) in entries {
        map.insert((*name).to_string(), value.clone());
    }
    map
}

fn json_font(size: Option<f32>) -> Value {
    match size {
        Some(s) => json!(s),
        None => Value::Null,
    }
}

fn get_bool(config: &Value, group: &str, option: &str, default: bool) -> bool {
    config
        .get(group)
        .and_then(|g| g.get(option))
        .and_then(Value::as_bool)
        .unwrap_or(default)
}

fn get_f32(config: &Value, group: &str, option: &str, default: f32) -> f32 {
    config
        .get(group)
        .and_then(|g| g.get(option))
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(default)
}

fn get_font_size(config: &Value, group: &str, option: &str) -> Option<f32> {
    config
        .get(group)
        .and_then(|g| g.get(option))
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .filter(|v| *v > 0.0)
}

fn get_string(config: &Value, group: &str, option: &str, default: &str) -> String {
    config
        .get(group)
        .and_then(|g| g.get(option))
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_schema() {
        let settings = ChartSettings::default();
        assert!(settings.x_axis.show);
        assert!(settings.y_axis.show);
        assert!(!settings.y_axis.show_label);
        assert_eq!(settings.general.dot_size, 3.5);
        assert!(settings.general.data_on_point);
        assert_eq!(settings.title.text, "Analyze");
        assert!(!settings.title.hide);
        assert!(settings.tooltip.gradient);
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        assert_eq!(ChartSettings::from_object(&json!({})), ChartSettings::default());
    }

    #[test]
    fn test_recognized_options_override() {
        let config = json!({
            "x_axis": { "show": false, "font_size": 11.0 },
            "title": { "text": "Revenue", "hide": true },
            "general": { "dot_size": 5.0 },
        });
        let settings = ChartSettings::from_object(&config);
        assert!(!settings.x_axis.show);
        assert_eq!(settings.x_axis.font_size, Some(11.0));
        assert_eq!(settings.title.text, "Revenue");
        assert!(settings.title.hide);
        assert_eq!(settings.general.dot_size, 5.0);
        // Untouched groups keep defaults
        assert_eq!(settings.tooltip, ChartSettings::default().tooltip);
    }

    #[test]
    fn test_mistyped_option_falls_back() {
        let config = json!({
            "x_axis": { "show": "yes" },
            "general": { "dot_size": "big" },
        });
        let settings = ChartSettings::from_object(&config);
        assert!(settings.x_axis.show);
        assert_eq!(settings.general.dot_size, 3.5);
    }

    #[test]
    fn test_zero_font_size_means_auto() {
        let config = json!({ "x_axis": { "font_size": 0.0 } });
        let settings = ChartSettings::from_object(&config);
        assert_eq!(settings.x_axis.font_size, None);
    }

    #[test]
    fn test_series_fill_override_and_cycle() {
        let config = json!({ "colors": { "sales": "#112233" } });
        let settings = ChartSettings::from_object(&config);
        assert_eq!(
            settings.series_fill("sales", 0),
            palette::hex_to_color32("#112233")
        );
        assert_eq!(settings.series_fill("profit", 1), palette::series_color(1));
    }

    #[test]
    fn test_enumerate_round_trips_title() {
        let settings = ChartSettings::from_object(&json!({
            "title": { "text": "KPIs", "hide": false, "font_size": 18.0 }
        }));
        let instances = settings.enumerate_properties("title", &[]);
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].properties["text"], json!("KPIs"));
        assert_eq!(instances[0].properties["font_size"], json!(18.0));
    }

    #[test]
    fn test_enumerate_colors_per_series() {
        let settings = ChartSettings::default();
        let series = vec![
            SeriesProperties {
                display_name: "Sales".to_string(),
                color: palette::series_color(0),
                key: SelectionKey::builder().with_measure("sales").build(),
            },
            SeriesProperties {
                display_name: "Profit".to_string(),
                color: palette::series_color(1),
                key: SelectionKey::builder().with_measure("profit").build(),
            },
        ];
        let instances = settings.enumerate_properties("colors", &series);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].display_name.as_deref(), Some("Sales"));
        assert!(instances[0].selector.is_some());
    }

    #[test]
    fn test_unknown_group_is_empty() {
        let settings = ChartSettings::default();
        assert!(settings.enumerate_properties("sparkles", &[]).is_empty());
    }
}
