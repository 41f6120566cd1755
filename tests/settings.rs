//! Configuration schema round-trips through the public API.

use serde_json::json;

use dotchart::{ChartSettings, SelectionKey, SeriesProperties};

#[test]
fn test_defaults_apply_for_missing_and_unrecognized_options() {
    let config = json!({
        "general": { "dot_size": 6.0, "unknown_option": 42 },
        "not_a_group": { "show": false },
    });
    let settings = ChartSettings::from_object(&config);

    assert_eq!(settings.general.dot_size, 6.0);
    // Unrecognized content changes nothing else
    let defaults = ChartSettings::default();
    assert_eq!(settings.x_axis, defaults.x_axis);
    assert_eq!(settings.y_axis, defaults.y_axis);
    assert_eq!(settings.title, defaults.title);
    assert_eq!(settings.tooltip, defaults.tooltip);
}

#[test]
fn test_enumeration_reports_effective_values_per_group() {
    let config = json!({
        "y_axis": { "show": false, "label_text": "Units", "show_label": true },
        "tooltip": { "gradient": false, "label_font_size": 10.0 },
    });
    let settings = ChartSettings::from_object(&config);

    let y_axis = settings.enumerate_properties("y_axis", &[]);
    assert_eq!(y_axis.len(), 1);
    assert_eq!(y_axis[0].properties["show"], json!(false));
    assert_eq!(y_axis[0].properties["show_label"], json!(true));
    assert_eq!(y_axis[0].properties["label_text"], json!("Units"));
    assert!(y_axis[0].selector.is_none());

    let tooltip = settings.enumerate_properties("tooltip", &[]);
    assert_eq!(tooltip[0].properties["gradient"], json!(false));
    assert_eq!(tooltip[0].properties["label_font_size"], json!(10.0));
}

#[test]
fn test_color_enumeration_round_trips_host_fills() {
    let config = json!({ "colors": { "sales": "#336699" } });
    let settings = ChartSettings::from_object(&config);

    let series = vec![SeriesProperties {
        display_name: "Sales".to_string(),
        color: settings.series_fill("sales", 0),
        key: SelectionKey::builder().with_measure("sales").build(),
    }];
    let instances = settings.enumerate_properties("colors", &series);

    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].display_name.as_deref(), Some("Sales"));
    assert_eq!(instances[0].properties["fill"], json!("#336699"));
    assert_eq!(
        instances[0].selector.as_ref().map(|k| k.selector()),
        Some("measure:sales".to_string())
    );
}

#[test]
fn test_parse_enumerate_parse_is_stable() {
    let config = json!({
        "title": { "text": "Quarterly", "hide": true, "font_size": 20.0 },
    });
    let settings = ChartSettings::from_object(&config);
    let instances = settings.enumerate_properties("title", &[]);

    // Feeding the enumerated values back as a config object reproduces the
    // same resolved settings.
    let round_tripped = ChartSettings::from_object(&json!({
        "title": instances[0].properties.clone(),
    }));
    assert_eq!(round_tripped.title, settings.title);
}
