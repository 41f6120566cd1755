//! Point catalog: the renderable data of one render cycle.
//!
//! The host pushes a [`DataTable`] on every update; [`build_catalog`] turns
//! it into the flat, ordered [`Catalog`] of [`DataPoint`]s the interaction
//! machine and renderers work against. Catalogs are owned by the render
//! cycle that built them; every update rebuilds from scratch and point
//! objects are never reused, so selection keys are the only identity that
//! survives a redraw.

use egui::Color32;
use log::warn;

use crate::identity::SelectionKey;
use crate::settings::ChartSettings;

/// One series column of the host's data table.
#[derive(Debug, Clone)]
pub struct SeriesColumn {
    /// Display name, shown in tooltips and the host's property pane.
    pub display_name: String,
    /// Query name, the stable column identifier fills are keyed by.
    pub query_name: String,
    /// Series-level selection key.
    pub series_key: SelectionKey,
    /// One value per category; `None` marks a missing sample.
    pub values: Vec<Option<f64>>,
    /// Per-point selection keys aligned with the table's categories.
    /// Empty means "derive from the series key and category label".
    pub point_keys: Vec<SelectionKey>,
    /// Host-computed column maximum, when available.
    pub max: Option<f64>,
}

impl SeriesColumn {
    /// Creates a column whose series key is built from the query name and
    /// whose point keys are derived per category.
    pub fn new(display_name: &str, query_name: &str, values: Vec<Option<f64>>) -> Self {
        Self {
            display_name: display_name.to_string(),
            query_name: query_name.to_string(),
            series_key: SelectionKey::builder().with_measure(query_name).build(),
            values,
            point_keys: Vec::new(),
            max: None,
        }
    }

    /// Replaces the derived point keys with host-issued ones.
    pub fn with_point_keys(mut self, point_keys: Vec<SelectionKey>) -> Self {
        self.point_keys = point_keys;
        self
    }

    /// Sets the host-computed column maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Tabular input for one redraw: series × categories → numeric values.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    /// Display name of the category column.
    pub category_label: String,
    /// Ordered category labels (the x axis).
    pub categories: Vec<String>,
    /// Series columns.
    pub series: Vec<SeriesColumn>,
}

impl DataTable {
    /// Creates a table over the given categories.
    pub fn new(category_label: &str, categories: Vec<String>) -> Self {
        Self {
            category_label: category_label.to_string(),
            categories,
            series: Vec::new(),
        }
    }

    /// Appends a series column.
    pub fn push_series(&mut self, column: SeriesColumn) {
        self.series.push(column);
    }

    /// A table with no categories or no series is the normal empty state.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty()
    }
}

/// One renderable sample.
///
/// Screen coordinates are deliberately absent: layout output lives in a
/// separate immutable structure keyed by `key`, so interaction code never
/// shares mutable position state with layout code.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Index of the series this point belongs to.
    pub series_index: usize,
    /// Position within the series (== category index).
    pub point_index: usize,
    /// Category label.
    pub category: String,
    /// Sample value.
    pub value: f64,
    /// Resolved series color.
    pub color: Color32,
    /// Selection key; equality with this key is the only valid match
    /// across redraws.
    pub key: SelectionKey,
    /// Dot radius from settings.
    pub radius: f32,
}

/// Per-series metadata of the current cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMeta {
    /// Index of the series in table order.
    pub series_index: usize,
    /// Display name.
    pub display_name: String,
    /// Query name (fill lookup key).
    pub query_name: String,
    /// Series-level selection key.
    pub key: SelectionKey,
    /// Resolved series color.
    pub color: Color32,
}

/// Flat, ordered collection of the render cycle's points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    series: Vec<SeriesMeta>,
    points: Vec<DataPoint>,
    data_max: f64,
    category_label: String,
    categories: Vec<String>,
}

impl Catalog {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, series-major, category order within a series.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Per-series metadata in table order.
    pub fn series(&self) -> &[SeriesMeta] {
        &self.series
    }

    /// Points of one series, in category order.
    pub fn points_of_series(&self, series_index: usize) -> impl Iterator<Item = &DataPoint> {
        self.points
            .iter()
            .filter(move |p| p.series_index == series_index)
    }

    /// First point matching `key` in iteration order.
    ///
    /// Several points may legitimately carry equal keys after a redraw;
    /// first-match-wins is the documented tie-break.
    pub fn find_by_key(&self, key: &SelectionKey) -> Option<&DataPoint> {
        self.points.iter().find(|p| &p.key == key)
    }

    /// Largest value of the table (y-scale domain top).
    pub fn data_max(&self) -> f64 {
        self.data_max
    }

    /// Display name of the category column.
    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    /// Ordered category labels.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Builds the catalog for one render cycle. Pure and deterministic: equal
/// table + settings always produce an equal catalog.
///
/// Malformed points (missing or non-finite values, or a host-supplied key
/// list that does not cover the point's index) are excluded silently; they
/// cannot be hovered, clicked or highlighted.
pub fn build_catalog(table: &DataTable, settings: &ChartSettings) -> Catalog {
    if table.is_empty() {
        return Catalog::default();
    }

    let mut series = Vec::with_capacity(table.series.len());
    let mut points = Vec::new();
    let mut data_max = f64::NEG_INFINITY;
    let mut dropped = 0usize;

    for (series_index, column) in table.series.iter().enumerate() {
        let color = settings.series_fill(&column.query_name, series_index);

        series.push(SeriesMeta {
            series_index,
            display_name: column.display_name.clone(),
            query_name: column.query_name.clone(),
            key: column.series_key.clone(),
            color,
        });

        if let Some(max) = column.max {
            data_max = data_max.max(max);
        }

        for (point_index, category) in table.categories.iter().enumerate() {
            let value = match column.values.get(point_index).copied().flatten() {
                Some(v) if v.is_finite() => v,
                _ => {
                    dropped += 1;
                    continue;
                }
            };

            let key = if column.point_keys.is_empty() {
                column.series_key.with_category(category)
            } else {
                match column.point_keys.get(point_index) {
                    Some(k) => k.clone(),
                    None => {
                        // Host issued keys but not for this point: treat the
                        // point as malformed rather than invent an identity.
                        dropped += 1;
                        continue;
                    }
                }
            };

            if column.max.is_none() {
                data_max = data_max.max(value);
            }

            points.push(DataPoint {
                series_index,
                point_index,
                category: category.clone(),
                value,
                color,
                key,
                radius: settings.general.dot_size,
            });
        }
    }

    if dropped > 0 {
        warn!("catalog: dropped {} malformed point(s)", dropped);
    }

    Catalog {
        series,
        points,
        data_max: if data_max.is_finite() { data_max } else { 0.0 },
        category_label: table.category_label.clone(),
        categories: table.categories.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_abc() -> DataTable {
        let mut table = DataTable::new(
            "Month",
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        );
        table.push_series(SeriesColumn::new(
            "Sales",
            "sales",
            vec![Some(1.0), Some(5.0), Some(3.0)],
        ));
        table
    }

    #[test]
    fn test_empty_table_builds_empty_catalog() {
        let catalog = build_catalog(&DataTable::default(), &ChartSettings::default());
        assert!(catalog.is_empty());
        assert_eq!(catalog.data_max(), 0.0);
    }

    #[test]
    fn test_points_carry_indices_and_keys() {
        let catalog = build_catalog(&table_abc(), &ChartSettings::default());
        assert_eq!(catalog.points().len(), 3);
        assert_eq!(catalog.data_max(), 5.0);

        let b = &catalog.points()[1];
        assert_eq!(b.series_index, 0);
        assert_eq!(b.point_index, 1);
        assert_eq!(b.category, "B");
        assert_eq!(b.value, 5.0);

        let expected_key = SelectionKey::builder()
            .with_measure("sales")
            .with_category("B")
            .build();
        assert_eq!(b.key, expected_key);
        assert_eq!(catalog.find_by_key(&expected_key), Some(b));
    }

    #[test]
    fn test_determinism() {
        let table = table_abc();
        let settings = ChartSettings::default();
        assert_eq!(build_catalog(&table, &settings), build_catalog(&table, &settings));
    }

    #[test]
    fn test_missing_and_non_finite_values_excluded() {
        let mut table = DataTable::new(
            "Month",
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        );
        table.push_series(SeriesColumn::new(
            "Sales",
            "sales",
            vec![Some(1.0), None, Some(f64::NAN)],
        ));

        let catalog = build_catalog(&table, &ChartSettings::default());
        assert_eq!(catalog.points().len(), 1);
        assert_eq!(catalog.points()[0].category, "A");
    }

    #[test]
    fn test_short_host_key_list_excludes_tail_points() {
        let mut table = table_abc();
        let only_a = SelectionKey::builder()
            .with_measure("sales")
            .with_category("A")
            .build();
        table.series[0] = table.series[0].clone().with_point_keys(vec![only_a.clone()]);

        let catalog = build_catalog(&table, &ChartSettings::default());
        assert_eq!(catalog.points().len(), 1);
        assert_eq!(catalog.points()[0].key, only_a);
    }

    #[test]
    fn test_host_max_wins_over_scan() {
        let mut table = table_abc();
        table.series[0] = table.series[0].clone().with_max(10.0);
        let catalog = build_catalog(&table, &ChartSettings::default());
        assert_eq!(catalog.data_max(), 10.0);
    }

    #[test]
    fn test_series_colors_follow_settings() {
        let settings = ChartSettings::from_object(&serde_json::json!({
            "colors": { "sales": "#112233" }
        }));
        let catalog = build_catalog(&table_abc(), &settings);
        assert_eq!(
            catalog.series()[0].color,
            crate::palette::hex_to_color32("#112233")
        );
        assert_eq!(catalog.points()[0].color, catalog.series()[0].color);
    }
}
