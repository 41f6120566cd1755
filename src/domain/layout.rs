//! Chart layout: scales, padding and font sizing.
//!
//! Layout is a pure function of (viewport, settings, catalog) producing an
//! immutable [`LayoutResult`]. Point positions are keyed by selection key,
//! never stored on the points themselves, so layout output and interaction
//! state share nothing mutable.

use egui::{Pos2, Rect};
use std::collections::HashMap;

use crate::domain::catalog::{Catalog, DataPoint};
use crate::identity::SelectionKey;
use crate::settings::ChartSettings;

/// Viewport-relative font multipliers, applied to min(width, height).
const X_AXIS_FONT_MULTIPLIER: f32 = 0.042;
const Y_AXIS_FONT_MULTIPLIER: f32 = 0.039;
const TITLE_FONT_MULTIPLIER: f32 = 0.05;
const VALUE_LABEL_FONT_MULTIPLIER: f32 = 0.042;

/// Padding ratios of the plot area.
const PADDING_TOP_RATIO: f32 = 0.16;
const PADDING_BOTTOM_RATIO: f32 = 0.12;
const PADDING_SIDE_RATIO: f32 = 0.045;
/// Bottom padding when the x axis is hidden.
const HIDDEN_X_AXIS_PADDING: f32 = 20.0;
/// Extra margin between the top of the y range and the plot top.
const Y_AXIS_MARGIN_RATIO: f32 = 0.035;

/// Band padding of the category scale (fraction of a step left empty).
const BAND_PADDING: f32 = 0.6;

/// Number of y-axis tick intervals.
const Y_TICK_INTERVALS: usize = 4;

/// Resolved font sizes for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFonts {
    pub x_axis: f32,
    pub y_axis: f32,
    pub y_label: f32,
    pub title: f32,
    pub value_label: f32,
}

/// Immutable layout of one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Plot area after padding, in screen coordinates.
    plot_rect: Rect,
    /// Resolved font sizes.
    fonts: ResolvedFonts,
    /// Screen position per point key. When several points share a key the
    /// first one in catalog order keeps its position (first match wins).
    positions: HashMap<SelectionKey, Pos2>,
    /// Category label anchor per point index.
    label_anchors: Vec<Pos2>,
    /// Y grid/tick rows: (screen y, tick value), bottom to top.
    y_ticks: Vec<(f32, f64)>,
    /// Width of one category band.
    band_width: f32,
    /// Title anchor.
    title_pos: Pos2,
}

impl LayoutResult {
    /// Plot area after padding.
    pub fn plot_rect(&self) -> Rect {
        self.plot_rect
    }

    /// Resolved font sizes.
    pub fn fonts(&self) -> ResolvedFonts {
        self.fonts
    }

    /// Screen position of the point with `key`, if it was laid out.
    pub fn position_of(&self, key: &SelectionKey) -> Option<Pos2> {
        self.positions.get(key).copied()
    }

    /// Anchor of the category label at `point_index`.
    pub fn label_anchor(&self, point_index: usize) -> Option<Pos2> {
        self.label_anchors.get(point_index).copied()
    }

    /// All category label anchors, by point index.
    pub fn label_anchors(&self) -> &[Pos2] {
        &self.label_anchors
    }

    /// Y tick rows as (screen y, value).
    pub fn y_ticks(&self) -> &[(f32, f64)] {
        &self.y_ticks
    }

    /// Width of one category band.
    pub fn band_width(&self) -> f32 {
        self.band_width
    }

    /// Title anchor.
    pub fn title_pos(&self) -> Pos2 {
        self.title_pos
    }

    /// First catalog point whose dot contains `pos` (within `slop` extra
    /// pixels). Catalog iteration order breaks ties.
    pub fn hit_test<'a>(&self, catalog: &'a Catalog, pos: Pos2, slop: f32) -> Option<&'a DataPoint> {
        catalog.points().iter().find(|p| {
            self.positions
                .get(&p.key)
                .map(|center| center.distance(pos) <= p.radius + slop)
                .unwrap_or(false)
        })
    }
}

/// Computes the layout for one render cycle.
///
/// Mirrors the classic band/linear scale pair: categories spread over the
/// plot width with band padding, values mapped linearly from `data_max`
/// (top) to zero (baseline). Hidden axes give their padding back to the
/// plot.
pub fn compute(viewport: Rect, settings: &ChartSettings, catalog: &Catalog) -> LayoutResult {
    let width = viewport.width();
    let height = viewport.height();
    let font_base = width.min(height);

    let fonts = ResolvedFonts {
        x_axis: settings
            .x_axis
            .font_size
            .unwrap_or(font_base * X_AXIS_FONT_MULTIPLIER),
        y_axis: settings
            .y_axis
            .font_size
            .unwrap_or(font_base * Y_AXIS_FONT_MULTIPLIER),
        y_label: settings
            .y_axis
            .label_font_size
            .unwrap_or(font_base * Y_AXIS_FONT_MULTIPLIER),
        title: settings
            .title
            .font_size
            .unwrap_or(font_base * TITLE_FONT_MULTIPLIER),
        value_label: font_base * VALUE_LABEL_FONT_MULTIPLIER,
    };

    let padding_top = height * PADDING_TOP_RATIO;
    let padding_bottom = if settings.x_axis.show {
        height * PADDING_BOTTOM_RATIO
    } else {
        HIDDEN_X_AXIS_PADDING
    };
    let (padding_left, padding_right) = if settings.y_axis.show {
        (width * PADDING_SIDE_RATIO, width * PADDING_SIDE_RATIO)
    } else {
        (0.0, 0.0)
    };

    let plot_rect = Rect::from_min_max(
        Pos2::new(viewport.min.x + padding_left, viewport.min.y + padding_top),
        Pos2::new(
            viewport.max.x - padding_right,
            viewport.max.y - padding_bottom,
        ),
    );

    let axis_margin = height * Y_AXIS_MARGIN_RATIO;
    let y_range = (plot_rect.height() - axis_margin).max(0.0);
    let data_max = catalog.data_max();

    // Linear y scale: data_max at the top of the range, zero at the baseline.
    let y_of = |value: f64| -> f32 {
        if data_max > 0.0 {
            let t = ((data_max - value) / data_max) as f32;
            plot_rect.min.y + t * y_range
        } else {
            plot_rect.min.y + y_range
        }
    };

    // Band x scale over categories.
    let n = catalog.categories().len();
    let band_step = if n > 0 {
        plot_rect.width() / (n as f32 + BAND_PADDING)
    } else {
        0.0
    };
    let band_width = band_step * (1.0 - BAND_PADDING);
    let band_start = |point_index: usize| -> f32 {
        plot_rect.min.x + BAND_PADDING * band_step + point_index as f32 * band_step
    };

    let mut positions = HashMap::with_capacity(catalog.points().len());
    for point in catalog.points() {
        let center = Pos2::new(
            band_start(point.point_index) + band_width * 0.5,
            y_of(point.value),
        );
        // First point in catalog order keeps its position on key collision.
        positions.entry(point.key.clone()).or_insert(center);
    }

    let label_anchors = (0..n)
        .map(|i| {
            Pos2::new(
                band_start(i) + band_width * 0.5,
                plot_rect.max.y + fonts.x_axis * 0.5,
            )
        })
        .collect();

    let y_ticks = if data_max > 0.0 {
        (0..=Y_TICK_INTERVALS)
            .map(|i| {
                let value = data_max * i as f64 / Y_TICK_INTERVALS as f64;
                (y_of(value), value)
            })
            .collect()
    } else {
        Vec::new()
    };

    let title_pos = Pos2::new(
        viewport.min.x + (padding_left - 9.0).max(0.0),
        viewport.min.y + fonts.y_axis * 2.0,
    );

    LayoutResult {
        plot_rect,
        fonts,
        positions,
        label_anchors,
        y_ticks,
        band_width,
        title_pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{build_catalog, DataTable, SeriesColumn};

    fn viewport() -> Rect {
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(800.0, 500.0))
    }

    fn catalog_abc() -> Catalog {
        let mut table = DataTable::new(
            "Month",
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
        );
        table.push_series(SeriesColumn::new(
            "Sales",
            "sales",
            vec![Some(1.0), Some(5.0), Some(3.0)],
        ));
        build_catalog(&table, &ChartSettings::default())
    }

    #[test]
    fn test_every_point_gets_a_position() {
        let catalog = catalog_abc();
        let layout = compute(viewport(), &ChartSettings::default(), &catalog);
        for point in catalog.points() {
            assert!(layout.position_of(&point.key).is_some());
        }
        assert_eq!(layout.label_anchors().len(), 3);
    }

    #[test]
    fn test_higher_values_sit_higher() {
        let catalog = catalog_abc();
        let layout = compute(viewport(), &ChartSettings::default(), &catalog);
        let [a, b, c] = [0, 1, 2].map(|i| {
            layout
                .position_of(&catalog.points()[i].key)
                .expect("laid out")
        });
        // values 1, 5, 3: B highest on screen (smallest y), A lowest
        assert!(b.y < c.y);
        assert!(c.y < a.y);
        // categories run left to right
        assert!(a.x < b.x && b.x < c.x);
    }

    #[test]
    fn test_font_sizes_follow_viewport_multipliers() {
        let layout = compute(viewport(), &ChartSettings::default(), &catalog_abc());
        let base = 500.0_f32;
        assert_eq!(layout.fonts().x_axis, base * X_AXIS_FONT_MULTIPLIER);
        assert_eq!(layout.fonts().title, base * TITLE_FONT_MULTIPLIER);
    }

    #[test]
    fn test_explicit_font_size_wins() {
        let mut settings = ChartSettings::default();
        settings.x_axis.font_size = Some(11.0);
        let layout = compute(viewport(), &settings, &catalog_abc());
        assert_eq!(layout.fonts().x_axis, 11.0);
    }

    #[test]
    fn test_hidden_axes_release_padding() {
        let catalog = catalog_abc();
        let shown = compute(viewport(), &ChartSettings::default(), &catalog);

        let mut settings = ChartSettings::default();
        settings.x_axis.show = false;
        settings.y_axis.show = false;
        let hidden = compute(viewport(), &settings, &catalog);

        assert!(hidden.plot_rect().width() > shown.plot_rect().width());
        assert!(hidden.plot_rect().height() > shown.plot_rect().height());
        assert_eq!(hidden.plot_rect().min.x, 0.0);
        assert_eq!(hidden.plot_rect().max.y, 500.0 - HIDDEN_X_AXIS_PADDING);
    }

    #[test]
    fn test_y_ticks_span_zero_to_max() {
        let layout = compute(viewport(), &ChartSettings::default(), &catalog_abc());
        let ticks = layout.y_ticks();
        assert_eq!(ticks.len(), Y_TICK_INTERVALS + 1);
        assert_eq!(ticks.first().unwrap().1, 0.0);
        assert_eq!(ticks.last().unwrap().1, 5.0);
        // zero tick is the lowest on screen
        assert!(ticks.first().unwrap().0 > ticks.last().unwrap().0);
    }

    #[test]
    fn test_hit_test_first_match_wins() {
        let catalog = catalog_abc();
        let layout = compute(viewport(), &ChartSettings::default(), &catalog);
        let b = &catalog.points()[1];
        let pos = layout.position_of(&b.key).unwrap();
        let hit = layout.hit_test(&catalog, pos, 0.0).expect("hit");
        assert_eq!(hit.key, b.key);

        // Far away from everything: no hit
        assert!(layout
            .hit_test(&catalog, Pos2::new(-100.0, -100.0), 0.0)
            .is_none());
    }

    #[test]
    fn test_determinism() {
        let catalog = catalog_abc();
        let settings = ChartSettings::default();
        assert_eq!(
            compute(viewport(), &settings, &catalog),
            compute(viewport(), &settings, &catalog)
        );
    }
}
