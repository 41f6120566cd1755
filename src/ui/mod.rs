//! UI layer of the chart widget:
//! - Chart panel (the embeddable `ChartView` widget)

pub mod chart_panel;

pub use chart_panel::ChartView;
