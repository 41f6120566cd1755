//! Domain logic for the chart widget (no UI concerns):
//! - Point catalog: the renderable data of the current render cycle
//! - Layout: scales, padding and font sizing producing immutable positions

pub mod catalog;
pub mod layout;

pub use catalog::{build_catalog, Catalog, DataPoint, DataTable, SeriesColumn, SeriesMeta};
pub use layout::{compute as compute_layout, LayoutResult, ResolvedFonts};
