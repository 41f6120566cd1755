//! dotchart crate root: re-exports and module wiring.
//!
//! An embeddable interactive line/point chart widget for egui hosts. The
//! host loads, sizes and feeds the widget on every frame; the widget owns
//! no data and no persistent selection. It mirrors the host's selection
//! set and derives all interaction overlays from it.
//!
//! The crate is organized into cohesive modules:
//! - `identity`: selection key value types (cross-redraw point identity)
//! - `host`: the host-facing selection protocol + reference implementation
//! - `settings`: configuration schema, defaults and property enumeration
//! - `palette`: default series colors
//! - `domain`: point catalog and layout (pure, UI-free)
//! - `state`: selection mirror, interaction state machine, overlay plan
//! - `rendering`: series, axis and overlay drawing
//! - `ui`: the embeddable `ChartView` widget
//! - `utils`: value formatting helpers

pub mod identity;
pub mod host;
pub mod settings;
pub mod palette;
pub mod domain;
pub mod state;
pub mod rendering;
pub mod ui;
pub mod utils;

// Public re-exports for a compact external API
pub use identity::{KeyPart, SelectionKey, SelectionKeyBuilder, SelectionSet};
pub use host::{MemorySelectionHost, SelectionHost};
pub use settings::{ChartSettings, PropertyInstance, SeriesProperties};
pub use domain::{build_catalog, Catalog, DataPoint, DataTable, SeriesColumn, SeriesMeta};
pub use domain::{compute_layout, LayoutResult};
pub use state::{InteractionMachine, InteractionMode, OverlayPlan};
pub use ui::ChartView;
