//! State management modules for the chart widget.
//!
//! This module contains state-only logic (no UI concerns):
//! - Selection state (mirrored host selection, hovered key)
//! - Interaction state machine (hover/click transitions, overlay resync)
//! - Overlay plan (the machine's complete output per state change)

mod interaction;
mod overlay_plan;
mod selection;

pub use interaction::{InteractionMachine, InteractionMode};
pub use overlay_plan::{HighlightOverlay, LabelDimming, OverlayPlan, TooltipOverlay};
pub use selection::SelectionState;
