//! Overlay plan data structures.
//!
//! An [`OverlayPlan`] is the complete description of every interaction
//! overlay that must exist right now: tooltips, highlight rectangles and
//! axis-label dimming. Plans are ephemeral: rebuilt from scratch by the
//! interaction machine on every state change and consumed immediately by
//! the overlay renderer. There is no incremental patching; the previous
//! plan is discarded, never diffed.

use egui::{Color32, Pos2, Rect};
use std::collections::BTreeSet;

use crate::identity::SelectionKey;

/// One tooltip to draw, anchored at its point's screen position.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOverlay {
    /// Key of the point the tooltip belongs to.
    pub key: SelectionKey,
    /// Screen anchor (the dot center).
    pub anchor: Pos2,
    /// Series display name.
    pub series_label: String,
    /// Category label.
    pub category: String,
    /// Sample value.
    pub value: f64,
    /// Series color (tooltip background).
    pub color: Color32,
}

/// One highlight rectangle to draw around a point's dot.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOverlay {
    /// Key of the highlighted point.
    pub key: SelectionKey,
    /// Screen rectangle enclosing the dot.
    pub rect: Rect,
    /// Series color (highlight stroke).
    pub color: Color32,
}

/// Axis-label dimming: while active, every category label is dimmed except
/// the exempt point indices (those of selected points).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDimming {
    /// Whether dimming applies at all.
    pub active: bool,
    /// Point indices whose labels keep full opacity.
    pub exempt: BTreeSet<usize>,
}

/// The full set of overlays for the current interaction state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayPlan {
    /// Tooltips to draw.
    pub tooltips: Vec<TooltipOverlay>,
    /// Highlight rectangles to draw.
    pub highlights: Vec<HighlightOverlay>,
    /// Axis-label dimming state.
    pub dimming: LabelDimming,
}

impl OverlayPlan {
    /// The plan of the idle state: nothing to draw.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the plan draws nothing at all.
    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty() && self.highlights.is_empty() && !self.dimming.active
    }
}
