//! The interaction state machine.
//!
//! Ties pointer events (hover, click, modifier-click multi-select) to the
//! host's persistent selection set and derives the [`OverlayPlan`] every
//! overlay on screen comes from. The machine has three per-widget states,
//! derived from (hovered key, mirrored selection):
//!
//! - **Idle**: nothing hovered, selection empty; no overlays.
//! - **Hovering**: pointer over exactly one point while the selection is
//!   empty; tooltip + highlight for that point only.
//! - **Selected**: selection non-empty; tooltip + highlight for every
//!   selected point that resolves in the current catalog. Hover is fully
//!   suppressed; selection is sticky and always wins.
//!
//! There is no optimistic update anywhere: selection mutations go to the
//! host and the mirror changes only when the host confirms. After every
//! redraw the host's current set is re-read and every overlay is rebuilt
//! from scratch by [`InteractionMachine::resync`]; stale keys simply
//! resolve to nothing.

use egui::Rect;
use log::debug;

use crate::domain::catalog::{Catalog, DataPoint};
use crate::domain::layout::LayoutResult;
use crate::host::SelectionHost;
use crate::identity::{SelectionKey, SelectionSet};
use crate::state::overlay_plan::{HighlightOverlay, LabelDimming, OverlayPlan, TooltipOverlay};
use crate::state::selection::SelectionState;

/// Extra pixels a highlight rectangle extends past the dot radius.
const HIGHLIGHT_PADDING: f32 = 3.0;

/// Derived machine state, for callers that want to inspect it.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionMode {
    /// No point hovered or selected.
    Idle,
    /// Pointer over one point, selection empty.
    Hovering(SelectionKey),
    /// Selection non-empty (hover suppressed).
    Selected(SelectionSet),
}

/// The widget's interaction state machine.
#[derive(Debug, Clone, Default)]
pub struct InteractionMachine {
    selection: SelectionState,
}

impl InteractionMachine {
    /// Creates an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current derived state. Selection takes precedence over hover.
    pub fn mode(&self) -> InteractionMode {
        if self.selection.has_selection() {
            InteractionMode::Selected(self.selection.selected().clone())
        } else if let Some(key) = self.selection.hovered() {
            InteractionMode::Hovering(key.clone())
        } else {
            InteractionMode::Idle
        }
    }

    /// The mirrored selection set.
    pub fn selected(&self) -> &SelectionSet {
        self.selection.selected()
    }

    // ===== Event entry points =====
    // Every handler checks host interactivity first and no-ops when the
    // hosting surface disallows interactions.

    /// Redraw entry point: re-reads the host's persistent selection before
    /// overlays are rebuilt against a fresh catalog.
    pub fn sync_from_host(&mut self, host: &dyn SelectionHost) {
        self.selection.adopt_confirmation(host.selection());
    }

    /// Pointer entered point `key`.
    pub fn pointer_entered(&mut self, key: SelectionKey, host: &dyn SelectionHost) {
        if !host.allow_interactions() {
            return;
        }
        self.selection.set_hovered(key);
    }

    /// Pointer left point `key`.
    pub fn pointer_left(&mut self, key: &SelectionKey, host: &dyn SelectionHost) {
        if !host.allow_interactions() {
            return;
        }
        self.selection.clear_hovered(key);
    }

    /// Pointer left the plot area entirely.
    pub fn pointer_exited_plot(&mut self, host: &dyn SelectionHost) {
        if !host.allow_interactions() {
            return;
        }
        self.selection.reset_hover();
    }

    /// Click on point `key`; `multi` is the multi-select modifier.
    ///
    /// Requests the mutation from the host and adopts the confirmed set; an
    /// unconfirmed request (`None`) leaves the machine in its prior state.
    ///
    /// # Returns
    /// True when the click was processed and must not propagate to the
    /// background deselect handler, i.e. whenever interactions are
    /// allowed, confirmed or not.
    pub fn point_clicked(
        &mut self,
        key: &SelectionKey,
        multi: bool,
        host: &mut dyn SelectionHost,
    ) -> bool {
        if !host.allow_interactions() {
            return false;
        }

        match host.select(key, multi) {
            Some(confirmed) => {
                debug!("click confirmed: {} key(s) selected", confirmed.len());
                self.selection.adopt_confirmation(confirmed);
            }
            None => {
                debug!("click unconfirmed, keeping prior state");
            }
        }
        true
    }

    /// Click on the plot background (no point hit): requests deselection.
    pub fn background_clicked(&mut self, host: &mut dyn SelectionHost) {
        if !host.allow_interactions() {
            return;
        }

        if let Some(confirmed) = host.clear_selection() {
            self.selection.adopt_confirmation(confirmed);
        }
    }

    // ===== Overlay resynchronization =====

    /// Rebuilds the overlay plan from scratch for the current state.
    ///
    /// Pure with respect to machine state: the same (state, catalog,
    /// layout) always yields the same plan. Selected keys are resolved
    /// against the catalog by structural equality; a key without a
    /// matching point (data dropped that category or series) contributes no
    /// overlay and stays in the mirrored set until the host clears it.
    pub fn resync(&self, catalog: &Catalog, layout: &LayoutResult) -> OverlayPlan {
        if self.selection.has_selection() {
            // Selected state: one overlay pair per resolved key, hover
            // ignored. First match in catalog order wins per key.
            let mut plan = OverlayPlan::empty();
            plan.dimming = LabelDimming {
                active: true,
                exempt: Default::default(),
            };

            for key in self.selection.selected().iter() {
                let Some(point) = catalog.find_by_key(key) else {
                    continue;
                };
                if let Some((tooltip, highlight)) = overlays_for(point, catalog, layout) {
                    plan.tooltips.push(tooltip);
                    plan.highlights.push(highlight);
                    plan.dimming.exempt.insert(point.point_index);
                }
            }
            return plan;
        }

        if let Some(hovered) = self.selection.hovered() {
            // Hovering state: overlays for the hovered point only, no
            // dimming. A hovered key that no longer resolves draws nothing.
            let mut plan = OverlayPlan::empty();
            if let Some(point) = catalog.find_by_key(hovered) {
                if let Some((tooltip, highlight)) = overlays_for(point, catalog, layout) {
                    plan.tooltips.push(tooltip);
                    plan.highlights.push(highlight);
                }
            }
            return plan;
        }

        OverlayPlan::empty()
    }
}

/// Builds the tooltip/highlight pair for one point, if it was laid out.
fn overlays_for(
    point: &DataPoint,
    catalog: &Catalog,
    layout: &LayoutResult,
) -> Option<(TooltipOverlay, HighlightOverlay)> {
    let anchor = layout.position_of(&point.key)?;
    let series_label = catalog
        .series()
        .get(point.series_index)
        .map(|s| s.display_name.clone())
        .unwrap_or_default();

    let tooltip = TooltipOverlay {
        key: point.key.clone(),
        anchor,
        series_label,
        category: point.category.clone(),
        value: point.value,
        color: point.color,
    };
    let half = point.radius + HIGHLIGHT_PADDING;
    let highlight = HighlightOverlay {
        key: point.key.clone(),
        rect: Rect::from_center_size(anchor, egui::vec2(half * 2.0, half * 2.0)),
        color: point.color,
    };
    Some((tooltip, highlight))
}
