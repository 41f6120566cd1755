//! Selection and hover state.
//!
//! The widget never owns the persistent selection; the host does. This
//! module keeps the widget's *mirror* of the host's confirmed selection
//! plus the transient hovered key. The mirror changes only when a host
//! confirmation arrives (or on redraw, when the host's current set is
//! re-read); it is never mutated optimistically.

use crate::identity::{SelectionKey, SelectionSet};

/// Mirrored selection plus hover state.
///
/// Responsibilities:
/// - Holding the host-confirmed selection set across redraws
/// - Tracking the currently hovered point key
/// - Providing intent-revealing queries for the interaction machine
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Host-confirmed selection, in confirmation order.
    selected: SelectionSet,
    /// Key of the point currently under the pointer.
    hovered: Option<SelectionKey>,
}

impl SelectionState {
    /// Creates a state with nothing selected or hovered.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// The mirrored selection set.
    pub fn selected(&self) -> &SelectionSet {
        &self.selected
    }

    /// True when the mirrored selection is non-empty. Stale keys (without a
    /// matching point in the current catalog) still count: the host owns
    /// their removal.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Key of the hovered point, if any.
    pub fn hovered(&self) -> Option<&SelectionKey> {
        self.hovered.as_ref()
    }

    // ===== Mutations =====

    /// Adopts a host confirmation as the new mirrored selection.
    pub fn adopt_confirmation(&mut self, confirmed: Vec<SelectionKey>) {
        self.selected = SelectionSet::from_keys(confirmed);
    }

    /// Records the pointer entering a point.
    pub fn set_hovered(&mut self, key: SelectionKey) {
        self.hovered = Some(key);
    }

    /// Records the pointer leaving `key`. A leave event for a point that is
    /// not the hovered one is ignored (events can arrive out of order when
    /// two dots touch).
    pub fn clear_hovered(&mut self, key: &SelectionKey) {
        if self.hovered.as_ref() == Some(key) {
            self.hovered = None;
        }
    }

    /// Drops hover state unconditionally (pointer left the plot).
    pub fn reset_hover(&mut self) {
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(category: &str) -> SelectionKey {
        SelectionKey::builder()
            .with_measure("m")
            .with_category(category)
            .build()
    }

    #[test]
    fn test_adopt_confirmation_replaces_mirror() {
        let mut state = SelectionState::new();
        state.adopt_confirmation(vec![key("A"), key("B")]);
        assert!(state.has_selection());
        assert_eq!(state.selected().len(), 2);

        state.adopt_confirmation(Vec::new());
        assert!(!state.has_selection());
    }

    #[test]
    fn test_stale_leave_event_ignored() {
        let mut state = SelectionState::new();
        state.set_hovered(key("A"));
        state.clear_hovered(&key("B"));
        assert_eq!(state.hovered(), Some(&key("A")));

        state.clear_hovered(&key("A"));
        assert_eq!(state.hovered(), None);
    }
}
