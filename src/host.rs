//! Host-facing seam of the widget.
//!
//! The widget never owns the selection: the host keeps the persistent set,
//! serializes all mutations, and hands back a confirmation after each
//! request. This module defines that contract plus an in-memory reference
//! implementation used by the demo binary and the test suite.

use crate::identity::SelectionKey;
use log::debug;

/// Selection protocol and capabilities the embedding host provides.
///
/// The widget only ever *requests* mutations; the returned value is the
/// host's confirmation: the full selection as the host now sees it. A
/// `None` confirmation means the request never resolved (interactivity
/// disabled, host declined, widget torn down first); the widget must keep
/// its prior state and let the next redraw's resync reconcile.
pub trait SelectionHost {
    /// Whether the hosting surface allows interactions at all.
    ///
    /// Checked at the top of every pointer handler; when false all
    /// hover/click handling is a no-op.
    fn allow_interactions(&self) -> bool;

    /// Requests a selection mutation for `key`.
    ///
    /// `multi=false` replaces the selection with `{key}`; `multi=true`
    /// toggles `key`'s membership (multi-select modifier held).
    ///
    /// # Returns
    /// The confirmed selection after the mutation, or `None` if the host
    /// never confirmed.
    fn select(&mut self, key: &SelectionKey, multi: bool) -> Option<Vec<SelectionKey>>;

    /// Requests that the selection be cleared (background click).
    ///
    /// # Returns
    /// The confirmed (empty) selection, or `None` if the host never
    /// confirmed.
    fn clear_selection(&mut self) -> Option<Vec<SelectionKey>>;

    /// Returns the current persistent selection, in host order.
    fn selection(&self) -> Vec<SelectionKey>;
}

/// In-memory reference host with plain set semantics.
///
/// Plays the host role for the demo binary and the integration tests. Two
/// knobs simulate degraded hosts: `allow_interactions` disables the
/// interactive surface entirely, and `respond=false` models a confirmation
/// that never resolves (requests are ignored, state is untouched).
#[derive(Debug, Clone)]
pub struct MemorySelectionHost {
    selected: Vec<SelectionKey>,
    allow_interactions: bool,
    respond: bool,
}

impl Default for MemorySelectionHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySelectionHost {
    /// Creates a responsive host with interactions enabled and nothing
    /// selected.
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            allow_interactions: true,
            respond: true,
        }
    }

    /// Sets whether the hosting surface allows interactions.
    pub fn set_allow_interactions(&mut self, allow: bool) {
        self.allow_interactions = allow;
    }

    /// Sets whether selection requests resolve. When false, `select` and
    /// `clear_selection` return `None` and leave the set untouched.
    pub fn set_respond(&mut self, respond: bool) {
        self.respond = respond;
    }

    /// Drops keys the host itself decided to discard (e.g. stale keys for
    /// data no longer present). The widget never calls this.
    pub fn retain(&mut self, keep: impl Fn(&SelectionKey) -> bool) {
        self.selected.retain(|k| keep(k));
    }
}

impl SelectionHost for MemorySelectionHost {
    fn allow_interactions(&self) -> bool {
        self.allow_interactions
    }

    fn select(&mut self, key: &SelectionKey, multi: bool) -> Option<Vec<SelectionKey>> {
        if !self.respond {
            return None;
        }

        if multi {
            if let Some(pos) = self.selected.iter().position(|k| k == key) {
                self.selected.remove(pos);
            } else {
                self.selected.push(key.clone());
            }
        } else {
            self.selected.clear();
            self.selected.push(key.clone());
        }

        debug!(
            "selection mutated (multi={}): {} selected",
            multi,
            self.selected.len()
        );
        Some(self.selected.clone())
    }

    fn clear_selection(&mut self) -> Option<Vec<SelectionKey>> {
        if !self.respond {
            return None;
        }
        self.selected.clear();
        debug!("selection cleared");
        Some(Vec::new())
    }

    fn selection(&self) -> Vec<SelectionKey> {
        self.selected.clone()
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
    fn test_single_select_replaces() {
        let mut host = MemorySelectionHost::new();
        host.select(&key("A"), false);
        let confirmed = host.select(&key("B"), false).unwrap();
        assert_eq!(confirmed, vec![key("B")]);
    }

    #[test]
    fn test_multi_select_toggles() {
        let mut host = MemorySelectionHost::new();
        host.select(&key("A"), false);
        host.select(&key("B"), true);
        assert_eq!(host.selection().len(), 2);

        // Toggling again removes
        let confirmed = host.select(&key("B"), true).unwrap();
        assert_eq!(confirmed, vec![key("A")]);
    }

    #[test]
    fn test_unresponsive_host_keeps_state() {
        let mut host = MemorySelectionHost::new();
        host.select(&key("A"), false);
        host.set_respond(false);

        assert!(host.select(&key("B"), false).is_none());
        assert!(host.clear_selection().is_none());
        assert_eq!(host.selection(), vec![key("A")]);
    }
}
