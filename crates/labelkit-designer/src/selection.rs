//! Element selection state.
//!
//! At most one element is selected at a time. Selection is a relation, not
//! ownership: the manager holds an id, the store owns the data, and every
//! id the manager hands out is guaranteed to resolve in the store at the
//! moment it is read.

use crate::element_store::ElementStore;
use crate::model::ElementId;

/// Tracks which element, if any, is currently selected.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<ElementId>,
}

impl SelectionManager {
    /// Creates a manager with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected element id, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_id
    }

    /// Selects the given element, replacing any previous selection.
    /// Ignored if the id does not resolve in the store, so a stale id can
    /// never become the selection.
    pub fn select(&mut self, store: &ElementStore, id: ElementId) -> bool {
        if store.contains(id) {
            self.selected_id = Some(id);
            true
        } else {
            tracing::debug!(%id, "select ignored: unknown element");
            false
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Drops the selection if it points at the given id. Called by deletion
    /// so a dangling selection can never outlive its element.
    pub fn forget(&mut self, id: ElementId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }
}
