//! Ordered element storage.
//!
//! The store owns the authoritative element sequence. Insertion order is
//! paint order (later elements paint over earlier ones) and is preserved by
//! every operation; it cannot be re-derived from geometry.

use crate::model::{Element, ElementContent, ElementId, Point};

/// Authoritative ordered collection of label elements.
///
/// Ids are handed out by a monotonic counter scoped to this store and are
/// never reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
    next_id: u64,
}

impl ElementStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh element id.
    pub fn generate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a new element at the given position and returns its id.
    /// The new element paints over all existing ones.
    pub fn insert(&mut self, content: ElementContent, position: Point) -> ElementId {
        let id = self.generate_id();
        self.elements.push(Element::new(id, content, position));
        id
    }

    /// Re-inserts a fully formed element at the end of the paint order,
    /// assigning it a fresh id. Used by template reconstruction.
    pub fn push(&mut self, mut element: Element) -> ElementId {
        let id = self.generate_id();
        element.id = id;
        self.elements.push(element);
        id
    }

    /// Gets an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Gets an element mutably by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Whether the store contains the id.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    /// Removes an element, preserving the order of the rest.
    /// Returns the removed element, or `None` if the id is unknown.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Removes all elements. The id counter is not reset; ids stay unique
    /// for the lifetime of the store.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates elements in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Iterates elements mutably in paint order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    /// The topmost element whose frame contains the point, if any.
    /// Searches in reverse paint order so later elements win.
    pub fn topmost_at(&self, point: Point) -> Option<&Element> {
        self.elements.iter().rev().find(|e| e.frame.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    fn store_with(kinds: &[ElementKind]) -> ElementStore {
        let mut store = ElementStore::new();
        for kind in kinds {
            store.insert(ElementContent::default_for(*kind), Point::new(0.0, 0.0));
        }
        store
    }

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut store = store_with(&[ElementKind::Barcode, ElementKind::CustomText]);
        let first = store.iter().next().unwrap().id;
        store.remove(first);
        let new_id = store.insert(
            ElementContent::default_for(ElementKind::Image),
            Point::new(0.0, 0.0),
        );
        assert!(new_id > first);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = store_with(&[
            ElementKind::Barcode,
            ElementKind::CustomText,
            ElementKind::Qrcode,
        ]);
        let middle = store.iter().nth(1).unwrap().id;
        store.remove(middle);
        let kinds: Vec<_> = store.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![ElementKind::Barcode, ElementKind::Qrcode]);
    }

    #[test]
    fn test_topmost_prefers_later_elements() {
        let mut store = ElementStore::new();
        let below = store.insert(
            ElementContent::default_for(ElementKind::Qrcode),
            Point::new(10.0, 10.0),
        );
        let above = store.insert(
            ElementContent::default_for(ElementKind::Qrcode),
            Point::new(10.0, 10.0),
        );
        let hit = store.topmost_at(Point::new(20.0, 20.0)).unwrap();
        assert_eq!(hit.id, above);
        assert_ne!(hit.id, below);
    }
}
