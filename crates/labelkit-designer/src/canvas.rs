//! Editing canvas for one label template.
//!
//! [`LabelCanvas`] owns the element store, the selection, the physical
//! label dimensions, and the grid flag. All mutation goes through it so the
//! geometry invariants (minimum size, containment in the canvas) and the
//! selection invariant (a selected id always resolves) hold after every
//! operation.
//!
//! Rendering is decoupled: each mutation records a [`RenderUpdate`] naming
//! exactly what changed, and the render layer drains the queue with
//! [`LabelCanvas::take_updates`]. Only `clear` and bulk template loads ask
//! for a full rebuild.

use labelkit_core::{canvas_size_px, DesignerError};

use crate::element_store::ElementStore;
use crate::model::{Element, ElementContent, ElementId, ElementPatch, Point, ResizeHandle};
use crate::selection::SelectionManager;

/// Default label size in millimeters (a common shelf-label stock).
pub const DEFAULT_LABEL_WIDTH_MM: f64 = 62.0;
/// Default label height in millimeters.
pub const DEFAULT_LABEL_HEIGHT_MM: f64 = 42.0;

/// Hit-test tolerance around a resize handle, in display units.
pub const HANDLE_TOLERANCE: f64 = 6.0;

/// Incremental change to the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderUpdate {
    /// Re-render this element's visual only.
    Element(ElementId),
    /// Drop this element's visual.
    Removed(ElementId),
    /// Selection changed; refresh the highlight and the property panel.
    Selection,
    /// Grid visibility changed.
    Grid,
    /// Rebuild the whole scene (clear or bulk load).
    Full,
}

/// Canvas state for the label being edited.
#[derive(Debug, Clone)]
pub struct LabelCanvas {
    store: ElementStore,
    selection: SelectionManager,
    width_mm: f64,
    height_mm: f64,
    show_grid: bool,
    updates: Vec<RenderUpdate>,
}

impl LabelCanvas {
    /// Creates a canvas at the default label size with the grid shown.
    pub fn new() -> Self {
        Self {
            store: ElementStore::new(),
            selection: SelectionManager::new(),
            width_mm: DEFAULT_LABEL_WIDTH_MM,
            height_mm: DEFAULT_LABEL_HEIGHT_MM,
            show_grid: true,
            updates: Vec::new(),
        }
    }

    /// Creates a canvas with explicit label dimensions.
    pub fn with_size(width_mm: f64, height_mm: f64) -> Result<Self, DesignerError> {
        let mut canvas = Self::new();
        canvas.set_label_size(width_mm, height_mm)?;
        Ok(canvas)
    }

    /// Physical label width in millimeters.
    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    /// Physical label height in millimeters.
    pub fn height_mm(&self) -> f64 {
        self.height_mm
    }

    /// Canvas size in display units, recomputed from the dimensions.
    pub fn size_px(&self) -> (f64, f64) {
        canvas_size_px(self.width_mm, self.height_mm)
    }

    /// Changes the label dimensions.
    ///
    /// Existing elements are not re-clamped; an element left outside the
    /// new bounds is pulled back in on its next drag or geometry edit.
    pub fn set_label_size(&mut self, width_mm: f64, height_mm: f64) -> Result<(), DesignerError> {
        if width_mm <= 0.0 || height_mm <= 0.0 || !width_mm.is_finite() || !height_mm.is_finite() {
            return Err(DesignerError::InvalidLabelSize {
                width_mm,
                height_mm,
            });
        }
        self.width_mm = width_mm;
        self.height_mm = height_mm;
        self.updates.push(RenderUpdate::Full);
        Ok(())
    }

    /// Whether the alignment grid is shown. Grid visibility also enables
    /// snap-to-grid during drags; it never moves existing elements.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Toggles the alignment grid.
    pub fn set_show_grid(&mut self, show: bool) {
        if self.show_grid != show {
            self.show_grid = show;
            self.updates.push(RenderUpdate::Grid);
        }
    }

    /// Places a new element, clamped into the canvas, and returns its id.
    pub fn add_element(&mut self, content: ElementContent, position: Point) -> ElementId {
        let id = self.store.insert(content, position);
        let (w, h) = self.size_px();
        if let Some(element) = self.store.get_mut(id) {
            element.frame.clamp_to(w, h);
            tracing::debug!(%id, kind = %element.kind(), "element added");
        }
        self.updates.push(RenderUpdate::Element(id));
        id
    }

    /// Applies a partial update to an element.
    ///
    /// Silently a no-op when the id does not exist: deletion always clears
    /// the selection first, but a pending panel edit may still race a
    /// delete, and that race must not fault.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) {
        let (w, h) = self.size_px();
        match self.store.get_mut(id) {
            Some(element) => {
                patch.apply_to(element, w, h);
                self.updates.push(RenderUpdate::Element(id));
            }
            None => tracing::debug!(%id, "update ignored: unknown element"),
        }
    }

    /// Removes an element. Clears the selection first when it points at the
    /// removed element, so no dangling selection can be observed.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        if self.selection.selected_id() == Some(id) {
            self.selection.forget(id);
            self.updates.push(RenderUpdate::Selection);
        }
        let removed = self.store.remove(id);
        if removed.is_some() {
            tracing::debug!(%id, "element removed");
            self.updates.push(RenderUpdate::Removed(id));
        }
        removed
    }

    /// Removes every element and clears the selection.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
        self.updates.push(RenderUpdate::Full);
        tracing::debug!("canvas cleared");
    }

    /// Selects an element, replacing any previous selection.
    /// Returns false (and keeps the old selection) for an unknown id.
    pub fn select_element(&mut self, id: ElementId) -> bool {
        let previous = self.selection.selected_id();
        let selected = self.selection.select(&self.store, id);
        if selected && previous != Some(id) {
            self.updates.push(RenderUpdate::Selection);
        }
        selected
    }

    /// Clears the selection.
    pub fn deselect(&mut self) {
        if self.selection.selected_id().is_some() {
            self.selection.clear();
            self.updates.push(RenderUpdate::Selection);
        }
    }

    /// The selected element's id, if any.
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selection.selected_id()
    }

    /// The selected element, if any.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.selected_id().and_then(|id| self.store.get(id))
    }

    /// Gets an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.store.get(id)
    }

    /// Iterates elements in paint order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.store.iter()
    }

    /// Number of elements on the canvas.
    pub fn element_count(&self) -> usize {
        self.store.len()
    }

    /// Whether the canvas has no elements.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Topmost element body under the point, if any.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.store.topmost_at(point).map(|e| e.id)
    }

    /// Resize handle of the selected element under the point, if any.
    /// Handles are only drawn, and only actionable, on the selected
    /// element; they win over its body during pointer dispatch.
    pub fn handle_at(&self, point: Point) -> Option<(ElementId, ResizeHandle)> {
        let element = self.selected_element()?;
        for handle in ResizeHandle::ALL {
            let pos = handle.position(&element.frame);
            if (point.x - pos.x).abs() <= HANDLE_TOLERANCE
                && (point.y - pos.y).abs() <= HANDLE_TOLERANCE
            {
                return Some((element.id, handle));
            }
        }
        None
    }

    /// Drains the pending render updates in the order they were recorded.
    pub fn take_updates(&mut self) -> Vec<RenderUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Replaces the element sequence wholesale. Used by template
    /// reconstruction; clears the selection and requests a full rebuild.
    pub(crate) fn replace_elements(&mut self, elements: Vec<Element>) {
        self.store.clear();
        self.selection.clear();
        for element in elements {
            self.store.push(element);
        }
        self.updates.push(RenderUpdate::Full);
    }
}

impl Default for LabelCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementKind;

    #[test]
    fn test_add_clamps_into_bounds() {
        let mut canvas = LabelCanvas::new();
        let (w, h) = canvas.size_px();
        let id = canvas.add_element(
            ElementContent::default_for(ElementKind::Barcode),
            Point::new(w + 500.0, h + 500.0),
        );
        let frame = canvas.element(id).unwrap().frame;
        assert!(frame.x + frame.width <= w);
        assert!(frame.y + frame.height <= h);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut canvas = LabelCanvas::new();
        canvas.update_element(ElementId(42), &ElementPatch::position(10.0, 10.0));
        assert!(canvas.is_empty());
        assert!(canvas.take_updates().is_empty());
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut canvas = LabelCanvas::new();
        let id = canvas.add_element(
            ElementContent::default_for(ElementKind::Qrcode),
            Point::new(10.0, 10.0),
        );
        canvas.select_element(id);
        canvas.remove_element(id);
        assert_eq!(canvas.selected_id(), None);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_label_resize_does_not_reclamp_elements() {
        let mut canvas = LabelCanvas::with_size(100.0, 60.0).unwrap();
        let id = canvas.add_element(
            ElementContent::default_for(ElementKind::CustomText),
            Point::new(150.0, 100.0),
        );
        assert_eq!(canvas.element(id).unwrap().frame.x, 150.0);

        canvas.set_label_size(20.0, 20.0).unwrap();
        // The element stays where it was until its next geometry change.
        let frame = canvas.element(id).unwrap().frame;
        assert_eq!(frame.x, 150.0);
        assert_eq!(frame.y, 100.0);
    }

    #[test]
    fn test_render_updates_are_granular() {
        let mut canvas = LabelCanvas::new();
        let id = canvas.add_element(
            ElementContent::default_for(ElementKind::CustomText),
            Point::new(10.0, 10.0),
        );
        canvas.take_updates();

        canvas.update_element(id, &ElementPatch::position(30.0, 30.0));
        assert_eq!(canvas.take_updates(), vec![RenderUpdate::Element(id)]);

        canvas.clear();
        assert_eq!(canvas.take_updates(), vec![RenderUpdate::Full]);
    }

    #[test]
    fn test_handles_exist_only_on_selected_element() {
        let mut canvas = LabelCanvas::new();
        let id = canvas.add_element(
            ElementContent::default_for(ElementKind::Image),
            Point::new(50.0, 50.0),
        );
        let frame = canvas.element(id).unwrap().frame;
        let corner = Point::new(frame.x + frame.width, frame.y + frame.height);

        // Without a selection the corner is just part of the body.
        assert_eq!(canvas.handle_at(corner), None);
        assert_eq!(canvas.element_at(corner), Some(id));

        canvas.select_element(id);
        assert_eq!(
            canvas.handle_at(corner),
            Some((id, ResizeHandle::SouthEast))
        );
    }

    #[test]
    fn test_invalid_label_size_rejected() {
        let mut canvas = LabelCanvas::new();
        assert!(canvas.set_label_size(0.0, 42.0).is_err());
        assert!(canvas.set_label_size(62.0, -1.0).is_err());
        assert_eq!(canvas.width_mm(), DEFAULT_LABEL_WIDTH_MM);
    }
}
