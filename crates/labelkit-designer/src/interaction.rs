//! Pointer-driven interaction state machine.
//!
//! One controller instance owns the gesture state for one canvas. Only a
//! single gesture can be active at a time: a pointer-down while a gesture
//! is in flight is ignored, and pointer-up returns to idle from any state.
//! All handlers run synchronously; there is no gesture queuing.

use labelkit_core::snap_to_grid;

use crate::canvas::LabelCanvas;
use crate::model::{ElementId, ElementPatch, Point};

/// The active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    Idle,
    /// Moving an element; `grab_offset` is pointer minus the element's
    /// top-left at the moment of the press.
    Dragging {
        id: ElementId,
        grab_offset: Point,
    },
    /// Resizing an element; `anchor` is the last pointer position folded
    /// into the size, so deltas accumulate incrementally.
    Resizing {
        id: ElementId,
        anchor: Point,
    },
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Delete,
    Backspace,
}

/// Translates pointer and key input into store mutations.
#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    /// The current gesture.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Handles a pointer press.
    ///
    /// Resize handles are only active on the selected element and win over
    /// its body; any other press on an element body selects it and starts a
    /// drag. A press on empty canvas clears the selection. Ignored while a
    /// gesture is already active.
    pub fn pointer_down(&mut self, canvas: &mut LabelCanvas, pos: Point) {
        if self.gesture() != Gesture::Idle {
            return;
        }

        if let Some((id, _handle)) = canvas.handle_at(pos) {
            self.gesture = Gesture::Resizing { id, anchor: pos };
            return;
        }

        if let Some(id) = canvas.element_at(pos) {
            canvas.select_element(id);
            let frame = canvas.element(id).map(|e| e.frame);
            if let Some(frame) = frame {
                self.gesture = Gesture::Dragging {
                    id,
                    grab_offset: Point::new(pos.x - frame.x, pos.y - frame.y),
                };
            }
            return;
        }

        canvas.deselect();
    }

    /// Handles pointer movement during a gesture. Idle moves are ignored.
    pub fn pointer_move(&mut self, canvas: &mut LabelCanvas, pos: Point) {
        match self.gesture() {
            Gesture::Idle => {}
            Gesture::Dragging { id, grab_offset } => {
                let mut new_x = pos.x - grab_offset.x;
                let mut new_y = pos.y - grab_offset.y;
                if canvas.show_grid() {
                    new_x = snap_to_grid(new_x);
                    new_y = snap_to_grid(new_y);
                }
                // Bounds clamping happens inside the patch application.
                canvas.update_element(id, &ElementPatch::position(new_x, new_y));
            }
            Gesture::Resizing { id, anchor } => {
                let dx = pos.x - anchor.x;
                let dy = pos.y - anchor.y;
                if let Some(frame) = canvas.element(id).map(|e| e.frame) {
                    canvas.update_element(
                        id,
                        &ElementPatch::size(frame.width + dx, frame.height + dy),
                    );
                }
                // Re-anchor so small moves accumulate instead of compounding.
                self.gesture = Gesture::Resizing { id, anchor: pos };
            }
        }
    }

    /// Handles pointer release: returns to idle from any state.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Handles a key press. Delete and Backspace remove the selected
    /// element, if any, and end any gesture on it.
    pub fn key_down(&mut self, canvas: &mut LabelCanvas, key: EditorKey) {
        match key {
            EditorKey::Delete | EditorKey::Backspace => {
                if let Some(id) = canvas.selected_id() {
                    canvas.remove_element(id);
                    self.gesture = Gesture::Idle;
                }
            }
        }
    }
}
