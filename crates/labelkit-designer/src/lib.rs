//! # LabelKit Designer
//!
//! Core of the label layout editor: a WYSIWYG surface model for composing
//! physical-label templates out of positioned, styled elements: text bound
//! to inventory fields, free-form text, and barcode/QR/image placeholders.
//! The result is a reusable template consumed by an external print pipeline.
//!
//! ## Architecture
//!
//! ```text
//! LabelDesignerState (lifecycle commands, status surface)
//!   ├── LabelCanvas (dimensions, grid, render-update queue)
//!   │     ├── ElementStore (ordered elements, monotonic ids)
//!   │     └── SelectionManager (at most one selected id)
//!   ├── InteractionController (Idle / Dragging / Resizing)
//!   ├── properties (per-kind panel schema + edits)
//!   ├── serialization (template ⇄ canvas, JSON wire form)
//!   └── renderer (pure scene description, preview hand-off)
//! ```
//!
//! Everything mutates synchronously through the canvas; the only async
//! surfaces are the [`templates::TemplateStore`] collaborator calls.
//!
//! ## Usage
//!
//! ```rust
//! use labelkit_designer::{ElementContent, ElementKind, LabelDesignerState, Point};
//!
//! let mut editor = LabelDesignerState::new();
//! let id = editor.place_element(
//!     ElementContent::default_for(ElementKind::Barcode),
//!     Point::new(20.0, 20.0),
//! );
//! editor.canvas.select_element(id);
//! let template = editor.current_template();
//! assert_eq!(template.elements.len(), 1);
//! ```

pub mod canvas;
pub mod designer_state;
pub mod element_store;
pub mod interaction;
pub mod model;
pub mod properties;
pub mod renderer;
pub mod selection;
pub mod serialization;
pub mod templates;

pub use canvas::{LabelCanvas, RenderUpdate, DEFAULT_LABEL_HEIGHT_MM, DEFAULT_LABEL_WIDTH_MM};
pub use designer_state::LabelDesignerState;
pub use element_store::ElementStore;
pub use interaction::{EditorKey, Gesture, InteractionController};
pub use model::{
    Element, ElementContent, ElementId, ElementKind, ElementPatch, FontWeight, Frame, Point,
    ResizeHandle, TextAlign, TextStyle, FONT_SIZE_RANGE, MIN_ELEMENT_SIZE,
};
pub use properties::{apply_property, property_schema, PropertyInput, PropertyKey, PropertyRow};
pub use renderer::{render_canvas, render_element, CanvasVisual, ElementVisual, PreviewRenderer, VisualContent};
pub use selection::SelectionManager;
pub use serialization::{apply_template, to_template, ElementData, LabelTemplate};
pub use templates::{MemoryTemplateStore, NewTemplate, TemplateRecord, TemplateStore};
