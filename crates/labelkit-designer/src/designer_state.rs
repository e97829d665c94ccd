//! Designer state manager for UI integration.
//!
//! One [`LabelDesignerState`] owns the canvas, the interaction controller,
//! and the status surface, and exposes the lifecycle commands (delete,
//! clear, preview, save, load). All mutation is synchronous; the only
//! suspension points are the template-store calls, whose completions write
//! nothing but status messages.

use anyhow::Result;
use labelkit_core::{format_mm, parse_mm, DesignerError, StatusLog};

use crate::canvas::LabelCanvas;
use crate::interaction::{EditorKey, Gesture, InteractionController};
use crate::model::{ElementContent, ElementId, Point};
use crate::properties::{apply_property, PropertyKey};
use crate::renderer::PreviewRenderer;
use crate::serialization::{apply_template, to_template, LabelTemplate};
use crate::templates::{NewTemplate, TemplateRecord, TemplateStore};

/// Editor state for UI integration.
#[derive(Debug, Clone, Default)]
pub struct LabelDesignerState {
    pub canvas: LabelCanvas,
    pub controller: InteractionController,
    pub status: StatusLog,
    /// Whether the canvas has unsaved changes.
    pub is_modified: bool,
}

impl LabelDesignerState {
    /// Creates an editor at the default label size.
    pub fn new() -> Self {
        Self::default()
    }

    // --- input forwarding -------------------------------------------------

    /// Forwards a pointer press to the interaction controller.
    pub fn pointer_down(&mut self, pos: Point) {
        self.controller.pointer_down(&mut self.canvas, pos);
    }

    /// Forwards pointer movement; marks the template modified while a
    /// gesture is mutating geometry.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.controller.gesture() != Gesture::Idle {
            self.is_modified = true;
        }
        self.controller.pointer_move(&mut self.canvas, pos);
    }

    /// Forwards a pointer release.
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// Forwards a key press.
    pub fn key_down(&mut self, key: EditorKey) {
        let before = self.canvas.element_count();
        self.controller.key_down(&mut self.canvas, key);
        if self.canvas.element_count() != before {
            self.is_modified = true;
        }
    }

    // --- element commands -------------------------------------------------

    /// Places a new element from the palette drop position.
    pub fn place_element(&mut self, content: ElementContent, position: Point) -> ElementId {
        self.is_modified = true;
        self.canvas.add_element(content, position)
    }

    /// Applies a property-panel edit to the selected element. Reports a
    /// rejected value on the status surface and leaves state untouched.
    pub fn edit_property(&mut self, key: PropertyKey, raw: &str) -> Result<(), DesignerError> {
        let id = match self.canvas.selected_id() {
            Some(id) => id,
            None => {
                self.status.error(DesignerError::NothingSelected.to_string());
                return Err(DesignerError::NothingSelected);
            }
        };
        match apply_property(&mut self.canvas, id, key, raw) {
            Ok(()) => {
                self.is_modified = true;
                Ok(())
            }
            Err(err) => {
                self.status.error(err.to_string());
                Err(err)
            }
        }
    }

    /// Deletes the selected element. Errors (and notifies) when nothing is
    /// selected.
    pub fn delete_selected(&mut self) -> Result<(), DesignerError> {
        match self.canvas.selected_id() {
            Some(id) => {
                self.canvas.remove_element(id);
                self.is_modified = true;
                Ok(())
            }
            None => {
                self.status.error("Select an element first");
                Err(DesignerError::NothingSelected)
            }
        }
    }

    /// Removes every element. Destructive and not undoable, so it requires
    /// explicit confirmation; declining leaves state untouched.
    pub fn clear_canvas(&mut self, confirmed: bool) -> Result<(), DesignerError> {
        if !confirmed {
            return Err(DesignerError::ConfirmationRequired);
        }
        self.canvas.clear();
        self.is_modified = true;
        Ok(())
    }

    /// Changes the label dimensions, notifying on invalid input.
    pub fn set_label_size(&mut self, width_mm: f64, height_mm: f64) -> Result<(), DesignerError> {
        match self.canvas.set_label_size(width_mm, height_mm) {
            Ok(()) => {
                self.is_modified = true;
                Ok(())
            }
            Err(err) => {
                self.status.error(err.to_string());
                Err(err)
            }
        }
    }

    /// Current label dimensions formatted for the dimension inputs.
    pub fn label_size_input(&self) -> (String, String) {
        (
            format_mm(self.canvas.width_mm()),
            format_mm(self.canvas.height_mm()),
        )
    }

    /// Changes the label dimensions from the raw text of the dimension
    /// inputs.
    pub fn set_label_size_input(&mut self, width: &str, height: &str) -> Result<(), DesignerError> {
        let width_mm = self.parse_dimension("width", width)?;
        let height_mm = self.parse_dimension("height", height)?;
        self.set_label_size(width_mm, height_mm)
    }

    fn parse_dimension(&mut self, property: &str, raw: &str) -> Result<f64, DesignerError> {
        match parse_mm(raw) {
            Ok(value) => Ok(value),
            Err(_) => {
                let err = DesignerError::InvalidPropertyValue {
                    property: property.to_string(),
                    value: raw.trim().to_string(),
                };
                self.status.error(err.to_string());
                Err(err)
            }
        }
    }

    // --- template lifecycle -----------------------------------------------

    /// Snapshots the current canvas as a template.
    pub fn current_template(&self) -> LabelTemplate {
        to_template(&self.canvas)
    }

    /// Hands the current template to the preview collaborator for a
    /// non-destructive visual check. Failures only surface as status
    /// messages; canvas state is never touched.
    pub fn preview(&mut self, renderer: &dyn PreviewRenderer) -> Result<()> {
        let template = self.current_template();
        if let Err(err) = renderer.render_preview(&template) {
            self.status.error(format!("Preview failed: {err}"));
            return Err(err);
        }
        Ok(())
    }

    /// Validates the name, serializes the layout, and hands it to the
    /// template store. The canvas is never optimistically mutated, so a
    /// failed save needs no rollback.
    pub async fn save_template(
        &mut self,
        name: &str,
        store: &dyn TemplateStore,
    ) -> Result<TemplateRecord> {
        let name = name.trim();
        if name.is_empty() {
            self.status.error("Template name must not be empty");
            return Err(DesignerError::EmptyTemplateName.into());
        }

        let template = self.current_template();
        let layout = template.to_json()?;
        let request = NewTemplate {
            name: name.to_string(),
            description: String::new(),
            width_mm: template.width,
            height_mm: template.height,
            layout,
        };

        match store.create(request).await {
            Ok(record) => {
                tracing::info!(id = record.id, name = %record.name, "template saved");
                self.status.success(format!("Template '{}' saved", record.name));
                self.is_modified = false;
                Ok(record)
            }
            Err(err) => {
                self.status.error(format!("Failed to save template: {err}"));
                Err(err)
            }
        }
    }

    /// Lists saved templates for the selection flow.
    pub async fn list_templates(
        &mut self,
        store: &dyn TemplateStore,
    ) -> Result<Vec<TemplateRecord>> {
        match store.list().await {
            Ok(records) => Ok(records),
            Err(err) => {
                self.status.error(format!("Failed to load templates: {err}"));
                Err(err)
            }
        }
    }

    /// Loads a saved template into the canvas, replacing its contents.
    pub async fn load_template(&mut self, id: i64, store: &dyn TemplateStore) -> Result<()> {
        let layout = match store.fetch_layout(id).await {
            Ok(layout) => layout,
            Err(err) => {
                self.status.error(format!("Failed to load template: {err}"));
                return Err(err);
            }
        };
        let template = match LabelTemplate::from_json(&layout) {
            Ok(template) => template,
            Err(err) => {
                self.status.error(format!("Failed to load template: {err}"));
                return Err(err);
            }
        };
        if let Err(err) = apply_template(&mut self.canvas, &template) {
            self.status.error(err.to_string());
            return Err(err.into());
        }
        self.is_modified = false;
        Ok(())
    }

    /// Reconstructs the canvas from an already-parsed template.
    pub fn apply_template(&mut self, template: &LabelTemplate) -> Result<(), DesignerError> {
        apply_template(&mut self.canvas, template)?;
        self.is_modified = false;
        Ok(())
    }
}
