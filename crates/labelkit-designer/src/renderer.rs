//! Headless scene description for the canvas.
//!
//! Rendering is split from mutation: this module derives a pure visual
//! description from canvas state, and the embedding surface (or a test)
//! turns that description into pixels or DOM. No function here mutates the
//! store, so the render layer can be swapped without touching the editor.
//!
//! Barcode and QR elements are *placeholders*: the editor shows stylized
//! stand-ins, and the print pipeline produces the real symbology from the
//! saved template and a concrete inventory record.

use anyhow::Result;

use crate::canvas::LabelCanvas;
use crate::model::{Element, ElementContent, ElementId, Frame, ResizeHandle, TextStyle};
use crate::serialization::LabelTemplate;
use labelkit_core::GRID_SPACING_PX;

/// Sample text shown under the barcode stand-in.
pub const BARCODE_SAMPLE: &str = "ITEM00000001";

/// What to draw inside an element's frame.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualContent {
    /// Styled text; for bound fields this is the field placeholder.
    Text { text: String, style: TextStyle },
    /// Striped stand-in with a sample number underneath.
    BarcodePlaceholder { sample: &'static str },
    /// Module-grid stand-in.
    QrPlaceholder,
    /// Dashed-border image stand-in.
    ImagePlaceholder,
}

/// Visual description of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementVisual {
    pub id: ElementId,
    pub frame: Frame,
    pub content: VisualContent,
    /// Whether to draw the selection outline and resize handles.
    pub selected: bool,
    /// Handle positions, present only when selected.
    pub handles: Vec<(ResizeHandle, f64, f64)>,
}

/// Visual description of the whole canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasVisual {
    pub width_px: f64,
    pub height_px: f64,
    /// Grid line spacing in display units, when the grid is shown.
    pub grid_spacing: Option<f64>,
    /// Elements in paint order.
    pub elements: Vec<ElementVisual>,
}

/// Derives the visual for a single element.
pub fn render_element(element: &Element, selected: bool) -> ElementVisual {
    let content = match &element.content {
        ElementContent::BoundText { field } => VisualContent::Text {
            text: field.placeholder().to_string(),
            style: element.style.clone(),
        },
        ElementContent::CustomText { text } => VisualContent::Text {
            text: text.clone(),
            style: element.style.clone(),
        },
        ElementContent::Barcode => VisualContent::BarcodePlaceholder {
            sample: BARCODE_SAMPLE,
        },
        ElementContent::Qrcode => VisualContent::QrPlaceholder,
        ElementContent::Image => VisualContent::ImagePlaceholder,
    };

    let handles = if selected {
        ResizeHandle::ALL
            .iter()
            .map(|h| {
                let p = h.position(&element.frame);
                (*h, p.x, p.y)
            })
            .collect()
    } else {
        Vec::new()
    };

    ElementVisual {
        id: element.id,
        frame: element.frame,
        content,
        selected,
        handles,
    }
}

/// Derives the full scene for a canvas rebuild.
pub fn render_canvas(canvas: &LabelCanvas) -> CanvasVisual {
    let (width_px, height_px) = canvas.size_px();
    let selected = canvas.selected_id();
    CanvasVisual {
        width_px,
        height_px,
        grid_spacing: canvas.show_grid().then_some(GRID_SPACING_PX),
        elements: canvas
            .elements()
            .map(|e| render_element(e, selected == Some(e.id)))
            .collect(),
    }
}

/// External collaborator that shows a non-destructive template preview in a
/// separate context. The editor only forwards the structured template.
pub trait PreviewRenderer {
    /// Renders the template for a visual check.
    fn render_preview(&self, template: &LabelTemplate) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, Point};
    use labelkit_core::InventoryField;

    #[test]
    fn test_bound_text_renders_field_placeholder() {
        let mut canvas = LabelCanvas::new();
        let id = canvas.add_element(
            ElementContent::BoundText {
                field: InventoryField::Sku,
            },
            Point::new(10.0, 10.0),
        );
        let visual = render_element(canvas.element(id).unwrap(), false);
        assert_eq!(
            visual.content,
            VisualContent::Text {
                text: "ABC-12345".to_string(),
                style: TextStyle::default()
            }
        );
    }

    #[test]
    fn test_selected_element_carries_handles() {
        let mut canvas = LabelCanvas::new();
        let id = canvas.add_element(
            ElementContent::default_for(ElementKind::Barcode),
            Point::new(10.0, 10.0),
        );
        canvas.select_element(id);
        let scene = render_canvas(&canvas);
        let visual = &scene.elements[0];
        assert!(visual.selected);
        assert_eq!(visual.handles.len(), 4);
        assert_eq!(
            visual.content,
            VisualContent::BarcodePlaceholder {
                sample: BARCODE_SAMPLE
            }
        );
    }

    #[test]
    fn test_grid_spacing_follows_toggle() {
        let mut canvas = LabelCanvas::new();
        assert_eq!(render_canvas(&canvas).grid_spacing, Some(GRID_SPACING_PX));
        canvas.set_show_grid(false);
        assert_eq!(render_canvas(&canvas).grid_spacing, None);
    }

    #[test]
    fn test_scene_preserves_paint_order() {
        let mut canvas = LabelCanvas::new();
        let a = canvas.add_element(
            ElementContent::default_for(ElementKind::Qrcode),
            Point::new(0.0, 0.0),
        );
        let b = canvas.add_element(
            ElementContent::default_for(ElementKind::Image),
            Point::new(0.0, 0.0),
        );
        let ids: Vec<_> = render_canvas(&canvas).elements.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
