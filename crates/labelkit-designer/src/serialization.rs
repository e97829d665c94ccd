//! Template serialization.
//!
//! Converts between live canvas state and the persisted layout structure
//! consumed by the print pipeline and the template store. The round trip is
//! lossless over element order, kind, content, geometry, and style; element
//! ids are renumbered on reconstruction but keep their relative order.
//!
//! This module owns no I/O: it produces and consumes structured values, and
//! JSON strings on request for collaborators that transport layouts opaquely.

use anyhow::{Context, Result};
use labelkit_core::{DesignerError, InventoryField};
use serde::{Deserialize, Serialize};

use crate::canvas::LabelCanvas;
use crate::model::{
    Element, ElementContent, ElementId, ElementKind, FontWeight, Frame, TextAlign, TextStyle,
};

/// Persisted shape of one element.
///
/// Keys that are irrelevant for a given `type` (a barcode's `fontSize`, an
/// image's `customText`) are still written and are ignored when read back,
/// so layouts survive being edited by other tools.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    pub id: u64,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub field: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
    #[serde(default = "default_text_align")]
    pub text_align: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub custom_text: String,
}

fn default_font_size() -> f64 {
    14.0
}
fn default_font_weight() -> String {
    "normal".to_string()
}
fn default_text_align() -> String {
    "left".to_string()
}
fn default_color() -> String {
    "#000000".to_string()
}
fn default_background() -> String {
    "transparent".to_string()
}

/// The persisted unit: physical dimensions plus the ordered element
/// sequence. Element order is paint order and is not re-derivable from
/// geometry, so it is preserved verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelTemplate {
    /// Label width in millimeters.
    pub width: f64,
    /// Label height in millimeters.
    pub height: f64,
    pub elements: Vec<ElementData>,
}

impl LabelTemplate {
    /// Serializes the template to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize template layout")
    }

    /// Parses a template from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse template layout")
    }
}

/// Snapshots the canvas into a persistable template.
pub fn to_template(canvas: &LabelCanvas) -> LabelTemplate {
    LabelTemplate {
        width: canvas.width_mm(),
        height: canvas.height_mm(),
        elements: canvas.elements().map(element_to_data).collect(),
    }
}

/// Reconstructs canvas state from a template: dimensions, then elements in
/// template order. Ids are renumbered by the store; everything else is
/// restored verbatim (including geometry outside the current bounds, which
/// re-clamps on the next drag).
pub fn apply_template(canvas: &mut LabelCanvas, template: &LabelTemplate) -> Result<(), DesignerError> {
    canvas.set_label_size(template.width, template.height)?;
    let elements = template
        .elements
        .iter()
        .map(data_to_element)
        .collect::<Result<Vec<_>, _>>()?;
    canvas.replace_elements(elements);
    tracing::debug!(count = template.elements.len(), "template loaded");
    Ok(())
}

fn element_to_data(element: &Element) -> ElementData {
    let (field, custom_text) = match &element.content {
        ElementContent::BoundText { field } => (field.as_str().to_string(), String::new()),
        ElementContent::CustomText { text } => (String::new(), text.clone()),
        ElementContent::Barcode | ElementContent::Qrcode | ElementContent::Image => {
            (String::new(), String::new())
        }
    };

    ElementData {
        id: element.id.0,
        element_type: element.kind().as_str().to_string(),
        field,
        x: element.frame.x,
        y: element.frame.y,
        width: element.frame.width,
        height: element.frame.height,
        font_size: element.style.font_size,
        font_weight: element.style.font_weight.as_str().to_string(),
        text_align: element.style.text_align.as_str().to_string(),
        color: element.style.color.clone(),
        background_color: element.style.background_color.clone(),
        custom_text,
    }
}

fn data_to_element(data: &ElementData) -> Result<Element, DesignerError> {
    let content = match data.element_type.as_str() {
        "boundText" => ElementContent::BoundText {
            field: parse_field(&data.field)?,
        },
        "customText" => ElementContent::CustomText {
            text: data.custom_text.clone(),
        },
        "barcode" => ElementContent::Barcode,
        "qrcode" => ElementContent::Qrcode,
        "image" => ElementContent::Image,
        // Layouts written by the legacy designer use a single "text" type
        // and a "custom" pseudo-field for literal text.
        "text" => {
            if data.field == "custom" {
                ElementContent::CustomText {
                    text: data.custom_text.clone(),
                }
            } else {
                ElementContent::BoundText {
                    field: parse_field(&data.field)?,
                }
            }
        }
        other => {
            return Err(DesignerError::InvalidLayout {
                reason: format!("unknown element type '{}'", other),
            })
        }
    };

    let style = TextStyle {
        font_size: data.font_size,
        font_weight: FontWeight::parse(&data.font_weight).unwrap_or_default(),
        text_align: TextAlign::parse(&data.text_align).unwrap_or_default(),
        color: data.color.clone(),
        background_color: data.background_color.clone(),
    };

    Ok(Element {
        // Provisional; the store renumbers on insertion.
        id: ElementId(data.id),
        content,
        frame: Frame::new(data.x, data.y, data.width, data.height),
        style,
    })
}

fn parse_field(raw: &str) -> Result<InventoryField, DesignerError> {
    InventoryField::parse(raw).ok_or_else(|| DesignerError::InvalidLayout {
        reason: format!("unknown inventory field '{}'", raw),
    })
}

/// Kind tag of a persisted element, if recognized. Exposed for template
/// listings that summarize layouts without reconstructing them.
pub fn data_kind(data: &ElementData) -> Option<ElementKind> {
    match data.element_type.as_str() {
        "boundText" => Some(ElementKind::BoundText),
        "customText" => Some(ElementKind::CustomText),
        "barcode" => Some(ElementKind::Barcode),
        "qrcode" => Some(ElementKind::Qrcode),
        "image" => Some(ElementKind::Image),
        "text" => Some(if data.field == "custom" {
            ElementKind::CustomText
        } else {
            ElementKind::BoundText
        }),
        _ => None,
    }
}
