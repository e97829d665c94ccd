//! Property panel binding.
//!
//! Builds the editable-property schema for the selected element and turns
//! panel edits back into store updates. The panel never keeps its own copy
//! of element state: values are read from the store when the schema is
//! built, and after every edit the caller rebuilds the schema from the
//! authoritative element.

use labelkit_core::{DesignerError, InventoryField};

use crate::canvas::LabelCanvas;
use crate::model::{
    Element, ElementContent, ElementId, ElementPatch, FontWeight, TextAlign, FONT_SIZE_RANGE,
    MIN_ELEMENT_SIZE,
};

/// Keys of editable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Literal text of a custom-text element.
    Text,
    /// Bound inventory field of a bound-text element.
    Field,
    FontSize,
    FontWeight,
    TextAlign,
    Color,
    BackgroundColor,
    X,
    Y,
    Width,
    Height,
}

impl PropertyKey {
    /// Property name used in error messages and panel labels.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKey::Text => "text",
            PropertyKey::Field => "field",
            PropertyKey::FontSize => "fontSize",
            PropertyKey::FontWeight => "fontWeight",
            PropertyKey::TextAlign => "textAlign",
            PropertyKey::Color => "color",
            PropertyKey::BackgroundColor => "backgroundColor",
            PropertyKey::X => "x",
            PropertyKey::Y => "y",
            PropertyKey::Width => "width",
            PropertyKey::Height => "height",
        }
    }
}

/// Input widget the panel should render for a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyInput {
    /// Free-form text input.
    Text,
    /// Dropdown over fixed option names.
    Select(Vec<&'static str>),
    /// Numeric input with an inclusive range.
    Number { min: f64, max: f64 },
    /// Color picker.
    Color,
    /// Non-editable type label.
    ReadOnly,
}

/// One row of the property panel: key, label, widget, current value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub key: PropertyKey,
    pub label: &'static str,
    pub input: PropertyInput,
    pub value: String,
}

/// Builds the panel schema for an element, specific to its kind.
///
/// Text kinds expose content and text styling; barcode, QR, and image
/// placeholders expose only a read-only type label. Every kind exposes the
/// numeric geometry fields.
pub fn property_schema(element: &Element) -> Vec<PropertyRow> {
    let mut rows = Vec::new();

    match &element.content {
        ElementContent::CustomText { text } => {
            rows.push(PropertyRow {
                key: PropertyKey::Text,
                label: "Text",
                input: PropertyInput::Text,
                value: text.clone(),
            });
            rows.extend(style_rows(element));
        }
        ElementContent::BoundText { field } => {
            rows.push(PropertyRow {
                key: PropertyKey::Field,
                label: "Field",
                input: PropertyInput::Select(
                    InventoryField::ALL.iter().map(|f| f.as_str()).collect(),
                ),
                value: field.as_str().to_string(),
            });
            rows.extend(style_rows(element));
        }
        ElementContent::Barcode | ElementContent::Qrcode | ElementContent::Image => {
            rows.push(PropertyRow {
                key: PropertyKey::Text,
                label: "Type",
                input: PropertyInput::ReadOnly,
                value: element.kind().label().to_string(),
            });
        }
    }

    rows.extend(geometry_rows(element));
    rows
}

fn style_rows(element: &Element) -> Vec<PropertyRow> {
    vec![
        PropertyRow {
            key: PropertyKey::FontSize,
            label: "Font size",
            input: PropertyInput::Number {
                min: FONT_SIZE_RANGE.0,
                max: FONT_SIZE_RANGE.1,
            },
            value: format!("{}", element.style.font_size),
        },
        PropertyRow {
            key: PropertyKey::FontWeight,
            label: "Font weight",
            input: PropertyInput::Select(vec!["normal", "bold"]),
            value: element.style.font_weight.as_str().to_string(),
        },
        PropertyRow {
            key: PropertyKey::TextAlign,
            label: "Alignment",
            input: PropertyInput::Select(vec!["left", "center", "right"]),
            value: element.style.text_align.as_str().to_string(),
        },
        PropertyRow {
            key: PropertyKey::Color,
            label: "Text color",
            input: PropertyInput::Color,
            value: element.style.color.clone(),
        },
        PropertyRow {
            key: PropertyKey::BackgroundColor,
            label: "Background color",
            input: PropertyInput::Color,
            value: element.style.background_color.clone(),
        },
    ]
}

fn geometry_rows(element: &Element) -> Vec<PropertyRow> {
    let frame = element.frame;
    let coord = PropertyInput::Number {
        min: 0.0,
        max: f64::MAX,
    };
    let size = PropertyInput::Number {
        min: MIN_ELEMENT_SIZE,
        max: f64::MAX,
    };
    vec![
        PropertyRow {
            key: PropertyKey::X,
            label: "Position X",
            input: coord.clone(),
            value: format!("{}", frame.x.round()),
        },
        PropertyRow {
            key: PropertyKey::Y,
            label: "Position Y",
            input: coord,
            value: format!("{}", frame.y.round()),
        },
        PropertyRow {
            key: PropertyKey::Width,
            label: "Width",
            input: size.clone(),
            value: format!("{}", frame.width.round()),
        },
        PropertyRow {
            key: PropertyKey::Height,
            label: "Height",
            input: size,
            value: format!("{}", frame.height.round()),
        },
    ]
}

/// Applies a panel edit to the element through the store.
///
/// The raw string is parsed per property; a value that does not parse, or a
/// content edit aimed at a kind that does not carry it, is rejected without
/// mutating anything. Geometry results are clamped by the store, so the
/// caller must re-read the element to refresh the panel.
pub fn apply_property(
    canvas: &mut LabelCanvas,
    id: ElementId,
    key: PropertyKey,
    raw: &str,
) -> Result<(), DesignerError> {
    let element = match canvas.element(id) {
        Some(element) => element,
        // Stale panel edit racing a delete: tolerated as a no-op.
        None => return Ok(()),
    };

    let invalid = |raw: &str| DesignerError::InvalidPropertyValue {
        property: key.name().to_string(),
        value: raw.to_string(),
    };

    let mut patch = ElementPatch::default();
    match key {
        PropertyKey::Text => {
            if !matches!(element.content, ElementContent::CustomText { .. }) {
                return Err(DesignerError::PropertyNotApplicable {
                    property: key.name().to_string(),
                });
            }
            patch.text = Some(raw.to_string());
        }
        PropertyKey::Field => {
            if !matches!(element.content, ElementContent::BoundText { .. }) {
                return Err(DesignerError::PropertyNotApplicable {
                    property: key.name().to_string(),
                });
            }
            patch.field = Some(InventoryField::parse(raw).ok_or_else(|| invalid(raw))?);
        }
        PropertyKey::FontSize => {
            ensure_text_kind(element, key)?;
            patch.font_size = Some(raw.parse::<f64>().map_err(|_| invalid(raw))?);
        }
        PropertyKey::FontWeight => {
            ensure_text_kind(element, key)?;
            patch.font_weight = Some(FontWeight::parse(raw).ok_or_else(|| invalid(raw))?);
        }
        PropertyKey::TextAlign => {
            ensure_text_kind(element, key)?;
            patch.text_align = Some(TextAlign::parse(raw).ok_or_else(|| invalid(raw))?);
        }
        PropertyKey::Color => {
            ensure_text_kind(element, key)?;
            patch.color = Some(raw.to_string());
        }
        PropertyKey::BackgroundColor => {
            ensure_text_kind(element, key)?;
            patch.background_color = Some(raw.to_string());
        }
        PropertyKey::X => patch.x = Some(raw.parse::<f64>().map_err(|_| invalid(raw))?),
        PropertyKey::Y => patch.y = Some(raw.parse::<f64>().map_err(|_| invalid(raw))?),
        PropertyKey::Width => patch.width = Some(raw.parse::<f64>().map_err(|_| invalid(raw))?),
        PropertyKey::Height => patch.height = Some(raw.parse::<f64>().map_err(|_| invalid(raw))?),
    }

    canvas.update_element(id, &patch);
    Ok(())
}

fn ensure_text_kind(element: &Element, key: PropertyKey) -> Result<(), DesignerError> {
    if element.kind().is_text() {
        Ok(())
    } else {
        Err(DesignerError::PropertyNotApplicable {
            property: key.name().to_string(),
        })
    }
}
