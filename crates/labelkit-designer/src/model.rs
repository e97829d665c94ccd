//! Element model for label templates.
//!
//! An [`Element`] is one positioned, styled item on a label: text bound to
//! an inventory field, free-form text, or a barcode/QR/image placeholder.
//! The content is a tagged variant ([`ElementContent`]); which payload is
//! meaningful is decided by the variant, never by probing field presence.

use labelkit_core::InventoryField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum element width and height in display units.
///
/// Resize and property edits floor at this value; geometry below it is
/// unreachable by construction.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Lower and upper bounds for the font size property.
pub const FONT_SIZE_RANGE: (f64, f64) = (8.0, 72.0);

/// A point on the canvas in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned placement of an element: top-left corner plus size,
/// all in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Creates a new frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the given point lies inside this frame.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Clamps this frame so it satisfies the geometry invariants for a
    /// canvas of the given pixel size: size floored at
    /// [`MIN_ELEMENT_SIZE`] and capped at the canvas size, position
    /// non-negative, bounding box contained in the canvas.
    pub fn clamp_to(&mut self, canvas_width: f64, canvas_height: f64) {
        self.width = self
            .width
            .clamp(MIN_ELEMENT_SIZE, canvas_width.max(MIN_ELEMENT_SIZE));
        self.height = self
            .height
            .clamp(MIN_ELEMENT_SIZE, canvas_height.max(MIN_ELEMENT_SIZE));
        self.x = self.x.clamp(0.0, (canvas_width - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (canvas_height - self.height).max(0.0));
    }
}

/// Identifier of an element, unique within one editing session.
///
/// Ids are assigned monotonically at creation and never reused after
/// deletion. They are not stable across sessions; persisted templates are
/// renumbered on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "elem-{}", self.0)
    }
}

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// Text resolved from an inventory field at render time.
    BoundText,
    /// Literal user-authored text.
    CustomText,
    /// Barcode placeholder.
    Barcode,
    /// QR code placeholder.
    Qrcode,
    /// Item image placeholder.
    Image,
}

impl ElementKind {
    /// Kind name as persisted in template layouts.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::BoundText => "boundText",
            ElementKind::CustomText => "customText",
            ElementKind::Barcode => "barcode",
            ElementKind::Qrcode => "qrcode",
            ElementKind::Image => "image",
        }
    }

    /// Human-readable label for the property panel.
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::BoundText => "Bound text",
            ElementKind::CustomText => "Custom text",
            ElementKind::Barcode => "Barcode",
            ElementKind::Qrcode => "QR code",
            ElementKind::Image => "Item image",
        }
    }

    /// Whether this kind renders text and honors the text style.
    pub fn is_text(&self) -> bool {
        matches!(self, ElementKind::BoundText | ElementKind::CustomText)
    }

    /// Default frame size for a freshly placed element of this kind.
    /// Code placeholders get larger defaults than text.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ElementKind::Barcode => (180.0, 60.0),
            ElementKind::Qrcode => (80.0, 80.0),
            ElementKind::Image => (80.0, 80.0),
            ElementKind::BoundText | ElementKind::CustomText => (150.0, 30.0),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent {
    /// Text resolved from the named inventory field at print time.
    BoundText { field: InventoryField },
    /// Literal text stored in the template.
    CustomText { text: String },
    /// Barcode placeholder; pixels are produced by the print pipeline.
    Barcode,
    /// QR code placeholder.
    Qrcode,
    /// Item image placeholder.
    Image,
}

impl ElementContent {
    /// The kind tag for this content.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::BoundText { .. } => ElementKind::BoundText,
            ElementContent::CustomText { .. } => ElementKind::CustomText,
            ElementContent::Barcode => ElementKind::Barcode,
            ElementContent::Qrcode => ElementKind::Qrcode,
            ElementContent::Image => ElementKind::Image,
        }
    }

    /// Default content for a freshly placed element of the given kind.
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::BoundText => ElementContent::BoundText {
                field: InventoryField::Name,
            },
            ElementKind::CustomText => ElementContent::CustomText {
                text: "Free text".to_string(),
            },
            ElementKind::Barcode => ElementContent::Barcode,
            ElementKind::Qrcode => ElementContent::Qrcode,
            ElementKind::Image => ElementContent::Image,
        }
    }
}

/// Font weight for text elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            _ => None,
        }
    }
}

/// Horizontal text alignment for text elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

/// Text styling. Meaningful for text kinds; carried but visually inert for
/// barcode, QR, and image placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in display units, within [`FONT_SIZE_RANGE`].
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    /// Text color as a CSS-style color string.
    pub color: String,
    /// Background fill; "transparent" means none.
    pub background_color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Left,
            color: "#000000".to_string(),
            background_color: "transparent".to_string(),
        }
    }
}

/// Corner resize handles of a selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeHandle {
    /// All handles in rendering order.
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::SouthEast,
    ];

    /// Position of this handle on the given frame.
    pub fn position(&self, frame: &Frame) -> Point {
        match self {
            ResizeHandle::NorthWest => Point::new(frame.x, frame.y),
            ResizeHandle::NorthEast => Point::new(frame.x + frame.width, frame.y),
            ResizeHandle::SouthWest => Point::new(frame.x, frame.y + frame.height),
            ResizeHandle::SouthEast => Point::new(frame.x + frame.width, frame.y + frame.height),
        }
    }
}

/// One placed item on the label.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub content: ElementContent,
    pub frame: Frame,
    pub style: TextStyle,
}

impl Element {
    /// Creates an element with per-kind default size, style, and content.
    pub fn new(id: ElementId, content: ElementContent, position: Point) -> Self {
        let (width, height) = content.kind().default_size();
        Self {
            id,
            content,
            frame: Frame::new(position.x, position.y, width, height),
            style: TextStyle::default(),
        }
    }

    /// The kind tag of this element.
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }
}

/// Partial update applied to an element through the store.
///
/// Fields that do not apply to the target element's kind are tolerated and
/// ignored, mirroring the persisted layout contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// New literal text; applies to custom-text elements only.
    pub text: Option<String>,
    /// New bound field; applies to bound-text elements only.
    pub field: Option<InventoryField>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub text_align: Option<TextAlign>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

impl ElementPatch {
    /// A patch that moves the element's top-left corner.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// A patch that resizes the element.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Applies this patch to an element, clamping the resulting frame to a
    /// canvas of the given pixel size.
    pub fn apply_to(&self, element: &mut Element, canvas_width: f64, canvas_height: f64) {
        if let Some(x) = self.x {
            element.frame.x = x;
        }
        if let Some(y) = self.y {
            element.frame.y = y;
        }
        if let Some(width) = self.width {
            element.frame.width = width;
        }
        if let Some(height) = self.height {
            element.frame.height = height;
        }
        element.frame.clamp_to(canvas_width, canvas_height);

        match &mut element.content {
            ElementContent::CustomText { text } => {
                if let Some(new_text) = &self.text {
                    *text = new_text.clone();
                }
            }
            ElementContent::BoundText { field } => {
                if let Some(new_field) = self.field {
                    *field = new_field;
                }
            }
            ElementContent::Barcode | ElementContent::Qrcode | ElementContent::Image => {}
        }

        if let Some(font_size) = self.font_size {
            element.style.font_size = font_size.clamp(FONT_SIZE_RANGE.0, FONT_SIZE_RANGE.1);
        }
        if let Some(font_weight) = self.font_weight {
            element.style.font_weight = font_weight;
        }
        if let Some(text_align) = self.text_align {
            element.style.text_align = text_align;
        }
        if let Some(color) = &self.color {
            element.style.color = color.clone();
        }
        if let Some(background_color) = &self.background_color {
            element.style.background_color = background_color.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes_per_kind() {
        assert_eq!(ElementKind::Barcode.default_size(), (180.0, 60.0));
        assert_eq!(ElementKind::Qrcode.default_size(), (80.0, 80.0));
        assert_eq!(ElementKind::Image.default_size(), (80.0, 80.0));
        assert_eq!(ElementKind::CustomText.default_size(), (150.0, 30.0));
        assert_eq!(ElementKind::BoundText.default_size(), (150.0, 30.0));
    }

    #[test]
    fn test_frame_clamp_floors_size() {
        let mut frame = Frame::new(10.0, 10.0, -100.0, 5.0);
        frame.clamp_to(400.0, 300.0);
        assert_eq!(frame.width, MIN_ELEMENT_SIZE);
        assert_eq!(frame.height, MIN_ELEMENT_SIZE);
    }

    #[test]
    fn test_frame_clamp_caps_size_at_canvas() {
        let mut frame = Frame::new(10.0, 10.0, 600.0, 500.0);
        frame.clamp_to(400.0, 300.0);
        assert_eq!(frame.width, 400.0);
        assert_eq!(frame.height, 300.0);
        assert_eq!((frame.x, frame.y), (0.0, 0.0));
    }

    #[test]
    fn test_frame_clamp_keeps_box_inside_canvas() {
        let mut frame = Frame::new(390.0, -20.0, 50.0, 50.0);
        frame.clamp_to(400.0, 300.0);
        assert_eq!(frame.x, 350.0);
        assert_eq!(frame.y, 0.0);
        assert!(frame.x + frame.width <= 400.0);
        assert!(frame.y + frame.height <= 300.0);
    }

    #[test]
    fn test_patch_ignores_inapplicable_content_fields() {
        let mut barcode = Element::new(
            ElementId(1),
            ElementContent::default_for(ElementKind::Barcode),
            Point::new(0.0, 0.0),
        );
        let patch = ElementPatch {
            text: Some("ignored".to_string()),
            field: Some(InventoryField::Sku),
            ..ElementPatch::default()
        };
        patch.apply_to(&mut barcode, 400.0, 300.0);
        assert_eq!(barcode.content, ElementContent::Barcode);
    }

    #[test]
    fn test_patch_clamps_font_size() {
        let mut text = Element::new(
            ElementId(1),
            ElementContent::default_for(ElementKind::CustomText),
            Point::new(0.0, 0.0),
        );
        let patch = ElementPatch {
            font_size: Some(500.0),
            ..ElementPatch::default()
        };
        patch.apply_to(&mut text, 400.0, 300.0);
        assert_eq!(text.style.font_size, FONT_SIZE_RANGE.1);
    }

    #[test]
    fn test_handle_positions() {
        let frame = Frame::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(
            ResizeHandle::SouthEast.position(&frame),
            Point::new(110.0, 70.0)
        );
        assert_eq!(
            ResizeHandle::NorthWest.position(&frame),
            Point::new(10.0, 20.0)
        );
    }
}
