//! Error handling for LabelKit
//!
//! Provides the designer-facing error taxonomy:
//! - User-input errors (nothing selected, empty template name)
//! - Validation errors (label dimensions, property values)
//! - Layout errors (malformed persisted templates)
//!
//! Nothing here is fatal to the process; every variant maps to a transient,
//! user-visible notification. External-call failures are carried as
//! `anyhow::Error` at the call site and are not enumerated here.

use thiserror::Error;

/// Designer error type
///
/// Represents locally recoverable failures raised by editor commands and
/// the property panel. Operations that hit one of these abort without
/// mutating any store state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A command that needs a selection was invoked without one
    #[error("No element is selected")]
    NothingSelected,

    /// Save was requested with an empty template name
    #[error("Template name must not be empty")]
    EmptyTemplateName,

    /// Label dimensions must be strictly positive
    #[error("Invalid label size: {width_mm} x {height_mm} mm")]
    InvalidLabelSize {
        /// Requested width in millimeters.
        width_mm: f64,
        /// Requested height in millimeters.
        height_mm: f64,
    },

    /// A destructive command was invoked without confirmation
    #[error("Clearing the canvas requires confirmation")]
    ConfirmationRequired,

    /// A property panel edit could not be parsed
    #[error("Invalid value for {property}: '{value}'")]
    InvalidPropertyValue {
        /// The property being edited.
        property: String,
        /// The rejected raw input.
        value: String,
    },

    /// A property edit does not apply to the selected element's kind
    #[error("Property {property} is not editable for this element")]
    PropertyNotApplicable {
        /// The property being edited.
        property: String,
    },

    /// A persisted template layout could not be reconstructed
    #[error("Invalid template layout: {reason}")]
    InvalidLayout {
        /// Why the layout was rejected.
        reason: String,
    },
}
