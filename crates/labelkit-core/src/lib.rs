//! # LabelKit Core
//!
//! Shared foundation for the LabelKit label-template designer:
//!
//! - **Units**: conversion between physical label dimensions (mm) and
//!   canvas display units at a fixed screen DPI, plus grid snapping.
//! - **Fields**: the inventory field vocabulary that bound-text elements
//!   reference, with display placeholders for in-editor rendering.
//! - **Errors**: typed error values for user-input and layout failures.
//! - **Status**: the transient notification surface commands report through.
//!
//! This crate performs no I/O and holds no editor state.

pub mod error;
pub mod fields;
pub mod status;
pub mod units;

pub use error::DesignerError;
pub use fields::InventoryField;
pub use status::{StatusLevel, StatusLog, StatusMessage};
pub use units::{
    canvas_size_px, format_mm, mm_to_px, parse_mm, px_to_mm, snap_to_grid, GRID_SPACING_PX,
    PX_PER_MM,
};
