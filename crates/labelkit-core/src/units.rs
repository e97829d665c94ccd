//! Unit conversion utilities
//!
//! Handles conversion between physical label dimensions (millimeters) and
//! canvas display units (pixels at the assumed screen DPI). The conversion
//! factor is a pure function of the DPI constant; it is recomputed on demand
//! and never persisted with a template.

/// Screen DPI the canvas is calibrated against.
pub const CANVAS_DPI: f64 = 96.0;

/// Display units (pixels) per millimeter at [`CANVAS_DPI`].
pub const PX_PER_MM: f64 = CANVAS_DPI / 25.4;

/// Spacing of the alignment grid in display units.
pub const GRID_SPACING_PX: f64 = 10.0;

/// Converts millimeters to display units.
pub fn mm_to_px(mm: f64) -> f64 {
    mm * PX_PER_MM
}

/// Converts display units back to millimeters.
pub fn px_to_mm(px: f64) -> f64 {
    px / PX_PER_MM
}

/// Computes the canvas pixel size for a label of the given physical size.
///
/// Called whenever the dimension inputs change; the result is derived state
/// and must not be stored alongside the millimeter dimensions.
pub fn canvas_size_px(width_mm: f64, height_mm: f64) -> (f64, f64) {
    (mm_to_px(width_mm), mm_to_px(height_mm))
}

/// Rounds a coordinate to the nearest grid line.
pub fn snap_to_grid(value: f64) -> f64 {
    (value / GRID_SPACING_PX).round() * GRID_SPACING_PX
}

/// Format a millimeter value for display in dimension inputs.
pub fn format_mm(value_mm: f64) -> String {
    format!("{:.1}", value_mm)
}

/// Parse a dimension input string to millimeters.
pub fn parse_mm(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty dimension".to_string());
    }
    input.parse::<f64>().map_err(|e| e.to_string())
}
