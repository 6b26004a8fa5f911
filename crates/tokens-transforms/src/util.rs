//! Unit helpers shared by the transform plugins.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A relative length: optional sign, decimal number, `rem` suffix.
    static ref RELATIVE_SPACING: Regex = Regex::new(r"^\s*(-?(?:\d+\.?\d*|\.\d+))rem\s*$").unwrap();
}

/// Base font size as a percentage of the browser default.
pub const DEFAULT_BASE_FONT_PERCENTAGE: f64 = 100.0;

/// Browser default font size in pixels.
pub const DEFAULT_BASE_FONT_PIXEL: f64 = 16.0;

/// True when the value is written in `rem`.
pub fn is_relative_spacing(value: &str) -> bool {
    value.ends_with("rem")
}

/// Converts `"1.5rem"` to pixels. `None` when the numeric part does not parse.
pub fn rem_to_px_number(value: &str, base_font_percentage: f64, base_font_pixel: f64) -> Option<f64> {
    let caps = RELATIVE_SPACING.captures(value)?;
    let rem: f64 = caps[1].parse().ok()?;
    Some(rem * base_font_pixel * base_font_percentage / 100.0)
}
