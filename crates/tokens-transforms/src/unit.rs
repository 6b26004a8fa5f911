//! `relative/*` plugins: rem lengths to pixels.
//!
//! The base font can be tuned per prop with numeric `meta.baseFontPercentage`
//! (default 100) and `meta.baseFontPixel` (default 16).

use crate::util::{
    is_relative_spacing, rem_to_px_number, DEFAULT_BASE_FONT_PERCENTAGE, DEFAULT_BASE_FONT_PIXEL,
};
use serde_json::Value;
use tokens_core::{Prop, TransformError, ValueTransform};

pub const RELATIVE_PIXEL: &str = "relative/pixel";
pub const RELATIVE_PIXEL_VALUE: &str = "relative/pixelValue";

fn is_relative(prop: &Prop) -> bool {
    prop.value().as_str().is_some_and(is_relative_spacing)
}

fn convert_rem_to_px(prop: &Prop) -> Result<f64, TransformError> {
    let percentage = prop
        .meta_number("baseFontPercentage")
        .unwrap_or(DEFAULT_BASE_FONT_PERCENTAGE);
    let pixel = prop
        .meta_number("baseFontPixel")
        .unwrap_or(DEFAULT_BASE_FONT_PIXEL);
    let text = prop.value().as_str().unwrap_or_default();

    rem_to_px_number(text, percentage, pixel).ok_or_else(|| {
        TransformError::new(format!(
            "Property \"{}\" has an invalid rem value \"{}\"",
            prop.name().unwrap_or("?"),
            text
        ))
    })
}

/// `"1rem"` → `"16px"`
pub fn relative_pixel() -> ValueTransform {
    ValueTransform::new(RELATIVE_PIXEL, is_relative, |prop: &Prop| {
        convert_rem_to_px(prop).map(|px| Value::String(format!("{}px", px)))
    })
}

/// `"1rem"` → `"16"`
pub fn relative_pixel_value() -> ValueTransform {
    ValueTransform::new(RELATIVE_PIXEL_VALUE, is_relative, |prop: &Prop| {
        convert_rem_to_px(prop).map(|px| Value::String(px.to_string()))
    })
}
