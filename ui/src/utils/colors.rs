//! Shared color constants and hex conversion for the UI.

use egui::Color32;

/// Forest green color for success toasts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red color for error toasts and degenerate-input hints.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Parse a `#RRGGBB` hex string into a color.
///
/// The leading `#` is optional and hex digits are case-insensitive.
/// Returns `None` for any other shape, leaving the caller's previous color
/// in effect.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Format a color as an uppercase `#RRGGBB` hex string.
pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}
