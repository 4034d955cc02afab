//! QR symbol rasterization.

use egui::{Color32, ColorImage};
use qrcode::{EcLevel, QrCode};

use crate::export::ExportError;

/// Generate a QR code image for `data` in the given colors.
///
/// The symbol is encoded at error-correction level M and scaled by the
/// largest integer factor that fits `size` (minimum scale of 1), so the
/// result is at most `size` pixels square. Returns a `ColorImage` that can
/// be loaded as a texture in egui or blitted into the export canvas.
pub fn generate_qr_image(
    data: &str,
    size: usize,
    fg: Color32,
    bg: Color32,
) -> Result<ColorImage, ExportError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
        .map_err(ExportError::QrEncode)?;
    let qr_width = code.width();

    let scale = (size / qr_width).max(1);
    let actual_size = qr_width * scale;

    let mut pixels = vec![bg; actual_size * actual_size];

    for (y, row) in code.to_colors().chunks(qr_width).enumerate() {
        for (x, color) in row.iter().enumerate() {
            let pixel_color = match color {
                qrcode::Color::Dark => fg,
                qrcode::Color::Light => bg,
            };

            for dy in 0..scale {
                for dx in 0..scale {
                    let px = x * scale + dx;
                    let py = y * scale + dy;
                    if px < actual_size && py < actual_size {
                        pixels[py * actual_size + px] = pixel_color;
                    }
                }
            }
        }
    }

    Ok(ColorImage::new([actual_size, actual_size], pixels))
}
