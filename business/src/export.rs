//! PNG export of the rendered composition.
//!
//! [`render_composition`] reproduces the on-screen preview card at a fixed
//! 2x upscale: a background-colored card with 24pt padding around a 256pt
//! QR symbol, plus the optional logo on a 48pt white backing box in the
//! center. The result is encoded PNG bytes; saving them to disk and
//! notifying the user are caller-side concerns.

use egui::ColorImage;
use image::RgbaImage;
use image::codecs::png::PngEncoder;
use image::{ImageEncoder as _, imageops};
use thiserror::Error;

use crate::composition::Composition;
use crate::qr::generate_qr_image;

/// Default filename offered for the exported PNG.
pub const EXPORT_FILENAME: &str = "qr-code.png";

/// Fixed raster upscale factor relative to the preview layout.
pub const EXPORT_SCALE: u32 = 2;

/// Preview-layout constants, in unscaled points.
const QR_SIZE: usize = 256;
const CARD_PADDING: u32 = 24;
const LOGO_BOX: u32 = 48;
const LOGO_FIT: u32 = 40;

/// Failure to materialize the composition as PNG bytes.
///
/// Both variants are recoverable: the caller reports them and the
/// composition state is left untouched.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("qr encoding failed: {0:?}")]
    QrEncode(qrcode::types::QrError),
    #[error("failed to encode png: {0}")]
    PngEncode(#[from] image::ImageError),
}

/// Rasterize the composition and encode it as PNG bytes.
///
/// Pure with respect to the composition; repeated calls with the same
/// inputs produce the same image.
pub fn render_composition(composition: &Composition) -> Result<Vec<u8>, ExportError> {
    let payload = composition.payload();
    let qr = generate_qr_image(
        &payload,
        QR_SIZE * EXPORT_SCALE as usize,
        composition.fg_color,
        composition.bg_color,
    )?;

    let padding = CARD_PADDING * EXPORT_SCALE;
    let qr_size = qr.size[0] as u32;
    let canvas_size = qr_size + 2 * padding;

    // Transparent base canvas; the card fill covers it entirely.
    let mut canvas = RgbaImage::new(canvas_size, canvas_size);
    let bg = composition.bg_color.to_array();
    for pixel in canvas.pixels_mut() {
        pixel.0 = bg;
    }

    blit_color_image(&mut canvas, &qr, padding, padding);

    if let Some(logo) = composition.logo() {
        draw_logo_overlay(&mut canvas, logo);
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        canvas.as_raw(),
        canvas_size,
        canvas_size,
        image::ExtendedColorType::Rgba8,
    )?;

    log::debug!(
        "Rendered composition to {canvas_size}x{canvas_size} PNG ({} bytes)",
        out.len()
    );
    Ok(out)
}

/// Copy an egui image into the canvas at the given offset.
fn blit_color_image(canvas: &mut RgbaImage, src: &ColorImage, x0: u32, y0: u32) {
    let [w, h] = src.size;
    for y in 0..h {
        for x in 0..w {
            let color = src.pixels[y * w + x];
            canvas.put_pixel(x0 + x as u32, y0 + y as u32, image::Rgba(color.to_array()));
        }
    }
}

/// Draw the logo on its white backing box, centered on the canvas.
///
/// The logo is fitted into a `LOGO_FIT` square preserving aspect ratio and
/// alpha-blended over the backing.
fn draw_logo_overlay(canvas: &mut RgbaImage, logo: &crate::logo::LogoImage) {
    let canvas_size = canvas.width();
    let box_size = LOGO_BOX * EXPORT_SCALE;
    let box_origin = (canvas_size - box_size) / 2;

    for y in box_origin..box_origin + box_size {
        for x in box_origin..box_origin + box_size {
            canvas.put_pixel(x, y, image::Rgba([255, 255, 255, 255]));
        }
    }

    let Some(source) =
        RgbaImage::from_raw(logo.width as u32, logo.height as u32, logo.bytes.clone())
    else {
        // The overlay was validated at decode time; a mismatch here would
        // be a bug, not user input.
        log::warn!("Logo overlay byte length does not match its dimensions, skipping");
        return;
    };

    let fit = LOGO_FIT * EXPORT_SCALE;
    let (fit_w, fit_h) = fitted_dimensions(source.width(), source.height(), fit);
    let resized = imageops::resize(&source, fit_w, fit_h, imageops::FilterType::Lanczos3);

    let x0 = box_origin + (box_size - fit_w) / 2;
    let y0 = box_origin + (box_size - fit_h) / 2;
    for (x, y, pixel) in resized.enumerate_pixels() {
        blend_over(canvas, x0 + x, y0 + y, pixel.0);
    }
}

/// Largest dimensions that fit a `fit` square while preserving aspect ratio.
fn fitted_dimensions(width: u32, height: u32, fit: u32) -> (u32, u32) {
    if width >= height {
        let h = (height * fit / width).max(1);
        (fit, h)
    } else {
        let w = (width * fit / height).max(1);
        (w, fit)
    }
}

/// Alpha-composite an RGBA pixel over the canvas.
fn blend_over(canvas: &mut RgbaImage, x: u32, y: u32, src: [u8; 4]) {
    let alpha = u32::from(src[3]);
    if alpha == 0 {
        return;
    }
    if alpha == 255 {
        canvas.put_pixel(x, y, image::Rgba(src));
        return;
    }

    let dst = canvas.get_pixel(x, y).0;
    let mut out = [0u8; 4];
    for i in 0..3 {
        let blended = u32::from(src[i]) * alpha + u32::from(dst[i]) * (255 - alpha);
        out[i] = (blended / 255) as u8;
    }
    out[3] = dst[3].max(src[3]);
    canvas.put_pixel(x, y, image::Rgba(out));
}
