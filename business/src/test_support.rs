//! Shared helpers for unit tests.

use image::ImageEncoder as _;
use image::codecs::png::PngEncoder;

/// Encode a solid-color PNG in memory for test input.
pub(crate) fn encoded_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let pixels: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(&pixels, width, height, image::ExtendedColorType::Rgba8)
        .expect("encoding test PNG should not fail");
    out
}
