//! Logo overlay decoding.
//!
//! Uploaded logo bytes are validated by decoding them up front. Undecodable
//! input is rejected with [`LogoError`] and the previously active overlay
//! stays in place; there is no further MIME or dimension validation.

use thiserror::Error;

/// Failure to turn uploaded bytes into a displayable overlay.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to decode logo image: {0}")]
    Decode(#[from] image::ImageError),
}

/// A decoded, display-ready logo overlay in RGBA format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub width: usize,
    pub height: usize,
    /// Raw RGBA bytes, 4 per pixel.
    pub bytes: Vec<u8>,
}

impl LogoImage {
    /// Decode arbitrary uploaded image bytes into an RGBA overlay.
    pub fn decode(bytes: &[u8]) -> Result<Self, LogoError> {
        let img = image::load_from_memory(bytes)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("Decoded logo overlay: {width}x{height}");

        Ok(Self {
            width: width as usize,
            height: height as usize,
            bytes: rgba.into_raw(),
        })
    }

    /// Convert to an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.bytes)
    }
}
