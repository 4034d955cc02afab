//! The current set of visual inputs that define what gets exported.

use egui::Color32;

use crate::logo::{LogoError, LogoImage};
use crate::tracking::build_tracking_payload;

/// URL pre-filled on first launch.
pub const DEFAULT_URL: &str = "https://example.com";

/// One-click color presets: (label, foreground, background).
pub const COLOR_PRESETS: &[(&str, Color32, Color32)] = &[
    (
        "Pink",
        Color32::from_rgb(0xFF, 0x69, 0xB4),
        Color32::from_rgb(0xFF, 0xE4, 0xE1),
    ),
    (
        "Purple",
        Color32::from_rgb(0x93, 0x70, 0xDB),
        Color32::from_rgb(0xE6, 0xE6, 0xFA),
    ),
    (
        "Blue",
        Color32::from_rgb(0x41, 0x69, 0xE1),
        Color32::from_rgb(0xE0, 0xF6, 0xFF),
    ),
];

/// Everything the preview renders and the export pipeline materializes:
/// the base URL, the two symbol colors, the optional analytics tracking id
/// and the optional logo overlay.
///
/// No field is validated here; free-form input flows through to the QR
/// renderer as-is. The logo is the one exception, it is validated by
/// decoding in [`Composition::set_logo_overlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub url: String,
    pub fg_color: Color32,
    pub bg_color: Color32,
    pub tracking_id: String,
    pub(crate) logo: Option<LogoImage>,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_owned(),
            fg_color: Color32::BLACK,
            bg_color: Color32::WHITE,
            tracking_id: String::new(),
            logo: None,
        }
    }
}

impl Composition {
    /// The URL string embedded in the QR symbol, with analytics parameters
    /// appended when a tracking id is set.
    pub fn payload(&self) -> String {
        build_tracking_payload(&self.url, &self.tracking_id)
    }

    /// Decode uploaded bytes and install them as the logo overlay.
    ///
    /// On success the previous overlay (if any) is released; on decode
    /// failure it stays active and the error is returned to the caller.
    pub fn set_logo_overlay(&mut self, bytes: &[u8]) -> Result<(), LogoError> {
        let logo = LogoImage::decode(bytes)?;
        log::info!("Logo overlay set: {}x{}", logo.width, logo.height);
        self.logo = Some(logo);
        Ok(())
    }

    /// Drop the logo overlay.
    pub fn clear_logo_overlay(&mut self) {
        self.logo = None;
    }

    pub fn logo(&self) -> Option<&LogoImage> {
        self.logo.as_ref()
    }
}
