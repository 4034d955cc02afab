//! Logo file selection via the native file dialog.
//!
//! A trait seam abstracts the dialog so tests can inject mock providers
//! instead of relying on a system dialog.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: native dialogs via the `rfd` crate.
//! - **Web (WASM)**: not supported (stub implementation).

/// Trait for picking logo image bytes, enabling mock implementations for
/// testing.
///
/// The returned bytes are opaque to the picker; decoding and validation
/// happen in `Composition::set_logo_overlay`.
pub trait LogoPicker {
    /// Open the picker and return the raw bytes of the selected file.
    fn pick_logo(&self) -> Option<Vec<u8>>;
}

/// Default logo picker using the system file dialog.
#[derive(Default)]
pub struct SystemLogoPicker;

#[cfg(not(target_arch = "wasm32"))]
impl LogoPicker for SystemLogoPicker {
    fn pick_logo(&self) -> Option<Vec<u8>> {
        use rfd::FileDialog;

        let file_path = FileDialog::new()
            .add_filter(
                "Image",
                &[
                    "png", "jpg", "jpeg", "gif", "bmp", "webp", "ico", "tiff", "tif",
                ],
            )
            .set_title("Select a logo image")
            .pick_file()?;

        log::info!("User selected logo file: {file_path:?}");

        match std::fs::read(&file_path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                log::warn!("Failed to read logo file {file_path:?}: {e}");
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl LogoPicker for SystemLogoPicker {
    fn pick_logo(&self) -> Option<Vec<u8>> {
        // File dialogs are not supported on the web build.
        None
    }
}
