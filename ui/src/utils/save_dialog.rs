//! Save-path selection for the exported PNG.
//!
//! Same trait-seam shape as the logo picker: the system implementation
//! opens a native save dialog pre-filled with the default filename, mocks
//! hand back a fixed path in tests, and the web build stubs to `None`.

use std::path::PathBuf;

/// Trait for choosing where the exported PNG lands.
pub trait SavePathPicker {
    /// Open a save dialog pre-filled with `default_name` and return the
    /// chosen path, or `None` if the user dismissed the dialog.
    fn pick_save_path(&self, default_name: &str) -> Option<PathBuf>;
}

/// Default save-path picker using the system save dialog.
#[derive(Default)]
pub struct SystemSavePathPicker;

#[cfg(not(target_arch = "wasm32"))]
impl SavePathPicker for SystemSavePathPicker {
    fn pick_save_path(&self, default_name: &str) -> Option<PathBuf> {
        use rfd::FileDialog;

        let path = FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(default_name)
            .set_title("Save QR code")
            .save_file()?;

        log::info!("User chose export path: {path:?}");
        Some(path)
    }
}

#[cfg(target_arch = "wasm32")]
impl SavePathPicker for SystemSavePathPicker {
    fn pick_save_path(&self, _default_name: &str) -> Option<PathBuf> {
        // Save dialogs are not supported on the web build.
        log::warn!("PNG export is not available on the web build");
        None
    }
}
