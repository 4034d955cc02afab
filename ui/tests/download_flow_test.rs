//! Integration tests for the export/download flow.
//!
//! The save dialog is mocked to a temp directory, so clicking the download
//! button runs the real export worker end to end: render, PNG encode,
//! file write, outcome toast.

use kittest::Queryable as _;

mod common;

use crate::common::{MockLogoPicker, MockSavePathPicker, harness_with_pickers, wait_for_label};

#[test]
fn test_download_writes_png_and_shows_success_toast() {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("qr-code.png");

    let mut harness = harness_with_pickers(
        MockLogoPicker::none(),
        MockSavePathPicker {
            path: Some(path.clone()),
        },
    );
    harness.step();

    harness.get_by_label("Download QR Code").click();
    harness.step();

    assert!(
        wait_for_label(&mut harness, "QR code downloaded successfully", 200),
        "success toast should appear after the export worker finishes"
    );
    assert!(
        harness.query_by_label_contains("Success!").is_some(),
        "success toast should carry its title"
    );

    let bytes = std::fs::read(&path).expect("exported file should exist");
    let img = image::load_from_memory(&bytes).expect("exported file should be a valid PNG");
    assert_eq!(img.width(), img.height());
}

#[test]
fn test_dismissed_save_dialog_exports_nothing() {
    let mut harness = harness_with_pickers(
        MockLogoPicker::none(),
        MockSavePathPicker { path: None },
    );
    harness.step();

    harness.get_by_label("Download QR Code").click();
    for _ in 0..5 {
        harness.step();
    }

    assert!(
        harness
            .query_by_label_contains("QR code downloaded successfully")
            .is_none(),
        "no toast when the dialog is dismissed"
    );
    assert!(
        harness
            .query_by_label_contains("Failed to download QR code")
            .is_none(),
        "a dismissed dialog is not a failure"
    );
}
