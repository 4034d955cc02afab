#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use egui_kittest::Harness;
use glimmer_ui::GlimmerApp;
use glimmer_ui::state::State;
use glimmer_ui::utils::logo_picker::LogoPicker;
use glimmer_ui::utils::save_dialog::SavePathPicker;
use image::ImageEncoder as _;
use image::codecs::png::PngEncoder;
use kittest::Queryable as _;

/// Mock logo picker that replays a fixed sequence of responses.
pub struct MockLogoPicker {
    responses: RefCell<Vec<Option<Vec<u8>>>>,
}

impl MockLogoPicker {
    pub fn with_responses(responses: Vec<Option<Vec<u8>>>) -> Self {
        Self {
            responses: RefCell::new(responses),
        }
    }

    pub fn none() -> Self {
        Self::with_responses(Vec::new())
    }
}

impl LogoPicker for MockLogoPicker {
    fn pick_logo(&self) -> Option<Vec<u8>> {
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            None
        } else {
            responses.remove(0)
        }
    }
}

/// Mock save-path picker that always returns the same path.
pub struct MockSavePathPicker {
    pub path: Option<PathBuf>,
}

impl SavePathPicker for MockSavePathPicker {
    fn pick_save_path(&self, _default_name: &str) -> Option<PathBuf> {
        self.path.clone()
    }
}

pub fn harness_with_pickers<'a>(
    logo_picker: MockLogoPicker,
    save_picker: MockSavePathPicker,
) -> Harness<'a, GlimmerApp> {
    let _ = env_logger::builder().is_test(true).try_init();

    let app = GlimmerApp::with_pickers(
        State::default(),
        Box::new(logo_picker),
        Box::new(save_picker),
    );
    // Tall surface so the download button stays clickable even when the
    // payload echo label wraps over many lines (oversized-URL tests).
    Harness::builder()
        .with_size(egui::Vec2::new(800.0, 2400.0))
        .build_eframe(|_| app)
}

pub fn default_harness<'a>() -> Harness<'a, GlimmerApp> {
    harness_with_pickers(MockLogoPicker::none(), MockSavePathPicker { path: None })
}

/// Encode a solid-color PNG in memory for upload fixtures.
pub fn encoded_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
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

/// Step the harness until a label containing `text` shows up, or give up.
///
/// Used to wait for toasts fed by the background export worker.
pub fn wait_for_label(harness: &mut Harness<'_, GlimmerApp>, text: &str, max_steps: usize) -> bool {
    for _ in 0..max_steps {
        if harness.query_by_label_contains(text).is_some() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
        harness.step();
    }
    harness.query_by_label_contains(text).is_some()
}
