//! Build version indicator for the top bar.

use egui::{Response, RichText, Ui};
use glimmer_utils::version_info;

/// Displays the build version and commit in the UI.
pub fn env_version(ui: &mut Ui) -> Response {
    ui.label(RichText::new(version_info::format_version()).small().weak())
}
