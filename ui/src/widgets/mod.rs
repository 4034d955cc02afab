mod env_version;
mod glitter_overlay;
mod header;
mod preview_panel;
mod settings_panel;
mod toast;

pub use env_version::env_version;
pub use glitter_overlay::glitter_overlay;
pub use header::header;
pub use preview_panel::{PreviewTextures, preview_panel};
pub use settings_panel::{SettingsTab, settings_panel};
pub use toast::{ToastKind, Toasts};
