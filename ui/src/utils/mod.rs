pub mod colors;
pub mod export_worker;
pub mod logo_picker;
pub mod save_dialog;
