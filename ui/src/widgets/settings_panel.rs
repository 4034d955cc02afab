//! QR code settings card with Basic / Design / Advanced tabs.

use egui::{RichText, TextEdit, Ui};
use glimmer_business::Composition;
use glimmer_business::composition::COLOR_PRESETS;

use crate::state::HexBuffers;
use crate::utils::colors::{color_to_hex, parse_hex_color};
use crate::utils::logo_picker::LogoPicker;
use crate::widgets::Toasts;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Basic,
    Design,
    Advanced,
}

/// Render the settings card.
///
/// All fields are free-form; nothing here validates the URL or tracking id.
/// Logo uploads are the exception: undecodable files are rejected with an
/// error toast and the previous overlay stays active.
pub fn settings_panel(
    ui: &mut Ui,
    composition: &mut Composition,
    tab: &mut SettingsTab,
    hex_buffers: &mut HexBuffers,
    toasts: &mut Toasts,
    logo_revision: &mut u64,
    logo_picker: &dyn LogoPicker,
) {
    ui.heading("QR Code Settings");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.selectable_value(tab, SettingsTab::Basic, "Basic");
        ui.selectable_value(tab, SettingsTab::Design, "Design");
        ui.selectable_value(tab, SettingsTab::Advanced, "Advanced");
    });
    ui.separator();

    match *tab {
        SettingsTab::Basic => basic_tab(ui, composition),
        SettingsTab::Design => design_tab(
            ui,
            composition,
            hex_buffers,
            toasts,
            logo_revision,
            logo_picker,
        ),
        SettingsTab::Advanced => advanced_tab(ui, composition),
    }
}

fn basic_tab(ui: &mut Ui, composition: &mut Composition) {
    ui.label("Enter URL");
    ui.add(
        TextEdit::singleline(&mut composition.url)
            .hint_text("Paste your link here...")
            .desired_width(f32::INFINITY),
    );
}

fn design_tab(
    ui: &mut Ui,
    composition: &mut Composition,
    hex_buffers: &mut HexBuffers,
    toasts: &mut Toasts,
    logo_revision: &mut u64,
    logo_picker: &dyn LogoPicker,
) {
    ui.columns(2, |cols| {
        cols[0].label("QR Color");
        cols[0].horizontal(|ui| {
            if ui
                .color_edit_button_srgba(&mut composition.fg_color)
                .changed()
            {
                hex_buffers.fg = color_to_hex(composition.fg_color);
            }
            let edit = ui.add(TextEdit::singleline(&mut hex_buffers.fg).desired_width(80.0));
            if edit.changed() {
                // Unparsable hex leaves the previous color active.
                if let Some(color) = parse_hex_color(&hex_buffers.fg) {
                    composition.fg_color = color;
                }
            }
        });

        cols[1].label("Background");
        cols[1].horizontal(|ui| {
            if ui
                .color_edit_button_srgba(&mut composition.bg_color)
                .changed()
            {
                hex_buffers.bg = color_to_hex(composition.bg_color);
            }
            let edit = ui.add(TextEdit::singleline(&mut hex_buffers.bg).desired_width(80.0));
            if edit.changed() {
                if let Some(color) = parse_hex_color(&hex_buffers.bg) {
                    composition.bg_color = color;
                }
            }
        });
    });

    ui.add_space(8.0);
    ui.label("Brand Logo");
    ui.horizontal(|ui| {
        if ui.button("Upload Logo").clicked() {
            if let Some(bytes) = logo_picker.pick_logo() {
                match composition.set_logo_overlay(&bytes) {
                    Ok(()) => *logo_revision += 1,
                    Err(err) => {
                        log::warn!("Rejected logo upload: {err}");
                        toasts.error("Error", "Failed to load logo image");
                    }
                }
            }
        }
        if let Some(logo) = composition.logo() {
            ui.label(
                RichText::new(format!("Logo: {}x{}", logo.width, logo.height)).small(),
            );
            if ui.button("Remove Logo").clicked() {
                composition.clear_logo_overlay();
                *logo_revision += 1;
            }
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        for (label, fg, bg) in COLOR_PRESETS {
            if ui.button(*label).clicked() {
                composition.fg_color = *fg;
                composition.bg_color = *bg;
                hex_buffers.sync_from(composition);
            }
        }
    });
}

fn advanced_tab(ui: &mut Ui, composition: &mut Composition) {
    ui.label("Google Analytics ID");
    ui.add(
        TextEdit::singleline(&mut composition.tracking_id)
            .hint_text("UA-XXXXXXXXX-X or G-XXXXXXXXXX")
            .desired_width(f32::INFINITY),
    );
    ui.label(
        RichText::new("Add tracking parameters to your QR code for analytics")
            .small()
            .weak(),
    );
}
