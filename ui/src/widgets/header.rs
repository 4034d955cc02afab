//! Page header with the sparkle-themed title.

use egui::{RichText, Ui};

pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.heading(RichText::new("✨ Magical QR Generator ✨").size(28.0));
        ui.label(
            RichText::new("Create stunning QR codes with glitter effects and advanced customization")
                .weak(),
        );
        ui.add_space(8.0);
    });
}
