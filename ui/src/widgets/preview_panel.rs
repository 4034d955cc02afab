//! QR preview card: rendered symbol, payload echo and the download button.

use egui::{
    Color32, Context, CornerRadius, Frame, Margin, Rect, RichText, TextureHandle, TextureOptions,
    Ui, vec2,
};
use glimmer_business::qr::generate_qr_image;
use glimmer_business::{Composition, EXPORT_FILENAME};

use crate::utils::colors::COLOR_RED;
use crate::utils::export_worker::{ExportResultSender, spawn_export};
use crate::utils::save_dialog::SavePathPicker;

/// Preview layout, in points. The export raster reproduces this at 2x.
const QR_PREVIEW_SIZE: f32 = 256.0;
const CARD_PADDING: i8 = 24;
const LOGO_BOX: f32 = 48.0;
const LOGO_FIT: f32 = 40.0;

/// Texture cache for the preview.
///
/// The QR texture is keyed by (payload, colors) and the logo texture by the
/// logo revision counter, so textures are only re-uploaded when their
/// source actually changed.
#[derive(Default)]
pub struct PreviewTextures {
    qr: Option<(QrKey, TextureHandle)>,
    logo: Option<(u64, TextureHandle)>,
}

type QrKey = (String, Color32, Color32);

impl PreviewTextures {
    fn qr_texture(&mut self, ctx: &Context, composition: &Composition) -> Option<TextureHandle> {
        let key = (
            composition.payload(),
            composition.fg_color,
            composition.bg_color,
        );
        let fresh = matches!(&self.qr, Some((k, _)) if *k == key);
        if !fresh {
            match generate_qr_image(
                &key.0,
                QR_PREVIEW_SIZE as usize,
                composition.fg_color,
                composition.bg_color,
            ) {
                Ok(img) => {
                    let tex = ctx.load_texture("qr_preview", img, TextureOptions::NEAREST);
                    self.qr = Some((key, tex));
                }
                Err(err) => {
                    log::warn!("QR preview unavailable: {err}");
                    self.qr = None;
                    return None;
                }
            }
        }
        self.qr.as_ref().map(|(_, tex)| tex.clone())
    }

    fn logo_texture(
        &mut self,
        ctx: &Context,
        composition: &Composition,
        revision: u64,
    ) -> Option<TextureHandle> {
        let Some(logo) = composition.logo() else {
            self.logo = None;
            return None;
        };

        let fresh = matches!(&self.logo, Some((rev, _)) if *rev == revision);
        if !fresh {
            let tex = ctx.load_texture("logo_preview", logo.to_color_image(), TextureOptions::LINEAR);
            self.logo = Some((revision, tex));
        }
        self.logo.as_ref().map(|(_, tex)| tex.clone())
    }
}

/// Render the preview card.
pub fn preview_panel(
    ui: &mut Ui,
    composition: &Composition,
    textures: &mut PreviewTextures,
    logo_revision: u64,
    save_picker: &dyn SavePathPicker,
    export_sender: &ExportResultSender,
) {
    ui.heading("Your QR Code");
    ui.add_space(4.0);

    ui.vertical_centered(|ui| {
        Frame::NONE
            .fill(composition.bg_color)
            .inner_margin(Margin::same(CARD_PADDING))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                match textures.qr_texture(ui.ctx(), composition) {
                    Some(tex) => {
                        let response = ui.image((
                            tex.id(),
                            vec2(QR_PREVIEW_SIZE, QR_PREVIEW_SIZE),
                        ));
                        if let Some(logo_tex) =
                            textures.logo_texture(ui.ctx(), composition, logo_revision)
                        {
                            draw_logo_overlay(ui, response.rect, &logo_tex);
                        }
                    }
                    None => {
                        ui.colored_label(COLOR_RED, "URL is too long to encode");
                    }
                }
            });

        ui.separator();

        ui.label(
            RichText::new(format!("URL: {}", composition.payload()))
                .small()
                .monospace(),
        );
        ui.add_space(4.0);

        if ui.button("Download QR Code").clicked() {
            match save_picker.pick_save_path(EXPORT_FILENAME) {
                Some(path) => {
                    spawn_export(composition.clone(), path, export_sender.clone());
                }
                None => log::debug!("Save dialog dismissed"),
            }
        }
    });
}

/// Paint the logo on its white backing box, centered over the symbol.
fn draw_logo_overlay(ui: &Ui, qr_rect: Rect, logo_tex: &TextureHandle) {
    let center = qr_rect.center();
    let box_rect = Rect::from_center_size(center, vec2(LOGO_BOX, LOGO_BOX));
    ui.painter()
        .rect_filled(box_rect, CornerRadius::same(4), Color32::WHITE);

    let [w, h] = logo_tex.size();
    let (fit_w, fit_h) = if w >= h {
        (LOGO_FIT, (LOGO_FIT * h as f32 / w as f32).max(1.0))
    } else {
        ((LOGO_FIT * w as f32 / h as f32).max(1.0), LOGO_FIT)
    };
    let logo_rect = Rect::from_center_size(center, vec2(fit_w, fit_h));

    ui.painter().image(
        logo_tex.id(),
        logo_rect,
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}
