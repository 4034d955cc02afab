use crate::state::{Settings, State};
use crate::utils::export_worker::ExportOutcome;
use crate::utils::logo_picker::{LogoPicker, SystemLogoPicker};
use crate::utils::save_dialog::{SavePathPicker, SystemSavePathPicker};
use crate::widgets;

pub struct GlimmerApp {
    state: State,
    logo_picker: Box<dyn LogoPicker>,
    save_picker: Box<dyn SavePathPicker>,
}

impl GlimmerApp {
    /// Called once before the first frame. Restores the persisted settings
    /// (URL, colors, tracking id) when storage has them.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: Settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_pickers(
            State::from_settings(&settings),
            Box::new(SystemLogoPicker),
            Box::new(SystemSavePathPicker),
        )
    }

    /// Construct with explicit pickers; tests inject mocks here.
    pub fn with_pickers(
        state: State,
        logo_picker: Box<dyn LogoPicker>,
        save_picker: Box<dyn SavePathPicker>,
    ) -> Self {
        Self {
            state,
            logo_picker,
            save_picker,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Drain export outcomes delivered since the last frame and turn them
    /// into user-visible toasts. Failures are logged for diagnostics; the
    /// composition itself is never touched by an export.
    fn poll_export_outcomes(&mut self) {
        while let Ok(outcome) = self.state.export_result_receiver.try_recv() {
            match outcome {
                ExportOutcome::Saved { path } => {
                    log::info!("QR code exported to {}", path.display());
                    self.state
                        .toasts
                        .success("Success!", "QR code downloaded successfully");
                }
                ExportOutcome::Failed { reason } => {
                    log::error!("Error downloading QR code: {reason}");
                    self.state
                        .toasts
                        .error("Error", "Failed to download QR code");
                }
            }
        }
    }
}

impl eframe::App for GlimmerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // Pointer motion feeds the glitter field; its removal deadlines are
        // driven off the same frame clock.
        let pointer = ctx.input(|i| {
            if i.pointer.delta() != egui::Vec2::ZERO {
                i.pointer.latest_pos()
            } else {
                None
            }
        });
        if let Some(pos) = pointer {
            self.state.glitter.on_pointer_move(pos, now);
        }
        self.state.glitter.tick(now);

        self.poll_export_outcomes();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(egui::RichText::new("Glimmer QR").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::header(ui);
            ui.separator();

            ui.columns(2, |cols| {
                widgets::settings_panel(
                    &mut cols[0],
                    &mut self.state.composition,
                    &mut self.state.settings_tab,
                    &mut self.state.hex_buffers,
                    &mut self.state.toasts,
                    &mut self.state.logo_revision,
                    self.logo_picker.as_ref(),
                );
                widgets::preview_panel(
                    &mut cols[1],
                    &self.state.composition,
                    &mut self.state.textures,
                    self.state.logo_revision,
                    self.save_picker.as_ref(),
                    &self.state.export_result_sender,
                );
            });
        });

        self.state.toasts.show(ctx);
        widgets::glitter_overlay(ctx, &self.state.glitter);

        if !self.state.glitter.is_idle() {
            ctx.request_repaint();
        }
    }

    /// Persist the current settings so they survive restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.settings());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop the particle population and every pending removal deadline.
        self.state.glitter.stop();
    }
}
