//! The main application state.

use glimmer_business::{Composition, GlitterField};
use serde::{Deserialize, Serialize};

use crate::utils::colors::{color_to_hex, parse_hex_color};
use crate::utils::export_worker::{ExportResultReceiver, ExportResultSender, create_export_channel};
use crate::widgets::{PreviewTextures, SettingsTab, Toasts};

/// Persisted subset of the composition, written through eframe storage on
/// shutdown and restored on launch. Colors are stored as hex strings so the
/// format stays human-readable in the storage file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub url: String,
    pub fg_color: String,
    pub bg_color: String,
    pub tracking_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_composition(&Composition::default())
    }
}

impl Settings {
    pub fn from_composition(composition: &Composition) -> Self {
        Self {
            url: composition.url.clone(),
            fg_color: color_to_hex(composition.fg_color),
            bg_color: color_to_hex(composition.bg_color),
            tracking_id: composition.tracking_id.clone(),
        }
    }

    /// Apply stored values onto a composition. Unparsable stored colors
    /// leave the composition's current color in place.
    pub fn apply_to(&self, composition: &mut Composition) {
        composition.url = self.url.clone();
        composition.tracking_id = self.tracking_id.clone();
        if let Some(color) = parse_hex_color(&self.fg_color) {
            composition.fg_color = color;
        }
        if let Some(color) = parse_hex_color(&self.bg_color) {
            composition.bg_color = color;
        }
    }
}

/// Editable hex text mirrors of the two color pickers.
///
/// Kept separate from the composition so a half-typed value does not
/// clobber the active color; only parsable input is applied.
#[derive(Debug, Clone, Default)]
pub struct HexBuffers {
    pub fg: String,
    pub bg: String,
}

impl HexBuffers {
    pub fn sync_from(&mut self, composition: &Composition) {
        self.fg = color_to_hex(composition.fg_color);
        self.bg = color_to_hex(composition.bg_color);
    }
}

/// Everything the app mutates across frames.
///
/// All mutation happens on the single egui event loop; the only other
/// thread is the export worker, which communicates exclusively through the
/// result channel.
pub struct State {
    pub composition: Composition,
    pub glitter: GlitterField,
    pub settings_tab: SettingsTab,
    pub toasts: Toasts,
    pub hex_buffers: HexBuffers,
    pub textures: PreviewTextures,
    /// Bumped whenever the logo overlay changes, invalidating its texture.
    pub logo_revision: u64,
    pub export_result_sender: ExportResultSender,
    pub export_result_receiver: ExportResultReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl State {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut composition = Composition::default();
        settings.apply_to(&mut composition);

        let mut hex_buffers = HexBuffers::default();
        hex_buffers.sync_from(&composition);

        let mut glitter = GlitterField::new();
        glitter.start();

        let (export_result_sender, export_result_receiver) = create_export_channel();

        Self {
            composition,
            glitter,
            settings_tab: SettingsTab::default(),
            toasts: Toasts::default(),
            hex_buffers,
            textures: PreviewTextures::default(),
            logo_revision: 0,
            export_result_sender,
            export_result_receiver,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings::from_composition(&self.composition)
    }
}
