#![warn(clippy::all, rust_2018_idioms)]

//! Domain logic for the Glimmer QR generator.
//!
//! Everything UI-independent lives here: the glitter particle lifecycle,
//! tracking-payload construction, QR rasterization, the composition state
//! and the PNG export pipeline. The `glimmer-ui` crate only wires these
//! into egui widgets.

pub mod composition;
#[cfg(test)]
pub(crate) mod test_support;
pub mod export;
pub mod glitter;
pub mod logo;
pub mod qr;
pub mod tracking;

pub use composition::Composition;
pub use export::{EXPORT_FILENAME, ExportError, render_composition};
pub use glitter::{GlitterField, Particle, ParticleId, Sprite, SpriteKind};
pub use logo::{LogoError, LogoImage};
pub use tracking::build_tracking_payload;
