//! Paint layer for the mouse-trail glitter particles.
//!
//! A pure projection of the particle population onto a foreground layer:
//! each sprite starts its animation after its stagger and fades out over
//! the remainder of the particle lifetime. Population bookkeeping happens
//! in `GlitterField`; this module only draws.

use egui::{Align2, Color32, Context, FontId, Id, LayerId, Order};
use glimmer_business::glitter::PARTICLE_LIFETIME;
use glimmer_business::{GlitterField, SpriteKind};

/// Gold tint for glitter dots.
const GLITTER_COLOR: Color32 = Color32::from_rgb(255, 215, 0);

pub fn glitter_overlay(ctx: &Context, glitter: &GlitterField) {
    if glitter.particles().is_empty() {
        return;
    }

    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("glitter_overlay")));
    let now = ctx.input(|i| i.time);

    for sprite in glitter.sprites() {
        let age = now - sprite.spawned_at - f64::from(sprite.delay);
        if age < 0.0 {
            // Stagger has not elapsed yet.
            continue;
        }
        let window = PARTICLE_LIFETIME - f64::from(sprite.delay);
        if window <= 0.0 {
            continue;
        }

        let t = (age / window).clamp(0.0, 1.0) as f32;
        let alpha = ((1.0 - t) * 255.0) as u8;
        if alpha == 0 {
            continue;
        }

        match sprite.kind {
            SpriteKind::Glitter => {
                let color = Color32::from_rgba_unmultiplied(
                    GLITTER_COLOR.r(),
                    GLITTER_COLOR.g(),
                    GLITTER_COLOR.b(),
                    alpha,
                );
                painter.circle_filled(sprite.pos, 3.0, color);
            }
            SpriteKind::Sparkle => {
                painter.text(
                    sprite.pos,
                    Align2::CENTER_CENTER,
                    "✨",
                    FontId::proportional(14.0),
                    Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
                );
            }
        }
    }

    // Animate until the last particle has expired.
    ctx.request_repaint();
}
