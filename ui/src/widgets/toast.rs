//! Transient toast notifications.
//!
//! Fire-and-forget: callers push `(title, message, severity)` and the
//! widget anchors the live toasts to the top-right corner, expiring each
//! one a few seconds after it is first shown.

use egui::{Align2, Color32, Context, Frame, Id, Margin, RichText};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// How long a toast stays on screen, seconds.
const TOAST_TTL: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    kind: ToastKind,
    title: String,
    message: String,
    /// Frame time when the toast first rendered; set lazily by `show`.
    shown_at: Option<f64>,
}

/// Queue of live toast notifications.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    queue: Vec<Toast>,
}

impl Toasts {
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastKind::Error, title, message);
    }

    fn push(&mut self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        self.queue.push(Toast {
            kind,
            title: title.into(),
            message: message.into(),
            shown_at: None,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Render the live toasts and retire expired ones.
    pub fn show(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        self.queue
            .retain(|t| t.shown_at.is_none_or(|at| now - at < TOAST_TTL));
        if self.queue.is_empty() {
            return;
        }

        egui::Area::new(Id::new("toast_stack"))
            .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &mut self.queue {
                    toast.shown_at.get_or_insert(now);
                    let fill = match toast.kind {
                        ToastKind::Success => COLOR_GREEN,
                        ToastKind::Error => COLOR_RED,
                    };
                    Frame::NONE
                        .fill(fill)
                        .inner_margin(Margin::symmetric(12, 8))
                        .outer_margin(Margin::symmetric(0, 4))
                        .corner_radius(4.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(&toast.title)
                                    .color(Color32::WHITE)
                                    .strong(),
                            );
                            ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                        });
                }
            });

        // Keep repainting so expiry fires without further input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
