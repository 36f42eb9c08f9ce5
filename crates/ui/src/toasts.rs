//! Transient toast stack in the bottom-right corner.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use customizer::notifications::{ToastKind, ToastLog};

use crate::theme::{FONT_BODY, WIDGET_CORNER_RADIUS};

const TOAST_WIDTH: f32 = 280.0;
/// Toasts only start fading during the last part of their lifetime.
const FADE_START_FRACTION: f32 = 0.25;

fn kind_color(kind: ToastKind) -> egui::Color32 {
    match kind {
        ToastKind::Error => egui::Color32::from_rgb(220, 38, 38),
        ToastKind::Success => egui::Color32::from_rgb(22, 163, 74),
    }
}

/// Opacity for a toast with `remaining` of its lifetime left.
pub fn toast_alpha(remaining: f32) -> f32 {
    (remaining / FADE_START_FRACTION).clamp(0.0, 1.0)
}

pub fn toast_stack_ui(mut contexts: EguiContexts, mut log: ResMut<ToastLog>, time: Res<Time>) {
    if log.active.is_empty() {
        return;
    }
    let now = time.elapsed_secs();
    let ctx = contexts.ctx_mut();
    let mut dismissed: Vec<u64> = Vec::new();

    egui::Area::new(egui::Id::new("toast_stack"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for toast in &log.active {
                let alpha = toast_alpha(log.remaining_fraction(toast, now));
                egui::Frame::new()
                    .fill(kind_color(toast.kind).gamma_multiply(alpha))
                    .corner_radius(WIDGET_CORNER_RADIUS)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_WIDTH);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&toast.text)
                                    .size(FONT_BODY)
                                    .color(egui::Color32::WHITE.gamma_multiply(alpha)),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .add(
                                            egui::Button::new(
                                                egui::RichText::new("✕")
                                                    .color(egui::Color32::WHITE),
                                            )
                                            .frame(false),
                                        )
                                        .on_hover_text("Dismiss")
                                        .clicked()
                                    {
                                        dismissed.push(toast.id);
                                    }
                                },
                            );
                        });
                    });
                ui.add_space(6.0);
            }
        });

    for id in dismissed {
        log.dismiss(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_opaque() {
        assert_eq!(toast_alpha(1.0), 1.0);
        assert_eq!(toast_alpha(0.5), 1.0);
    }

    #[test]
    fn test_toast_fades_near_expiry() {
        assert!((toast_alpha(0.125) - 0.5).abs() < 1e-6);
        assert_eq!(toast_alpha(0.0), 0.0);
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        assert_ne!(kind_color(ToastKind::Error), kind_color(ToastKind::Success));
    }
}
