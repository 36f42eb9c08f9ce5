//! Measurement inputs, build selector and the custom message editor.

use bevy_egui::egui;

use customizer::config::MAX_CUSTOM_TEXT_CHARS;
use customizer::form::{Build, FieldHints, FormState};

use crate::theme::{ThemePalette, CARD_CORNER_RADIUS, FONT_BODY, FONT_SMALL};

const HINT_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

fn field_label(ui: &mut egui::Ui, palette: &ThemePalette, text: &str) {
    let color = if palette.dark {
        egui::Color32::from_rgb(229, 231, 235)
    } else {
        egui::Color32::from_rgb(55, 65, 81)
    };
    ui.label(egui::RichText::new(text).size(FONT_BODY).color(color).strong());
}

fn hint(ui: &mut egui::Ui, show: bool, text: &str) {
    if show {
        ui.label(egui::RichText::new(text).size(FONT_SMALL).color(HINT_COLOR));
    }
}

/// Height, weight and build inside a tinted card.
pub fn show(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    form: &mut FormState,
    hints: &mut FieldHints,
) {
    egui::Frame::new()
        .fill(palette.section_bg)
        .corner_radius(CARD_CORNER_RADIUS)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.spacing_mut().item_spacing.y = 6.0;

            field_label(ui, palette, "Height (cm)");
            let mut height = form.height;
            if ui
                .add(egui::DragValue::new(&mut height).speed(1.0).suffix(" cm"))
                .changed()
            {
                hints.height_out_of_range = form.set_height(height);
            }
            hint(ui, hints.height_out_of_range, FieldHints::HEIGHT_HINT);

            ui.add_space(8.0);
            field_label(ui, palette, "Weight (kg)");
            let mut weight = form.weight;
            if ui
                .add(egui::DragValue::new(&mut weight).speed(1.0).suffix(" kg"))
                .changed()
            {
                hints.weight_out_of_range = form.set_weight(weight);
            }
            hint(ui, hints.weight_out_of_range, FieldHints::WEIGHT_HINT);

            ui.add_space(8.0);
            field_label(ui, palette, "Build");
            ui.horizontal_wrapped(|ui| {
                for build in Build::ALL {
                    let selected = form.build == build;
                    let (fill, text) = if selected {
                        (palette.accent, palette.button_text)
                    } else {
                        (palette.idle_button_bg, palette.idle_button_text)
                    };
                    let button = egui::Button::new(
                        egui::RichText::new(build.label()).size(FONT_BODY).color(text),
                    )
                    .fill(fill)
                    .stroke(egui::Stroke::new(1.0, if selected { fill } else { palette.border }))
                    .min_size(egui::vec2(72.0, 30.0));
                    if ui.add(button).clicked() && !selected {
                        form.set_build(build);
                    }
                }
            });
        });
}

/// "Your Message" editor under the preview.
pub fn message_editor(ui: &mut egui::Ui, palette: &ThemePalette, form: &mut FormState) {
    let mut text = form.custom_text.clone();
    let response = ui.add(
        egui::TextEdit::multiline(&mut text)
            .char_limit(MAX_CUSTOM_TEXT_CHARS)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text("Enter text to print on your shirt (max 3 lines)"),
    );
    if response.changed() {
        form.set_custom_text(&text);
    }

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Max 3 lines of text. Press Enter for new line.")
                .size(FONT_SMALL)
                .color(palette.muted),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{}/{MAX_CUSTOM_TEXT_CHARS}",
                    form.custom_text_len()
                ))
                .size(FONT_SMALL)
                .color(palette.muted),
            );
        });
    });
}
