use bevy_egui::egui;

use customizer::theme::Theme;

use crate::theme::{ThemePalette, FONT_BODY, FONT_SMALL, FONT_TITLE};

/// Title row with the theme button. Returns `true` when the button was
/// clicked.
pub fn show(ui: &mut egui::Ui, palette: &ThemePalette, theme: Theme, shortcut: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("T-Shirt Customizer")
                .size(FONT_TITLE)
                .color(palette.heading)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(
                egui::RichText::new(format!("⟳ Theme ({})", theme.label()))
                    .size(FONT_BODY)
                    .color(palette.button_text),
            )
            .fill(palette.accent)
            .corner_radius(16);
            clicked = ui
                .add(button)
                .on_hover_text(format!("{shortcut} to switch theme"))
                .clicked();
        });
    });
    clicked
}

pub fn footer(ui: &mut egui::Ui, palette: &ThemePalette, shortcut: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("Press {shortcut} to switch between themes"))
                .size(FONT_SMALL)
                .color(palette.muted),
        );
    });
}
