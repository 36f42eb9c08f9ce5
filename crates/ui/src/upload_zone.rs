//! Click-or-drop area for the design image.

use bevy_egui::egui;

use customizer::upload::UploadState;

use crate::theme::{ThemePalette, CARD_CORNER_RADIUS, FONT_BODY, FONT_SMALL};

const ZONE_HEIGHT: f32 = 200.0;
const PREVIEW_MAX_HEIGHT: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadZoneAction {
    None,
    Browse,
    Remove,
}

/// Background and border of the zone for the current drag state.
pub fn zone_colors(palette: &ThemePalette, drag_active: bool) -> (egui::Color32, egui::Color32) {
    if drag_active {
        (palette.drop_active_bg, palette.drop_active_border)
    } else {
        (palette.input_bg, palette.border)
    }
}

/// Id scope of the zone's widgets. A new selection generation gives the zone
/// fresh widget state.
pub fn zone_id(selection_generation: u64) -> egui::Id {
    egui::Id::new(("upload_zone", selection_generation))
}

pub fn show(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    upload: &UploadState,
    uploaded: Option<&egui::TextureHandle>,
) -> UploadZoneAction {
    ui.push_id(zone_id(upload.selection_generation), |ui| {
        show_zone(ui, palette, upload, uploaded)
    })
    .inner
}

fn show_zone(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    upload: &UploadState,
    uploaded: Option<&egui::TextureHandle>,
) -> UploadZoneAction {
    let width = ui.available_width();
    // The zone is allocated first so the remove button drawn inside it sits
    // on top for hit-testing.
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, ZONE_HEIGHT), egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let (fill, border) = zone_colors(palette, upload.drag_active);
    ui.painter().rect(
        rect,
        CARD_CORNER_RADIUS,
        fill,
        egui::Stroke::new(2.0, border),
        egui::StrokeKind::Inside,
    );

    let mut action = UploadZoneAction::None;
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect.shrink(16.0)), |ui| {
        ui.vertical_centered(|ui| {
            if upload.preview.is_some() {
                match uploaded {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .max_height(PREVIEW_MAX_HEIGHT)
                                .corner_radius(4),
                        );
                    }
                    None => {
                        ui.add_space(40.0);
                        ui.label(
                            egui::RichText::new(upload.file_name.as_deref().unwrap_or("image"))
                                .size(FONT_BODY),
                        );
                    }
                }
                let remove = egui::Button::new(
                    egui::RichText::new("✕ Remove")
                        .size(FONT_SMALL)
                        .color(palette.button_text),
                )
                .fill(palette.accent)
                .corner_radius(12);
                if ui.add(remove).clicked() {
                    action = UploadZoneAction::Remove;
                }
                ui.label(
                    egui::RichText::new("Click to change image")
                        .size(FONT_SMALL)
                        .color(palette.muted),
                );
            } else {
                ui.add_space(36.0);
                ui.label(egui::RichText::new("⬆").size(36.0).color(palette.accent));
                ui.label(
                    egui::RichText::new("Drop an image here")
                        .size(FONT_BODY)
                        .color(palette.text)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new("or click to upload")
                        .size(FONT_SMALL)
                        .color(palette.muted),
                );
            }
        });
    });

    if action == UploadZoneAction::None && response.clicked() {
        action = UploadZoneAction::Browse;
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use customizer::theme::Theme;

    #[test]
    fn test_zone_highlights_while_dragging() {
        let palette = ThemePalette::for_theme(Theme::Purple);
        let idle = zone_colors(&palette, false);
        let active = zone_colors(&palette, true);
        assert_ne!(idle, active);
        assert_eq!(active.1, palette.drop_active_border);
    }

    #[test]
    fn test_removal_generation_renews_zone_id() {
        assert_ne!(zone_id(0), zone_id(1));
        assert_eq!(zone_id(3), zone_id(3));
    }

    #[test]
    fn test_dark_zone_uses_input_surface() {
        let palette = ThemePalette::for_theme(Theme::Dark);
        assert_eq!(zone_colors(&palette, false).0, palette.input_bg);
    }
}
