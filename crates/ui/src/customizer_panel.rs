//! The customizer page: header, live preview, fit form, uploader and the
//! submit button, laid out in two columns.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use customizer::form::{FieldHints, FormState};
use customizer::preview::PreviewGeometry;
use customizer::submission::SubmitForm;
use customizer::theme::{CycleTheme, ThemeShortcut, ThemeStore};
use customizer::upload::{RemoveImage, UploadState};

use crate::design_texture::DesignTextures;
use crate::file_picker::OpenFilePicker;
use crate::theme::{ThemePalette, CARD_CORNER_RADIUS, FONT_HEADING, FONT_SUBHEADING};
use crate::upload_zone::UploadZoneAction;
use crate::{fit_form, header, preview_panel, upload_zone};

fn section_heading(ui: &mut egui::Ui, palette: &ThemePalette, text: &str, size: f32) {
    ui.label(
        egui::RichText::new(text)
            .size(size)
            .color(palette.heading)
            .strong(),
    );
    ui.add_space(4.0);
}

#[allow(clippy::too_many_arguments)]
pub fn customizer_panel_ui(
    mut contexts: EguiContexts,
    store: Res<ThemeStore>,
    shortcut: Res<ThemeShortcut>,
    mut form: ResMut<FormState>,
    mut hints: ResMut<FieldHints>,
    upload: Res<UploadState>,
    textures: Res<DesignTextures>,
    mut cycle_theme: EventWriter<CycleTheme>,
    mut open_picker: EventWriter<OpenFilePicker>,
    mut remove_image: EventWriter<RemoveImage>,
    mut submit_form: EventWriter<SubmitForm>,
) {
    let palette = ThemePalette::for_theme(store.current());
    let shortcut_label = shortcut.0.display_label();

    // Edit a draft so the form only registers as changed on real edits.
    let mut draft = form.clone();
    let mut draft_hints = *hints;
    let geometry = PreviewGeometry::from_form(&draft);

    let mut theme_clicked = false;
    let mut zone_action = UploadZoneAction::None;
    let mut submit_clicked = false;

    let ctx = contexts.ctx_mut();
    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(palette.main_bg)
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::new()
                    .fill(palette.form_bg)
                    .corner_radius(CARD_CORNER_RADIUS)
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        theme_clicked =
                            header::show(ui, &palette, store.current(), &shortcut_label);
                        ui.add_space(12.0);

                        ui.columns(2, |columns| {
                            let left = &mut columns[0];
                            section_heading(left, &palette, "Preview", FONT_HEADING);
                            preview_panel::show(
                                left,
                                &palette,
                                &geometry,
                                textures.current(),
                                &draft.custom_text,
                            );
                            left.add_space(12.0);
                            section_heading(left, &palette, "Your Message", FONT_SUBHEADING);
                            fit_form::message_editor(left, &palette, &mut draft);

                            let right = &mut columns[1];
                            section_heading(right, &palette, "Customize Your Fit", FONT_HEADING);
                            fit_form::show(right, &palette, &mut draft, &mut draft_hints);
                            right.add_space(12.0);
                            section_heading(right, &palette, "Upload Design", FONT_SUBHEADING);
                            zone_action =
                                upload_zone::show(right, &palette, &upload, textures.uploaded());
                            right.add_space(16.0);
                            let submit = egui::Button::new(
                                egui::RichText::new("Add to Cart")
                                    .size(FONT_SUBHEADING)
                                    .color(palette.button_text)
                                    .strong(),
                            )
                            .fill(palette.accent);
                            submit_clicked = right
                                .add_sized([right.available_width(), 40.0], submit)
                                .clicked();
                        });

                        ui.add_space(12.0);
                        header::footer(ui, &palette, &shortcut_label);
                    });
            });
        });

    if draft != *form {
        *form = draft;
    }
    if draft_hints != *hints {
        *hints = draft_hints;
    }
    if theme_clicked {
        cycle_theme.send(CycleTheme);
    }
    match zone_action {
        UploadZoneAction::Browse => {
            open_picker.send(OpenFilePicker);
        }
        UploadZoneAction::Remove => {
            remove_image.send(RemoveImage);
        }
        UploadZoneAction::None => {}
    }
    if submit_clicked {
        submit_form.send(SubmitForm);
    }
}
