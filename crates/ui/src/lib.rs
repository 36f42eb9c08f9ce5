use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use customizer::theme::ThemeStore;

pub mod customizer_panel;
pub mod design_texture;
pub mod file_picker;
pub mod fit_form;
pub mod header;
pub mod preview_panel;
pub mod theme;
pub mod toasts;
pub mod upload_zone;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((EguiPlugin, file_picker::FilePickerPlugin))
            .init_resource::<design_texture::DesignTextures>()
            .add_systems(
                Update,
                (
                    theme::apply_theme_style.run_if(resource_changed::<ThemeStore>),
                    design_texture::load_default_texture,
                    design_texture::sync_uploaded_texture,
                    customizer_panel::customizer_panel_ui,
                    toasts::toast_stack_ui,
                )
                    .chain(),
            );
    }
}
