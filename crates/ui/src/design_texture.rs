//! egui textures for the design image shown in the preview and drop zone.
//!
//! The uploaded data URL is decoded once, when the uploader reports it, not
//! every frame. Formats the `image` crate cannot decode fall back to the
//! bundled default design.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use customizer::upload::{decode_data_url, ImageReported};

/// Placeholder shown when nothing has been uploaded.
pub const DEFAULT_DESIGN_PNG: &[u8] = include_bytes!("../assets/default_design.png");

#[derive(Resource, Default)]
pub struct DesignTextures {
    default: Option<egui::TextureHandle>,
    uploaded: Option<egui::TextureHandle>,
}

impl DesignTextures {
    /// The texture to draw on the shirt: the upload if decodable, otherwise
    /// the default design.
    pub fn current(&self) -> Option<&egui::TextureHandle> {
        self.uploaded.as_ref().or(self.default.as_ref())
    }

    pub fn uploaded(&self) -> Option<&egui::TextureHandle> {
        self.uploaded.as_ref()
    }
}

pub fn decode_color_image(bytes: &[u8]) -> Option<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

pub fn load_default_texture(mut contexts: EguiContexts, mut textures: ResMut<DesignTextures>) {
    if textures.default.is_some() {
        return;
    }
    match decode_color_image(DEFAULT_DESIGN_PNG) {
        Some(image) => {
            let handle =
                contexts
                    .ctx_mut()
                    .load_texture("default_design", image, egui::TextureOptions::LINEAR);
            textures.default = Some(handle);
        }
        None => warn!("Bundled default design could not be decoded"),
    }
}

pub fn sync_uploaded_texture(
    mut reports: EventReader<ImageReported>,
    mut contexts: EguiContexts,
    mut textures: ResMut<DesignTextures>,
) {
    for ImageReported(url) in reports.read() {
        let Some(url) = url else {
            textures.uploaded = None;
            continue;
        };
        let decoded = decode_data_url(url).and_then(|(_, bytes)| decode_color_image(&bytes));
        textures.uploaded = match decoded {
            Some(image) => Some(contexts.ctx_mut().load_texture(
                "uploaded_design",
                image,
                egui::TextureOptions::LINEAR,
            )),
            None => {
                warn!("Uploaded design could not be decoded for preview; showing default");
                None
            }
        };
    }
}

/// Largest rect with the texture's aspect ratio that fits centred in `outer`.
pub fn fit_rect(outer: egui::Rect, texture_size: egui::Vec2) -> egui::Rect {
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 {
        return outer;
    }
    let scale = (outer.width() / texture_size.x).min(outer.height() / texture_size.y);
    egui::Rect::from_center_size(outer.center(), texture_size * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_design_decodes() {
        let image = decode_color_image(DEFAULT_DESIGN_PNG).expect("bundled png");
        assert_eq!(image.size, [128, 128]);
    }

    #[test]
    fn test_garbage_does_not_decode() {
        assert!(decode_color_image(b"not an image").is_none());
    }

    #[test]
    fn test_fit_rect_keeps_aspect() {
        let outer = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        let fitted = fit_rect(outer, egui::vec2(50.0, 50.0));
        assert_eq!(fitted.size(), egui::vec2(100.0, 100.0));
        assert_eq!(fitted.center(), outer.center());
    }

    #[test]
    fn test_fit_rect_degenerate_texture() {
        let outer = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(10.0, 10.0));
        assert_eq!(fit_rect(outer, egui::Vec2::ZERO), outer);
    }
}
