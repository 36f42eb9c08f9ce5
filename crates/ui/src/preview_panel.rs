//! Live t-shirt preview: scaled silhouette, design image and text overlay.

use bevy_egui::egui;

use customizer::preview::{preview_text_lines, PreviewGeometry};

use crate::design_texture::fit_rect;
use crate::theme::{ThemePalette, CARD_CORNER_RADIUS, FONT_BODY};

const PREVIEW_HEIGHT: f32 = 384.0;
/// The unscaled shirt fills this share of the preview box.
const SHIRT_FILL_RATIO: f32 = 11.0 / 12.0;
/// The design image occupies this share of the preview box.
const DESIGN_BOX_RATIO: f32 = 0.4;
const DESIGN_OFFSET_Y: f32 = 32.0;
const TEXT_OFFSET_Y: f32 = 128.0;
/// Printed text is always dark; every theme's shirt fill is near-white.
const SHIRT_INK: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

// Shirt outline in a unit box centred on the origin (y grows downwards).
// Fill pieces are convex and listed clockwise on screen.
const TORSO: [[f32; 2]; 6] = [
    [-0.30, -0.40],
    [-0.12, -0.45],
    [0.12, -0.45],
    [0.30, -0.40],
    [0.30, 0.48],
    [-0.30, 0.48],
];
const RIGHT_SLEEVE: [[f32; 2]; 4] = [[0.30, -0.40], [0.50, -0.18], [0.38, -0.05], [0.30, -0.12]];
const NECK: [[f32; 2]; 3] = [[-0.12, -0.45], [0.12, -0.45], [0.0, -0.36]];
const OUTLINE: [[f32; 2]; 13] = [
    [-0.12, -0.45],
    [0.0, -0.36],
    [0.12, -0.45],
    [0.30, -0.40],
    [0.50, -0.18],
    [0.38, -0.05],
    [0.30, -0.12],
    [0.30, 0.48],
    [-0.30, 0.48],
    [-0.30, -0.12],
    [-0.38, -0.05],
    [-0.50, -0.18],
    [-0.30, -0.40],
];

/// Map a unit-box point onto the screen, scaling each axis independently.
pub fn shirt_point(center: egui::Pos2, side: f32, scale: (f32, f32), p: [f32; 2]) -> egui::Pos2 {
    egui::pos2(
        center.x + p[0] * side * scale.0,
        center.y + p[1] * side * scale.1,
    )
}

fn map_points(center: egui::Pos2, side: f32, scale: (f32, f32), pts: &[[f32; 2]]) -> Vec<egui::Pos2> {
    pts.iter().map(|p| shirt_point(center, side, scale, *p)).collect()
}

fn mirrored(pts: &[[f32; 2]]) -> Vec<[f32; 2]> {
    // Mirroring flips winding, so reverse to stay clockwise.
    pts.iter().rev().map(|p| [-p[0], p[1]]).collect()
}

fn paint_shirt(
    painter: &egui::Painter,
    rect: egui::Rect,
    geometry: &PreviewGeometry,
    palette: &ThemePalette,
    background: egui::Color32,
) {
    let side = rect.width().min(rect.height()) * SHIRT_FILL_RATIO;
    let scale = geometry.silhouette_scale();
    let center = rect.center();
    let fill = palette.shirt_fill;

    for piece in [TORSO.to_vec(), RIGHT_SLEEVE.to_vec(), mirrored(&RIGHT_SLEEVE)] {
        painter.add(egui::Shape::convex_polygon(
            map_points(center, side, scale, &piece),
            fill,
            egui::Stroke::NONE,
        ));
    }
    painter.add(egui::Shape::convex_polygon(
        map_points(center, side, scale, &NECK),
        background,
        egui::Stroke::NONE,
    ));
    painter.add(egui::Shape::closed_line(
        map_points(center, side, scale, &OUTLINE),
        egui::Stroke::new(1.5, palette.shirt_stroke),
    ));
}

/// Draw the preview box.
pub fn show(
    ui: &mut egui::Ui,
    palette: &ThemePalette,
    geometry: &PreviewGeometry,
    design: Option<&egui::TextureHandle>,
    custom_text: &str,
) {
    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, PREVIEW_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, CARD_CORNER_RADIUS, palette.section_bg);
    let inner = rect.shrink(16.0);

    paint_shirt(&painter, inner, geometry, palette, palette.section_bg);

    if let Some(texture) = design {
        let box_size = inner.size() * DESIGN_BOX_RATIO;
        let design_box = egui::Rect::from_center_size(
            inner.center() + egui::vec2(0.0, DESIGN_OFFSET_Y / 2.0),
            box_size,
        );
        let target = fit_rect(design_box, texture.size_vec2());
        painter.image(
            texture.id(),
            target,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    let lines = preview_text_lines(custom_text);
    if !lines.is_empty() {
        let line_height = FONT_BODY + 4.0;
        let start_y = inner.center().y + TEXT_OFFSET_Y / 2.0
            - (lines.len() as f32 - 1.0) * line_height / 2.0;
        for (i, line) in lines.iter().enumerate() {
            painter.text(
                egui::pos2(inner.center().x, start_y + i as f32 * line_height),
                egui::Align2::CENTER_CENTER,
                *line,
                egui::FontId::proportional(FONT_BODY),
                SHIRT_INK,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shirt_point_scales_axes_independently() {
        let p = shirt_point(egui::pos2(100.0, 100.0), 200.0, (0.5, 1.0), [0.5, 0.5]);
        assert_eq!(p, egui::pos2(150.0, 200.0));
    }

    #[test]
    fn test_unit_outline_fits_box() {
        for p in OUTLINE.iter().chain(TORSO.iter()).chain(RIGHT_SLEEVE.iter()) {
            assert!(p[0].abs() <= 0.5 && p[1].abs() <= 0.5, "{p:?}");
        }
    }

    #[test]
    fn test_max_geometry_stays_inside_preview() {
        let geometry = PreviewGeometry {
            height: 330.0,
            weight: 270.0,
        };
        let (sx, sy) = geometry.silhouette_scale();
        assert!(sx * SHIRT_FILL_RATIO < 1.3);
        assert!(sy * SHIRT_FILL_RATIO < 1.3);
    }

    #[test]
    fn test_mirrored_sleeve_is_reversed() {
        let left = mirrored(&RIGHT_SLEEVE);
        assert_eq!(left[0], [-0.30, -0.12]);
        assert_eq!(left[3], [-0.30, -0.40]);
    }
}
