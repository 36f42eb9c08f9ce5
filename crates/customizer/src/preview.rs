//! Preview geometry derived from the body measurements.
//!
//! Pure and O(1); recomputed every frame the preview is drawn instead of
//! being cached.

use crate::config::{
    BASE_PREVIEW_HEIGHT, BASE_PREVIEW_WEIGHT, MAX_PREVIEW_TEXT_LINES, MEASUREMENT_SCALE_STRENGTH,
    PREVIEW_CLAMP_MAX, PREVIEW_CLAMP_MIN, REFERENCE_HEIGHT_CM, REFERENCE_WEIGHT_KG,
    SILHOUETTE_HEIGHT_DIVISOR, SILHOUETTE_WIDTH_DIVISOR, WEIGHT_STEP_KG,
};
use crate::form::{Build, FormState};

/// Per-build multipliers on the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildScale {
    pub width: f32,
    pub height: f32,
}

impl Build {
    pub fn scale(self) -> BuildScale {
        match self {
            Build::Lean => BuildScale {
                width: 0.9,
                height: 1.1,
            },
            Build::Regular => BuildScale {
                width: 1.0,
                height: 1.0,
            },
            Build::Athletic => BuildScale {
                width: 1.1,
                height: 1.0,
            },
            Build::Big => BuildScale {
                width: 1.2,
                height: 0.8,
            },
        }
    }
}

/// Final (clamped) preview dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewGeometry {
    pub height: f32,
    pub weight: f32,
}

impl PreviewGeometry {
    pub fn from_measurements(height_cm: f32, weight_kg: f32, build: Build) -> Self {
        let scale = build.scale();
        let height_factor = 1.0
            + ((height_cm - REFERENCE_HEIGHT_CM) / REFERENCE_HEIGHT_CM) * MEASUREMENT_SCALE_STRENGTH;
        let weight_factor =
            1.0 + ((weight_kg - REFERENCE_WEIGHT_KG) / WEIGHT_STEP_KG) * MEASUREMENT_SCALE_STRENGTH;

        let raw_height = BASE_PREVIEW_HEIGHT * scale.height * height_factor;
        let raw_weight = BASE_PREVIEW_WEIGHT * scale.width * weight_factor;

        Self {
            height: raw_height.clamp(
                BASE_PREVIEW_HEIGHT * PREVIEW_CLAMP_MIN,
                BASE_PREVIEW_HEIGHT * PREVIEW_CLAMP_MAX,
            ),
            weight: raw_weight.clamp(
                BASE_PREVIEW_WEIGHT * PREVIEW_CLAMP_MIN,
                BASE_PREVIEW_WEIGHT * PREVIEW_CLAMP_MAX,
            ),
        }
    }

    pub fn from_form(form: &FormState) -> Self {
        Self::from_measurements(form.height, form.weight, form.build)
    }

    /// Independent (x, y) scale factors applied to the silhouette.
    pub fn silhouette_scale(&self) -> (f32, f32) {
        (
            self.weight / SILHOUETTE_WIDTH_DIVISOR,
            self.height / SILHOUETTE_HEIGHT_DIVISOR,
        )
    }
}

/// Lines of custom text printed on the preview: among the first three
/// newline-separated segments, the non-empty ones.
pub fn preview_text_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .take(MAX_PREVIEW_TEXT_LINES)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_HEIGHT_CM, MIN_WEIGHT_KG};

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_reference_body_is_unscaled() {
        let g = PreviewGeometry::from_measurements(170.0, 80.0, Build::Regular);
        assert!(approx(g.height, 220.0, 1e-4), "height {}", g.height);
        assert!(approx(g.weight, 180.0, 1e-4), "weight {}", g.weight);
    }

    #[test]
    fn test_big_extremes_clamp_weight_only() {
        let g = PreviewGeometry::from_measurements(220.0, 200.0, Build::Big);
        // 220 * 0.8 * (1 + 50/170 * 0.4)
        assert!(approx(g.height, 196.706, 0.01), "height {}", g.height);
        // 180 * 1.2 * 1.96 = 423.36 -> clamped
        assert_eq!(g.weight, 270.0);
    }

    #[test]
    fn test_lean_tall_light() {
        let g = PreviewGeometry::from_measurements(120.0, 30.0, Build::Lean);
        // height factor 1 - 50/170*0.4, weight factor 1 - 0.4
        let expected_h = 220.0 * 1.1 * (1.0 - 50.0 / 170.0 * 0.4);
        assert!(approx(g.height, expected_h, 0.01));
        // 180 * 0.9 * 0.6 = 97.2, inside the band
        assert!(approx(g.weight, 97.2, 0.01), "weight {}", g.weight);
    }

    #[test]
    fn test_geometry_stays_in_clamp_band() {
        let mut h = MIN_HEIGHT_CM;
        while h <= MAX_HEIGHT_CM {
            let mut w = MIN_WEIGHT_KG;
            while w <= MAX_WEIGHT_KG {
                for build in Build::ALL {
                    let g = PreviewGeometry::from_measurements(h, w, build);
                    assert!(
                        (110.0..=330.0).contains(&g.height),
                        "height {} for {h}/{w}/{build:?}",
                        g.height
                    );
                    assert!(
                        (90.0..=270.0).contains(&g.weight),
                        "weight {} for {h}/{w}/{build:?}",
                        g.weight
                    );
                }
                w += 5.0;
            }
            h += 5.0;
        }
    }

    #[test]
    fn test_nan_entry_keeps_geometry_in_band() {
        let mut form = FormState::default();
        assert!(form.set_height(f32::NAN));
        assert!(form.set_weight(f32::NAN));
        let g = PreviewGeometry::from_form(&form);
        assert!((110.0..=330.0).contains(&g.height), "height {}", g.height);
        assert!((90.0..=270.0).contains(&g.weight), "weight {}", g.weight);
    }

    #[test]
    fn test_silhouette_scale() {
        let g = PreviewGeometry {
            height: 250.0,
            weight: 100.0,
        };
        assert_eq!(g.silhouette_scale(), (0.5, 1.0));
    }

    #[test]
    fn test_from_form_uses_defaults() {
        let g = PreviewGeometry::from_form(&FormState::default());
        assert_eq!(g, PreviewGeometry::from_measurements(180.0, 80.0, Build::Athletic));
    }

    #[test]
    fn test_text_lines_limited_to_three() {
        assert_eq!(preview_text_lines("a\nb\nc\nd"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_text_lines_skip_empty_segments() {
        assert_eq!(preview_text_lines("a\n\nc\nd"), vec!["a", "c"]);
        assert!(preview_text_lines("").is_empty());
    }
}
