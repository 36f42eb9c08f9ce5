//! Customization form state.
//!
//! `FormState` lives for as long as the customizer is mounted. Range and
//! length limits are applied here, at the input boundary; nothing downstream
//! re-validates them.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, MAX_CUSTOM_TEXT_CHARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG,
    MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::upload::ImageReported;

// =============================================================================
// Build
// =============================================================================

/// Coarse body type affecting preview scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    /// All builds in display order.
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    pub fn label(self) -> &'static str {
        match self {
            Build::Lean => "Lean",
            Build::Regular => "Regular",
            Build::Athletic => "Athletic",
            Build::Big => "Big",
        }
    }
}

// =============================================================================
// Form state
// =============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub height: f32,
    pub weight: f32,
    pub build: Build,
    pub image_data_url: Option<String>,
    pub custom_text: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT_CM,
            weight: DEFAULT_WEIGHT_KG,
            build: Build::default(),
            image_data_url: None,
            custom_text: String::new(),
        }
    }
}

/// Non-finite input leaves `slot` unchanged.
fn set_in_range(slot: &mut f32, value: f32, min: f32, max: f32) -> bool {
    if !value.is_finite() {
        return true;
    }
    *slot = value.clamp(min, max);
    *slot != value
}

impl FormState {
    /// Set the height in cm, clamped to the accepted range. Returns `true`
    /// when the entered value had to be clamped or was rejected.
    pub fn set_height(&mut self, cm: f32) -> bool {
        set_in_range(&mut self.height, cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)
    }

    /// Set the weight in kg, clamped to the accepted range. Returns `true`
    /// when the entered value had to be clamped or was rejected.
    pub fn set_weight(&mut self, kg: f32) -> bool {
        set_in_range(&mut self.weight, kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
    }

    pub fn set_build(&mut self, build: Build) {
        self.build = build;
    }

    /// Replace the custom message, keeping at most `MAX_CUSTOM_TEXT_CHARS`
    /// characters.
    pub fn set_custom_text(&mut self, text: &str) {
        self.custom_text = truncate_chars(text, MAX_CUSTOM_TEXT_CHARS);
    }

    pub fn custom_text_len(&self) -> usize {
        self.custom_text.chars().count()
    }
}

pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Per-field hints shown under the numeric inputs after an out-of-range
/// value was entered and clamped.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldHints {
    pub height_out_of_range: bool,
    pub weight_out_of_range: bool,
}

impl FieldHints {
    pub const HEIGHT_HINT: &'static str = "Height must be between 120-220 cm";
    pub const WEIGHT_HINT: &'static str = "Weight must be between 30-200 kg";
}

// =============================================================================
// Systems
// =============================================================================

/// Mirror the uploader's reported image into the form.
pub fn mirror_reported_image(
    mut reports: EventReader<ImageReported>,
    mut form: ResMut<FormState>,
) {
    for ImageReported(url) in reports.read() {
        form.image_data_url = url.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        assert_eq!(form.height, 180.0);
        assert_eq!(form.weight, 80.0);
        assert_eq!(form.build, Build::Athletic);
        assert!(form.image_data_url.is_none());
        assert!(form.custom_text.is_empty());
    }

    #[test]
    fn test_set_height_clamps() {
        let mut form = FormState::default();
        assert!(!form.set_height(150.0));
        assert_eq!(form.height, 150.0);
        assert!(form.set_height(300.0));
        assert_eq!(form.height, MAX_HEIGHT_CM);
        assert!(form.set_height(10.0));
        assert_eq!(form.height, MIN_HEIGHT_CM);
    }

    #[test]
    fn test_set_weight_clamps() {
        let mut form = FormState::default();
        assert!(!form.set_weight(30.0));
        assert!(form.set_weight(250.0));
        assert_eq!(form.weight, MAX_WEIGHT_KG);
    }

    #[test]
    fn test_non_finite_measurements_keep_prior_value() {
        let mut form = FormState::default();
        form.set_height(175.0);
        form.set_weight(90.0);
        assert!(form.set_height(f32::NAN));
        assert!(form.set_weight(f32::INFINITY));
        assert!(form.set_weight(f32::NEG_INFINITY));
        assert_eq!(form.height, 175.0);
        assert_eq!(form.weight, 90.0);
    }

    #[test]
    fn test_custom_text_truncated_by_chars() {
        let mut form = FormState::default();
        let long: String = "é".repeat(60);
        form.set_custom_text(&long);
        assert_eq!(form.custom_text_len(), MAX_CUSTOM_TEXT_CHARS);

        form.set_custom_text("short");
        assert_eq!(form.custom_text, "short");
    }

    #[test]
    fn test_build_labels_in_display_order() {
        let labels: Vec<&str> = Build::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Lean", "Regular", "Athletic", "Big"]);
    }

    #[test]
    fn test_form_serializes_record() {
        let mut form = FormState::default();
        form.set_custom_text("hi");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["build"], "athletic");
        assert_eq!(json["customText"], "hi");
        assert!(json["imageDataUrl"].is_null());
    }
}
