pub const MIN_HEIGHT_CM: f32 = 120.0;
pub const MAX_HEIGHT_CM: f32 = 220.0;
pub const MIN_WEIGHT_KG: f32 = 30.0;
pub const MAX_WEIGHT_KG: f32 = 200.0;

pub const DEFAULT_HEIGHT_CM: f32 = 180.0;
pub const DEFAULT_WEIGHT_KG: f32 = 80.0;

/// Maximum number of characters accepted in the custom message.
pub const MAX_CUSTOM_TEXT_CHARS: usize = 50;

/// Only the first few newline-separated segments are printed on the shirt.
pub const MAX_PREVIEW_TEXT_LINES: usize = 3;

/// Unscaled preview dimensions. Final geometry is clamped to
/// [`PREVIEW_CLAMP_MIN`, `PREVIEW_CLAMP_MAX`] times these.
pub const BASE_PREVIEW_HEIGHT: f32 = 220.0;
pub const BASE_PREVIEW_WEIGHT: f32 = 180.0;
pub const PREVIEW_CLAMP_MIN: f32 = 0.5;
pub const PREVIEW_CLAMP_MAX: f32 = 1.5;

/// Reference body the scaling is centred on.
pub const REFERENCE_HEIGHT_CM: f32 = 170.0;
pub const REFERENCE_WEIGHT_KG: f32 = 80.0;
/// Divisor applied to the weight delta (kg per full step).
pub const WEIGHT_STEP_KG: f32 = 50.0;
/// How strongly a full step of height/weight delta scales the preview.
pub const MEASUREMENT_SCALE_STRENGTH: f32 = 0.4;

/// Divisors mapping final geometry to silhouette scale factors.
pub const SILHOUETTE_WIDTH_DIVISOR: f32 = 200.0;
pub const SILHOUETTE_HEIGHT_DIVISOR: f32 = 250.0;

/// Seconds a toast stays on screen before auto-dismissing.
pub const TOAST_LIFETIME_SECS: f32 = 4.0;
/// Oldest toasts are dropped once this many are visible.
pub const MAX_VISIBLE_TOASTS: usize = 3;
