//! Theme store.
//!
//! Holds the active colour theme for the whole UI tree. The value lives in a
//! `ThemeStore` resource owned by the `App`, so its lifetime (and that of the
//! Alt+Q listener system) is scoped to the app that installed `ThemePlugin`.

use bevy::prelude::*;

use crate::CustomizerSet;

// =============================================================================
// Theme
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Purple,
}

impl Theme {
    /// All themes in cycle order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Purple];

    /// The theme after this one: light -> dark -> purple -> light.
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Purple,
            Theme::Purple => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Purple => "purple",
        }
    }
}

/// Current theme, read by every drawing system.
#[derive(Resource, Debug, Default)]
pub struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        Self { current: theme }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Advance exactly one step and return the new theme.
    pub fn cycle(&mut self) -> Theme {
        self.current = self.current.next();
        self.current
    }
}

// =============================================================================
// Shortcut
// =============================================================================

/// A key plus required modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyBinding {
    pub const fn alt(key: KeyCode) -> Self {
        Self {
            key,
            alt: true,
            ctrl: false,
            shift: false,
        }
    }

    /// True on the frame the key goes down while exactly the configured
    /// modifiers are held.
    pub fn just_pressed(self, keys: &ButtonInput<KeyCode>) -> bool {
        if !keys.just_pressed(self.key) {
            return false;
        }
        let alt_held = keys.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]);
        let ctrl_held = keys.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        let shift_held = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        alt_held == self.alt && ctrl_held == self.ctrl && shift_held == self.shift
    }

    /// Human-readable label, e.g. "Alt+Q".
    pub fn display_label(self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".into());
        }
        if self.alt {
            parts.push("Alt".into());
        }
        if self.shift {
            parts.push("Shift".into());
        }
        let key = format!("{:?}", self.key);
        parts.push(key.strip_prefix("Key").unwrap_or(&key).to_string());
        parts.join("+")
    }
}

/// Binding that cycles the theme. Defaults to Alt+Q.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ThemeShortcut(pub KeyBinding);

impl Default for ThemeShortcut {
    fn default() -> Self {
        Self(KeyBinding::alt(KeyCode::KeyQ))
    }
}

/// Request one step of the theme cycle (sent by the header button).
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CycleTheme;

// =============================================================================
// Systems
// =============================================================================

/// Turns the global shortcut into a `CycleTheme` request. Fires regardless of
/// which widget has focus.
pub fn cycle_theme_on_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    shortcut: Res<ThemeShortcut>,
    mut requests: EventWriter<CycleTheme>,
) {
    if shortcut.0.just_pressed(&keyboard) {
        requests.send(CycleTheme);
    }
}

pub fn apply_theme_cycle_requests(
    mut requests: EventReader<CycleTheme>,
    mut store: ResMut<ThemeStore>,
) {
    for _ in requests.read() {
        let theme = store.cycle();
        info!("Theme switched to {}", theme.label());
    }
}

pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ThemeStore>()
            .init_resource::<ThemeShortcut>()
            .add_event::<CycleTheme>()
            .add_systems(Update, cycle_theme_on_shortcut)
            .add_systems(
                PostUpdate,
                apply_theme_cycle_requests.in_set(CustomizerSet::Form),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_purple() {
        assert_eq!(ThemeStore::default().current(), Theme::Purple);
    }

    #[test]
    fn test_cycle_order() {
        let mut store = ThemeStore::new(Theme::Light);
        assert_eq!(store.cycle(), Theme::Dark);
        assert_eq!(store.cycle(), Theme::Purple);
        assert_eq!(store.cycle(), Theme::Light);
    }

    #[test]
    fn test_three_cycles_return_to_start() {
        for start in Theme::ALL {
            let mut store = ThemeStore::new(start);
            for _ in 0..3 {
                store.cycle();
            }
            assert_eq!(store.current(), start);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Light.label(), "light");
        assert_eq!(Theme::Dark.label(), "dark");
        assert_eq!(Theme::Purple.label(), "purple");
    }

    #[test]
    fn test_shortcut_requires_alt() {
        let binding = ThemeShortcut::default().0;
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyQ);
        assert!(!binding.just_pressed(&keys));

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::AltRight);
        keys.press(KeyCode::KeyQ);
        assert!(binding.just_pressed(&keys));
    }

    #[test]
    fn test_shortcut_rejects_extra_modifiers() {
        let binding = ThemeShortcut::default().0;
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::AltLeft);
        keys.press(KeyCode::ControlLeft);
        keys.press(KeyCode::KeyQ);
        assert!(!binding.just_pressed(&keys));
    }

    #[test]
    fn test_shortcut_only_on_press_frame() {
        let binding = ThemeShortcut::default().0;
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::AltLeft);
        keys.press(KeyCode::KeyQ);
        keys.clear();
        assert!(!binding.just_pressed(&keys));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(ThemeShortcut::default().0.display_label(), "Alt+Q");
    }
}
