use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use customizer::theme::{Theme, ThemeStore};

pub const FONT_TITLE: f32 = 26.0;
pub const FONT_HEADING: f32 = 19.0;
pub const FONT_SUBHEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.5;

pub const WIDGET_CORNER_RADIUS: u8 = 6;
pub const CARD_CORNER_RADIUS: u8 = 8;

/// Per-theme colours for every surface the customizer draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    pub main_bg: egui::Color32,
    pub form_bg: egui::Color32,
    pub section_bg: egui::Color32,
    pub input_bg: egui::Color32,
    pub border: egui::Color32,
    pub accent: egui::Color32,
    pub accent_hover: egui::Color32,
    pub button_text: egui::Color32,
    pub text: egui::Color32,
    pub heading: egui::Color32,
    pub muted: egui::Color32,
    pub idle_button_bg: egui::Color32,
    pub idle_button_text: egui::Color32,
    pub drop_active_bg: egui::Color32,
    pub drop_active_border: egui::Color32,
    pub shirt_stroke: egui::Color32,
    pub shirt_fill: egui::Color32,
    pub dark: bool,
}

const WHITE: egui::Color32 = egui::Color32::WHITE;
const GRAY_100: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
const GRAY_300: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
const GRAY_500: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const GRAY_700: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const GRAY_800: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const SLATE_50: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
const SLATE_600: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
const SLATE_700: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
const SLATE_800: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const SLATE_900: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                main_bg: egui::Color32::from_rgb(249, 250, 251),
                form_bg: WHITE,
                section_bg: GRAY_100,
                input_bg: WHITE,
                border: egui::Color32::from_rgb(229, 231, 235),
                accent: egui::Color32::from_rgb(59, 130, 246),
                accent_hover: egui::Color32::from_rgb(37, 99, 235),
                button_text: WHITE,
                text: GRAY_800,
                heading: egui::Color32::from_rgb(17, 24, 39),
                muted: GRAY_500,
                idle_button_bg: WHITE,
                idle_button_text: GRAY_700,
                drop_active_bg: egui::Color32::from_rgb(239, 246, 255),
                drop_active_border: egui::Color32::from_rgb(96, 165, 250),
                shirt_stroke: egui::Color32::from_rgb(148, 163, 184),
                shirt_fill: WHITE,
                dark: false,
            },
            Theme::Dark => Self {
                main_bg: SLATE_900,
                form_bg: SLATE_800,
                section_bg: SLATE_700,
                input_bg: SLATE_700,
                border: SLATE_700,
                accent: egui::Color32::from_rgb(245, 158, 11),
                accent_hover: egui::Color32::from_rgb(217, 119, 6),
                button_text: SLATE_900,
                text: GRAY_100,
                heading: egui::Color32::from_rgb(251, 191, 36),
                muted: egui::Color32::from_rgb(156, 163, 175),
                idle_button_bg: SLATE_800,
                idle_button_text: GRAY_300,
                drop_active_bg: SLATE_600,
                drop_active_border: egui::Color32::from_rgb(245, 158, 11),
                shirt_stroke: egui::Color32::from_rgb(245, 158, 11),
                shirt_fill: SLATE_50,
                dark: true,
            },
            Theme::Purple => Self {
                main_bg: egui::Color32::from_rgb(250, 245, 255),
                form_bg: WHITE,
                section_bg: GRAY_100,
                input_bg: WHITE,
                border: egui::Color32::from_rgb(233, 213, 255),
                accent: egui::Color32::from_rgb(168, 85, 247),
                accent_hover: egui::Color32::from_rgb(147, 51, 234),
                button_text: WHITE,
                text: GRAY_800,
                heading: egui::Color32::from_rgb(88, 28, 135),
                muted: GRAY_500,
                idle_button_bg: WHITE,
                idle_button_text: GRAY_700,
                drop_active_bg: egui::Color32::from_rgb(250, 245, 255),
                drop_active_border: egui::Color32::from_rgb(168, 85, 247),
                shirt_stroke: egui::Color32::from_rgb(168, 85, 247),
                shirt_fill: SLATE_50,
                dark: false,
            },
        }
    }
}

/// Rebuild the egui style whenever the theme changes.
pub fn apply_theme_style(mut contexts: EguiContexts, store: Res<ThemeStore>) {
    let palette = ThemePalette::for_theme(store.current());
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals = if palette.dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    style.visuals.override_text_color = Some(palette.text);
    style.visuals.window_fill = palette.form_bg;
    style.visuals.panel_fill = palette.main_bg;
    style.visuals.extreme_bg_color = palette.input_bg;
    style.visuals.faint_bg_color = palette.section_bg;

    style.visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.border);
    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.accent);
    style.visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, palette.accent_hover);

    // Focus ring
    style.visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, palette.accent);

    let widget_rounding = egui::CornerRadius::same(WIDGET_CORNER_RADIUS);
    style.visuals.window_corner_radius = egui::CornerRadius::same(CARD_CORNER_RADIUS);
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
