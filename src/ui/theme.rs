//! Widget theme

use bevy::prelude::*;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;

pub const PANEL_BG: Color = Color::srgba(0.23, 0.07, 0.4, 0.88);
pub const CARD_BG: Color = Color::srgba(0.12, 0.1, 0.35, 0.9);
pub const SECTION_BG: Color = Color::srgba(0.0, 0.0, 0.0, 0.2);
pub const TITLE_COLOR: Color = Color::srgb(0.85, 0.78, 1.0);
pub const DIM_TEXT: Color = Color::srgb(0.7, 0.7, 0.78);

/// Clear color behind the scene.
pub fn background_color(dark_mode: bool) -> Color {
    if dark_mode {
        Color::BLACK
    } else {
        Color::srgb_u8(0x11, 0x18, 0x27)
    }
}

/// Feathers initializes `UiTheme` but does not populate it by default.
/// Without this many widgets render with the "missing token" fallback color.
pub fn cosmic_theme() -> UiTheme {
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
    theme.set_color("feathers.text.dim", palette::LIGHT_GRAY_2);
    theme.set_color("feathers.focus", palette::ACCENT);
    theme.set_color("feathers.slider.bg", Color::srgba(0.08, 0.04, 0.16, 0.9));
    theme.set_color("feathers.slider.bar", Color::srgba(0.55, 0.36, 0.96, 0.75));
    theme.set_color(
        "feathers.slider.bar.disabled",
        Color::srgba(0.3, 0.2, 0.45, 0.45),
    );
    theme.set_color("feathers.slider.text", Color::srgba(0.9, 0.85, 1.0, 0.95));
    theme.set_color(
        "feathers.slider.text.disabled",
        Color::srgba(0.55, 0.5, 0.65, 0.7),
    );
    theme.set_color("feathers.button.bg", Color::srgba(0.35, 0.2, 0.6, 0.35));
    theme.set_color(
        "feathers.button.bg.hover",
        Color::srgba(0.45, 0.28, 0.75, 0.55),
    );
    theme.set_color(
        "feathers.button.bg.pressed",
        Color::srgba(0.5, 0.32, 0.82, 0.7),
    );
    theme.set_color(
        "feathers.button.bg.disabled",
        Color::srgba(0.2, 0.15, 0.3, 0.5),
    );
    theme.set_color("feathers.button.txt", Color::WHITE);
    theme.set_color(
        "feathers.button.txt.disabled",
        Color::srgba(0.6, 0.55, 0.7, 0.7),
    );
    theme.set_color(
        "feathers.button.primary.bg",
        Color::srgba(0.15, 0.3, 0.7, 0.45),
    );
    theme.set_color(
        "feathers.button.primary.bg.hover",
        Color::srgba(0.2, 0.38, 0.82, 0.6),
    );
    theme.set_color(
        "feathers.button.primary.bg.pressed",
        Color::srgba(0.24, 0.44, 0.9, 0.75),
    );
    theme.set_color(
        "feathers.button.primary.bg.disabled",
        Color::srgba(0.12, 0.18, 0.32, 0.6),
    );
    theme.set_color("feathers.button.primary.txt", Color::WHITE);
    theme.set_color(
        "feathers.button.primary.txt.disabled",
        Color::srgba(0.55, 0.6, 0.7, 0.7),
    );
    theme
}
