use std::sync::OnceLock;

use ratatui::style::Color;

use super::types::Theme;

/// Process-wide palette, built on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// Catppuccin Mocha, the built-in palette.
const fn mocha() -> Theme {
    Theme {
        base: Color::Rgb(0x1e, 0x1e, 0x2e),
        crust: Color::Rgb(0x11, 0x11, 0x1b),
        surface1: Color::Rgb(0x45, 0x47, 0x5a),
        surface2: Color::Rgb(0x58, 0x5b, 0x70),
        overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
        sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
        green: Color::Rgb(0xa6, 0xe3, 0xa1),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        red: Color::Rgb(0xf3, 0x8b, 0xa8),
        lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
    }
}

/// Return the application's theme palette.
#[must_use]
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(mocha)
}
