//! Volvo brand palette

use ratatui::style::Color;
use crate::theme::Theme;

/// White surfaces, navy accents
pub fn light() -> Theme {
    Theme::default()
}

/// Dark surfaces, brand blues kept for chips and dots
pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x15, 0x17, 0x18),
        surface: Color::Rgb(0x1f, 0x22, 0x24),
        status_bar: Color::Rgb(0x33, 0x33, 0x33),
        text_primary: Color::Rgb(0xec, 0xed, 0xee),
        text_secondary: Color::Rgb(0x9b, 0xa1, 0xa6),
        on_primary: Color::Rgb(0xff, 0xff, 0xff),
        primary: Color::Rgb(0x1c, 0x6b, 0xba), // accentBlue reads better on dark
        accent: Color::Rgb(0x1c, 0x6b, 0xba),
        muted: Color::Rgb(0x33, 0x33, 0x33),
        muted_text: Color::Rgb(0xe8, 0xe8, 0xe8),
        error: Color::Rgb(0xea, 0x69, 0x62),
    }
}
