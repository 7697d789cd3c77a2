use ratatui::style::Color;

use showroom_core::motion::lerp;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Surfaces
    pub background: Color,
    pub surface: Color,
    pub status_bar: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Text drawn on top of `primary`
    pub on_primary: Color,

    // Brand
    pub primary: Color,
    pub accent: Color,

    /// Idle chip background and inactive pagination dots
    pub muted: Color,
    /// Idle chip label
    pub muted_text: Color,

    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Volvo light
        Self {
            background: Color::Rgb(0xff, 0xff, 0xff),
            surface: Color::Rgb(0xfa, 0xfa, 0xfa),
            status_bar: Color::Rgb(0xe8, 0xe8, 0xe8),
            text_primary: Color::Rgb(0x1a, 0x1a, 0x1a),
            text_secondary: Color::Rgb(0x70, 0x70, 0x70),
            on_primary: Color::Rgb(0xff, 0xff, 0xff),
            primary: Color::Rgb(0x00, 0x30, 0x57),
            accent: Color::Rgb(0x1c, 0x6b, 0xba),
            muted: Color::Rgb(0xe8, 0xe8, 0xe8),
            muted_text: Color::Rgb(0x33, 0x33, 0x33),
            error: Color::Rgb(0xc0, 0x39, 0x2b),
        }
    }
}

impl Theme {
    /// `color` drawn at `opacity` over the background
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        blend(self.background, color, opacity)
    }
}

/// Linear RGB blend from `from` (t = 0) to `to` (t = 1)
///
/// Non-RGB colors cannot be mixed and switch over at the midpoint.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |a: u8, b: u8| lerp(a as f64, b as f64, t).round() as u8;
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0xe8, 0xe8, 0xe8);
        let b = Color::Rgb(0x00, 0x30, 0x57);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 2.0), b);
        assert_eq!(blend(a, b, f64::NAN), a);
    }

    #[test]
    fn test_blend_midpoint() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(blend(Color::Reset, white, 0.4), Color::Reset);
        assert_eq!(blend(Color::Reset, white, 0.6), white);
    }

    #[test]
    fn test_fade_toward_background() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.primary, 1.0), theme.primary);
        assert_eq!(theme.fade(theme.primary, 0.0), theme.background);
    }
}
