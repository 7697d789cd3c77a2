//! Theme registry and loader
//!
//! Built-in Volvo themes with user color overrides.

mod volvo;

use showroom_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "volvo-light" | "volvo" | "light" => volvo::light(),
        "volvo-dark" | "dark" => volvo::dark(),
        other => {
            tracing::warn!("Unknown theme '{}', using volvo-light", other);
            volvo::light()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&str, &Option<String>, &mut Color); 10] = [
        ("background", &overrides.background, &mut theme.background),
        ("surface", &overrides.surface, &mut theme.surface),
        ("text_primary", &overrides.text_primary, &mut theme.text_primary),
        ("text_secondary", &overrides.text_secondary, &mut theme.text_secondary),
        ("primary", &overrides.primary, &mut theme.primary),
        ("accent", &overrides.accent, &mut theme.accent),
        ("muted", &overrides.muted, &mut theme.muted),
        ("muted_text", &overrides.muted_text, &mut theme.muted_text),
        ("status_bar", &overrides.status_bar, &mut theme.status_bar),
        ("error", &overrides.error, &mut theme.error),
    ];

    for (name, hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => tracing::warn!("Ignoring invalid color for {}: '{}'", name, hex),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["volvo-light", "volvo-dark"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#003057").unwrap();
        assert!(matches!(color, Color::Rgb(0x00, 0x30, 0x57)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_no_hash() {
        let color = parse_hex_color("ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let config = ThemeConfig::default();
        let theme = load_theme(&config);
        assert!(matches!(theme.primary, Color::Rgb(0x00, 0x30, 0x57)));
        assert!(matches!(theme.background, Color::Rgb(0xff, 0xff, 0xff)));
    }

    #[test]
    fn test_load_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "gruvbox".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.primary, Color::Rgb(0x00, 0x30, 0x57)));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "volvo-dark".to_string(),
            colors: ThemeColorOverrides {
                primary: Some("#ff0000".to_string()),
                muted: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.primary, Color::Rgb(255, 0, 0)));
        assert!(matches!(theme.muted, Color::Rgb(0x33, 0x33, 0x33)));
    }
}
