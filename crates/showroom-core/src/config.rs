use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::motion::{Entrance, HeaderLayout, PressConfig, SpringConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Optional catalog fixture replacing the built-in lineup
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            catalog_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Layout points covered by one terminal column
    #[serde(default = "default_points_per_column")]
    pub points_per_column: f64,
    /// Layout points covered by one terminal row
    #[serde(default = "default_points_per_row")]
    pub points_per_row: f64,
    /// Insets kept clear for fixed overlays
    #[serde(default)]
    pub safe_area: SafeArea,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Carousel and detail scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            points_per_column: default_points_per_column(),
            points_per_row: default_points_per_row(),
            safe_area: SafeArea::default(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Top/bottom insets in terminal rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeArea {
    #[serde(default)]
    pub top: u16,
    #[serde(default = "default_safe_area_bottom")]
    pub bottom: u16,
}

impl Default for SafeArea {
    fn default() -> Self {
        Self {
            top: 0,
            bottom: default_safe_area_bottom(),
        }
    }
}

/// Easing curve for timed scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    Cubic,
    Quintic,
    /// Exponential ease-out, the fast deceleration used for snapping
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll changes instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of one scroll animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Frame rate while something animates
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows moved per detail scroll step
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

/// Spring, timing and geometry parameters of the animated screens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_card_press")]
    pub card_press: PressConfig,
    #[serde(default = "default_button_press")]
    pub button_press: PressConfig,
    /// Spring for the active filter chip scale
    #[serde(default = "default_chip_spring")]
    pub chip_spring: SpringConfig,
    /// Scale of the active filter chip
    #[serde(default = "default_chip_active_scale")]
    pub chip_active_scale: f64,
    /// Colour transition of filter chips
    #[serde(default = "default_chip_transition")]
    pub chip_transition_ms: u64,
    /// How long a keyboard press is held before it is confirmed
    #[serde(default = "default_press_hold")]
    pub press_hold_ms: u64,
    #[serde(default = "default_card_entrance")]
    pub card_entrance: Entrance,
    #[serde(default = "default_header_entrance")]
    pub header_entrance: Entrance,
    #[serde(default = "default_filter_entrance")]
    pub filter_entrance: Entrance,
    #[serde(default)]
    pub header: HeaderLayout,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            card_press: default_card_press(),
            button_press: default_button_press(),
            chip_spring: default_chip_spring(),
            chip_active_scale: default_chip_active_scale(),
            chip_transition_ms: default_chip_transition(),
            press_hold_ms: default_press_hold(),
            card_entrance: default_card_entrance(),
            header_entrance: default_header_entrance(),
            filter_entrance: default_filter_entrance(),
            header: HeaderLayout::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "volvo-light", "volvo-dark")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a bare theme name or a table with overrides
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "volvo-light".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#003057" or "003057")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen background
    pub background: Option<String>,
    /// Card surface
    pub surface: Option<String>,
    /// Primary text
    pub text_primary: Option<String>,
    /// Secondary text
    pub text_secondary: Option<String>,
    /// Brand colour: active chip, active pagination dot
    pub primary: Option<String>,
    /// Card actions and links
    pub accent: Option<String>,
    /// Idle chip and pagination dot
    pub muted: Option<String>,
    /// Idle chip text
    pub muted_text: Option<String>,
    /// Status bar background
    pub status_bar: Option<String>,
    /// Error/fallback messages
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>", "<CR>" (Enter), "<Esc>", "<BS>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Show/hide help overlay
    #[serde(default = "default_key_help")]
    pub help: String,

    // Carousel
    /// Snap to the previous card
    #[serde(default = "default_key_prev_card")]
    pub prev_card: String,
    /// Snap to the next card
    #[serde(default = "default_key_next_card")]
    pub next_card: String,
    /// Snap to the first card
    #[serde(default = "default_key_jump_first")]
    pub jump_first: String,
    /// Snap to the last card
    #[serde(default = "default_key_jump_last")]
    pub jump_last: String,
    /// Press the focused card / button
    #[serde(default = "default_key_select")]
    pub select: String,

    // Filters
    /// Select the next filter chip
    #[serde(default = "default_key_filter_next")]
    pub filter_next: String,
    /// Select the previous filter chip
    #[serde(default = "default_key_filter_prev")]
    pub filter_prev: String,
    /// Clear the filter
    #[serde(default = "default_key_filter_all")]
    pub filter_all: String,

    // Detail
    /// Scroll detail down
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll detail up
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Scroll detail half page down
    #[serde(default = "default_key_half_page_down")]
    pub half_page_down: String,
    /// Scroll detail half page up
    #[serde(default = "default_key_half_page_up")]
    pub half_page_up: String,
    /// Return to the previous screen
    #[serde(default = "default_key_back")]
    pub back: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            help: default_key_help(),
            prev_card: default_key_prev_card(),
            next_card: default_key_next_card(),
            jump_first: default_key_jump_first(),
            jump_last: default_key_jump_last(),
            select: default_key_select(),
            filter_next: default_key_filter_next(),
            filter_prev: default_key_filter_prev(),
            filter_all: default_key_filter_all(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            half_page_down: default_key_half_page_down(),
            half_page_up: default_key_half_page_up(),
            back: default_key_back(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_help() -> String { "?".to_string() }
fn default_key_prev_card() -> String { "h".to_string() }
fn default_key_next_card() -> String { "l".to_string() }
fn default_key_jump_first() -> String { "g".to_string() }
fn default_key_jump_last() -> String { "G".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_filter_next() -> String { "<Tab>".to_string() }
fn default_key_filter_prev() -> String { "<S-Tab>".to_string() }
fn default_key_filter_all() -> String { "a".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_half_page_down() -> String { "<C-d>".to_string() }
fn default_key_half_page_up() -> String { "<C-u>".to_string() }
fn default_key_back() -> String { "<BS>".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showroom")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_points_per_column() -> f64 {
    5.0
}

fn default_points_per_row() -> f64 {
    20.0
}

fn default_safe_area_bottom() -> u16 {
    1 // status bar
}

fn default_animation_duration() -> u64 {
    220
}

fn default_easing() -> EasingType {
    EasingType::EaseOut
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_card_press() -> PressConfig {
    PressConfig::CARD
}

fn default_button_press() -> PressConfig {
    PressConfig::BUTTON
}

fn default_chip_spring() -> SpringConfig {
    SpringConfig::new(180.0, 15.0)
}

fn default_chip_active_scale() -> f64 {
    1.05
}

fn default_chip_transition() -> u64 {
    250
}

fn default_press_hold() -> u64 {
    120
}

fn default_card_entrance() -> Entrance {
    Entrance::CARDS
}

fn default_header_entrance() -> Entrance {
    Entrance::HEADER
}

fn default_filter_entrance() -> Entrance {
    Entrance::FILTER_BAR
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/showroom/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("showroom")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("showroom.log")
    }

    /// Catalog fixture path (with tilde expansion), if configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.general.catalog_path.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme.name, "volvo-light");
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.motion.card_press.pressed_scale, 0.93);
        assert_eq!(config.motion.button_press.pressed_scale, 0.95);
        assert_eq!(config.motion.header.collapse_distance(), 200.0);
        assert_eq!(config.keymap.select, "<CR>");
        assert!(config.catalog_path().is_none());
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml_str("[ui]\ntheme = \"volvo-dark\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "volvo-dark");

        let config = AppConfig::from_toml_str(
            "[ui.theme]\nname = \"volvo-dark\"\n[ui.theme.colors]\nprimary = \"#112233\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "volvo-dark");
        assert_eq!(config.ui.theme.colors.primary.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_motion_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            [motion.card_press]
            pressed_scale = 0.9
            press_in = { stiffness = 200.0, damping = 20.0 }
            release = { stiffness = 150.0, damping = 12.0 }

            [motion.header]
            max_height = 240.0
            min_height = 80.0
            "#,
        )
        .unwrap();
        assert_eq!(config.motion.card_press.pressed_scale, 0.9);
        assert_eq!(config.motion.card_press.press_in.mass, 1.0);
        assert_eq!(config.motion.header.overscroll, 100.0);
        assert_eq!(config.motion.header.collapse_distance(), 160.0);
    }

    #[test]
    fn test_easing_names() {
        let config = AppConfig::from_toml_str("[ui.scroll]\neasing = \"ease-out\"\n").unwrap();
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert!(AppConfig::from_toml_str("[ui.scroll]\neasing = \"bouncy\"\n").is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed = AppConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.keymap.quit, "q");
        assert_eq!(parsed.motion.chip_transition_ms, 250);
    }
}
