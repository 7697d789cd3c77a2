use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use showroom_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Normalize a terminal key event into the form produced by `parse_key_binding`
    ///
    /// Terminals disagree on whether symbols like '?' carry SHIFT and report
    /// Shift+Tab as BackTab.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::SHIFT | KeyModifiers::ALT);
        match key.code {
            KeyCode::BackTab => Self::shift(KeyCode::Tab),
            KeyCode::Char(c) if c.is_ascii_uppercase() => {
                Self::new(KeyCode::Char(c), modifiers | KeyModifiers::SHIFT)
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                Self::new(KeyCode::Char(c), modifiers - KeyModifiers::SHIFT)
            }
            code => Self::new(code, modifiers),
        }
    }
}

/// Runtime keymap for efficient key-to-action lookup
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.help, Action::ToggleHelp);
        add_binding(&config.prev_card, Action::PrevCard);
        add_binding(&config.next_card, Action::NextCard);
        add_binding(&config.jump_first, Action::FirstCard);
        add_binding(&config.jump_last, Action::LastCard);
        add_binding(&config.select, Action::Select);
        add_binding(&config.filter_next, Action::NextFilter);
        add_binding(&config.filter_prev, Action::PrevFilter);
        add_binding(&config.filter_all, Action::ClearFilter);
        add_binding(&config.scroll_down, Action::ScrollDown);
        add_binding(&config.scroll_up, Action::ScrollUp);
        add_binding(&config.half_page_down, Action::HalfPageDown);
        add_binding(&config.half_page_up, Action::HalfPageUp);
        add_binding(&config.back, Action::Back);

        // Always available, not configurable
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.entry(KeyBinding::simple(KeyCode::Left)).or_insert(Action::PrevCard);
        bindings.entry(KeyBinding::simple(KeyCode::Right)).or_insert(Action::NextCard);
        bindings.entry(KeyBinding::simple(KeyCode::Up)).or_insert(Action::ScrollUp);
        bindings.entry(KeyBinding::simple(KeyCode::Down)).or_insert(Action::ScrollDown);
        bindings.entry(KeyBinding::simple(KeyCode::Esc)).or_insert(Action::Back);

        // Number keys pick a filter chip directly: 1 = All, 2.. = body types
        for (i, c) in ['1', '2', '3', '4'].into_iter().enumerate() {
            bindings
                .entry(KeyBinding::simple(KeyCode::Char(c)))
                .or_insert(Action::SelectFilter(i));
        }

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Bindings sorted for display in the help overlay
    pub fn describe(&self) -> Vec<(String, Action)> {
        let mut entries: Vec<(String, Action)> = self
            .bindings
            .iter()
            .map(|(binding, action)| (format_binding(binding), action.clone()))
            .collect();
        entries.sort_by(|a, b| a.1.help_order().cmp(&b.1.help_order()).then(a.0.cmp(&b.0)));
        entries
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "h", "l", "q", etc.
/// - Uppercase (Shift): "G", etc.
/// - Special chars: "?", etc.
/// - Ctrl: "<C-d>", "<C-u>", etc.
/// - Shift: "<S-Tab>", etc.
/// - Special keys: "<CR>", "<Enter>", "<Esc>", "<Tab>", "<Space>", "<BS>", "<Left>", "<Right>", "<Up>", "<Down>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "d" in "<C-d>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// Render a binding back into Vim-style notation
pub fn format_binding(binding: &KeyBinding) -> String {
    let name = match binding.code {
        KeyCode::Enter => "CR".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "BS".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => {
            // Bare printable keys need no angle brackets
            if binding.modifiers.contains(KeyModifiers::CONTROL) {
                return format!("<C-{}>", c);
            }
            return c.to_string();
        }
        other => format!("{:?}", other),
    };

    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("<C-{}>", name)
    } else if binding.modifiers.contains(KeyModifiers::SHIFT) {
        format!("<S-{}>", name)
    } else {
        format!("<{}>", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            parse_key_binding("h"),
            Some(KeyBinding::simple(KeyCode::Char('h')))
        );
        assert_eq!(
            parse_key_binding("?"),
            Some(KeyBinding::simple(KeyCode::Char('?')))
        );
        assert_eq!(
            parse_key_binding("G"),
            Some(KeyBinding::shift(KeyCode::Char('G')))
        );
        assert_eq!(parse_key_binding("gg"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(
            parse_key_binding("<CR>"),
            Some(KeyBinding::simple(KeyCode::Enter))
        );
        assert_eq!(
            parse_key_binding("<BS>"),
            Some(KeyBinding::simple(KeyCode::Backspace))
        );
        assert_eq!(
            parse_key_binding("<S-Tab>"),
            Some(KeyBinding::shift(KeyCode::Tab))
        );
        assert_eq!(
            parse_key_binding("<C-d>"),
            Some(KeyBinding::ctrl(KeyCode::Char('d')))
        );
        assert_eq!(parse_key_binding("<Nope>"), None);
        assert_eq!(parse_key_binding("<>"), None);
    }

    #[test]
    fn test_event_normalization() {
        let backtab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeyBinding::from_event(&backtab), KeyBinding::shift(KeyCode::Tab));

        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            KeyBinding::from_event(&question),
            KeyBinding::simple(KeyCode::Char('?'))
        );

        let upper = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE);
        assert_eq!(KeyBinding::from_event(&upper), KeyBinding::shift(KeyCode::Char('G')));
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::from_config(&KeymapConfig::default());

        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('l'))),
            Some(&Action::NextCard)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Enter)),
            Some(&Action::Select)
        );
        assert_eq!(
            keymap.get(&KeyBinding::shift(KeyCode::Tab)),
            Some(&Action::PrevFilter)
        );
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('2'))),
            Some(&Action::SelectFilter(1))
        );
        assert_eq!(
            keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            help: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::simple(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_format_binding() {
        assert_eq!(format_binding(&KeyBinding::simple(KeyCode::Enter)), "<CR>");
        assert_eq!(format_binding(&KeyBinding::shift(KeyCode::Tab)), "<S-Tab>");
        assert_eq!(format_binding(&KeyBinding::ctrl(KeyCode::Char('d'))), "<C-d>");
        assert_eq!(format_binding(&KeyBinding::simple(KeyCode::Char('j'))), "j");
    }
}
