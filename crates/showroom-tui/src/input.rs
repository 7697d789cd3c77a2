use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleHelp,
    // Carousel
    PrevCard,
    NextCard,
    FirstCard,
    LastCard,
    Select,
    // Filter bar
    NextFilter,
    PrevFilter,
    ClearFilter,
    SelectFilter(usize),
    // Detail
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    Back,
    // Pointer gestures, in terminal cells
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16, row: u16 },
    PointerUp { column: u16, row: u16 },
    WheelUp { column: u16, row: u16 },
    WheelDown { column: u16, row: u16 },
    ExitMode,
    None,
}

impl Action {
    /// Grouping used by the help overlay
    pub fn help_order(&self) -> u8 {
        match self {
            Action::PrevCard | Action::NextCard | Action::FirstCard | Action::LastCard => 0,
            Action::Select | Action::Back => 1,
            Action::NextFilter
            | Action::PrevFilter
            | Action::ClearFilter
            | Action::SelectFilter(_) => 2,
            Action::ScrollDown | Action::ScrollUp | Action::HalfPageDown | Action::HalfPageUp => 3,
            Action::ToggleHelp | Action::Quit => 4,
            _ => 5,
        }
    }

    /// Short description for the help overlay
    pub fn describe(&self) -> String {
        match self {
            Action::Quit => "Quit".to_string(),
            Action::ToggleHelp => "Toggle help".to_string(),
            Action::PrevCard => "Previous card".to_string(),
            Action::NextCard => "Next card".to_string(),
            Action::FirstCard => "First card".to_string(),
            Action::LastCard => "Last card".to_string(),
            Action::Select => "Open vehicle / press button".to_string(),
            Action::NextFilter => "Next filter".to_string(),
            Action::PrevFilter => "Previous filter".to_string(),
            Action::ClearFilter => "Show all".to_string(),
            Action::SelectFilter(i) => format!("Filter chip {}", i + 1),
            Action::ScrollDown => "Scroll down".to_string(),
            Action::ScrollUp => "Scroll up".to_string(),
            Action::HalfPageDown => "Half page down".to_string(),
            Action::HalfPageUp => "Half page up".to_string(),
            Action::Back => "Back".to_string(),
            _ => String::new(),
        }
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help
        return Action::ExitMode;
    }

    keymap
        .get(&KeyBinding::from_event(&key))
        .cloned()
        .unwrap_or(Action::None)
}

/// Translate a mouse event into a pointer action
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        return match mouse.kind {
            MouseEventKind::Down(_) => Action::ExitMode,
            _ => Action::None,
        };
    }

    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { column, row },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag { column, row },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp { column, row },
        MouseEventKind::ScrollUp => Action::WheelUp { column, row },
        MouseEventKind::ScrollDown => Action::WheelDown { column, row },
        _ => Action::None,
    }
}
