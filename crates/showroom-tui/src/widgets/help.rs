use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::keymap::Keymap;
use crate::theme::Theme;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the key binding overlay centered on screen
    pub fn render(frame: &mut Frame, keymap: &Keymap, theme: &Theme) {
        let area = frame.area();

        let mut lines: Vec<Line> = Vec::new();
        let mut last_group = None;
        for (key, action) in keymap.describe() {
            let description = action.describe();
            if description.is_empty() {
                continue;
            }
            let group = action.help_order();
            if last_group.is_some() && last_group != Some(group) {
                lines.push(Line::raw(""));
            }
            last_group = Some(group);
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>10}", truncate_str(&key, 10)),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(description, Style::default().fg(theme.text_primary)),
            ]));
        }
        lines.push(Line::raw(""));
        lines.push(
            Line::styled("Press any key to close", Style::default().fg(theme.text_secondary))
                .alignment(Alignment::Center),
        );

        // Calculate popup size - centered, reasonable width
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Truncate a string to max length with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
