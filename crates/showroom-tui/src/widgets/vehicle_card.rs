use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use showroom_core::VehicleRecord;

use crate::theme::Theme;

/// Card rectangle in cells; may extend past the viewport while scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFrame {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CardFrame {
    /// Visible part of a card-relative region, with the number of columns
    /// hidden on its left
    fn region(&self, clip: Rect, dx: u16, dy: u16, width: u16, height: u16) -> Option<(Rect, u16)> {
        let left = self.x + dx as i32;
        let top = self.y + dy as i32;
        let right = (left + width as i32).min(self.x + self.width as i32);
        let bottom = (top + height as i32).min(self.y + self.height as i32);

        let x0 = left.max(clip.x as i32);
        let y0 = top.max(clip.y as i32);
        let x1 = right.min(clip.right() as i32);
        let y1 = bottom.min(clip.bottom() as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        let rect = Rect::new(x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16);
        Some((rect, (x0 - left) as u16))
    }

    fn borders(&self, clip: Rect) -> Borders {
        let mut borders = Borders::NONE;
        if self.x >= clip.x as i32 {
            borders |= Borders::LEFT;
        }
        if self.x + self.width as i32 <= clip.right() as i32 {
            borders |= Borders::RIGHT;
        }
        if self.y >= clip.y as i32 {
            borders |= Borders::TOP;
        }
        if self.y + self.height as i32 <= clip.bottom() as i32 {
            borders |= Borders::BOTTOM;
        }
        borders
    }
}

pub struct VehicleCardWidget;

impl VehicleCardWidget {
    /// Render one card; `opacity` fades every color toward the background
    pub fn render(
        frame: &mut Frame,
        clip: Rect,
        card: CardFrame,
        vehicle: &VehicleRecord,
        opacity: f64,
        theme: &Theme,
    ) {
        let Some((outline, _)) = card.region(clip, 0, 0, card.width, card.height) else {
            return;
        };

        let block = Block::default()
            .borders(card.borders(clip))
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(theme.fade(theme.muted, opacity)))
            .style(Style::default().bg(theme.background));
        frame.render_widget(block, outline);

        let inner_width = card.width.saturating_sub(4);
        let primary = Style::default().fg(theme.fade(theme.text_primary, opacity));
        let secondary = Style::default().fg(theme.fade(theme.text_secondary, opacity));

        // Body type, model name, model type
        let text = vec![
            Line::styled(vehicle.body_type.as_str().to_uppercase(), secondary),
            Line::styled(vehicle.model_name.clone(), primary.add_modifier(Modifier::BOLD)),
            Line::styled(vehicle.model_type.to_string(), secondary),
        ];
        if let Some((rect, hidden)) = card.region(clip, 2, 1, inner_width, 3) {
            frame.render_widget(Paragraph::new(text).scroll((0, hidden)), rect);
        }

        // Image placeholder, letterboxed like a contain-fit image
        let image_rows = card.height.saturating_sub(8);
        if image_rows > 0 {
            if let Some((rect, hidden)) = card.region(clip, 2, 5, inner_width, image_rows) {
                let image = vehicle.card_image();
                let surface = theme.fade(theme.surface, opacity);
                let mut lines = vec![Line::raw(""); (image_rows / 2) as usize];
                lines.push(Line::styled(
                    format!("▣ {}", image.file_name()),
                    secondary.bg(surface),
                ));
                lines.push(Line::styled(image.fit.as_str(), secondary.bg(surface)));
                let paragraph = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(Style::default().bg(surface))
                    .scroll((0, hidden));
                frame.render_widget(paragraph, rect);
            }
        }

        let accent = Style::default()
            .fg(theme.fade(theme.accent, opacity))
            .add_modifier(Modifier::BOLD);
        let actions = Line::from(vec![
            Span::styled("LEARN ›", accent),
            Span::raw("   "),
            Span::styled("SHOP ›", accent),
        ]);
        if let Some((rect, hidden)) =
            card.region(clip, 2, card.height.saturating_sub(2), inner_width, 1)
        {
            frame.render_widget(Paragraph::new(actions).scroll((0, hidden)), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_clipped_on_left() {
        let clip = Rect::new(0, 0, 40, 20);
        let card = CardFrame {
            x: -5,
            y: 2,
            width: 20,
            height: 10,
        };
        let (rect, hidden) = card.region(clip, 0, 0, 20, 10).unwrap();
        assert_eq!(rect, Rect::new(0, 2, 15, 10));
        assert_eq!(hidden, 5);

        let borders = card.borders(clip);
        assert!(!borders.contains(Borders::LEFT));
        assert!(borders.contains(Borders::RIGHT));
    }

    #[test]
    fn test_region_off_screen() {
        let clip = Rect::new(0, 0, 40, 20);
        let card = CardFrame {
            x: 50,
            y: 0,
            width: 20,
            height: 10,
        };
        assert!(card.region(clip, 0, 0, 20, 10).is_none());
    }
}
