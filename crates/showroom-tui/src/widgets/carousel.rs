use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use showroom_core::EasingType;

use super::vehicle_card::{CardFrame, VehicleCardWidget};
use crate::app::App;
use crate::scroll::EasingTypeExt;

/// Gap between pagination dots, in columns
const DOT_GAP: u16 = 1;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let vehicles = app.visible_vehicles();
        if vehicles.is_empty() {
            let empty = Paragraph::new("No vehicles match this filter")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.text_secondary));
            let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
            frame.render_widget(empty, middle);
            return;
        }

        let offset = app.home.reader.get();
        let layout = app.carousel_layout();
        let scale = app.cell_scale();
        let entrance = app.config.motion.card_entrance;
        let elapsed = Instant::now().saturating_duration_since(app.home.cards_entered_at);

        for (index, vehicle) in vehicles.iter().enumerate() {
            let style = layout.card_style(offset, index);
            let press = app.home.presses.get(index).map(|p| p.scale()).unwrap_or(1.0);
            let entering = entrance.style_at(EasingType::Cubic.apply(entrance.progress(elapsed, index)));

            let card_scale = style.scale * press;
            let width_points = layout.card_width * card_scale;
            let left_points =
                layout.card_left(index, offset) + (layout.card_width - width_points) / 2.0;

            let x = area.x as i32 + scale.points_to_columns(left_points).round() as i32;
            let width = scale.points_to_columns(width_points).round() as u16;
            if x + width as i32 <= area.x as i32 || x >= area.right() as i32 {
                continue;
            }

            let height = (area.height as f64 * card_scale).round() as u16;
            let shift = scale
                .points_to_rows(style.translate_y + entering.translate_y)
                .round() as i32;
            let y = area.y as i32 + (area.height.saturating_sub(height) / 2) as i32 + shift;

            let card = CardFrame {
                x,
                y,
                width,
                height,
            };
            let opacity = style.opacity * entering.opacity;
            VehicleCardWidget::render(frame, area, card, vehicle, opacity, &app.theme);
        }
    }
}

pub struct PaginationWidget;

impl PaginationWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let count = app.visible_vehicles().len();
        if count == 0 {
            return;
        }
        let offset = app.home.reader.get();
        let layout = app.carousel_layout();
        let scale = app.cell_scale();
        let theme = &app.theme;

        let mut spans = Vec::with_capacity(count * 2);
        for index in 0..count {
            let dot = layout.dot_style(offset, index);
            let width = scale.points_to_columns(dot.width).round().max(1.0) as usize;
            let base = if dot.active { theme.primary } else { theme.muted };
            if index > 0 {
                spans.push(Span::raw(" ".repeat(DOT_GAP as usize)));
            }
            spans.push(Span::styled(
                "━".repeat(width),
                Style::default().fg(theme.fade(base, dot.opacity)),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
