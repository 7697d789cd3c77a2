use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use showroom_core::motion::HeaderStyle;
use showroom_core::{resolve_detail, DetailState, VehicleRecord};

use crate::app::{App, DetailScreen, DETAIL_BODY_ROWS};
use crate::layout::{CellScale, BACK_LABEL};
use crate::theme::Theme;

/// Back button scale below which it reads as held down
const PRESSED_SCALE: f64 = 0.975;

pub struct DetailWidget;

impl DetailWidget {
    pub fn render(frame: &mut Frame, app: &App, detail: &DetailScreen) {
        let areas = app.detail_areas();
        let theme = &app.theme;
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            areas.content,
        );

        match resolve_detail(&app.catalog, &detail.id) {
            DetailState::Found(vehicle) => {
                let offset = detail.reader.get();
                let header = app.config.motion.header;
                let style = header.style(offset);
                let scale = app.cell_scale();

                // Content sits below the expanded header and scrolls under it
                let body_top = areas.content.y as f64 + scale.points_to_rows(header.max_height - offset);
                let hero_rows = (scale.points_to_rows(style.height).round() as u16)
                    .min(areas.content.height);

                Self::render_body(frame, areas.content, hero_rows, body_top.round() as i32, vehicle, theme);
                Self::render_hero(frame, areas.content, hero_rows, &style, scale, vehicle, theme);

                if style.title_opacity > 0.0 {
                    let title = Paragraph::new(vehicle.model_name.as_str())
                        .alignment(Alignment::Center)
                        .style(
                            Style::default()
                                .fg(theme.fade(theme.text_primary, style.title_opacity))
                                .add_modifier(Modifier::BOLD),
                        );
                    frame.render_widget(title, areas.title);
                }
            }
            DetailState::NotFound { .. } => {
                let middle = Rect::new(
                    areas.content.x,
                    areas.content.y + areas.content.height / 2,
                    areas.content.width,
                    1.min(areas.content.height),
                );
                let message = Paragraph::new(DetailState::NOT_FOUND_MESSAGE)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.text_primary));
                frame.render_widget(message, middle);
            }
        }

        // Back button always stays reachable
        let pressed = detail.back_button.scale() < PRESSED_SCALE;
        let mut button_style = Style::default()
            .fg(theme.on_primary)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD);
        if pressed {
            button_style = button_style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(Clear, areas.back_button);
        frame.render_widget(Paragraph::new(BACK_LABEL).style(button_style), areas.back_button);
    }

    fn render_body(
        frame: &mut Frame,
        content: Rect,
        hero_rows: u16,
        body_top: i32,
        vehicle: &VehicleRecord,
        theme: &Theme,
    ) {
        let visible_top = content.y.saturating_add(hero_rows) as i32;
        let top = body_top.max(visible_top);
        let bottom = content.bottom() as i32;
        if top >= bottom {
            return;
        }
        let hidden = (top - body_top) as u16;
        let rows = ((bottom - top) as u16).min(DETAIL_BODY_ROWS.saturating_sub(hidden));
        if rows == 0 {
            return;
        }

        let label = Style::default().fg(theme.text_secondary);
        let value = Style::default().fg(theme.text_primary);
        let hero = vehicle.hero_image();
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(format!("{:<14}", name), label), Span::styled(text, value)])
        };

        let lines = vec![
            Line::raw(""),
            Line::styled(
                vehicle.model_name.clone(),
                value.add_modifier(Modifier::BOLD),
            ),
            Line::styled(vehicle.model_type.to_string(), label),
            Line::raw(""),
            row("Body type", vehicle.body_type.as_str().to_uppercase()),
            row("Powertrain", vehicle.model_type.to_string()),
            row("Model id", vehicle.id.clone()),
            row("Image", format!("{} ({})", hero.file_name(), hero.fit.as_str())),
            Line::raw(""),
            Line::from(vec![
                Span::styled("LEARN ›", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
                Span::raw("   "),
                Span::styled("SHOP ›", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
            ]),
        ];

        let area = Rect::new(content.x + 3, top as u16, content.width.saturating_sub(6), rows);
        frame.render_widget(Paragraph::new(lines).scroll((hidden, 0)), area);
    }

    fn render_hero(
        frame: &mut Frame,
        content: Rect,
        hero_rows: u16,
        style: &HeaderStyle,
        scale: CellScale,
        vehicle: &VehicleRecord,
        theme: &Theme,
    ) {
        if hero_rows == 0 {
            return;
        }
        let hero = Rect::new(content.x, content.y, content.width, hero_rows);
        let backdrop = theme.fade(theme.surface, style.image_opacity);
        frame.render_widget(Block::default().style(Style::default().bg(backdrop)), hero);

        // Cover-fit image frame: grows on pull-down, drifts and shrinks on collapse
        let base_width = hero.width as f64 * 0.75;
        let base_height = hero.height.saturating_sub(2) as f64;
        let width = ((base_width * style.image_scale).round() as u16).min(hero.width);
        let height = ((base_height * style.image_scale).round() as u16).min(hero.height);
        if width < 4 || height < 2 {
            return;
        }
        let shift = scale.points_to_rows(style.image_translate_y).round() as u16;
        let y = (hero.y + (hero.height - height) / 2 + shift).min(hero.bottom().saturating_sub(height));
        let image_area = Rect::new(hero.x + (hero.width - width) / 2, y, width, height);

        let image = vehicle.hero_image();
        let ink = theme.fade(theme.primary, style.image_opacity);
        let mut lines = vec![Line::raw(""); (height.saturating_sub(3) / 2) as usize];
        lines.push(Line::styled(format!("▣ {}", image.file_name()), Style::default().fg(ink)));
        lines.push(Line::styled(image.fit.as_str(), Style::default().fg(ink)));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(ink)),
        );
        frame.render_widget(paragraph, image_area);
    }
}
