use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use showroom_core::EasingType;

use crate::app::App;
use crate::layout::chip_rects;
use crate::scroll::EasingTypeExt;
use crate::theme::blend;

/// Chips above this scale are drawn with a heavy outline
const EMPHASIS_SCALE: f64 = 1.025;

pub struct FilterBarWidget;

impl FilterBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let now = Instant::now();

        let entrance = app.config.motion.filter_entrance;
        let elapsed = now.saturating_duration_since(app.home.mounted_at);
        let entering = entrance.style_at(EasingType::Cubic.apply(entrance.progress(elapsed, 0)));
        if entering.opacity <= 0.0 {
            return;
        }

        // Fades in while dropping from a row above
        let shift = app.cell_scale().points_to_rows(entering.translate_y).round() as i32;
        let y = (area.y as i32 + shift).max(0) as u16;
        let bar = Rect::new(area.x, y, area.width, area.height);

        let labels: Vec<String> = app.home.options.iter().map(|o| o.label()).collect();
        let rects = chip_rects(bar, &labels);

        for ((label, rect), chip) in labels.iter().zip(rects).zip(&app.home.chips) {
            let rect = rect.intersection(frame.area());
            if rect.width == 0 || rect.height == 0 {
                continue;
            }
            let progress = chip.progress(now);
            let bg = theme.fade(blend(theme.muted, theme.primary, progress), entering.opacity);
            let fg = theme.fade(blend(theme.muted_text, theme.on_primary, progress), entering.opacity);

            let border_set = if chip.scale() > EMPHASIS_SCALE {
                border::THICK
            } else {
                border::ROUNDED
            };
            let mut label_style = Style::default().fg(fg).bg(bg);
            if progress > 0.5 {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }

            let chip_widget = Paragraph::new(label.as_str())
                .alignment(Alignment::Center)
                .style(label_style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_set(border_set)
                        .border_style(Style::default().fg(bg).bg(theme.background)),
                );
            frame.render_widget(chip_widget, rect);
        }
    }
}
