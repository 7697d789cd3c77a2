use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};
use showroom_core::EasingType;

use crate::app::App;
use crate::scroll::EasingTypeExt;

/// Letter-spaced brand mark
const LOGO: &str = "V O L V O";
const SUBTITLE: &str = "Recharge Lineup";

pub struct BrandHeaderWidget;

impl BrandHeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let entrance = app.config.motion.header_entrance;
        let elapsed = Instant::now().saturating_duration_since(app.home.mounted_at);
        let opacity = entrance
            .style_at(EasingType::Cubic.apply(entrance.progress(elapsed, 0)))
            .opacity;

        let lines = vec![
            Line::styled(
                LOGO,
                Style::default()
                    .fg(theme.fade(theme.text_primary, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                SUBTITLE,
                Style::default().fg(theme.fade(theme.text_secondary, opacity)),
            ),
        ];

        let inner = Rect::new(
            area.x.saturating_add(3),
            area.y.saturating_add(1).min(area.bottom()),
            area.width.saturating_sub(3),
            area.height.saturating_sub(1),
        );
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}
