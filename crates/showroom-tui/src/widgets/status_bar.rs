use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal if app.on_home() => "HOME",
            Mode::Normal => "DETAIL",
            Mode::Help => "HELP",
        };

        let status_text = if app.on_home() {
            let filter = app
                .home
                .filter
                .map(|b| b.label())
                .unwrap_or_else(|| "All".to_string());
            let count = app.visible_vehicles().len();
            let position = if count == 0 { 0 } else { app.current_index() + 1 };
            format!(" {} | {} | {}/{} ", mode_str, filter, position, count)
        } else {
            format!(" {} | {} ", mode_str, app.current_route())
        };

        let help_hint = if app.on_home() {
            " q:quit h/l:cards tab:filter ⏎:open ?:help "
        } else {
            " q:quit j/k:scroll ⌫:back ?:help "
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.text_primary).bg(theme.status_bar),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bar)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.text_secondary).bg(theme.status_bar),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
