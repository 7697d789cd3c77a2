//! Screen geometry shared by rendering and pointer hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use showroom_core::config::UiConfig;
use showroom_core::SafeArea;

/// Conversion between layout points and terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub per_column: f64,
    pub per_row: f64,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            per_column: 5.0,
            per_row: 20.0,
        }
    }
}

impl CellScale {
    pub fn from_config(ui: &UiConfig) -> Self {
        let fallback = Self::default();
        let valid = |v: f64, default: f64| if v.is_finite() && v > 0.0 { v } else { default };
        Self {
            per_column: valid(ui.points_per_column, fallback.per_column),
            per_row: valid(ui.points_per_row, fallback.per_row),
        }
    }

    #[inline]
    pub fn columns_to_points(&self, columns: f64) -> f64 {
        columns * self.per_column
    }

    #[inline]
    pub fn points_to_columns(&self, points: f64) -> f64 {
        points / self.per_column
    }

    #[inline]
    pub fn rows_to_points(&self, rows: f64) -> f64 {
        rows * self.per_row
    }

    #[inline]
    pub fn points_to_rows(&self, points: f64) -> f64 {
        points / self.per_row
    }
}

/// Home screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeAreas {
    pub header: Rect,
    pub filter_bar: Rect,
    pub carousel: Rect,
    pub pagination: Rect,
    pub status: Rect,
}

impl HomeAreas {
    pub fn new(area: Rect, safe_area: SafeArea) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(safe_area.top),
                Constraint::Length(3), // Brand header
                Constraint::Length(3), // Filter chips
                Constraint::Min(4),    // Cards
                Constraint::Length(1), // Pagination
                Constraint::Length(1), // Status bar
                Constraint::Length(safe_area.bottom),
            ])
            .split(area);

        Self {
            header: chunks[1],
            filter_bar: chunks[2],
            carousel: chunks[3],
            pagination: chunks[4],
            status: chunks[5],
        }
    }
}

/// Detail screen regions
///
/// The hero runs under the top inset; overlays (back button, collapsed
/// title) are pushed below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailAreas {
    pub content: Rect,
    pub back_button: Rect,
    pub title: Rect,
    pub status: Rect,
}

/// Label drawn inside the back button
pub const BACK_LABEL: &str = " ‹ BACK ";

impl DetailAreas {
    pub fn new(area: Rect, safe_area: SafeArea) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(safe_area.bottom),
            ])
            .split(area);
        let content = chunks[0];

        let overlay_y = content.y + safe_area.top.min(content.height.saturating_sub(1));
        let button_width = (BACK_LABEL.width() as u16).min(content.width.saturating_sub(2));
        let back_button = Rect::new(content.x + 1, overlay_y, button_width, 1.min(content.height));

        let title_margin = button_width + 2;
        let title = Rect::new(
            content.x + title_margin,
            overlay_y,
            content.width.saturating_sub(title_margin * 2),
            1.min(content.height),
        );

        Self {
            content,
            back_button,
            title,
            status: chunks[1],
        }
    }
}

/// Chip boxes laid out left to right; chips that do not fit get an empty rect
pub fn chip_rects(area: Rect, labels: &[String]) -> Vec<Rect> {
    const PADDING_LEFT: u16 = 2;
    const GAP: u16 = 1;

    let right = area.x.saturating_add(area.width);
    let mut x = area.x.saturating_add(PADDING_LEFT);
    labels
        .iter()
        .map(|label| {
            // Border plus one space on each side
            let width = label.width() as u16 + 4;
            if x.saturating_add(width) > right {
                return Rect::new(x.min(right), area.y, 0, 0);
            }
            let rect = Rect::new(x, area.y, width, area.height.min(3));
            x = x.saturating_add(width + GAP);
            rect
        })
        .collect()
}
