use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use showroom_core::catalog::{filter, FilterOption};
use showroom_core::motion::{CarouselLayout, PressAffordance, Spring, SpringConfig};
use showroom_core::{
    AppConfig, BodyType, Catalog, EasingType, Navigator, Route, ScrollConfig, ScrollOffset,
    ScrollReader, VehicleRecord,
};

use crate::input::Action;
use crate::layout::{chip_rects, CellScale, DetailAreas, HomeAreas};
use crate::scroll::{ScrollAnimator, Tween};
use crate::theme::Theme;

/// Spring pulling an overscrolled detail view back to zero
pub const OVERSCROLL_SPRING: SpringConfig = SpringConfig::new(170.0, 26.0);

/// Rows of detail content below the hero
pub const DETAIL_BODY_ROWS: u16 = 14;

/// Horizontal pointer travel that turns a press into a drag
const DRAG_THRESHOLD_COLUMNS: u16 = 2;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Animated state of one filter chip
#[derive(Debug, Clone)]
pub struct ChipState {
    progress: Tween,
    scale: Spring,
}

impl ChipState {
    fn new(active: bool, config: SpringConfig, active_scale: f64, now: Instant) -> Self {
        let (progress, scale) = if active { (1.0, active_scale) } else { (0.0, 1.0) };
        Self {
            progress: Tween::settled(progress, now),
            scale: Spring::new(scale, config),
        }
    }

    /// Selection progress: 0 idle, 1 active
    pub fn progress(&self, now: Instant) -> f64 {
        self.progress.value_at(now)
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    fn is_animating(&self, now: Instant) -> bool {
        !self.progress.is_complete(now) || !self.scale.is_settled()
    }
}

/// Home screen state
pub struct HomeState {
    pub filter: Option<BodyType>,
    pub options: Vec<FilterOption>,
    pub chips: Vec<ChipState>,
    /// One press affordance per visible card
    pub presses: Vec<PressAffordance>,
    pub carousel: ScrollAnimator,
    offset: ScrollOffset,
    /// Renderer's view of the carousel offset
    pub reader: ScrollReader,
    /// Header and filter bar entrance start
    pub mounted_at: Instant,
    /// Card entrance start; reset whenever the visible list changes
    pub cards_entered_at: Instant,
}

/// Detail screen state for one route
pub struct DetailScreen {
    pub id: String,
    pub scroll: ScrollAnimator,
    /// Negative while the content is pulled past the top
    pub overscroll: Spring,
    offset: ScrollOffset,
    pub reader: ScrollReader,
    pub back_button: PressAffordance,
}

impl DetailScreen {
    fn new(id: String, config: &AppConfig) -> Self {
        let offset = ScrollOffset::default();
        let reader = offset.subscribe();
        Self {
            id,
            scroll: ScrollAnimator::new(config.ui.scroll.clone()),
            overscroll: Spring::new(0.0, OVERSCROLL_SPRING),
            offset,
            reader,
            back_button: PressAffordance::new(config.motion.button_press),
        }
    }

    /// Combined offset handed to the header: scroll plus overscroll
    fn combined(&self) -> f64 {
        self.scroll.current() + self.overscroll.value()
    }

    fn is_animating(&self) -> bool {
        self.scroll.needs_update() || !self.overscroll.is_settled() || self.back_button.is_animating()
    }
}

/// Pointer gesture in progress
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    CardPress { index: usize, origin_column: u16, origin_offset: f64 },
    CarouselDrag { origin_column: u16, origin_offset: f64 },
    ChipPress(usize),
    BackPress,
    DetailDrag { last_row: u16 },
}

/// Keyboard press waiting for its release
#[derive(Debug, Clone, Copy, PartialEq)]
enum PressTarget {
    Card(usize),
    Back,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub catalog: Arc<Catalog>,
    pub theme: Theme,
    pub navigator: Navigator,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Terminal area of the last frame
    pub area: Rect,
    pub home: HomeState,
    /// Present while a vehicle route is on top
    pub detail: Option<DetailScreen>,
    gesture: Option<Gesture>,
    pending_press: Option<(PressTarget, Instant)>,
    last_tick: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, catalog: Arc<Catalog>, theme: Theme) -> Self {
        let now = Instant::now();
        let options = FilterOption::all();
        let chips = options
            .iter()
            .map(|option| {
                ChipState::new(
                    option.is_active(None),
                    config.motion.chip_spring,
                    config.motion.chip_active_scale,
                    now,
                )
            })
            .collect();
        let presses = vec![PressAffordance::new(config.motion.card_press); catalog.len()];
        let offset = ScrollOffset::default();
        let reader = offset.subscribe();

        let home = HomeState {
            filter: None,
            options,
            chips,
            presses,
            carousel: ScrollAnimator::new(carousel_scroll_config(&config.ui.scroll)),
            offset,
            reader,
            mounted_at: now,
            cards_entered_at: now,
        };

        Self {
            config,
            catalog,
            theme,
            navigator: Navigator::new(Route::Home),
            mode: Mode::Normal,
            should_quit: false,
            area: Rect::default(),
            home,
            detail: None,
            gesture: None,
            pending_press: None,
            last_tick: now,
        }
    }

    pub fn cell_scale(&self) -> CellScale {
        CellScale::from_config(&self.config.ui)
    }

    pub fn home_areas(&self) -> HomeAreas {
        HomeAreas::new(self.area, self.config.ui.safe_area)
    }

    pub fn detail_areas(&self) -> DetailAreas {
        DetailAreas::new(self.area, self.config.ui.safe_area)
    }

    /// Carousel geometry for the current terminal width
    pub fn carousel_layout(&self) -> CarouselLayout {
        let width = self.home_areas().carousel.width as f64;
        CarouselLayout::for_viewport(self.cell_scale().columns_to_points(width))
    }

    /// Records passing the active filter, in catalog order
    pub fn visible_vehicles(&self) -> Vec<&VehicleRecord> {
        filter(self.catalog.vehicles(), self.home.filter)
    }

    fn visible_count(&self) -> usize {
        self.visible_vehicles().len()
    }

    /// Index of the card nearest to the carousel offset
    pub fn current_index(&self) -> usize {
        self.carousel_layout()
            .snap_index(self.home.carousel.current(), self.visible_count())
    }

    /// Card the carousel is resting on or heading to
    fn target_index(&self) -> usize {
        self.carousel_layout()
            .snap_index(self.home.carousel.target(), self.visible_count())
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn on_home(&self) -> bool {
        self.detail.is_none()
    }

    /// Track the terminal size, keeping the carousel on the same card
    pub fn set_area(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        let index = self.current_index();
        self.area = area;
        let target = self.carousel_layout().offset_for(index);
        self.home.carousel.set(target);
        self.home.offset.set(target);
    }

    // ---- Filter ----

    /// Change the active body type filter
    pub fn select_filter(&mut self, value: Option<BodyType>) {
        if value == self.home.filter {
            return;
        }
        let now = Instant::now();
        self.home.filter = value;

        let duration = Duration::from_millis(self.config.motion.chip_transition_ms);
        let active_scale = self.config.motion.chip_active_scale;
        for (option, chip) in self.home.options.iter().zip(self.home.chips.iter_mut()) {
            let active = option.is_active(value);
            chip.progress
                .retarget(if active { 1.0 } else { 0.0 }, now, duration, EasingType::Cubic);
            chip.scale.set_target(if active { active_scale } else { 1.0 });
        }

        let count = self.visible_count();
        self.home.presses = vec![PressAffordance::new(self.config.motion.card_press); count];
        self.home.carousel.set(0.0);
        self.home.offset.set(0.0);
        self.home.cards_entered_at = now;
        if matches!(self.pending_press, Some((PressTarget::Card(_), _))) {
            self.pending_press = None;
        }

        tracing::debug!(
            filter = value.map(|b| b.as_str()).unwrap_or("all"),
            count,
            "Filter changed"
        );
    }

    fn select_filter_index(&mut self, index: usize) {
        if let Some(option) = self.home.options.get(index) {
            let value = option.value;
            self.select_filter(value);
        }
    }

    fn active_filter_index(&self) -> usize {
        self.home
            .options
            .iter()
            .position(|o| o.is_active(self.home.filter))
            .unwrap_or(0)
    }

    fn cycle_filter(&mut self, forward: bool) {
        let len = self.home.options.len();
        if len == 0 {
            return;
        }
        let current = self.active_filter_index();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.select_filter_index(next);
    }

    // ---- Carousel ----

    /// Animate the carousel to card `index`
    pub fn go_to_card(&mut self, index: usize) {
        let count = self.visible_count();
        if count == 0 {
            return;
        }
        let layout = self.carousel_layout();
        let index = index.min(count - 1);
        self.home
            .carousel
            .scroll_to(layout.offset_for(index), layout.max_offset(count));
    }

    /// Card under a terminal cell
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.home_areas().carousel;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let layout = self.carousel_layout();
        let x = self
            .cell_scale()
            .columns_to_points((column - area.x) as f64 + 0.5);
        let offset = self.home.carousel.current();
        (0..self.visible_count()).find(|&i| {
            let left = layout.card_left(i, offset);
            x >= left && x < left + layout.card_width
        })
    }

    fn chip_at(&self, column: u16, row: u16) -> Option<usize> {
        let labels: Vec<String> = self.home.options.iter().map(|o| o.label()).collect();
        chip_rects(self.home_areas().filter_bar, &labels)
            .iter()
            .position(|rect| rect.contains(Position::new(column, row)))
    }

    // ---- Navigation ----

    /// Push the detail route for a vehicle id
    pub fn open_vehicle(&mut self, id: &str) {
        self.navigator.push(Route::vehicle(id));
        self.detail = Some(DetailScreen::new(id.to_string(), &self.config));
        self.gesture = None;
        self.pending_press = None;
    }

    /// Leave the detail screen; `false` when already home
    pub fn go_back(&mut self) -> bool {
        if !self.navigator.back() {
            return false;
        }
        self.detail = match self.navigator.current() {
            Route::Vehicle { id } => Some(DetailScreen::new(id.clone(), &self.config)),
            Route::Home => None,
        };
        self.gesture = None;
        self.pending_press = None;
        true
    }

    fn open_card(&mut self, index: usize) {
        let id = self.visible_vehicles().get(index).map(|v| v.id.clone());
        if let Some(id) = id {
            self.open_vehicle(&id);
        }
    }

    // ---- Detail scrolling ----

    /// Largest detail offset; always enough to collapse the header
    pub fn detail_max_offset(&self) -> f64 {
        let header = self.config.motion.header;
        let scale = self.cell_scale();
        let content = header.max_height + scale.rows_to_points(DETAIL_BODY_ROWS as f64);
        let viewport = scale.rows_to_points(self.detail_areas().content.height as f64);
        (content - viewport).max(header.collapse_distance())
    }

    fn detail_scroll_by(&mut self, points: f64) {
        let max = self.detail_max_offset();
        let limit = self.config.motion.header.overscroll;
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        if points < 0.0 && detail.scroll.at_start() {
            // Pull past the top; the spring brings it back
            let pulled = (detail.overscroll.value() + points).max(-limit);
            detail.overscroll.snap_to(pulled);
            detail.overscroll.set_target(0.0);
        } else {
            detail.scroll.scroll_by(points, max);
        }
    }

    /// Follow a drag directly, splitting into scroll and overscroll
    fn detail_drag_by(&mut self, points: f64) {
        let max = self.detail_max_offset();
        let limit = self.config.motion.header.overscroll;
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let next = detail.combined() + points;
        if next < 0.0 {
            detail.scroll.set(0.0);
            detail.overscroll.snap_to(next.max(-limit));
        } else {
            detail.scroll.set(next.min(max));
            detail.overscroll.snap_to(0.0);
        }
    }

    // ---- Actions ----

    /// Apply an input action
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                }
            }
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}

            Action::Back => {
                self.go_back();
            }
            Action::Select => self.keyboard_press(),

            Action::PointerDown { column, row } => self.pointer_down(column, row),
            Action::PointerDrag { column, row } => self.pointer_drag(column, row),
            Action::PointerUp { column, row } => self.pointer_up(column, row),
            Action::WheelDown { .. } => self.step(1),
            Action::WheelUp { .. } => self.step(-1),

            _ if self.on_home() => self.apply_home_action(action),
            _ => self.apply_detail_action(action),
        }
    }

    fn apply_home_action(&mut self, action: Action) {
        let index = self.target_index();
        match action {
            Action::NextCard | Action::ScrollDown => self.go_to_card(index + 1),
            Action::PrevCard | Action::ScrollUp => self.go_to_card(index.saturating_sub(1)),
            Action::FirstCard => self.go_to_card(0),
            Action::LastCard => self.go_to_card(usize::MAX),
            Action::HalfPageDown => self.go_to_card(index + 2),
            Action::HalfPageUp => self.go_to_card(index.saturating_sub(2)),
            Action::NextFilter => self.cycle_filter(true),
            Action::PrevFilter => self.cycle_filter(false),
            Action::ClearFilter => self.select_filter(None),
            Action::SelectFilter(i) => self.select_filter_index(i),
            _ => {}
        }
    }

    fn apply_detail_action(&mut self, action: Action) {
        let scale = self.cell_scale();
        let line = scale.rows_to_points(self.config.ui.scroll.scroll_lines.max(1) as f64);
        let half_page = scale.rows_to_points((self.detail_areas().content.height / 2).max(1) as f64);
        match action {
            Action::ScrollDown | Action::NextCard => self.detail_scroll_by(line),
            Action::ScrollUp | Action::PrevCard => self.detail_scroll_by(-line),
            Action::HalfPageDown => self.detail_scroll_by(half_page),
            Action::HalfPageUp => self.detail_scroll_by(-half_page),
            Action::FirstCard => {
                let max = self.detail_max_offset();
                if let Some(detail) = self.detail.as_mut() {
                    detail.scroll.scroll_to(0.0, max);
                }
            }
            Action::LastCard => {
                let max = self.detail_max_offset();
                if let Some(detail) = self.detail.as_mut() {
                    detail.scroll.scroll_to(max, max);
                }
            }
            _ => {}
        }
    }

    /// Wheel step: one card on the home screen, one line on detail
    fn step(&mut self, direction: i32) {
        if self.on_home() {
            let index = self.target_index();
            let target = if direction > 0 {
                index + 1
            } else {
                index.saturating_sub(1)
            };
            self.go_to_card(target);
        } else {
            let line = self
                .cell_scale()
                .rows_to_points(self.config.ui.scroll.scroll_lines.max(1) as f64);
            self.detail_scroll_by(line * direction as f64);
        }
    }

    /// Select key: press the focused card or the back button, released on a later tick
    fn keyboard_press(&mut self) {
        if self.pending_press.is_some() {
            return;
        }
        let target = if self.on_home() {
            if self.visible_count() == 0 {
                return;
            }
            PressTarget::Card(self.current_index())
        } else {
            PressTarget::Back
        };
        if let Some(press) = self.press_mut(target) {
            press.press_begin();
            self.pending_press = Some((target, Instant::now()));
        }
    }

    fn press_mut(&mut self, target: PressTarget) -> Option<&mut PressAffordance> {
        match target {
            PressTarget::Card(index) => self.home.presses.get_mut(index),
            PressTarget::Back => self.detail.as_mut().map(|d| &mut d.back_button),
        }
    }

    fn fire(&mut self, target: PressTarget) {
        match target {
            PressTarget::Card(index) => self.open_card(index),
            PressTarget::Back => {
                self.go_back();
            }
        }
    }

    // ---- Pointer ----

    fn pointer_down(&mut self, column: u16, row: u16) {
        if self.on_home() {
            if let Some(index) = self.card_at(column, row) {
                if let Some(press) = self.home.presses.get_mut(index) {
                    press.press_begin();
                }
                self.gesture = Some(Gesture::CardPress {
                    index,
                    origin_column: column,
                    origin_offset: self.home.carousel.current(),
                });
            } else if let Some(index) = self.chip_at(column, row) {
                self.gesture = Some(Gesture::ChipPress(index));
            } else if self.home_areas().carousel.contains(Position::new(column, row)) {
                self.gesture = Some(Gesture::CarouselDrag {
                    origin_column: column,
                    origin_offset: self.home.carousel.current(),
                });
            }
            return;
        }

        let areas = self.detail_areas();
        let position = Position::new(column, row);
        if areas.back_button.contains(position) {
            if let Some(detail) = self.detail.as_mut() {
                detail.back_button.press_begin();
            }
            self.gesture = Some(Gesture::BackPress);
        } else if areas.content.contains(position) {
            self.gesture = Some(Gesture::DetailDrag { last_row: row });
        }
    }

    fn pointer_drag(&mut self, column: u16, row: u16) {
        match self.gesture {
            Some(Gesture::CardPress {
                index,
                origin_column,
                origin_offset,
            }) => {
                if column.abs_diff(origin_column) >= DRAG_THRESHOLD_COLUMNS {
                    if let Some(press) = self.home.presses.get_mut(index) {
                        press.press_cancel();
                    }
                    self.gesture = Some(Gesture::CarouselDrag {
                        origin_column,
                        origin_offset,
                    });
                    self.drag_carousel(origin_column, origin_offset, column);
                }
            }
            Some(Gesture::CarouselDrag {
                origin_column,
                origin_offset,
            }) => self.drag_carousel(origin_column, origin_offset, column),
            Some(Gesture::BackPress) => {
                if !self.detail_areas().back_button.contains(Position::new(column, row)) {
                    if let Some(detail) = self.detail.as_mut() {
                        detail.back_button.press_cancel();
                    }
                    self.gesture = None;
                }
            }
            Some(Gesture::DetailDrag { last_row }) => {
                // Dragging content up scrolls down
                let delta = last_row as f64 - row as f64;
                let points = self.cell_scale().rows_to_points(delta);
                self.detail_drag_by(points);
                self.gesture = Some(Gesture::DetailDrag { last_row: row });
            }
            Some(Gesture::ChipPress(_)) | None => {}
        }
    }

    fn drag_carousel(&mut self, origin_column: u16, origin_offset: f64, column: u16) {
        let layout = self.carousel_layout();
        let max = layout.max_offset(self.visible_count());
        let moved = self
            .cell_scale()
            .columns_to_points(origin_column as f64 - column as f64);
        self.home.carousel.set((origin_offset + moved).clamp(0.0, max));
    }

    fn pointer_up(&mut self, column: u16, row: u16) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        match gesture {
            Gesture::CardPress { index, .. } => {
                let inside = self.card_at(column, row) == Some(index);
                let fired = match self.home.presses.get_mut(index) {
                    Some(press) if inside => press.press_confirm(),
                    Some(press) => {
                        press.press_end();
                        false
                    }
                    None => false,
                };
                if fired {
                    self.open_card(index);
                }
            }
            Gesture::CarouselDrag { .. } => {
                let layout = self.carousel_layout();
                let count = self.visible_count();
                let target = layout.nearest_snap(self.home.carousel.current(), count);
                self.home.carousel.scroll_to(target, layout.max_offset(count));
            }
            Gesture::ChipPress(index) => {
                if self.chip_at(column, row) == Some(index) {
                    self.select_filter_index(index);
                }
            }
            Gesture::BackPress => {
                let inside = self.detail_areas().back_button.contains(Position::new(column, row));
                let fired = match self.detail.as_mut() {
                    Some(detail) if inside => detail.back_button.press_confirm(),
                    Some(detail) => {
                        detail.back_button.press_end();
                        false
                    }
                    None => false,
                };
                if fired {
                    self.go_back();
                }
            }
            Gesture::DetailDrag { .. } => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.overscroll.set_target(0.0);
                }
            }
        }
    }

    // ---- Frame updates ----

    /// Advance animations to now
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance every spring, tween and scroll animation to `now`, then
    /// publish the scroll offsets
    pub fn tick_at(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        if let Some((target, pressed_at)) = self.pending_press {
            let hold = Duration::from_millis(self.config.motion.press_hold_ms);
            if now.saturating_duration_since(pressed_at) >= hold {
                self.pending_press = None;
                let fired = self
                    .press_mut(target)
                    .map(|press| press.press_confirm())
                    .unwrap_or(false);
                if fired {
                    self.fire(target);
                }
            }
        }

        for chip in &mut self.home.chips {
            chip.scale.step(dt);
        }
        for press in &mut self.home.presses {
            press.tick(dt);
        }

        let layout = self.carousel_layout();
        let max = layout.max_offset(self.visible_count());
        let offset = self.home.carousel.update_at(max, now);
        self.home.offset.set(offset);

        let detail_max = self.detail_max_offset();
        if let Some(detail) = self.detail.as_mut() {
            detail.back_button.tick(dt);
            detail.overscroll.step(dt);
            detail.scroll.update_at(detail_max, now);
            let combined = detail.combined();
            detail.offset.set(combined);
        }
    }

    /// Whether the next frames need the animation tick rate
    pub fn is_animating(&self) -> bool {
        let now = Instant::now();
        let motion = &self.config.motion;
        let count = self.visible_count();

        self.pending_press.is_some()
            || self.home.carousel.needs_update()
            || self.home.chips.iter().any(|c| c.is_animating(now))
            || self.home.presses.iter().any(|p| p.is_animating())
            || !motion
                .card_entrance
                .is_complete(now.saturating_duration_since(self.home.cards_entered_at), count)
            || !motion
                .filter_entrance
                .is_complete(now.saturating_duration_since(self.home.mounted_at), 1)
            || self.detail.as_ref().is_some_and(|d| d.is_animating())
    }
}

/// Carousel snapping always decelerates with ease-out
fn carousel_scroll_config(base: &ScrollConfig) -> ScrollConfig {
    ScrollConfig {
        easing: EasingType::EaseOut,
        ..base.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::{resolve_detail, DetailState};

    fn app() -> App {
        let mut app = App::new(
            Arc::new(AppConfig::default()),
            Arc::new(Catalog::builtin()),
            Theme::default(),
        );
        app.set_area(Rect::new(0, 0, 80, 30));
        app
    }

    fn settle(app: &mut App) {
        let start = Instant::now();
        for frame in 1..=120 {
            app.tick_at(start + Duration::from_millis(16 * frame));
        }
    }

    /// Column at the middle of card `index` when the carousel rests on it
    fn card_center_column(app: &App) -> u16 {
        let layout = app.carousel_layout();
        let left = layout.side_padding() + layout.card_margin;
        let center = left + layout.card_width / 2.0;
        app.home_areas().carousel.x + app.cell_scale().points_to_columns(center) as u16
    }

    #[test]
    fn test_filter_chip_selection() {
        let mut app = app();
        assert_eq!(app.visible_vehicles().len(), 8);

        app.apply_action(Action::SelectFilter(1));
        assert_eq!(app.home.filter, Some(BodyType::Suv));
        assert!(app
            .visible_vehicles()
            .iter()
            .all(|v| v.body_type == BodyType::Suv));
        assert_eq!(app.home.presses.len(), app.visible_vehicles().len());
        assert_eq!(app.home.chips[1].scale.target(), app.config.motion.chip_active_scale);
        assert_eq!(app.home.chips[0].scale.target(), 1.0);

        app.apply_action(Action::ClearFilter);
        assert_eq!(app.home.filter, None);
        assert_eq!(app.visible_vehicles().len(), 8);
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut app = app();
        app.apply_action(Action::PrevFilter);
        assert_eq!(app.home.filter, Some(BodyType::Sedan));
        app.apply_action(Action::NextFilter);
        assert_eq!(app.home.filter, None);
    }

    #[test]
    fn test_filter_change_resets_carousel() {
        let mut app = app();
        app.apply_action(Action::LastCard);
        settle(&mut app);
        assert_eq!(app.current_index(), 7);

        app.apply_action(Action::SelectFilter(2));
        assert_eq!(app.home.carousel.current(), 0.0);
        assert_eq!(app.current_index(), 0);
    }

    #[test]
    fn test_next_card_snaps_to_interval() {
        let mut app = app();
        app.apply_action(Action::NextCard);
        let layout = app.carousel_layout();
        assert_eq!(app.home.carousel.target(), layout.offset_for(1));

        settle(&mut app);
        assert_eq!(app.current_index(), 1);
        assert_eq!(app.home.reader.get(), layout.offset_for(1));
    }

    #[test]
    fn test_rapid_steps_accumulate() {
        let mut app = app();
        let layout = app.carousel_layout();
        let start = Instant::now();

        app.apply_action(Action::NextCard);
        app.tick_at(start + Duration::from_millis(16));
        assert!(app.home.carousel.current() < layout.offset_for(1));
        app.apply_action(Action::NextCard);
        assert_eq!(app.home.carousel.target(), layout.offset_for(2));

        app.apply_action(Action::WheelUp { column: 0, row: 0 });
        assert_eq!(app.home.carousel.target(), layout.offset_for(1));
    }

    #[test]
    fn test_keyboard_select_opens_after_hold() {
        let mut app = app();
        app.apply_action(Action::Select);
        assert!(app.home.presses[0].is_pressed());
        assert!(app.on_home());

        app.tick_at(Instant::now() + Duration::from_millis(500));
        assert_eq!(app.current_route(), &Route::vehicle("xc90-recharge"));
        let detail = app.detail.as_ref().unwrap();
        assert!(matches!(
            resolve_detail(&app.catalog, &detail.id),
            DetailState::Found(v) if v.model_name == "XC90 Recharge"
        ));
    }

    #[test]
    fn test_back_returns_home() {
        let mut app = app();
        app.open_vehicle("v60-recharge");
        assert!(!app.on_home());
        app.apply_action(Action::Back);
        assert!(app.on_home());
        assert_eq!(app.current_route(), &Route::Home);
        // Root is never popped
        assert!(!app.go_back());
    }

    #[test]
    fn test_unknown_vehicle_route() {
        let mut app = app();
        app.open_vehicle("nonexistent");
        let detail = app.detail.as_ref().unwrap();
        assert!(matches!(
            resolve_detail(&app.catalog, &detail.id),
            DetailState::NotFound { .. }
        ));
    }

    #[test]
    fn test_tap_on_card_navigates() {
        let mut app = app();
        let column = card_center_column(&app);
        let row = app.home_areas().carousel.y + 2;
        assert_eq!(app.card_at(column, row), Some(0));

        app.apply_action(Action::PointerDown { column, row });
        assert!(app.home.presses[0].is_pressed());
        app.apply_action(Action::PointerUp { column, row });
        assert_eq!(app.current_route(), &Route::vehicle("xc90-recharge"));
    }

    #[test]
    fn test_drag_cancels_press_and_snaps() {
        let mut app = app();
        let column = card_center_column(&app);
        let row = app.home_areas().carousel.y + 2;

        app.apply_action(Action::PointerDown { column, row });
        app.apply_action(Action::PointerDrag { column: column - 40, row });
        assert!(!app.home.presses[0].is_pressed());
        assert!(app.home.carousel.current() > 0.0);

        app.apply_action(Action::PointerUp { column: column - 40, row });
        assert!(app.on_home());

        settle(&mut app);
        let layout = app.carousel_layout();
        let offset = app.home.carousel.current();
        let interval = layout.snap_interval();
        assert!((offset / interval - (offset / interval).round()).abs() < 1e-9);
    }

    #[test]
    fn test_release_outside_card_does_not_fire() {
        let mut app = app();
        let column = card_center_column(&app);
        let row = app.home_areas().carousel.y + 2;

        app.apply_action(Action::PointerDown { column, row });
        app.apply_action(Action::PointerUp { column, row: 0 });
        assert!(app.on_home());
        assert!(!app.home.presses[0].is_pressed());
    }

    #[test]
    fn test_detail_overscroll_springs_back() {
        let mut app = app();
        app.open_vehicle("xc90-recharge");
        app.apply_action(Action::ScrollUp);
        app.tick_at(Instant::now());
        let detail = app.detail.as_ref().unwrap();
        assert!(detail.reader.get() < 0.0);
        assert!(detail.reader.get() >= -app.config.motion.header.overscroll);

        settle(&mut app);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.reader.get(), 0.0);
    }

    #[test]
    fn test_no_overscroll_while_returning_to_top() {
        let mut app = app();
        app.open_vehicle("xc90-recharge");
        app.apply_action(Action::LastCard);
        settle(&mut app);

        app.apply_action(Action::FirstCard);
        app.tick_at(Instant::now() + Duration::from_millis(16));
        let detail = app.detail.as_ref().unwrap();
        assert!(detail.scroll.current() > 0.0);

        app.apply_action(Action::ScrollUp);
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.overscroll.value(), 0.0);
        assert!(detail.combined() >= 0.0);
    }

    #[test]
    fn test_detail_scroll_clamped() {
        let mut app = app();
        app.open_vehicle("xc90-recharge");
        app.apply_action(Action::LastCard);
        settle(&mut app);
        let max = app.detail_max_offset();
        assert!(max >= app.config.motion.header.collapse_distance());
        assert_eq!(app.detail.as_ref().unwrap().scroll.current(), max);
    }

    #[test]
    fn test_help_mode_toggle() {
        let mut app = app();
        app.apply_action(Action::ToggleHelp);
        assert_eq!(app.mode, Mode::Help);
        app.apply_action(Action::ExitMode);
        assert_eq!(app.mode, Mode::Normal);
    }
}
