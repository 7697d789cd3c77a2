use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, style::Style, widgets::Block, Frame, Terminal};

use showroom_core::{AppConfig, BodyType, Catalog};
use showroom_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    keymap::Keymap,
    load_theme,
    widgets::{
        BrandHeaderWidget, CarouselWidget, DetailWidget, FilterBarWidget, HelpWidget,
        PaginationWidget, StatusBarWidget,
    },
};

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run(
    config: Arc<AppConfig>,
    catalog: Arc<Catalog>,
    filter: Option<BodyType>,
    vehicle: Option<String>,
) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create app state
    let mut app = App::new(config.clone(), catalog.clone(), theme);
    if filter.is_some() {
        app.select_filter(filter);
    }
    if let Some(id) = vehicle {
        app.open_vehicle(&id);
    }

    tracing::info!(
        vehicles = catalog.len(),
        theme = %config.ui.theme.name,
        "Starting showroom"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Showroom"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("TUI exited with error: {:#}", e);
    }
    result
}

fn main_loop(terminal: &mut Terminal<Backend>, app: &mut App, keymap: &Keymap) -> Result<()> {
    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        app.config.ui.tick_rate_ms,
        app.config.ui.scroll.animation_fps,
    );

    loop {
        // Advance springs, tweens and scroll animations
        app.tick();

        terminal.draw(|frame| draw(frame, app, keymap))?;

        // Faster polling while anything on screen is moving
        let animating = app.is_animating();
        if let Some(event) = event_handler.next(animating)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply_action(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse, app);
                    app.apply_action(action);
                }
                AppEvent::Resize(width, height) => {
                    app.set_area(Rect::new(0, 0, width, height));
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App, keymap: &Keymap) {
    let size = frame.area();
    app.set_area(size);

    frame.render_widget(Block::default().style(Style::default().bg(app.theme.background)), size);

    if let Some(detail) = app.detail.as_ref() {
        DetailWidget::render(frame, app, detail);
        StatusBarWidget::render(frame, app.detail_areas().status, app);
    } else {
        let areas = app.home_areas();
        BrandHeaderWidget::render(frame, areas.header, app);
        FilterBarWidget::render(frame, areas.filter_bar, app);
        CarouselWidget::render(frame, areas.carousel, app);
        PaginationWidget::render(frame, areas.pagination, app);
        StatusBarWidget::render(frame, areas.status, app);
    }

    if app.mode == Mode::Help {
        HelpWidget::render(frame, keymap, &app.theme);
    }
}
