//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::ui_consts::{SPLASH_DURATION_SECS, TICK_INTERVAL_MS};
use crate::error::ConsoleError;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Whether to paint the solid background fill.
    pub with_background_color: bool,
    /// Fixed seed for the feed simulation and the background animation.
    pub seed: Option<u64>,
}

impl UiConfig {
    pub fn new(with_background_color: bool, seed: Option<u64>) -> Self {
        Self {
            with_background_color,
            seed,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The operations dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,
    /// Configuration carried into the dashboard when it mounts.
    ui_config: UiConfig,
}

impl App {
    pub fn new(ui_config: UiConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    /// Mount the dashboard over the current terminal surface. A surface we
    /// cannot size is non-fatal: the animator gets a zero area and renders
    /// nothing while the rest of the dashboard works normally.
    fn mount_dashboard<B: Backend>(&mut self, terminal: &Terminal<B>) {
        let (width, height) = match terminal.size() {
            Ok(size) => (size.width, size.height),
            Err(e) => {
                let err = ConsoleError::SurfaceUnavailable(e.to_string());
                log::warn!("{err}, background animation disabled");
                (0, 0)
            }
        };
        let state = DashboardState::new(self.ui_config.clone(), width, height);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<(), ConsoleError> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if matches!(app.current_screen, Screen::Splash)
            && splash_start.elapsed() >= splash_duration
        {
            app.mount_dashboard(terminal);
            continue;
        }

        // Poll for terminal events
        if !event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Resize(width, height) => {
                if let Screen::Dashboard(state) = &mut app.current_screen {
                    state.handle_resize(width, height);
                }
            }
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(app.current_screen, Screen::Splash) {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                        // Any other key skips the splash screen.
                        _ => app.mount_dashboard(terminal),
                    }
                    continue;
                }

                if let Screen::Dashboard(state) = &mut app.current_screen {
                    match key.code {
                        KeyCode::Char('q') => {
                            state.teardown();
                            return Ok(());
                        }
                        // Esc closes the drill-down first, then the app.
                        KeyCode::Esc => {
                            if state.selection.is_active() {
                                state.close_modal();
                            } else {
                                state.teardown();
                                return Ok(());
                            }
                        }
                        KeyCode::Tab | KeyCode::Right => state.next_view(),
                        KeyCode::BackTab | KeyCode::Left => state.prev_view(),
                        KeyCode::Char(c @ '1'..='6') => {
                            let index = c as usize - '1' as usize;
                            if let Some(view) =
                                crate::ui::dashboard::registry::ViewId::from_index(index)
                            {
                                state.select_view(view);
                            }
                        }
                        KeyCode::Char('t') | KeyCode::Char('f') => state.cycle_time_range(),
                        KeyCode::Up => state.cursor_up(),
                        KeyCode::Down => state.cursor_down(),
                        KeyCode::Enter => {
                            if state.selection.is_active() {
                                state.close_modal();
                            } else {
                                state.select_focused();
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
