//! Dashboard main renderer

use super::components::{footer, header, modal};
use super::registry;
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(12, 10, 20))),
            f.area(),
        );
    }

    // Background animation sits under everything else.
    f.render_widget(&state.rain, f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let panel = registry::resolve(state.active_view());
    (panel.render)(f, main_chunks[1], state);

    footer::render_footer(f, main_chunks[2], state);

    // Drill-down overlay is always drawn last.
    modal::render_modal(f, state);
}
