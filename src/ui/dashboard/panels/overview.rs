//! Main dashboard view: headline KPIs, call charts and the live feed.

use super::super::components::feed;
use super::super::state::DashboardState;
use super::{render_chart_row, render_metric_row};
use crate::data;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = data::overview(state.time_range());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(10),
        ])
        .split(area);

    render_metric_row(f, chunks[0], &data.metrics);
    render_chart_row(f, chunks[1], &data.series);
    feed::render_feed(f, chunks[2], state);
}
