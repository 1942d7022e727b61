//! Calls & chat view: volumes per hour and response-time trends.

use super::super::state::DashboardState;
use super::{render_chart_row, render_metric_row};
use crate::data;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = data::calls_chat(state.time_range());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_metric_row(f, chunks[0], &data.metrics);
    render_chart_row(f, chunks[1], &data.series);
}
