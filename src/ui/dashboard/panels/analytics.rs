//! Analytics view: growth trend, channel volume, hourly distribution and
//! the conversion funnel.

use super::super::state::DashboardState;
use super::{render_chart_row, render_metric_row};
use crate::data;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = data::analytics(state.time_range());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_metric_row(f, chunks[0], &data.metrics);

    // Four wide blocks, two per row.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (pair, row) in data.series.chunks(2).zip(rows.iter()) {
        render_chart_row(f, *row, pair);
    }
}
