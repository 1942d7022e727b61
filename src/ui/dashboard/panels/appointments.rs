//! Appointment automation view: weekly load, type mix and today's schedule.

use super::super::state::DashboardState;
use super::{render_chart_row, render_metric_row};
use crate::data::{self, BookingStatus, AMBER, GREEN, PURPLE};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = data::appointments(state.time_range());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(8),
        ])
        .split(area);

    render_metric_row(f, chunks[0], &data.metrics);
    render_chart_row(f, chunks[1], &data.series);
    render_upcoming(f, chunks[2]);
}

fn render_upcoming(f: &mut Frame, area: Rect) {
    let header = Row::new(["TIME", "CLIENT", "TYPE", "DURATION", "STATUS"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = data::upcoming_appointments()
        .into_iter()
        .map(|booking| {
            let color = match booking.status {
                BookingStatus::Confirmed => GREEN,
                BookingStatus::Pending => AMBER,
            };
            Row::new(vec![
                Cell::from(Span::styled(
                    booking.time,
                    Style::default().fg(Color::White),
                )),
                Cell::from(Span::styled(booking.client, Style::default().fg(Color::Gray))),
                Cell::from(Span::styled(booking.kind, Style::default().fg(PURPLE))),
                Cell::from(Span::styled(
                    booking.duration,
                    Style::default().fg(Color::DarkGray),
                )),
                Cell::from(Span::styled(
                    booking.status.to_string(),
                    Style::default().fg(color),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(18),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(
                " Today's Upcoming ",
                Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PURPLE)),
    );
    f.render_widget(table, area);
}
