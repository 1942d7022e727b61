//! Billing view: revenue trend, plan mix and the latest transactions.

use super::super::state::DashboardState;
use super::{render_chart_row, render_metric_row};
use crate::data::{self, PaymentStatus, AMBER, GREEN, PURPLE, RED};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = data::billing(state.time_range());

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
    render_transactions(f, chunks[2]);
}

fn render_transactions(f: &mut Frame, area: Rect) {
    let header = Row::new(["ID", "CLIENT", "PLAN", "AMOUNT", "DATE", "STATUS"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = data::recent_transactions()
        .into_iter()
        .map(|txn| {
            let color = match txn.status {
                PaymentStatus::Paid => GREEN,
                PaymentStatus::Pending => AMBER,
                PaymentStatus::Failed | PaymentStatus::Overdue => RED,
            };
            Row::new(vec![
                Cell::from(Span::styled(txn.id, Style::default().fg(Color::DarkGray))),
                Cell::from(Span::styled(txn.client, Style::default().fg(Color::White))),
                Cell::from(Span::styled(txn.plan, Style::default().fg(PURPLE))),
                Cell::from(Span::styled(txn.amount, Style::default().fg(Color::Gray))),
                Cell::from(Span::styled(txn.date, Style::default().fg(Color::DarkGray))),
                Cell::from(Span::styled(
                    txn.status.to_string(),
                    Style::default().fg(color),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(15),
            Constraint::Length(18),
            Constraint::Length(13),
            Constraint::Length(9),
            Constraint::Length(13),
            Constraint::Min(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(Span::styled(
                " Recent Transactions ",
                Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PURPLE)),
    );
    f.render_widget(table, area);
}
