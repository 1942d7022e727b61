//! Live call feed table
//!
//! Newest-first table of handled interactions. The cursor row is the one
//! Enter drills into; the table only reads feed and cursor state.

use super::super::state::DashboardState;
use super::super::utils::{status_color, status_icon};
use crate::data::{GRAY, PURPLE};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState};

pub fn render_feed(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(["TIME", "CALLER", "INTENT", "OUTCOME", "STATUS"])
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .feed
        .records()
        .iter()
        .map(|record| {
            let color = status_color(record.status);
            Row::new(vec![
                Cell::from(Span::styled(
                    record.time.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                Cell::from(Span::styled(
                    record.caller.clone(),
                    Style::default().fg(Color::White),
                )),
                Cell::from(Span::styled(
                    record.intent.clone(),
                    Style::default().fg(GRAY),
                )),
                Cell::from(Span::styled(
                    record.outcome.clone(),
                    Style::default().fg(GRAY),
                )),
                Cell::from(Span::styled(
                    format!("{} {}", status_icon(record.status), record.status),
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
            Constraint::Length(20),
            Constraint::Min(20),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .block(
        Block::default()
            .title(Span::styled(
                " Live Call Feed ",
                Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PURPLE)),
    );

    let mut table_state = TableState::default();
    if !state.feed.is_empty() {
        table_state.select(Some(state.feed_cursor()));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}
