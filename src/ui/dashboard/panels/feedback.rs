//! Customer feedback view: rating distribution, sentiment and recent reviews.

use super::super::state::DashboardState;
use super::{render_chart_row, render_metric_row};
use crate::data::{self, AMBER, PURPLE};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render(f: &mut Frame, area: Rect, state: &DashboardState) {
    let data = data::feedback(state.time_range());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(11),
        ])
        .split(area);

    render_metric_row(f, chunks[0], &data.metrics);
    render_chart_row(f, chunks[1], &data.series);
    render_reviews(f, chunks[2]);
}

fn render_reviews(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for review in data::recent_feedback() {
        let stars: String = "★".repeat(review.rating as usize);
        let hollow: String = "☆".repeat(5 - review.rating as usize);
        lines.push(Line::from(vec![
            Span::styled(format!("{stars}{hollow} "), Style::default().fg(AMBER)),
            Span::styled(
                review.name,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}  ", review.category),
                Style::default().fg(PURPLE),
            ),
            Span::styled(review.date, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", review.comment),
            Style::default().fg(Color::Gray),
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            " Recent Reviews ",
            Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PURPLE))
        .padding(Padding::horizontal(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
