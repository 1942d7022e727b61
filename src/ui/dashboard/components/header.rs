//! Dashboard header component
//!
//! Renders the brand strip with the status line and the view tab bar.

use super::super::registry::ViewId;
use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use crate::data::{GREEN, PURPLE};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

/// Render the brand strip and the tab bar.
pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let brand_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(56)])
        .split(header_chunks[0]);

    let brand = Paragraph::new(Line::from(vec![
        Span::styled(
            "◢ ENERTIA ◣",
            Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" AI FRONT DESK", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(PURPLE)),
    );
    f.render_widget(brand, brand_chunks[0]);

    let status = Paragraph::new(Line::from(vec![
        Span::styled("● SYSTEM ONLINE", Style::default().fg(GREEN)),
        Span::styled("  99.8% UPTIME  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}  ", state.time_range()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format_uptime(state.uptime_secs()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(ratatui::layout::Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(PURPLE)),
    );
    f.render_widget(status, brand_chunks[1]);

    let titles: Vec<Line> = ViewId::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(view.to_string(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active_view().index())
        .highlight_style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, header_chunks[1]);
}
