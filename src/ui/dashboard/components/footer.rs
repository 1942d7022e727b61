//! Dashboard footer component
//!
//! Renders key hints, the demo-mode banner and the optional debug overlay.

use super::super::state::DashboardState;
use crate::logging::debug_overlay_enabled;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(40)])
        .split(area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::styled(" Views  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[T]", Style::default().fg(Color::Cyan)),
        Span::styled(" Range  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[↑↓ Enter]", Style::default().fg(Color::Cyan)),
        Span::styled(" Inspect  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::Cyan)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(hints, footer_chunks[0]);

    let banner_text = if debug_overlay_enabled() {
        format!("tick {}  feed {}", state.tick, state.feed.len())
    } else {
        format!("ENERTIA SYSTEMS v{} | DEMO MODE", env!("CARGO_PKG_VERSION"))
    };
    let banner = Paragraph::new(banner_text)
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(banner, footer_chunks[1]);
}
