//! Call transcript drill-down
//!
//! Centered overlay showing the full record behind the selected feed row.
//! Rendered last so it sits above the panel; Esc or Enter dismisses it.

use super::super::state::DashboardState;
use super::super::utils::{centered_rect, status_color, status_icon};
use crate::data::{PINK, PURPLE};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_modal(f: &mut Frame, state: &DashboardState) {
    let Some(record) = state.selection.current() else {
        return;
    };

    let area = centered_rect(64, 62, f.area());
    f.render_widget(Clear, area);

    let color = status_color(record.status);
    let lines = vec![
        Line::from(vec![
            Span::styled(record.time.clone(), Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(
                record.caller.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Intent   ", Style::default().fg(Color::DarkGray)),
            Span::styled(record.intent.clone(), Style::default().fg(PURPLE)),
        ]),
        Line::from(vec![
            Span::styled("Outcome  ", Style::default().fg(Color::DarkGray)),
            Span::styled(record.outcome.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled("Status   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} {}", status_icon(record.status), record.status),
                Style::default().fg(color),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "TRANSCRIPT",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", record.transcript),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(record.next_step(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Call Details ",
            Style::default().fg(PINK).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PINK))
        .padding(Padding::uniform(1));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
