//! KPI metric card
//!
//! Renders one `MetricDatum` as a self-contained bordered card. Constant
//! render cost by construction: the value arrives pre-aggregated and
//! pre-formatted, the card never computes anything.

use crate::data::{MetricDatum, TrendDirection, CYAN, PINK, PURPLE};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

pub struct MetricCard<'a> {
    datum: &'a MetricDatum,
}

impl<'a> MetricCard<'a> {
    pub fn new(datum: &'a MetricDatum) -> Self {
        Self { datum }
    }
}

impl Widget for MetricCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let datum = self.datum;

        let (trend_glyph, trend_sign, trend_color) = match datum.trend.direction {
            TrendDirection::Up => ("▲", "+", CYAN),
            TrendDirection::Down => ("▼", "-", PINK),
        };

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", datum.title.to_uppercase()),
                Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PURPLE));

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", datum.icon.glyph()), Style::default().fg(PURPLE)),
                Span::styled(
                    datum.value.clone(),
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                datum.subtext.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("{} {}{}", trend_glyph, trend_sign, datum.trend.delta),
                Style::default().fg(trend_color),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::IconTag;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn card_shows_value_subtext_and_trend() {
        let datum = MetricDatum::new(
            IconTag::Phone,
            "Total Calls",
            "1,234",
            "vs last period",
            "12%",
            TrendDirection::Up,
        );
        let backend = TestBackend::new(26, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MetricCard::new(&datum), f.area()))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("TOTAL CALLS"));
        assert!(text.contains("1,234"));
        assert!(text.contains("vs last period"));
        assert!(text.contains("+12%"));
    }

    #[test]
    fn negative_trend_renders_with_minus_sign() {
        let datum = MetricDatum::new(
            IconTag::Clock,
            "Avg Resolution",
            "2.3 min",
            "per interaction",
            "8%",
            TrendDirection::Down,
        );
        let backend = TestBackend::new(26, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(MetricCard::new(&datum), f.area()))
            .unwrap();
        assert!(buffer_text(&terminal).contains("-8%"));
    }
}
