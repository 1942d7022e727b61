//! View panels
//!
//! One module per dashboard view. Each panel pulls its data from the
//! provider for the active time range and composes it out of the shared
//! widgets; panels never hold state of their own.

pub mod analytics;
pub mod appointments;
pub mod billing;
pub mod calls_chat;
pub mod feedback;
pub mod overview;

use super::widgets::{MetricCard, SeriesChart};
use crate::data::{MetricDatum, SeriesBlock};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// One card per metric, evenly spread across the row.
pub(crate) fn render_metric_row(f: &mut Frame, area: Rect, metrics: &[MetricDatum]) {
    if metrics.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = metrics
        .iter()
        .map(|_| Constraint::Ratio(1, metrics.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (datum, chunk) in metrics.iter().zip(chunks.iter()) {
        f.render_widget(MetricCard::new(datum), *chunk);
    }
}

/// Charts side by side. A pair gives the first chart the wider share;
/// three or more split the row evenly.
pub(crate) fn render_chart_row(f: &mut Frame, area: Rect, series: &[SeriesBlock]) {
    match series {
        [] => {}
        [only] => f.render_widget(SeriesChart::new(only), area),
        [first, second] => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
                .split(area);
            f.render_widget(SeriesChart::new(first), chunks[0]);
            f.render_widget(SeriesChart::new(second), chunks[1]);
        }
        many => {
            let constraints: Vec<Constraint> = many
                .iter()
                .map(|_| Constraint::Ratio(1, many.len() as u32))
                .collect();
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(constraints)
                .split(area);
            for (block, chunk) in many.iter().zip(chunks.iter()) {
                f.render_widget(SeriesChart::new(block), *chunk);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::registry::{resolve, ViewId};
    use super::super::state::DashboardState;
    use crate::ui::app::UiConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn every_panel_renders_on_a_typical_terminal() {
        let state = DashboardState::new(UiConfig::new(false, Some(1)), 120, 40);
        for view in ViewId::ALL {
            let descriptor = resolve(view);
            let backend = TestBackend::new(120, 40);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|f| (descriptor.render)(f, f.area(), &state))
                .unwrap();
            let text: String = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|cell| cell.symbol())
                .collect();
            assert!(!text.trim().is_empty(), "{view} rendered nothing");
        }
    }

    #[test]
    fn panels_survive_a_tiny_terminal() {
        let state = DashboardState::new(UiConfig::new(false, Some(1)), 20, 6);
        for view in ViewId::ALL {
            let descriptor = resolve(view);
            let backend = TestBackend::new(20, 6);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|f| (descriptor.render)(f, f.area(), &state))
                .unwrap();
        }
    }
}
