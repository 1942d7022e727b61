//! Series chart widget
//!
//! One renderer dispatching over the closed set of chart kinds. The widget
//! plots points in the order given, never re-sorts, tolerates empty input
//! (an empty plot area, not a failure), and reads a missing encoded field
//! as zero so a malformed point keeps its slot instead of vanishing.

use crate::data::{ChartKind, SeriesBlock, SeriesPoint, AMBER, BLUE, CYAN, GREEN, PINK, PURPLE};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType,
    LineGauge, Widget,
};

/// Colors cycled across donut slices, in brand order.
const SLICE_PALETTE: [Color; 6] = [PURPLE, PINK, CYAN, BLUE, GREEN, AMBER];

/// Resolve one encoded field across all points, reading absent fields as 0.
pub(crate) fn resolved_values(points: &[SeriesPoint], field: &str) -> Vec<f64> {
    points
        .iter()
        .map(|point| point.value(field).unwrap_or(0.0))
        .collect()
}

pub struct SeriesChart<'a> {
    block: &'a SeriesBlock,
}

impl<'a> SeriesChart<'a> {
    pub fn new(block: &'a SeriesBlock) -> Self {
        Self { block }
    }

    fn render_bars(&self, area: Rect, buf: &mut Buffer) {
        let spec = &self.block.spec;
        let mut chart = BarChart::default().bar_width(3).bar_gap(0).group_gap(1);
        for point in &self.block.points {
            let bars: Vec<Bar> = spec
                .fields
                .iter()
                .map(|field| {
                    Bar::default()
                        .value(point.value(field.field).unwrap_or(0.0).max(0.0) as u64)
                        .style(Style::default().fg(field.color))
                })
                .collect();
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(point.label.clone()).style(Style::default().fg(Color::Gray)))
                    .bars(&bars),
            );
        }
        chart.render(area, buf);
    }

    fn render_lines(&self, area: Rect, buf: &mut Buffer) {
        let spec = &self.block.spec;
        let points = &self.block.points;

        let series: Vec<Vec<(f64, f64)>> = spec
            .fields
            .iter()
            .map(|field| {
                resolved_values(points, field.field)
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, v))
                    .collect()
            })
            .collect();

        let graph_type = match spec.kind {
            // GraphType::Bar fills down to the axis, the closest terminal
            // rendition of an area chart.
            ChartKind::Area => GraphType::Bar,
            _ => GraphType::Line,
        };

        let datasets: Vec<Dataset> = spec
            .fields
            .iter()
            .zip(&series)
            .map(|(field, data)| {
                Dataset::default()
                    .name(field.label)
                    .marker(symbols::Marker::Braille)
                    .graph_type(graph_type)
                    .style(Style::default().fg(field.color))
                    .data(data)
            })
            .collect();

        let max_y = series
            .iter()
            .flatten()
            .map(|(_, y)| *y)
            .fold(0.0_f64, f64::max)
            .max(1.0);
        let max_x = (points.len().saturating_sub(1)).max(1) as f64;

        let x_labels: Vec<String> = vec![
            points.first().map(|p| p.label.clone()).unwrap_or_default(),
            points
                .get(points.len() / 2)
                .map(|p| p.label.clone())
                .unwrap_or_default(),
            points.last().map(|p| p.label.clone()).unwrap_or_default(),
        ];
        let y_labels: Vec<String> = vec![
            "0".to_string(),
            format!("{:.0}", max_y / 2.0),
            format!("{:.0}", max_y),
        ];

        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, max_x])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, max_y * 1.1])
                    .labels(y_labels),
            )
            .render(area, buf);
    }

    /// Donut charts render as a legend of gauge rows: slice label, share bar,
    /// percentage. Same information as a raster pie, terminal-native form.
    fn render_donut(&self, area: Rect, buf: &mut Buffer) {
        let spec = &self.block.spec;
        let points = &self.block.points;
        let field = match spec.fields.first() {
            Some(field) => field.field,
            None => return,
        };

        let values = resolved_values(points, field);
        let total: f64 = values.iter().sum();

        for (i, (point, value)) in points.iter().zip(&values).enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, 1);
            let color = SLICE_PALETTE[i % SLICE_PALETTE.len()];
            // Label and bar both show the slice's share of the total, so
            // they stay consistent for inputs that do not sum to 100.
            let percent = if total > 0.0 { 100.0 * value / total } else { 0.0 };
            LineGauge::default()
                .label(Line::from(vec![
                    Span::styled("▮ ", Style::default().fg(color)),
                    Span::styled(
                        format!("{:<22}", point.label),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("{:>3.0}% ", percent),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                ]))
                .filled_style(Style::default().fg(color))
                .unfilled_style(Style::default().fg(Color::DarkGray))
                .line_set(symbols::line::THICK)
                .ratio((percent / 100.0).clamp(0.0, 1.0))
                .render(row, buf);
        }
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for field in &self.block.spec.fields {
            spans.push(Span::styled("▮ ", Style::default().fg(field.color)));
            spans.push(Span::styled(
                format!("{}  ", field.label),
                Style::default().fg(Color::Gray),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

impl Widget for SeriesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spec = &self.block.spec;
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", spec.title),
                Style::default().fg(PURPLE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PURPLE));
        let inner = block.inner(area);
        block.render(area, buf);

        // Empty sequence: keep the empty plot area, nothing to draw.
        if inner.width == 0 || inner.height == 0 || self.block.points.is_empty() {
            return;
        }

        match spec.kind {
            ChartKind::Bar => {
                // Multi-field bar groups need a legend row to stay readable.
                if spec.fields.len() > 1 && inner.height > 2 {
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(1), Constraint::Min(0)])
                        .split(inner);
                    self.render_legend(chunks[0], buf);
                    self.render_bars(chunks[1], buf);
                } else {
                    self.render_bars(inner, buf);
                }
            }
            ChartKind::Line | ChartKind::Area => self.render_lines(inner, buf),
            ChartKind::Donut => self.render_donut(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ChartSpec, FieldSpec};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn bar_block(points: Vec<SeriesPoint>) -> SeriesBlock {
        SeriesBlock {
            spec: ChartSpec::new(
                "Calls by Day",
                ChartKind::Bar,
                vec![
                    FieldSpec::new("total", "Total", PURPLE),
                    FieldSpec::new("ai_handled", "AI Handled", PINK),
                ],
            ),
            points,
        }
    }

    fn draw(block: &SeriesBlock, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(SeriesChart::new(block), f.area()))
            .unwrap();
        terminal
    }

    #[test]
    fn missing_encoded_field_reads_as_zero() {
        let points = vec![
            SeriesPoint::new("Mon", &[("total", 156.0), ("ai_handled", 142.0)]),
            SeriesPoint::new("Tue", &[("total", 189.0)]),
        ];
        assert_eq!(resolved_values(&points, "ai_handled"), vec![142.0, 0.0]);
        // The point keeps its slot rather than being omitted.
        assert_eq!(resolved_values(&points, "total").len(), 2);
    }

    #[test]
    fn empty_sequence_renders_an_empty_plot() {
        let block = bar_block(Vec::new());
        let terminal = draw(&block, 40, 12);
        let buffer = terminal.backend().buffer();
        // Interior of the bordered plot area stays blank: no plotted elements.
        for y in 1..11 {
            for x in 1..39 {
                assert_eq!(buffer[(x, y)].symbol(), " ", "cell ({x},{y}) not empty");
            }
        }
    }

    #[test]
    fn bar_chart_with_partial_point_renders_without_panic() {
        let block = bar_block(vec![
            SeriesPoint::new("Mon", &[("total", 156.0), ("ai_handled", 142.0)]),
            SeriesPoint::new("Tue", &[("total", 189.0)]),
        ]);
        let terminal = draw(&block, 40, 12);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Calls by Day"));
        assert!(text.contains("Mon"));
    }

    #[test]
    fn line_chart_renders_axis_labels_in_order() {
        let block = SeriesBlock {
            spec: ChartSpec::new(
                "Response Time",
                ChartKind::Line,
                vec![FieldSpec::new("calls", "Calls", PURPLE)],
            ),
            points: vec![
                SeriesPoint::new("Mon", &[("calls", 2.3)]),
                SeriesPoint::new("Tue", &[("calls", 2.1)]),
                SeriesPoint::new("Wed", &[("calls", 2.4)]),
            ],
        };
        let terminal = draw(&block, 50, 14);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Mon"));
        assert!(text.contains("Wed"));
    }

    #[test]
    fn donut_renders_one_row_per_slice() {
        let block = SeriesBlock {
            spec: ChartSpec::new(
                "Call Outcomes",
                ChartKind::Donut,
                vec![FieldSpec::new("share", "Share", PURPLE)],
            ),
            points: vec![
                SeriesPoint::new("Handled by AI", &[("share", 92.0)]),
                SeriesPoint::new("Forwarded to Staff", &[("share", 8.0)]),
            ],
        };
        let terminal = draw(&block, 50, 8);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Handled by AI"));
        assert!(text.contains("92%"));
        assert!(text.contains("8%"));
    }

    #[test]
    fn donut_labels_show_share_of_total_not_raw_values() {
        // Slices sum to 50, so raw values and shares differ.
        let block = SeriesBlock {
            spec: ChartSpec::new(
                "Plan Mix",
                ChartKind::Donut,
                vec![FieldSpec::new("share", "Share", PURPLE)],
            ),
            points: vec![
                SeriesPoint::new("Basic", &[("share", 30.0)]),
                SeriesPoint::new("Pro", &[("share", 20.0)]),
            ],
        };
        let terminal = draw(&block, 50, 6);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("60%"));
        assert!(text.contains("40%"));
        assert!(!text.contains("30%"));
    }
}
