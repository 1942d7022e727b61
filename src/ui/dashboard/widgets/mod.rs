//! Display widgets
//!
//! The two widget shapes every panel is composed from: metric cards and
//! series charts. Neither holds state nor computes aggregates; they only
//! format and lay out what the data provider already prepared.

pub mod metric_card;
pub mod series_chart;

pub use metric_card::MetricCard;
pub use series_chart::SeriesChart;
