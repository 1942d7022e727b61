//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::data::feed::FeedStatus;
use crate::data::{AMBER, CYAN, GREEN};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Color for a feed status badge.
pub fn status_color(status: FeedStatus) -> Color {
    match status {
        FeedStatus::Success => GREEN,
        FeedStatus::Forwarded => AMBER,
        FeedStatus::Recovered => CYAN,
    }
}

/// Single-glyph icon paired with the status badge.
pub fn status_icon(status: FeedStatus) -> &'static str {
    match status {
        FeedStatus::Success => "✔",
        FeedStatus::Forwarded => "→",
        FeedStatus::Recovered => "⚡",
    }
}

/// Format an uptime counter as HH:MM:SS.
pub fn format_uptime(secs: u64) -> String {
    format!(
        "UP {:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// Rect centered in `r`, sized as a percentage of it. Used for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formats_hours_minutes_seconds() {
        assert_eq!(format_uptime(0), "UP 00:00:00");
        assert_eq!(format_uptime(3_725), "UP 01:02:05");
    }

    #[test]
    fn centered_rect_stays_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, parent);
        assert!(inner.x >= parent.x && inner.right() <= parent.right());
        assert!(inner.y >= parent.y && inner.bottom() <= parent.bottom());
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
    }
}
