//! View registry
//!
//! The closed set of dashboard views and the total lookup from view id to
//! the panel that renders it.

use super::panels;
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Rect;

/// The navigable views. The set is closed: an invalid id cannot be
/// constructed, so `resolve` needs no fallback path.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum ViewId {
    #[strum(serialize = "Dashboard")]
    Overview,
    #[strum(serialize = "Calls & Chat")]
    CallsChat,
    #[strum(serialize = "Appointments")]
    Appointments,
    #[strum(serialize = "Feedback")]
    Feedback,
    #[strum(serialize = "Billing")]
    Billing,
    #[strum(serialize = "Analytics")]
    Analytics,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Overview,
        ViewId::CallsChat,
        ViewId::Appointments,
        ViewId::Feedback,
        ViewId::Billing,
        ViewId::Analytics,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Maps a tab number (0-based) to a view. `None` for out-of-range input,
    /// which callers treat as "keep the current view".
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What the shell needs to render one view's content area.
pub struct PanelDescriptor {
    pub title: &'static str,
    pub render: fn(&mut Frame, Rect, &DashboardState),
}

/// Pure lookup from view id to panel, total over the enumeration.
pub fn resolve(view: ViewId) -> PanelDescriptor {
    match view {
        ViewId::Overview => PanelDescriptor {
            title: "KPI Overview",
            render: panels::overview::render,
        },
        ViewId::CallsChat => PanelDescriptor {
            title: "Calls & Chat",
            render: panels::calls_chat::render,
        },
        ViewId::Appointments => PanelDescriptor {
            title: "Appointment Automation",
            render: panels::appointments::render,
        },
        ViewId::Feedback => PanelDescriptor {
            title: "Customer Feedback",
            render: panels::feedback::render,
        },
        ViewId::Billing => PanelDescriptor {
            title: "Billing & Revenue Management",
            render: panels::billing::render,
        },
        ViewId::Analytics => PanelDescriptor {
            title: "System Analytics & ROI",
            render: panels::analytics::render,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_total_over_every_view() {
        for view in ViewId::ALL {
            let descriptor = resolve(view);
            assert!(!descriptor.title.is_empty());
        }
    }

    #[test]
    fn from_index_round_trips_and_rejects_out_of_range() {
        for (i, view) in ViewId::ALL.iter().enumerate() {
            assert_eq!(ViewId::from_index(i), Some(*view));
            assert_eq!(view.index(), i);
        }
        assert_eq!(ViewId::from_index(6), None);
    }

    #[test]
    fn next_and_prev_cycle_through_all_views() {
        let mut view = ViewId::Overview;
        for expected in ViewId::ALL.iter().skip(1) {
            view = view.next();
            assert_eq!(view, *expected);
        }
        assert_eq!(view.next(), ViewId::Overview);
        assert_eq!(ViewId::Overview.prev(), ViewId::Analytics);
    }
}
