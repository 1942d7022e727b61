//! Dashboard state management
//!
//! Single owner of everything the dashboard mutates: active view, time
//! range, feed cursor, the live feed simulation, the background animator
//! and the drill-down selection. Rendering reads this state, never writes.

use super::rain::BinaryRain;
use super::registry::ViewId;
use super::selection::SelectionStore;
use crate::data::TimeRange;
use crate::data::feed::Feed;
use crate::ui::app::UiConfig;

use std::rc::Rc;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardState {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,
    /// Which view's panel fills the content area.
    active_view: ViewId,
    /// Time window requested from the data providers.
    time_range: TimeRange,
    /// Row the feed cursor sits on, 0 = newest.
    feed_cursor: usize,
    /// Animation tick counter.
    pub tick: usize,
    /// Whether to paint the solid background fill.
    pub with_background_color: bool,

    pub feed: Feed,
    pub rain: BinaryRain,
    pub selection: SelectionStore,
}

impl DashboardState {
    /// Mount the dashboard over a `width` x `height` surface. A zero-sized
    /// surface is accepted; the animator just renders nothing.
    pub fn new(ui_config: UiConfig, width: u16, height: u16) -> Self {
        let mut rain = match ui_config.seed {
            Some(seed) => BinaryRain::seeded(seed),
            None => BinaryRain::new(),
        };
        rain.start(width, height);
        Self {
            start_time: Instant::now(),
            active_view: ViewId::Overview,
            time_range: TimeRange::Today,
            feed_cursor: 0,
            tick: 0,
            with_background_color: ui_config.with_background_color,
            feed: Feed::new(ui_config.seed),
            rain,
            selection: SelectionStore::new(),
        }
    }

    pub fn active_view(&self) -> ViewId {
        self.active_view
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn feed_cursor(&self) -> usize {
        self.feed_cursor
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Switch views. Selecting the already-active view is a no-op; switching
    /// away drops the feed cursor back to the newest row.
    pub fn select_view(&mut self, view: ViewId) {
        if view == self.active_view {
            return;
        }
        self.active_view = view;
        self.feed_cursor = 0;
    }

    pub fn next_view(&mut self) {
        self.select_view(self.active_view.next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.active_view.prev());
    }

    pub fn cycle_time_range(&mut self) {
        self.time_range = self.time_range.next();
    }

    /// Advance one UI tick: the feed simulation and the background animator.
    pub fn update(&mut self) {
        self.tick += 1;
        self.feed.tick();
        self.rain.tick();
        // New records push the list down; keep the cursor on a valid row.
        if self.feed_cursor >= self.feed.len() {
            self.feed_cursor = self.feed.len().saturating_sub(1);
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.rain.resize(width, height);
    }

    pub fn cursor_up(&mut self) {
        self.feed_cursor = self.feed_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.feed_cursor + 1 < self.feed.len() {
            self.feed_cursor += 1;
        }
    }

    /// Open the drill-down for the row under the cursor. The record is
    /// shared with the feed, not copied out of it.
    pub fn select_focused(&mut self) {
        if let Some(record) = self.feed.get(self.feed_cursor) {
            self.selection.select(Rc::clone(record));
        }
    }

    pub fn close_modal(&mut self) {
        self.selection.clear();
    }

    /// Release the animation surface. Idempotent; called once on exit.
    pub fn teardown(&mut self) {
        self.rain.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard::rain::RainPhase;

    fn state() -> DashboardState {
        DashboardState::new(UiConfig::new(false, Some(1)), 80, 24)
    }

    #[test]
    fn selecting_the_active_view_is_a_no_op() {
        let mut state = state();
        state.cursor_down();
        state.select_view(ViewId::Overview);
        // Cursor survives because nothing changed.
        assert_eq!(state.feed_cursor(), 1);

        state.select_view(ViewId::Billing);
        assert_eq!(state.active_view(), ViewId::Billing);
        assert_eq!(state.feed_cursor(), 0);
    }

    #[test]
    fn view_switch_round_trip_lands_back_where_it_started() {
        let mut state = state();
        state.select_view(ViewId::Billing);
        state.select_view(ViewId::Overview);
        assert_eq!(state.active_view(), ViewId::Overview);
    }

    #[test]
    fn drill_down_select_then_clear_then_reselect() {
        let mut state = state();
        state.cursor_down();
        state.cursor_down();
        state.select_focused();
        assert_eq!(state.selection.current().unwrap().id, "3");

        state.close_modal();
        assert!(!state.selection.is_active());

        state.cursor_up();
        state.cursor_up();
        state.select_focused();
        assert_eq!(state.selection.current().unwrap().id, "1");
    }

    #[test]
    fn cursor_stays_inside_the_feed() {
        let mut state = state();
        state.cursor_up();
        assert_eq!(state.feed_cursor(), 0);
        for _ in 0..100 {
            state.cursor_down();
        }
        assert_eq!(state.feed_cursor(), state.feed.len() - 1);
    }

    #[test]
    fn update_advances_tick_and_animator() {
        let mut state = state();
        state.update();
        state.update();
        assert_eq!(state.tick, 2);
        assert_eq!(state.rain.phase(), RainPhase::Running);
    }

    #[test]
    fn teardown_twice_is_a_no_op() {
        let mut state = state();
        state.teardown();
        state.teardown();
        assert_eq!(state.rain.phase(), RainPhase::Stopped);
    }
}
