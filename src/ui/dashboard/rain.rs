//! Binary rain background animation
//!
//! A decorative full-area effect, fully decoupled from dashboard state. The
//! animator owns its surface dimensions and per-column drop counters; nothing
//! else reads or writes them. Lifecycle is `Uninitialized -> Running ->
//! Stopped`: started once when the dashboard mounts, resized on terminal
//! resize, stopped exactly once on teardown (stopping again is a no-op).

use crate::consts::ui_consts::{RAIN_CELL_WIDTH, RAIN_RESET_CHANCE, RAIN_TRAIL_LEN};
use crate::data::PURPLE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use std::collections::VecDeque;

const GLYPHS: [char; 2] = ['0', '1'];

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RainPhase {
    Uninitialized,
    Running,
    Stopped,
}

/// One rain column: the head row plus the trail of glyphs behind it.
#[derive(Debug, Clone)]
struct Column {
    /// Row of the drop head. May run past the surface height before the
    /// random reset pulls it back to the top.
    head: u16,
    /// Most recent glyphs, newest last; drawn fading out above the head.
    trail: VecDeque<char>,
}

impl Column {
    fn new() -> Self {
        Self {
            head: 0,
            trail: VecDeque::with_capacity(RAIN_TRAIL_LEN as usize),
        }
    }
}

#[derive(Debug)]
pub struct BinaryRain {
    phase: RainPhase,
    width: u16,
    height: u16,
    columns: Vec<Column>,
    rng: StdRng,
}

impl BinaryRain {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic animation for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            phase: RainPhase::Uninitialized,
            width: 0,
            height: 0,
            columns: Vec::new(),
            rng,
        }
    }

    pub fn phase(&self) -> RainPhase {
        self.phase
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Allocate the surface and start ticking. A zero-sized surface is
    /// accepted: the animator runs with no columns and renders nothing.
    pub fn start(&mut self, width: u16, height: u16) {
        if self.phase == RainPhase::Running {
            return;
        }
        self.width = width;
        self.height = height;
        self.columns = (0..width / RAIN_CELL_WIDTH).map(|_| Column::new()).collect();
        self.phase = RainPhase::Running;
    }

    /// Advance every column one step. Each head draws one random glyph and
    /// moves down; once past the bottom edge it resets to the top with a
    /// small independent probability, which keeps the columns out of phase.
    pub fn tick(&mut self) {
        if self.phase != RainPhase::Running {
            return;
        }
        let height = self.height;
        for column in &mut self.columns {
            if column.trail.len() == RAIN_TRAIL_LEN as usize {
                column.trail.pop_front();
            }
            column.trail.push_back(GLYPHS[self.rng.gen_range(0..GLYPHS.len())]);

            if column.head > height && self.rng.gen_range(0.0..1.0) < RAIN_RESET_CHANCE {
                column.head = 0;
                column.trail.clear();
            } else {
                column.head = column.head.saturating_add(1);
            }
        }
    }

    /// Recompute the surface for a new viewport. Existing columns keep their
    /// counters; new columns start at the top. Counters past the new column
    /// count are dropped, not carried over.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.phase != RainPhase::Running {
            return;
        }
        self.width = width;
        self.height = height;
        self.columns
            .resize_with((width / RAIN_CELL_WIDTH) as usize, Column::new);
    }

    /// Release the surface and cancel the tick. Idempotent.
    pub fn stop(&mut self) {
        if self.phase == RainPhase::Stopped {
            return;
        }
        self.phase = RainPhase::Stopped;
        self.columns.clear();
        self.width = 0;
        self.height = 0;
    }
}

impl Default for BinaryRain {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &BinaryRain {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.phase != RainPhase::Running || area.width == 0 || area.height == 0 {
            return;
        }
        for (i, column) in self.columns.iter().enumerate() {
            let x = area.x + i as u16 * RAIN_CELL_WIDTH;
            if x >= area.right() {
                break;
            }
            // Trail glyphs run upward from the head, oldest dimmest.
            for (age, glyph) in column.trail.iter().rev().enumerate() {
                let age = age as u16;
                if age > column.head {
                    break;
                }
                let y = column.head - age;
                if y >= area.height {
                    continue;
                }
                let style = if age == 0 {
                    Style::default()
                        .fg(Color::LightMagenta)
                        .add_modifier(Modifier::BOLD)
                } else if age < RAIN_TRAIL_LEN / 2 {
                    Style::default().fg(PURPLE)
                } else {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                };
                if let Some(cell) = buf.cell_mut((x, area.y + y)) {
                    cell.set_char(*glyph);
                    cell.set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn drops(rain: &BinaryRain) -> Vec<u16> {
        rain.columns.iter().map(|c| c.head).collect()
    }

    #[test]
    fn start_sizes_columns_from_width() {
        let mut rain = BinaryRain::seeded(1);
        assert_eq!(rain.phase(), RainPhase::Uninitialized);
        rain.start(100, 40);
        assert_eq!(rain.phase(), RainPhase::Running);
        assert_eq!(rain.column_count(), (100 / RAIN_CELL_WIDTH) as usize);
    }

    #[test]
    fn tick_advances_every_column() {
        let mut rain = BinaryRain::seeded(1);
        rain.start(20, 10);
        rain.tick();
        assert!(drops(&rain).iter().all(|&row| row == 1));
    }

    #[test]
    fn columns_eventually_reset_to_top() {
        let mut rain = BinaryRain::seeded(3);
        rain.start(20, 5);
        // Far more ticks than height + expected reset wait.
        for _ in 0..5_000 {
            rain.tick();
        }
        // With a 2.5% reset chance per tick past the edge, every column has
        // wrapped at least once by now; none can still be at tick count.
        assert!(drops(&rain).iter().all(|&row| row < 5_000));
    }

    #[test]
    fn resize_recomputes_column_count() {
        let mut rain = BinaryRain::seeded(1);
        rain.start(100, 40); // 1024x768-ish terminal
        for _ in 0..10 {
            rain.tick();
        }
        let before = drops(&rain);
        rain.resize(192, 54); // grew to 1920x1080-ish
        assert_eq!(rain.column_count(), (192 / RAIN_CELL_WIDTH) as usize);
        // Surviving columns keep their counters, new ones start at the top.
        assert_eq!(&drops(&rain)[..before.len()], &before[..]);
        assert!(drops(&rain)[before.len()..].iter().all(|&row| row == 0));

        rain.resize(50, 20);
        assert_eq!(rain.column_count(), (50 / RAIN_CELL_WIDTH) as usize);
    }

    #[test]
    fn stop_is_idempotent_and_freezes_state() {
        let mut rain = BinaryRain::seeded(1);
        rain.start(20, 10);
        rain.tick();
        rain.stop();
        assert_eq!(rain.phase(), RainPhase::Stopped);
        assert_eq!(rain.column_count(), 0);

        // No further surface mutation after teardown.
        rain.tick();
        rain.resize(80, 24);
        assert_eq!(rain.column_count(), 0);

        // Double-teardown is a no-op, not an error.
        rain.stop();
        assert_eq!(rain.phase(), RainPhase::Stopped);
    }

    #[test]
    fn seeded_rain_is_deterministic() {
        let mut a = BinaryRain::seeded(9);
        let mut b = BinaryRain::seeded(9);
        a.start(40, 12);
        b.start(40, 12);
        for _ in 0..200 {
            a.tick();
            b.tick();
        }
        assert_eq!(drops(&a), drops(&b));
    }

    #[test]
    fn zero_area_surface_renders_nothing() {
        let mut rain = BinaryRain::seeded(1);
        rain.start(0, 0);
        rain.tick();
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(&rain, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn running_rain_draws_glyphs_inside_area() {
        let mut rain = BinaryRain::seeded(5);
        rain.start(20, 8);
        for _ in 0..4 {
            rain.tick();
        }
        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(&rain, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let glyphs = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "0" || cell.symbol() == "1")
            .count();
        assert!(glyphs > 0);
    }
}
