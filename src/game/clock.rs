//! Per-side countdown clock.
//!
//! The clock owns no timer. An external driver calls `tick` once per elapsed
//! second; only the running side is charged. At most one side runs at a time.

use chrono::TimeDelta;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessClock {
    remaining: [TimeDelta; 2],
    running: Option<Color>,
}

impl ChessClock {
    /// Both sides loaded with `allowance`, neither running.
    pub fn new(allowance: TimeDelta) -> Self {
        Self {
            remaining: [allowance; 2],
            running: None,
        }
    }

    #[inline]
    pub fn running(&self) -> Option<Color> {
        self.running
    }

    #[inline]
    pub fn remaining(&self, color: Color) -> TimeDelta {
        self.remaining[color.index()]
    }

    /// Whole seconds left for `color`, never negative.
    pub fn remaining_seconds(&self, color: Color) -> i64 {
        self.remaining(color).num_seconds().max(0)
    }

    /// Stop whichever side is running and start `color`.
    pub fn start(&mut self, color: Color) {
        self.running = Some(color);
    }

    pub fn stop_all(&mut self) {
        self.running = None;
    }

    /// Charge one second to the running side.
    ///
    /// Returns the side whose flag fell on this tick, if any. A fallen flag
    /// stops the clock.
    pub fn tick(&mut self) -> Option<Color> {
        let color = self.running?;
        let slot = &mut self.remaining[color.index()];
        *slot = (*slot - TimeDelta::seconds(1)).max(TimeDelta::zero());
        if *slot <= TimeDelta::zero() {
            self.stop_all();
            return Some(color);
        }
        None
    }

    /// `MM:SS` for the given side.
    pub fn display(&self, color: Color) -> String {
        let seconds = self.remaining_seconds(color);
        format!("{:02}:{:02}", seconds / 60, seconds % 60)
    }
}
