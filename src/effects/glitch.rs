//! Random glitch bursts.
//!
//! Every three seconds a heading rolls a 30% chance to glitch for 200ms.
//! While a burst is live the renderer draws red/cyan echoes of the text,
//! offset by one cell and flickering with tick parity.

use rand::{thread_rng, Rng};

/// Ticks between chance rolls (~3s).
const ROLL_INTERVAL_TICKS: u64 = 188;

/// Burst length in ticks (~200ms).
const BURST_TICKS: u64 = 13;

/// Probability that a roll starts a burst.
const BURST_CHANCE: f64 = 0.3;

#[derive(Debug, Clone)]
pub struct GlitchState {
    burst_ends_at: Option<u64>,
    next_roll_tick: u64,
}

impl GlitchState {
    pub fn new() -> Self {
        Self {
            burst_ends_at: None,
            next_roll_tick: ROLL_INTERVAL_TICKS,
        }
    }

    /// Advance the burst clock. Returns whether the rendered output
    /// changed; a live burst flickers, so it redraws every tick.
    pub fn update(&mut self, current_tick: u64) -> bool {
        if let Some(end) = self.burst_ends_at {
            if current_tick >= end {
                self.burst_ends_at = None;
                return true;
            }
            return true;
        }

        if current_tick >= self.next_roll_tick {
            self.next_roll_tick = current_tick + ROLL_INTERVAL_TICKS;
            if thread_rng().gen_bool(BURST_CHANCE) {
                self.burst_ends_at = Some(current_tick + BURST_TICKS);
                return true;
            }
        }
        false
    }

    pub fn is_glitching(&self) -> bool {
        self.burst_ends_at.is_some()
    }

    /// Horizontal echo offset for the current tick: the red and cyan
    /// copies swap sides every other tick.
    pub fn echo_offset(&self, current_tick: u64) -> i16 {
        if current_tick % 2 == 0 {
            1
        } else {
            -1
        }
    }
}

impl Default for GlitchState {
    fn default() -> Self {
        Self::new()
    }
}
