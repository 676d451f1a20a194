//! Scramble decode effect.
//!
//! Section headings start as random character noise and resolve left to
//! right, one third of a character per 30ms frame. Replayed whenever the
//! heading's section becomes active.

use once_cell::sync::Lazy;
use rand::{thread_rng, Rng};

/// Pool the unresolved positions draw from.
static SCRAMBLE_CHARSET: Lazy<Vec<char>> = Lazy::new(|| {
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+"
        .chars()
        .collect()
});

/// Ticks between scramble frames (~30ms).
const FRAME_TICKS: u64 = 2;

/// Characters resolved per frame.
const REVEAL_PER_FRAME: f64 = 1.0 / 3.0;

#[derive(Debug, Clone)]
pub struct Scramble {
    text: Vec<char>,
    display: String,
    /// Fractional count of resolved leading characters.
    iteration: f64,
    last_frame_tick: u64,
    active: bool,
}

impl Scramble {
    /// Starts inactive, showing the plain text. Call [`Self::restart`]
    /// to play the decode.
    pub fn new(text: impl Into<String>) -> Self {
        let text: Vec<char> = text.into().chars().collect();
        let display = text.iter().collect();
        Self {
            text,
            display,
            iteration: 0.0,
            last_frame_tick: 0,
            active: false,
        }
    }

    /// Begin (or replay) the decode from full noise.
    pub fn restart(&mut self, current_tick: u64) {
        self.iteration = 0.0;
        self.last_frame_tick = current_tick;
        self.active = true;
    }

    /// Advance by one frame when due. Returns whether the display
    /// changed; while active every frame reshuffles the noise tail.
    pub fn update(&mut self, current_tick: u64) -> bool {
        if !self.active {
            return false;
        }
        if current_tick.saturating_sub(self.last_frame_tick) < FRAME_TICKS {
            return false;
        }
        self.last_frame_tick = current_tick;

        let resolved = (self.iteration as usize).min(self.text.len());
        if resolved >= self.text.len() {
            self.display = self.text.iter().collect();
            self.active = false;
            return true;
        }

        let mut rng = thread_rng();
        self.display = self
            .text
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                if i < resolved {
                    ch
                } else {
                    SCRAMBLE_CHARSET[rng.gen_range(0..SCRAMBLE_CHARSET.len())]
                }
            })
            .collect();
        self.iteration += REVEAL_PER_FRAME;
        true
    }

    /// Current mix of resolved prefix and noise tail.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Resolve immediately (reduced motion).
    pub fn skip_to_end(&mut self) {
        self.display = self.text.iter().collect();
        self.iteration = self.text.len() as f64;
        self.active = false;
    }
}
