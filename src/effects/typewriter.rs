//! Typewriter reveal effect.
//!
//! Reveals a line one character at a time after an initial delay, with a
//! blinking block cursor while typing. Used for the hero name and role
//! lines, staggered so they type one after another.

/// Blink half-cycle for the trailing cursor (~400ms at 60fps).
const CURSOR_HALF_CYCLE_TICKS: u64 = 25;

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    chars_visible: usize,
    /// Ticks between revealed characters.
    speed_ticks: u64,
    /// Ticks to wait before the first character.
    delay_ticks: u64,
    /// Tick of the first `update` call; reveal timing is relative to it.
    start_tick: Option<u64>,
    hide_cursor_on_complete: bool,
    cursor_on: bool,
}

impl Typewriter {
    /// `speed_ms` is the interval per character, `delay_ms` the pause
    /// before the first one.
    pub fn new(text: impl Into<String>, speed_ms: u64, delay_ms: u64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            chars_visible: 0,
            speed_ticks: super::ms_to_ticks(speed_ms),
            // A zero delay means typing starts on the first interval;
            // ms_to_ticks floors at one tick, which is wrong here.
            delay_ticks: if delay_ms == 0 {
                0
            } else {
                super::ms_to_ticks(delay_ms)
            },
            start_tick: None,
            hide_cursor_on_complete: false,
            cursor_on: true,
        }
    }

    /// Drop the cursor once the full text is out (used for lines that
    /// hand off to the next typewriter).
    pub fn hide_cursor_on_complete(mut self) -> Self {
        self.hide_cursor_on_complete = true;
        self
    }

    /// Advance the reveal. Returns whether visible output changed.
    pub fn update(&mut self, current_tick: u64) -> bool {
        let start = *self.start_tick.get_or_insert(current_tick);
        let elapsed = current_tick.saturating_sub(start);

        let revealed = if elapsed < self.delay_ticks {
            0
        } else {
            (((elapsed - self.delay_ticks) / self.speed_ticks) as usize).min(self.char_count)
        };
        // The reveal is monotone, so a skip_to_end stays final.
        let target_visible = revealed.max(self.chars_visible);

        let cursor_now = if self.is_complete() && self.hide_cursor_on_complete {
            false
        } else {
            (current_tick / CURSOR_HALF_CYCLE_TICKS) % 2 == 0
        };

        let changed = target_visible != self.chars_visible || cursor_now != self.cursor_on;
        self.chars_visible = target_visible;
        self.cursor_on = cursor_now;
        changed
    }

    /// The revealed prefix, on a char boundary.
    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.chars_visible)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn full_text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.chars_visible == self.char_count
    }

    pub fn cursor_visible(&self) -> bool {
        if self.is_complete() && self.hide_cursor_on_complete {
            false
        } else {
            self.cursor_on
        }
    }

    /// Reveal everything at once (reduced motion).
    pub fn skip_to_end(&mut self) {
        self.chars_visible = self.char_count;
        self.start_tick.get_or_insert(0);
    }
}
